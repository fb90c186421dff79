//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{AccountService, UserStore};
use crate::inbound::http::ApiError;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{list_users, login, signup};
use crate::outbound::persistence::JsonFileStore;

/// Register application data, routes, CORS, and the JSON error handler.
///
/// Shared between [`create_server`] and the test harnesses so both drive
/// the same route table. The API scope allows any origin, which is what
/// the service has always permitted.
pub fn app_config(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        // Malformed JSON bodies get the validation envelope instead of the
        // default plain-text 400.
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::body(err.to_string()).into());
        cfg.app_data(web::Data::new(state))
            .app_data(health_state)
            .app_data(json_config)
            .service(
                web::scope("/api/users")
                    .wrap(Cors::permissive())
                    .service(signup)
                    .service(login)
                    .service(list_users),
            )
            .service(ready)
            .service(live);
    }
}

/// Construct an Actix HTTP server over the JSON record file named in
/// `config`.
///
/// Initialises the store (creating the data directory and an empty record
/// file when absent), then binds the listener and flips the readiness
/// probe.
///
/// # Errors
/// Returns [`std::io::Error`] when store initialisation or socket binding
/// fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let store: Arc<dyn UserStore> = Arc::new(JsonFileStore::new(config.data_file().to_path_buf()));
    store.initialize().await.map_err(std::io::Error::other)?;
    let state = HttpState::new(Arc::new(AccountService::new(store)));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Trace)
            .configure(app_config(state.clone(), server_health_state.clone()));
        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
