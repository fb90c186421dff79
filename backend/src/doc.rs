//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! three user endpoints and the health probes. Swagger UI serves the
//! document at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::User;
use crate::inbound::http::users::{LoginRequest, SignupRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User account API",
        description = "Signup, login, and user listing over a JSON-file record store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, SignupRequest, LoginRequest)),
    tags(
        (name = "users", description = "Account management endpoints"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
