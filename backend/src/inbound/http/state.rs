//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the domain service and remain testable against the in-memory store.

use std::sync::Arc;

use crate::domain::AccountService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account rules over the injected record store.
    pub accounts: Arc<AccountService>,
}

impl HttpState {
    /// Bundle the account service for handler injection.
    pub fn new(accounts: Arc<AccountService>) -> Self {
        Self { accounts }
    }
}
