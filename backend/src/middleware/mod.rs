//! Actix middleware shared by all endpoints.

pub mod trace;
