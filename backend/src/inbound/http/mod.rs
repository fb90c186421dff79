//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

pub use envelope::ApiResponse;
pub use error::{ApiError, ApiResult};
