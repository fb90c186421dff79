//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to
//! status codes and the uniform response envelope.

use thiserror::Error;

use super::ports::StorageError;

/// Failures raised by account operations.
///
/// The duplicate messages are part of the external contract: clients see
/// them verbatim in the envelope, and the username check always runs before
/// the mobile-number check, so a record colliding on both reports the
/// username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// A record with the same username already exists.
    #[error("Username already exists")]
    DuplicateUsername,
    /// A record with the same mobile number already exists.
    #[error("Mobile number already exists")]
    DuplicateMobileNumber,
    /// The record store failed beneath the business rules.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
