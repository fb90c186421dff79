//! Transport-agnostic core: the user record, account rules, and the
//! storage port.
//!
//! Inbound adapters translate domain failures into HTTP envelopes; outbound
//! adapters implement [`ports::UserStore`] against real storage.

mod accounts;
mod error;
pub mod ports;
mod user;

#[cfg(test)]
mod accounts_tests;

pub use accounts::AccountService;
pub use error::AccountError;
pub use ports::{StorageError, UserStore};
pub use user::User;
