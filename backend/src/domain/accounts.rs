//! Account service: business rules over the record store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use super::error::AccountError;
use super::ports::{StorageError, UserStore};
use super::user::User;

/// Uniqueness invariants and credential checks atop a [`UserStore`].
///
/// The store is injected at construction; the service owns no global
/// state. Mutating calls serialise behind an internal lock so that two
/// concurrent signups cannot both pass the uniqueness checks and race the
/// read-modify-write cycle.
pub struct AccountService {
    store: Arc<dyn UserStore>,
    write_lock: Mutex<()>,
}

impl AccountService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// First record matching `username` exactly, in storage order.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .store
            .read_all()
            .await?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// First record matching `mobile_number` exactly, in storage order.
    pub async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(self
            .store
            .read_all()
            .await?
            .into_iter()
            .find(|user| user.mobile_number == mobile_number))
    }

    /// Append `candidate` to the record set after checking uniqueness.
    ///
    /// The username check runs before the mobile-number check; when both
    /// collide the reported error is the username one. The whole
    /// read-check-append-write span holds the write lock. On success the
    /// candidate is returned unchanged, password included; callers redact
    /// before transmitting.
    pub async fn create_account(&self, candidate: User) -> Result<User, AccountError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.read_all().await?;
        if records
            .iter()
            .any(|user| user.username == candidate.username)
        {
            return Err(AccountError::DuplicateUsername);
        }
        if records
            .iter()
            .any(|user| user.mobile_number == candidate.mobile_number)
        {
            return Err(AccountError::DuplicateMobileNumber);
        }
        records.push(candidate.clone());
        self.store.write_all(&records).await?;
        info!(username = %candidate.username, "account created");
        Ok(candidate)
    }

    /// Record matching `username` whose password equals `password` exactly.
    ///
    /// Read-only, so it takes no lock. Returns `None` for an unknown user
    /// and for a wrong password alike; the adapter keeps the two
    /// indistinguishable to avoid username enumeration.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(self
            .find_by_username(username)
            .await?
            .filter(|user| user.password == password))
    }

    /// Full record set in storage order, unredacted.
    pub async fn list_all(&self) -> Result<Vec<User>, StorageError> {
        self.store.read_all().await
    }
}
