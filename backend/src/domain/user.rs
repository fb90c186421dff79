//! User record model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application user record, exactly as persisted in the record file.
///
/// The password is held in plaintext because the store file keeps it that
/// way; adapters must call [`User::redacted`] before a record leaves the
/// service. The signup endpoint is the documented exception and returns the
/// record verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Ten-digit mobile number starting with 6-9; unique across records.
    #[schema(example = "9876543210")]
    pub mobile_number: String,
    /// Unique login name.
    #[schema(example = "ada")]
    pub username: String,
    /// Plaintext password. Blank in redacted copies.
    pub password: String,
}

impl User {
    /// Construct a record from its four fields.
    pub fn new(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile_number: mobile_number.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Copy of this record with the password blanked, safe for transmission.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}

// Keep passwords out of logs; `Debug` is derived everywhere else.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("mobile_number", &self.mobile_number)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
