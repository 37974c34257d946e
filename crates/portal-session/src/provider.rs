//! Session provider contract.

use std::fmt;

use async_trait::async_trait;
use portal_acl::User;
use portal_core::Result;
use serde::{Deserialize, Serialize};

/// Remote authority for who is logged in.
///
/// Every method fails with [`portal_core::Error::Auth`] when the session is
/// missing, the credentials are wrong, or the transport fails.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the user behind the current session.
    async fn fetch_current_user(&self) -> Result<User>;

    /// Opens a session and returns its user.
    async fn login(&self, credentials: &Credentials) -> Result<User>;

    /// Closes the current session.
    async fn logout(&self) -> Result<()>;
}

/// Account/password pair sent to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Account name.
    pub user_account: String,
    /// Plain-text password.
    pub user_password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_account: account.into(),
            user_password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_account", &self.user_account)
            .field("user_password", &"***")
            .finish()
    }
}
