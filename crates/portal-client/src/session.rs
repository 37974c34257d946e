//! [`SessionProvider`] backed by the live user endpoints.

use async_trait::async_trait;
use portal_acl::User;
use portal_core::{Error, Result};
use portal_session::{Credentials, SessionProvider};

use crate::client::ApiClient;

/// Any failure of a session endpoint is an authentication failure to the
/// session store; the underlying cause is kept in the message.
fn as_auth(err: Error) -> Error {
    match err {
        Error::Auth(_) => err,
        other => Error::auth(other.to_string()),
    }
}

#[async_trait]
impl SessionProvider for ApiClient {
    async fn fetch_current_user(&self) -> Result<User> {
        self.get_login_user().await.map_err(as_auth)
    }

    async fn login(&self, credentials: &Credentials) -> Result<User> {
        ApiClient::login(self, credentials).await.map_err(as_auth)
    }

    async fn logout(&self) -> Result<()> {
        ApiClient::logout(self).await.map_err(as_auth)
    }
}
