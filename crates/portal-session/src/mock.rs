//! Mock session provider for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portal_acl::User;
use portal_core::{Error, Result};
use tokio::sync::Mutex;

use crate::provider::{Credentials, SessionProvider};

/// In-memory stand-in for the remote session endpoints.
///
/// Holds a "server side" session: `fetch_current_user` returns its user or
/// fails with [`Error::Auth`] when there is none, `login` opens it for a
/// known account, `logout` closes it. Clones share state.
#[derive(Clone, Default)]
pub struct MockSessionProvider {
    state: Arc<Mutex<MockState>>,
    fetch_calls: Arc<AtomicUsize>,
}

#[derive(Default)]
struct MockState {
    session: Option<User>,
    accounts: HashMap<String, (String, User)>,
    fail_logout: bool,
}

impl MockSessionProvider {
    /// Provider with no open session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Provider whose session already belongs to `user`.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_acl::{Role, User};
    /// use portal_session::MockSessionProvider;
    ///
    /// let provider = MockSessionProvider::with_user(User::new(1, Role::Admin));
    /// assert_eq!(provider.fetch_calls(), 0);
    /// ```
    pub fn with_user(user: User) -> Self {
        let provider = Self::default();
        if let Ok(mut state) = provider.state.try_lock() {
            state.session = Some(user);
        }
        provider
    }

    /// Registers an account `login` will accept.
    pub fn with_account(
        self,
        account: impl Into<String>,
        password: impl Into<String>,
        user: User,
    ) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state.accounts.insert(account.into(), (password.into(), user));
        }
        self
    }

    /// Makes every `logout` fail.
    pub fn failing_logout(self) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state.fail_logout = true;
        }
        self
    }

    /// Number of `fetch_current_user` calls so far.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn fetch_current_user(&self) -> Result<User> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .lock()
            .await
            .session
            .clone()
            .ok_or_else(|| Error::auth("not logged in"))
    }

    async fn login(&self, credentials: &Credentials) -> Result<User> {
        let mut state = self.state.lock().await;
        let user = match state.accounts.get(&credentials.user_account) {
            Some((password, user)) if *password == credentials.user_password => user.clone(),
            _ => return Err(Error::auth("invalid account or password")),
        };
        state.session = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.fail_logout {
            return Err(Error::auth("logout endpoint unreachable"));
        }
        state.session = None;
        Ok(())
    }
}
