//! The session slot.
//!
//! [`SessionStore`] is an injectable context rather than a process global:
//! the router and the CLI each hold an `Arc<SessionStore>`.
//!
//! # Stale completions
//!
//! Every settled write bumps an epoch. A fetch or login records the epoch
//! when it starts and only writes its result if nothing else settled in the
//! meantime. The lock is never held across a provider call.

use std::sync::Arc;

use portal_acl::User;
use portal_core::Result;
use tokio::sync::RwLock;

use crate::provider::{Credentials, SessionProvider};

/// Point-in-time view of the session slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Current user, if any.
    pub user: Option<User>,
    /// Number of settled writes so far.
    pub epoch: u64,
}

/// Holder of the current authenticated user.
pub struct SessionStore {
    provider: Arc<dyn SessionProvider>,
    slot: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Creates an empty (anonymous) session backed by `provider`.
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            provider,
            slot: RwLock::new(SessionSnapshot::default()),
        }
    }

    /// Returns a clone of the current user.
    pub async fn current_user(&self) -> Option<User> {
        self.slot.read().await.user.clone()
    }

    /// `true` iff a user is currently held.
    pub async fn is_logged_in(&self) -> bool {
        self.slot.read().await.user.is_some()
    }

    /// Returns the user and epoch read under one lock.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.slot.read().await.clone()
    }

    /// Replaces the current user without contacting the provider.
    pub async fn set_user(&self, user: Option<User>) {
        let mut slot = self.slot.write().await;
        slot.user = user;
        slot.epoch += 1;
    }

    /// Forgets the current user locally.
    pub async fn clear(&self) {
        self.set_user(None).await;
    }

    /// Asks the provider who is logged in.
    ///
    /// On success the user is stored and returned. On failure the slot is
    /// cleared and the error returned. Either write is skipped if another
    /// write settled while the provider call was in flight.
    pub async fn fetch_current_user(&self) -> Result<User> {
        let started = self.slot.read().await.epoch;
        match self.provider.fetch_current_user().await {
            Ok(user) => {
                self.settle(started, Some(user.clone()), "fetch").await;
                Ok(user)
            }
            Err(e) => {
                log::debug!("Session fetch failed: {e}");
                self.settle(started, None, "fetch").await;
                Err(e)
            }
        }
    }

    /// Logs in through the provider, with the same write rules as
    /// [`fetch_current_user`](Self::fetch_current_user).
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let started = self.slot.read().await.epoch;
        match self.provider.login(credentials).await {
            Ok(user) => {
                log::info!("Logged in as user {}", user.id);
                self.settle(started, Some(user.clone()), "login").await;
                Ok(user)
            }
            Err(e) => {
                log::warn!("Login failed for {}: {e}", credentials.user_account);
                self.settle(started, None, "login").await;
                Err(e)
            }
        }
    }

    /// Logs out through the provider.
    ///
    /// The slot is cleared when the provider succeeds. Provider failures are
    /// logged and swallowed, leaving the slot as it was.
    pub async fn logout(&self) {
        match self.provider.logout().await {
            Ok(()) => self.clear().await,
            Err(e) => log::error!("Could not log out: {e}"),
        }
    }

    /// Writes `user` if the epoch is still `started`. Returns whether it wrote.
    async fn settle(&self, started: u64, user: Option<User>, op: &str) -> bool {
        let mut slot = self.slot.write().await;
        if slot.epoch != started {
            log::debug!(
                "Discarding stale {op} result (started at epoch {started}, now {})",
                slot.epoch
            );
            return false;
        }
        slot.user = user;
        slot.epoch += 1;
        true
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
