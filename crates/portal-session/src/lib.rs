//! Session state for the portal.
//!
//! [`SessionStore`] holds the current user and mediates every change to it
//! through a [`SessionProvider`] (in production, the HTTP API client).
//!
//! # Modules
//!
//! - [`provider`]: the provider contract and login credentials
//! - [`store`]: the session slot with stale-write protection
//! - [`mock`]: an in-memory provider for tests and offline tooling

pub mod mock;
pub mod provider;
pub mod store;

pub use mock::MockSessionProvider;
pub use provider::{Credentials, SessionProvider};
pub use store::{SessionSnapshot, SessionStore};
