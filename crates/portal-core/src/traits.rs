//! Core traits for portal abstraction.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where the portal
//! finds its remote API and how it labels pages.

use std::time::Duration;

use crate::Result;

/// Trait for portal configuration.
///
/// The CLI implements it on its file/env-backed config; tests implement it
/// on small in-memory structs.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use portal_core::traits::ConfigProvider;
/// use portal_core::Result;
///
/// #[derive(Clone)]
/// struct LocalConfig;
///
/// impl ConfigProvider for LocalConfig {
///     fn project_name(&self) -> &str {
///         "portal"
///     }
///
///     fn api_base_url(&self) -> Result<String> {
///         Ok("http://localhost:8101/api".into())
///     }
/// }
///
/// assert_eq!(LocalConfig.request_timeout(), Duration::from_secs(10));
/// assert_eq!(LocalConfig.site_title(), "API Open Platform");
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base URL every API path is appended to (e.g. `http://host/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is missing or malformed.
    fn api_base_url(&self) -> Result<String>;

    /// Per-request timeout for the API client.
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(10)
    }

    /// Suffix appended to every page title.
    fn site_title(&self) -> &str {
        "API Open Platform"
    }
}
