//! Configuration for the portal CLI.
//!
//! Provides the [`PortalConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `PORTAL_CONFIG` environment variable
//! 3. XDG default: `~/.config/portal/config.toml`
//! 4. Built-in defaults
//!
//! `PORTAL_*` variables (e.g. `PORTAL_API_BASE_URL`) are layered on top.

use std::path::PathBuf;
use std::time::Duration;

use confyg::{Confygery, env};
use portal_client::DEFAULT_BASE_URL;
use portal_core::traits::ConfigProvider;
use portal_core::{Error, Result};
use portal_router::DEFAULT_SITE_TITLE;
use serde::{Deserialize, Serialize};

/// Env var naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PORTAL_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the portal CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Remote API settings.
    pub api: ApiConfig,

    /// Presentation settings.
    pub ui: UiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Site name appended to page titles.
    pub site_title: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            project_name: "portal".to_string(),
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl PortalConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("PORTAL");
        env_opts.add_section("api");
        env_opts.add_section("ui");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("portal").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for PortalConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn api_base_url(&self) -> Result<String> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(Error::config("api.base_url is empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "api.base_url must be an http(s) URL, got {url:?}"
            )));
        }
        Ok(url.to_string())
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    fn site_title(&self) -> &str {
        &self.ui.site_title
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that touch process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// RAII guard for env var manipulation in tests.
    pub(crate) struct EnvGuard {
        key: String,
        prev: Option<String>,
    }

    impl EnvGuard {
        pub(crate) fn new(key: &str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            // SAFETY: callers hold `env_lock()`.
            unsafe { std::env::set_var(key, value) };
            Self {
                key: key.to_string(),
                prev,
            }
        }

        pub(crate) fn remove(key: &str) -> Self {
            let prev = std::env::var(key).ok();
            // SAFETY: callers hold `env_lock()`.
            unsafe { std::env::remove_var(key) };
            Self {
                key: key.to_string(),
                prev,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: the guard is dropped while `env_lock()` is still held.
            unsafe {
                match &self.prev {
                    Some(val) => std::env::set_var(&self.key, val),
                    None => std::env::remove_var(&self.key),
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Default tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_portal_config_default() {
        let config = PortalConfig::default();
        assert_eq!(config.project_name, "portal");
        assert_eq!(config.api.base_url, "http://localhost:8101/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui.site_title, "API Open Platform");
    }

    // ------------------------------------------------------------------------
    // Serialization tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_portal_config_from_toml() {
        let toml_str = r#"
            project_name = "staging"

            [api]
            base_url = "https://staging.example.com/api"
            timeout_secs = 30

            [ui]
            site_title = "Staging Portal"
        "#;

        let config: PortalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project_name, "staging");
        assert_eq!(config.api.base_url, "https://staging.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.site_title, "Staging Portal");
    }

    #[test]
    fn test_portal_config_partial_toml_keeps_defaults() {
        let config: PortalConfig = toml::from_str("[ui]\nsite_title = \"X\"\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.ui.site_title, "X");
    }

    #[test]
    fn test_portal_config_to_toml() {
        let config = PortalConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("project_name = \"portal\""));
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("timeout_secs = 10"));

        let parsed: PortalConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    // ------------------------------------------------------------------------
    // Loading tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_portal_config_load_from_file() {
        let _lock = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                project_name = "loaded"
                [api]
                base_url = "http://10.0.0.5:8101/api"
                timeout_secs = 3
            "#,
        )
        .unwrap();

        let config = PortalConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.project_name, "loaded");
        assert_eq!(config.api.base_url, "http://10.0.0.5:8101/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_portal_config_load_defaults() {
        let _lock = env_lock();
        let config = PortalConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_portal_config_load_env_overlay() {
        let _lock = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nsite_title = \"From File\"\n").unwrap();

        // confyg passes env values as strings, so overlay a string field.
        let _guard = EnvGuard::new("PORTAL_UI_SITE_TITLE", "From Env");
        let config = PortalConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.ui.site_title, "From Env");
    }

    // ------------------------------------------------------------------------
    // resolve_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = PortalConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_env() {
        let _lock = env_lock();
        let _guard = EnvGuard::new(CONFIG_ENV_VAR, "/env/config.toml");
        let path = PortalConfig::resolve_config_path(None);
        assert_eq!(path, Some(PathBuf::from("/env/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_default() {
        let _lock = env_lock();
        let _guard = EnvGuard::remove(CONFIG_ENV_VAR);
        if let Some(p) = PortalConfig::resolve_config_path(None) {
            let s = p.to_string_lossy();
            assert!(s.contains("portal"));
            assert!(s.ends_with("config.toml"));
        }
    }

    // ------------------------------------------------------------------------
    // ConfigProvider tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_provider_base_url_validation() {
        let mut config = PortalConfig::default();
        assert_eq!(config.api_base_url().unwrap(), DEFAULT_BASE_URL);

        config.api.base_url = "  ".into();
        assert!(config.api_base_url().is_err());

        config.api.base_url = "ftp://files/api".into();
        assert!(config.api_base_url().is_err());
    }

    #[test]
    fn test_provider_timeout_never_zero() {
        let mut config = PortalConfig::default();
        config.api.timeout_secs = 0;
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_provider_site_title() {
        let mut config = PortalConfig::default();
        config.ui.site_title = "Dev".into();
        assert_eq!(config.site_title(), "Dev");
    }

    #[test]
    fn test_portal_config_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortalConfig>();
    }
}
