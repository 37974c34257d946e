//! Command-line front end for the portal.
//!
//! # Key Abstractions
//!
//! - [`PortalCli`]: the application, parameterized over a config provider
//! - [`PortalConfig`]: file and environment backed configuration
//! - [`CliArgs`]: clap argument definitions

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod route_handlers;
pub mod session_handlers;

pub use app::PortalCli;
pub use cli::CliArgs;
pub use config::PortalConfig;
