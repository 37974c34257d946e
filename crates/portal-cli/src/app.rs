//! PortalCli application.
//!
//! Dispatches parsed [`CliArgs`] to the handler modules.

use std::sync::Arc;

use portal_acl::User;
use portal_core::Result;
use portal_core::traits::ConfigProvider;
use portal_router::RouteTable;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::PortalConfig;
use crate::{config_handlers, route_handlers, session_handlers};

// ============================================================================
// PortalCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct PortalCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    routes: RouteTable,
    version: String,
}

impl PortalCli<PortalConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = PortalConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> PortalCli<C> {
    /// Create a new CLI application serving the platform route table.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            routes: RouteTable::platform(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the route table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity
    /// flags. `log` records from the library crates are forwarded.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(project = self.config.project_name(), "dispatching {:?}", args.command);

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Routes) => route_handlers::handle_routes(&self.routes),
            Some(Command::Check {
                path,
                role,
                user_id,
                from,
            }) => {
                let user = role.map(|role| User::new(user_id, role));
                route_handlers::handle_check(
                    &self.routes,
                    self.config.site_title(),
                    &path,
                    &from,
                    user,
                )
                .await
            }
            Some(Command::Whoami { account, password }) => {
                session_handlers::handle_whoami(
                    &*self.config,
                    account.as_deref(),
                    password.as_deref(),
                )
                .await
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
