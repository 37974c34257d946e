//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use portal_acl::Role;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "portal", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "PORTAL_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version information.
    Version,

    /// List the route table with each route's access rule.
    Routes,

    /// Run the navigation guard for a path against an in-memory session.
    Check {
        /// Destination path.
        #[arg(short, long)]
        path: String,

        /// Role of the simulated user; anonymous when omitted.
        #[arg(short, long, value_parser = parse_role)]
        role: Option<Role>,

        /// Id of the simulated user.
        #[arg(long, default_value_t = 1)]
        user_id: u64,

        /// Location the transition starts from.
        #[arg(short, long, default_value = "/")]
        from: String,
    },

    /// Show the user the API considers logged in.
    Whoami {
        /// Log in with this account first.
        #[arg(short, long)]
        account: Option<String>,

        /// Password for `--account`.
        #[arg(short, long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "api.base_url").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    match s.parse::<Role>() {
        Ok(role) => Ok(role),
        Err(_) => Err(format!("expected one of user, admin, ban; got {s:?}")),
    }
}

// ============================================================================
// Tests
// ============================================================================
