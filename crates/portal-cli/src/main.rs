//! `portal` binary entry point.

use clap::Parser;
use portal_cli::{CliArgs, PortalCli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let cli = PortalCli::from_args("portal", &args)?;
    cli.run(args).await?;
    Ok(())
}
