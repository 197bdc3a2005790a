pub mod lambda;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_route, Validate};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::net::SocketAddr;

#[cfg(feature = "cli")]
pub const DEFAULT_ROUTE: &str = "/FormatPhoneNumber";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "phone-formatter")]
#[command(about = "Format phone numbers in international notation")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format the given numbers and print the results
    Format(FormatArgs),
    /// Serve the FormatPhoneNumber endpoint over HTTP
    Serve(ServeArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Numbers including their country code, e.g. +14155552671
    #[arg(required = true)]
    pub numbers: Vec<String>,

    #[arg(long, help = "Print the JSON response body instead of plain text")]
    pub json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:7071")]
    pub bind: SocketAddr,

    #[arg(long, default_value = DEFAULT_ROUTE)]
    pub route: String,
}

#[cfg(feature = "cli")]
impl Validate for ServeArgs {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_route("route", &self.route)?;

        tracing::debug!("✅ Serve configuration validation passed");
        Ok(())
    }
}
