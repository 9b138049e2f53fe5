//! CLI command definitions.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::server::ServerConfig;
use crate::styles::styles;
use clap::Parser;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CLI_EXAMPLES: &str = "\
Examples:
  info-server                        Serve on 0.0.0.0:4000
  info-server --port 8080            Serve on a different port
  info-server --host 127.0.0.1       Only accept local connections
  RUST_LOG=debug info-server         Log every request outcome";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Info server - Serve identity and time information over HTTP.
#[derive(Debug, Parser)]
#[command(name = "info-server", author, version, styles=styles())]
#[command(about = "Serve identity and time information over HTTP", after_help = CLI_EXAMPLES)]
pub struct Cli {
    /// Host/address to bind to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Cli {
    /// Server configuration described by the parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["info-server"]);
        assert_eq!(cli.server_config(), ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["info-server", "--host", "127.0.0.1", "-p", "8080"]);
        assert_eq!(cli.server_config().bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port() {
        assert!(Cli::try_parse_from(["info-server", "--port", "70000"]).is_err());
    }
}
