//! `info-server` is the HTTP server binary.

use clap::Parser;
use colored::Colorize;
use info_server::{AppState, Cli, ServerError, ServerResult, serve};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &ServerError) {
    eprintln!();
    match e {
        ServerError::Bind { addr, source } => {
            eprintln!(
                "  {} Failed to bind {}",
                "error[bind]".bright_red().bold(),
                addr.bright_white()
            );
            eprintln!();
            eprintln!("    {}", source);
            eprintln!();
            eprintln!(
                "    {}: Choose another address with {}",
                "hint".bright_blue().bold(),
                "--host/--port".bright_white()
            );
        }
        _ => {
            eprintln!("  {} {}", "error".bright_red().bold(), e);
        }
    }
    eprintln!();
}

/// Initialize tracing. `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn run() -> ServerResult<()> {
    let cli = Cli::parse();
    serve(&cli.server_config(), AppState::default()).await
}
