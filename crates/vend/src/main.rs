//! Vend - sales analytics microservice
//!
//! # Usage
//!
//! ```bash
//! # Run the API server (default)
//! vend
//! vend serve --config configs/vend.toml
//!
//! # Validate the snapshot on disk
//! vend check
//! vend check --path /var/lib/vend/snapshot
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Vend - sales analytics microservice
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the API server
    Serve(cmd::serve::ServeArgs),

    /// Load the snapshot and report its shape
    Check(cmd::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve(mut args)) => {
            // CLI global --config wins over the subcommand flag
            if args.config.is_none() {
                args.config = cli.config;
            }
            let log_level = resolve_log_level(cli.log_level.as_deref(), args.config.as_deref());
            init_logging(&log_level);
            cmd::serve::run(args).await
        }
        Some(Command::Check(args)) => {
            // Check prints to stdout; keep logging quiet unless asked
            init_logging(cli.log_level.as_deref().unwrap_or("warn"));
            cmd::check::run(args)
        }
        // No subcommand: serve
        None => {
            let log_level = resolve_log_level(cli.log_level.as_deref(), cli.config.as_deref());
            init_logging(&log_level);
            cmd::serve::run(cmd::serve::ServeArgs { config: cli.config }).await
        }
    }
}

/// Flag beats config file beats "info"
fn resolve_log_level(flag: Option<&str>, config_path: Option<&std::path::Path>) -> String {
    if let Some(level) = flag {
        return level.to_string();
    }

    if let Some(path) = config_path {
        if let Ok(config) = vend_config::Config::from_file(path) {
            return config.log.level.as_str().to_string();
        }
    }

    "info".to_string()
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
