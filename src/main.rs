//! Layerpaint CLI
//!
//! Command-line interface for the layered paint canvas.

use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::commands::{self, ReplayOptions};
use layerpaint::cli::{Cli, Commands};
use layerpaint::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Layers => commands::list_layers(),
        Commands::Replay {
            script,
            config,
            style,
            width,
            height,
            timestamp,
        } => {
            let options = ReplayOptions {
                config: config.as_deref(),
                style,
                width,
                height,
                timestamp,
            };
            commands::replay(&script, &options)
        }
        Commands::RecordDemo { script } => commands::record_demo(&script),
    }
}
