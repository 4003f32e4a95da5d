// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! visage - a Telegram face-swap bot.
//!
//! This is the binary entry point for the visage bot.

use clap::{Parser, Subcommand};

mod serve;

/// visage - a Telegram face-swap bot.
#[derive(Parser, Debug)]
#[command(name = "visage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot: Telegram dispatcher plus static image host.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match visage_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            visage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("visage: use --help for available commands");
        }
    }
}
