//! Marquee CLI - Command-line interface
//!
//! Provides command-line access to Marquee functionality.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "A debounced movie search over the OMDb API")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle_command(cli.command).await
}
