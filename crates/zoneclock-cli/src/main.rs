//! zoneclock CLI application
//!
//! Terminal world clock and Unix timestamp converter. All timezone math is
//! delegated to the IANA rule database via jiff; the CLI layer only parses
//! arguments and renders results.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands, ConvertCommands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use zoneclock_core::params::ShowClock;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { lang, no_color, format, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color), lang.into(), format);

    info!("zoneclock started");

    match command {
        Some(Commands::Now(args)) => cli.show_clock(&args.into()),
        Some(Commands::Watch(args)) => cli.watch(&args.into()).await,
        Some(Commands::Convert { command }) => match command {
            ConvertCommands::Timestamp(args) => cli.convert_timestamp(&args.into()),
            ConvertCommands::Datetime(args) => cli.convert_datetime(&args.into()),
        },
        Some(Commands::Zones(args)) => cli.list_zones(&args.into()),
        Some(Commands::Detect) => cli.detect(),
        None => cli.show_clock(&ShowClock::default()),
    }
}
