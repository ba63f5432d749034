use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use connect_four::game::GameStatus;
use connect_four::logging::{initialize_logging, LogTarget};
use connect_four::replay::replay;

/// Replay a list of column drops and print the final position.
#[derive(Parser)]
#[command(
    name = "replay",
    about = "Replay Connect Four moves headlessly",
    allow_negative_numbers = true
)]
struct Cli {
    /// Columns to drop into, 0-based, Red first
    columns: Vec<i64>,

    /// Print a JSON summary instead of the board
    #[arg(long)]
    json: bool,

    /// Abort on the first rejected move instead of skipping it
    #[arg(long)]
    strict: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level, LogTarget::Stderr)?;

    let (engine, summary) = replay(&cli.columns, cli.strict)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", engine.board());
    match summary.status {
        GameStatus::InProgress => println!(
            "In progress after {} moves, {} to move",
            summary.moves_applied, summary.current_player
        ),
        GameStatus::Won(winner) => println!("{winner} wins after {} moves", summary.moves_applied),
        GameStatus::Draw => println!("Draw after {} moves", summary.moves_applied),
    }
    if summary.moves_rejected > 0 {
        println!("{} moves rejected", summary.moves_rejected);
    }

    Ok(())
}
