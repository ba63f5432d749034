use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::logging::{initialize_logging, LogTarget};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the log level ("off", "error", "warn", "info", "debug", "trace")
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file (the UI never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override the column the selector starts on (0-based)
    #[arg(long)]
    start_column: Option<usize>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(file) = cli.log_file {
        config.log.file = Some(file);
    }
    if let Some(column) = cli.start_column {
        config.ui.start_column = column;
    }
    config.validate().context("invalid configuration")?;

    if let Some(path) = &config.log.file {
        initialize_logging(config.log.level_filter()?, LogTarget::File(path))
            .with_context(|| format!("opening log file {}", path.display()))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config.ui);
    let res = app.run(&mut terminal);

    // Restore terminal even when the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
