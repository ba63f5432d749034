use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{BoardEngine, MoveOutcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

/// Presentation adapter: turns key presses into engine calls and renders
/// engine queries. Holds no game state of its own beyond the cursor.
pub struct App {
    engine: BoardEngine,
    selected_column: usize,
    start_column: usize,
    show_controls: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let start_column = config.start_column.min(COLS - 1);
        App {
            engine: BoardEngine::new(),
            selected_column: start_column,
            start_column,
            show_controls: config.show_controls,
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // 1-based; digits past the last column are rejected by the engine
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                // A finished engine is never reused
                self.engine = BoardEngine::new();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                info!("new game started");
            }
            _ => {}
        }
    }

    /// Drop the current player's piece into `column`
    fn drop_piece(&mut self, column: usize) {
        let player = self.engine.current_player();

        match self.engine.drop_piece(column) {
            Ok(MoveOutcome::Continued) => {}
            Ok(MoveOutcome::Win(winner)) => {
                info!(winner = winner.name(), moves = self.engine.move_count(), "game won");
                self.message = Some(format!("{} wins!", winner.name()));
            }
            Ok(MoveOutcome::Draw) => {
                info!(moves = self.engine.move_count(), "game drawn");
                self.message = Some("It's a draw!".to_string());
            }
            Err(err) => {
                debug!(player = player.name(), column, %err, "move rejected");
                self.message = Some(match err {
                    MoveError::ColumnFull => "Column is full!".to_string(),
                    MoveError::InvalidColumn => "Invalid column!".to_string(),
                    MoveError::GameAlreadyOver => "Game over! Press 'r' to restart.".to_string(),
                });
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            self.show_controls,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
