//! # Connect Four
//!
//! Rules engine for Connect Four: gravity drops into a 6x7 grid, four-in-a-row
//! win detection in all four directions, and turn/terminal-state management.
//! A terminal UI built with Ratatui and a headless replay CLI sit on top of
//! the engine and only talk to it through its public API.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, board engine state machine
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`replay`]: Headless replay of a move list
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod replay;
pub mod ui;
