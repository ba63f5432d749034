//! Core Connect Four game logic: board representation, player types, and the
//! board engine state machine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use engine::{BoardEngine, GameStatus, MoveOutcome};
pub use player::Player;
