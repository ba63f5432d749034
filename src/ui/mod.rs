//! Terminal UI: a thin adapter that feeds key presses to the board engine
//! and draws the board from engine queries.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
