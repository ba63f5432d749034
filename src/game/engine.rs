use serde::Serialize;
use tracing::{debug, trace};

use super::{Board, Cell, Player, COLS, ROWS};
use crate::error::MoveError;

/// Lifecycle of a game. Leaves `InProgress` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// What a successful drop did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on and the turn passed to the other player.
    Continued,
    Win(Player),
    Draw,
}

/// Board state machine: grid, turn order and terminal status.
///
/// [`BoardEngine::drop_piece`] is the only mutating operation. It validates
/// everything before touching the board, so a rejected move leaves the
/// engine exactly as it was. A finished engine is never reset; start a new
/// game with a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves: usize,
}

impl BoardEngine {
    /// Empty board, Red to move.
    pub fn new() -> Self {
        BoardEngine {
            board: Board::new(),
            current_player: Player::Red,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Player to move next. Unchanged by the move that ends the game.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < ROWS && col < COLS).then(|| self.board.get(row, col))
    }

    /// Pieces in `col`, or `None` for an out-of-range column.
    pub fn column_height(&self, col: usize) -> Option<usize> {
        (col < COLS).then(|| self.board.height(col))
    }

    /// Number of pieces on the board.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Columns that currently accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Accepts any integer type so that negative input from a caller is
    /// reported as [`MoveError::InvalidColumn`] rather than failing to
    /// convert at the call site.
    pub fn drop_piece<C>(&mut self, column: C) -> Result<MoveOutcome, MoveError>
    where
        C: TryInto<usize>,
    {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let column = column
            .try_into()
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn)?;

        if self.board.is_column_full(column) {
            return Err(MoveError::ColumnFull);
        }

        let player = self.current_player;
        let row = self.board.place(column, player);
        self.moves += 1;
        debug!(
            player = player.name(),
            row,
            column,
            moves = self.moves,
            "piece dropped"
        );

        if let Some((dr, dc)) = self.board.winning_axis(row, column) {
            trace!(dr, dc, "winning run");
            self.status = GameStatus::Won(player);
            debug!(winner = player.name(), "game won");
            return Ok(MoveOutcome::Win(player));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            debug!(moves = self.moves, "board full, game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Continued)
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}
