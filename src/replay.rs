//! Headless replay of a column sequence through a fresh engine.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ReplayError;
use crate::game::{BoardEngine, GameStatus, MoveOutcome, Player, COLS, ROWS};

/// Final position after a replay, as printed by the `replay` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub moves_applied: usize,
    pub moves_rejected: usize,
    pub status: GameStatus,
    pub current_player: Player,
    /// Top row first, one character per cell.
    pub board: Vec<String>,
}

impl ReplaySummary {
    fn from_engine(engine: &BoardEngine, moves_rejected: usize) -> Self {
        let board: Vec<String> = (0..ROWS)
            .map(|row| {
                (0..COLS)
                    .filter_map(|col| engine.cell(row, col))
                    .map(|cell| cell.symbol())
                    .collect::<String>()
            })
            .collect();

        ReplaySummary {
            moves_applied: engine.move_count(),
            moves_rejected,
            status: engine.status(),
            current_player: engine.current_player(),
            board,
        }
    }
}

/// Play `columns` in order on a new engine.
///
/// In strict mode the first rejected move aborts the replay. Otherwise
/// rejected moves are logged and skipped, including everything after the
/// game has ended.
pub fn replay(
    columns: &[i64],
    strict: bool,
) -> Result<(BoardEngine, ReplaySummary), ReplayError> {
    let mut engine = BoardEngine::new();
    let mut rejected = 0;

    for (index, &column) in columns.iter().enumerate() {
        match engine.drop_piece(column) {
            Ok(MoveOutcome::Continued) => {}
            Ok(MoveOutcome::Win(winner)) => info!(winner = winner.name(), index, "game won"),
            Ok(MoveOutcome::Draw) => info!(index, "game drawn"),
            Err(source) if strict => {
                return Err(ReplayError::Rejected {
                    index,
                    column,
                    source,
                })
            }
            Err(err) => {
                warn!(index, column, %err, "skipping rejected move");
                rejected += 1;
            }
        }
    }

    let summary = ReplaySummary::from_engine(&engine, rejected);
    Ok((engine, summary))
}
