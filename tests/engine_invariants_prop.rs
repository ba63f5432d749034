//! Property tests for the board engine over random column sequences.
//!
//! Invariants covered:
//! - column heights match the pieces actually in each column
//! - a drop lands at `ROWS - 1 - height` measured before the drop
//! - the turn flips after a continuing move and stays put after a terminal one
//! - every rejected move leaves the engine untouched
//! - once terminal, the status never changes again
use connect_four::error::MoveError;
use connect_four::game::{BoardEngine, Cell, GameStatus, MoveOutcome, COLS, ROWS};
use proptest::prelude::*;

fn assert_heights_consistent(engine: &BoardEngine) {
    for col in 0..COLS {
        let occupied = (0..ROWS)
            .filter(|&row| engine.cell(row, col) != Some(Cell::Empty))
            .count();
        assert_eq!(engine.column_height(col), Some(occupied));

        // Pieces sit on a contiguous stack from the bottom
        for row in 0..ROWS {
            let expected_empty = row < ROWS - occupied;
            assert_eq!(engine.cell(row, col) == Some(Cell::Empty), expected_empty);
        }
    }
}

proptest! {
    #[test]
    fn drops_keep_invariants(columns in prop::collection::vec(-2i64..(COLS as i64 + 2), 0..80)) {
        let mut engine = BoardEngine::new();

        for column in columns {
            let before = engine.clone();
            let player = engine.current_player();

            match engine.drop_piece(column) {
                Ok(outcome) => {
                    let col = column as usize;
                    let height = before.column_height(col).unwrap();
                    let row = ROWS - 1 - height;
                    prop_assert_eq!(engine.cell(row, col), Some(player.to_cell()));
                    prop_assert_eq!(engine.column_height(col), Some(height + 1));
                    prop_assert_eq!(engine.move_count(), before.move_count() + 1);

                    match outcome {
                        MoveOutcome::Continued => {
                            prop_assert_eq!(engine.current_player(), player.other());
                            prop_assert_eq!(engine.status(), GameStatus::InProgress);
                        }
                        MoveOutcome::Win(winner) => {
                            prop_assert_eq!(winner, player);
                            prop_assert_eq!(engine.current_player(), player);
                            prop_assert_eq!(engine.status(), GameStatus::Won(player));
                        }
                        MoveOutcome::Draw => {
                            prop_assert_eq!(engine.current_player(), player);
                            prop_assert_eq!(engine.status(), GameStatus::Draw);
                            prop_assert!(engine.board().is_full());
                        }
                    }
                }
                Err(err) => {
                    prop_assert_eq!(&engine, &before);
                    let expected = if before.is_terminal() {
                        MoveError::GameAlreadyOver
                    } else if column < 0 || column >= COLS as i64 {
                        MoveError::InvalidColumn
                    } else {
                        MoveError::ColumnFull
                    };
                    prop_assert_eq!(err, expected);
                }
            }

            if before.is_terminal() {
                prop_assert_eq!(engine.status(), before.status());
            }
            assert_heights_consistent(&engine);
        }
    }

    #[test]
    fn legal_columns_always_accept(columns in prop::collection::vec(0usize..COLS, 0..42)) {
        let mut engine = BoardEngine::new();

        for column in columns {
            let legal = engine.legal_columns();
            let accepted = engine.clone().drop_piece(column).is_ok();
            prop_assert_eq!(legal.contains(&column), accepted);
            let _ = engine.drop_piece(column);
        }
    }
}
