use std::fmt;

use serde::Serialize;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of the run that wins the game.
pub const WIN_LENGTH: usize = 4;

/// The four axes a run can lie on, each as one unit step. The opposite step
/// is walked by negating it.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal -
    (1, 0),  // vertical |
    (1, 1),  // main diagonal \
    (-1, 1), // anti-diagonal /
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character symbol used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// The grid plus one landing counter per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces that have landed in `col`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Row the next piece dropped into `col` would land on, if any.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS || self.heights[col] >= ROWS {
            return None;
        }
        Some(ROWS - 1 - self.heights[col])
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == ROWS)
    }

    /// Place a piece for `player` in `col` and return the row it landed on.
    ///
    /// Callers validate the column first; the board itself only guards its
    /// invariants.
    pub(crate) fn place(&mut self, col: usize, player: Player) -> usize {
        let row = ROWS - 1 - self.heights[col];
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = player.to_cell();
        self.heights[col] += 1;
        debug_assert!(self.heights[col] <= ROWS);
        row
    }

    /// Check whether the piece at (row, col) is part of a winning run.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_axis(row, col).is_some()
    }

    /// First axis through (row, col) carrying a run of at least
    /// [`WIN_LENGTH`] pieces of that cell's color.
    pub fn winning_axis(&self, row: usize, col: usize) -> Option<(isize, isize)> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return None;
        }

        AXES.into_iter().find(|&(dr, dc)| {
            // Both walks count the start cell.
            let forward = self.count_run(row, col, dr, dc, cell);
            let backward = self.count_run(row, col, -dr, -dc, cell);
            forward + backward - 1 >= WIN_LENGTH
        })
    }

    /// Count consecutive `cell` pieces starting at (row, col) inclusive,
    /// stepping by (dr, dc) until a board edge or a mismatch.
    fn count_run(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize, col as isize);

        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..COLS {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in &self.cells {
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
