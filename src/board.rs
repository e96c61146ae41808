use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TicTacToeError};

/// A coordinate pair `(row, col)` naming one cell.
pub type Move = (usize, usize);

pub const SIZE: usize = 3;

// 3 rows, 3 columns, 2 diagonals
const LINES: [[Move; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = TicTacToeError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            other => Err(TicTacToeError::InvalidMark(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Mark),
}

/// The 3x3 grid. Cheap to copy, so the search works on snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(TicTacToeError::OutOfBounds { row, col })
    }

    /// Writes `mark` into an empty cell. The board is left untouched on error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<()> {
        match self.get(row, col)? {
            Cell::Empty => {
                self.cells[row][col] = Cell::Filled(mark);
                Ok(())
            }
            Cell::Filled(existing) => Err(TicTacToeError::Occupied {
                row,
                col,
                mark: existing,
            }),
        }
    }

    /// Copy-on-write version of [`Board::place`].
    pub fn with_move(&self, row: usize, col: usize, mark: Mark) -> Result<Board> {
        let mut next = *self;
        next.place(row, col, mark)?;
        Ok(next)
    }

    /// Snapshot with `mark` written into `(row, col)`. Only called with cells
    /// taken from [`Board::empty_cells`].
    pub(crate) fn child(&self, (row, col): Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[row][col] = Cell::Filled(mark);
        next
    }

    /// True iff some row, column or diagonal is entirely `mark`.
    pub fn is_won(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| self.cells[row][col] == Cell::Filled(mark))
        })
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == Cell::Empty {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// The won flags are tracked by the caller rather than rescanned here.
    pub fn is_terminal(&self, a_won: bool, b_won: bool) -> bool {
        a_won || b_won || self.is_full()
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Parses rows separated by `/` or newlines, e.g. `"XOX/XOO/OX."`.
    /// `.`, `_` and space are empty cells.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(TicTacToeError::MalformedBoard(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != SIZE {
                return Err(TicTacToeError::MalformedBoard(format!(
                    "row {} has {} cells",
                    row,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' | '_' | ' ' => Cell::Empty,
                    other => Cell::Filled(Mark::try_from(other)?),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "-------------")?;
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => " ",
                    Cell::Filled(Mark::X) => "X",
                    Cell::Filled(Mark::O) => "O",
                };
                write!(f, "| {} ", symbol)?;
            }
            writeln!(f, "|")?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}
