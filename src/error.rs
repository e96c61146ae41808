use thiserror::Error;

use crate::board::Mark;

/// Errors raised by the board model and the search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Invalid mark {0:?}, must be either X or O")]
    InvalidMark(char),

    #[error("Cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) already has a {mark} on it")]
    Occupied { row: usize, col: usize, mark: Mark },

    #[error("Board is full, there is no move to make")]
    BoardFull,

    #[error("Malformed board: {0}")]
    MalformedBoard(String),
}

pub type Result<T> = std::result::Result<T, TicTacToeError>;
