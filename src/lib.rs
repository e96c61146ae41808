pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod minimax;

pub use board::{Board, Cell, Mark, Move};
pub use error::{Result, TicTacToeError};
pub use game::{Game, Outcome};
pub use minimax::{best_moves, evaluate, Value};
