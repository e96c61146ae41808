use std::ops::Neg;

use log::{debug, info};

use crate::board::{Board, Mark, Move};
use crate::error::{Result, TicTacToeError};

/// Game-theoretic value of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Lost,
    Drawn,
    Won,
}

impl Value {
    pub fn as_i8(self) -> i8 {
        match self {
            Value::Lost => -1,
            Value::Drawn => 0,
            Value::Won => 1,
        }
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Lost => Value::Won,
            Value::Drawn => Value::Drawn,
            Value::Won => Value::Lost,
        }
    }
}

/// Exhaustive minimax: the value of `board` for `to_move` when both sides
/// play perfectly from here on.
pub fn evaluate(board: &Board, to_move: Mark) -> Value {
    if board.is_won(to_move) {
        return Value::Won;
    }
    if board.is_won(to_move.opponent()) {
        return Value::Lost;
    }

    // Not full here, so there is at least one candidate.
    board
        .empty_cells()
        .into_iter()
        .map(|mv| -evaluate(&board.child(mv, to_move), to_move.opponent()))
        .max()
        .unwrap_or(Value::Drawn)
}

/// Every move for `mark` that reaches the best value, in row-major order.
///
/// Fails with [`TicTacToeError::BoardFull`] when no cell is left.
pub fn best_moves(board: &Board, mark: Mark) -> Result<Vec<Move>> {
    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return Err(TicTacToeError::BoardFull);
    }

    let mut best_value = Value::Lost;
    let mut best = Vec::new();
    for mv in candidates {
        let value = -evaluate(&board.child(mv, mark), mark.opponent());
        debug!("{} at {:?} is {:?}", mark, mv, value);

        if best.is_empty() || value > best_value {
            best_value = value;
            best = vec![mv];
        } else if value == best_value {
            best.push(mv);
        }
    }

    info!("best moves for {}: {:?} ({:?})", mark, best, best_value);
    Ok(best)
}
