use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use log::trace;
use thiserror::Error;

use crate::board::{Board, Cell, Mark, Move, SIZE};

/// Rejected console input. All of these are recoverable: the prompt repeats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("You have entered {0} commands. Number of commands must be exactly two. Please try again.")]
    WrongCount(usize),

    #[error("Please enter commands as integers.")]
    NotInteger,

    #[error("Commands must both be either 0, 1 or 2. Please enter them again.")]
    OutOfRange,

    #[error("This square already has a {0} on it! Try again.")]
    Occupied(Mark),
}

/// Parses `"<row> <col>"` against the current board.
pub fn parse_move(line: &str, board: &Board) -> Result<Move, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(InputError::WrongCount(parts.len()));
    }

    let row: i64 = parts[0].parse().map_err(|_| InputError::NotInteger)?;
    let col: i64 = parts[1].parse().map_err(|_| InputError::NotInteger)?;

    // Each coordinate is checked on its own.
    let in_range = |n: i64| (0..SIZE as i64).contains(&n);
    if !in_range(row) || !in_range(col) {
        return Err(InputError::OutOfRange);
    }

    let (row, col) = (row as usize, col as usize);
    match board.get(row, col) {
        Ok(Cell::Empty) => Ok((row, col)),
        Ok(Cell::Filled(mark)) => Err(InputError::Occupied(mark)),
        Err(_) => Err(InputError::OutOfRange),
    }
}

/// Prompts until a valid move is entered. Fails only when input runs out.
pub fn read_move<R: BufRead, W: Write>(board: &Board, input: &mut R, output: &mut W) -> Result<Move> {
    loop {
        writeln!(output, "Please enter two integers separated by a space:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before a move was entered");
        }

        match parse_move(&line, board) {
            Ok(mv) => return Ok(mv),
            Err(e) => {
                trace!("rejected input {:?}: {:?}", line.trim_end(), e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        let board = Board::new();
        assert_eq!(parse_move("1 2", &board), Ok((1, 2)));
        assert_eq!(parse_move("  0    0 \n", &board), Ok((0, 0)));
    }

    #[test]
    fn test_wrong_count() {
        let board = Board::new();
        assert_eq!(parse_move("", &board), Err(InputError::WrongCount(0)));
        assert_eq!(parse_move("1", &board), Err(InputError::WrongCount(1)));
        assert_eq!(parse_move("1 2 0", &board), Err(InputError::WrongCount(3)));
    }

    #[test]
    fn test_not_integer() {
        let board = Board::new();
        assert_eq!(parse_move("a 1", &board), Err(InputError::NotInteger));
        assert_eq!(parse_move("1 1.5", &board), Err(InputError::NotInteger));
    }

    #[test]
    fn test_both_coordinates_range_checked() {
        let board = Board::new();
        assert_eq!(parse_move("0 3", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_move("3 0", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_move("1 -1", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_move("-1 1", &board), Err(InputError::OutOfRange));
    }

    #[test]
    fn test_occupied() {
        let board: Board = "..O/.X./...".parse().unwrap();
        assert_eq!(parse_move("1 1", &board), Err(InputError::Occupied(Mark::X)));
        assert_eq!(parse_move("0 2", &board), Err(InputError::Occupied(Mark::O)));
    }

    #[test]
    fn test_read_move_retries() {
        let board: Board = ".../.X./...".parse().unwrap();
        let mut input = Cursor::new("hello\n1 1\n2 9\n2 0\n");
        let mut output = Vec::new();

        let mv = read_move(&board, &mut input, &mut output).unwrap();
        assert_eq!(mv, (2, 0));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter two integers").count(), 4);
        assert!(text.contains("You have entered 1 commands."));
        assert!(text.contains("This square already has a X on it!"));
        assert!(text.contains("Commands must both be either 0, 1 or 2."));
    }

    #[test]
    fn test_read_move_eof() {
        let board = Board::new();
        let mut input = Cursor::new("1 x\n");
        let mut output = Vec::new();
        assert!(read_move(&board, &mut input, &mut output).is_err());
    }
}
