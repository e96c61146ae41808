use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Mark, Move};
use crate::console::read_move;
use crate::minimax::best_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWon,
    ComputerWon,
    Draw,
}

/// Human versus computer. The human plays X, the computer plays O.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    x_won: bool,
    o_won: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub const HUMAN: Mark = Mark::X;
    pub const COMPUTER: Mark = Mark::O;

    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_won: false,
            o_won: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn has_won(&self, mark: Mark) -> bool {
        match mark {
            Mark::X => self.x_won,
            Mark::O => self.o_won,
        }
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal(self.x_won, self.o_won)
    }

    /// Places `mark` and refreshes that mark's won flag.
    pub fn apply(&mut self, (row, col): Move, mark: Mark) -> Result<()> {
        self.board.place(row, col, mark)?;
        if self.board.is_won(mark) {
            match mark {
                Mark::X => self.x_won = true,
                Mark::O => self.o_won = true,
            }
        }
        debug!("{} played ({}, {})", mark, row, col);
        Ok(())
    }

    /// Picks uniformly among the computer's optimal moves.
    pub fn computer_move<G: Rng>(&self, rng: &mut G) -> Result<Move> {
        let moves = best_moves(&self.board, Self::COMPUTER)?;
        let mv = moves
            .choose(rng)
            .copied()
            .context("Search returned no moves")?;
        Ok(mv)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_won(Self::HUMAN) {
            Some(Outcome::HumanWon)
        } else if self.has_won(Self::COMPUTER) {
            Some(Outcome::ComputerWon)
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Runs turns until the game ends, prompting the human on `input`/`output`.
    pub fn play<R, W, G>(
        &mut self,
        input: &mut R,
        output: &mut W,
        rng: &mut G,
        computer_first: bool,
    ) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        let mut to_move = if computer_first {
            Self::COMPUTER
        } else {
            Self::HUMAN
        };

        while !self.is_over() {
            let mv = if to_move == Self::HUMAN {
                write!(output, "{}", self.board)?;
                read_move(&self.board, input, output)?
            } else {
                self.computer_move(rng)?
            };
            self.apply(mv, to_move)?;
            to_move = to_move.opponent();
        }

        write!(output, "{}", self.board)?;
        writeln!(output, "Game is over!")?;

        let outcome = self.outcome().context("Game ended without an outcome")?;
        match outcome {
            Outcome::HumanWon => writeln!(output, "Player has won")?,
            Outcome::ComputerWon => writeln!(output, "Computer has won!")?,
            Outcome::Draw => writeln!(output, "It's a draw")?,
        }
        info!("game finished: {:?}", outcome);
        Ok(outcome)
    }
}
