//! The computer never loses, and two perfect players always draw.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tictactoe::{best_moves, Board, Game, Mark, Outcome};

/// Plays one game where `random` moves uniformly at random and the other
/// side plays `best_moves`, returning the final game.
fn play_against_random(seed: u64, random: Mark, first: Mark) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut to_move = first;

    while !game.is_over() {
        let moves = if to_move == random {
            game.board().empty_cells()
        } else {
            best_moves(game.board(), to_move).unwrap()
        };
        let mv = *moves.choose(&mut rng).unwrap();
        game.apply(mv, to_move).unwrap();
        to_move = to_move.opponent();
    }
    game
}

#[test]
fn test_computer_never_loses_moving_second() {
    for seed in 0..30 {
        let game = play_against_random(seed, Game::HUMAN, Game::HUMAN);
        assert_ne!(
            game.outcome(),
            Some(Outcome::HumanWon),
            "seed {}:\n{}",
            seed,
            game.board()
        );
    }
}

#[test]
fn test_computer_never_loses_moving_first() {
    for seed in 0..10 {
        let game = play_against_random(seed, Game::HUMAN, Game::COMPUTER);
        assert_ne!(
            game.outcome(),
            Some(Outcome::HumanWon),
            "seed {}:\n{}",
            seed,
            game.board()
        );
    }
}

#[test]
fn test_self_play_draws() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..3 {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        let mut x_won = false;
        let mut o_won = false;

        while !board.is_terminal(x_won, o_won) {
            let moves = best_moves(&board, to_move).unwrap();
            let &(row, col) = moves.choose(&mut rng).unwrap();
            board.place(row, col, to_move).unwrap();
            x_won = board.is_won(Mark::X);
            o_won = board.is_won(Mark::O);
            to_move = to_move.opponent();
        }

        assert!(!x_won && !o_won, "perfect play ended in a win:\n{}", board);
        assert!(board.is_full());
    }
}
