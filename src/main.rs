use std::io;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tictactoe::Game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// Seed for choosing between equally good computer moves
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer (O) make the first move
    #[arg(long)]
    computer_first: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting game, seed {:?}", args.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut game = Game::new();
    game.play(&mut input, &mut output, &mut rng, args.computer_first)?;

    Ok(())
}
