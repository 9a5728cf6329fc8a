//! A line-mode terminal front-end for Versi. Humans enter moves in "A4"
//! notation; either side can be handed to the automated player.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::str::FromStr;
use versi_engine::{Game, GameConfig, Location, Player, DEFAULT_EDGE_LENGTH};
use versi_player::choose_move;

#[derive(Debug, Parser)]
#[command(about = "Play Versi in the terminal")]
struct Opts {
    /// Number of cells on one edge of the board.
    #[arg(long, default_value_t = DEFAULT_EDGE_LENGTH)]
    size: usize,

    /// Let the computer play the first side.
    #[arg(long)]
    ai_one: bool,

    /// Let the computer play the second side.
    #[arg(long)]
    ai_two: bool,

    /// Seed for the automated players' tie-breaking.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    if opts.size < 4 || opts.size > 26 {
        eprintln!("board size must be between 4 and 26");
        std::process::exit(1);
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(GameConfig {
        edge_length: opts.size,
        ..GameConfig::default()
    });

    while let Some(player) = game.active_player() {
        println!("\n{}\n", game);

        let automated = match player {
            Player::One => opts.ai_one,
            Player::Two => opts.ai_two,
        };

        let target = if automated {
            let mv = choose_move(&mut rng, &game, player);
            println!("{} plays {}", game.symbol(player), mv);
            mv
        } else {
            match prompt(&game, player)? {
                Some(loc) => loc,
                None => return Ok(()),
            }
        };

        if game.apply_move(target).is_err() {
            println!("Invalid move");
        }
    }

    // The final board, score line, and win/tie message.
    println!("\n{}", game);
    Ok(())
}

/// Ask the human for a legal move; None means they quit.
fn prompt(game: &Game, player: Player) -> io::Result<Option<Location>> {
    loop {
        print!("{} to move (e.g. D3, or q to quit): ", game.symbol(player));
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match Location::from_str(line) {
            Ok(loc) if game.grid().is_legal_move(player, loc) => return Ok(Some(loc)),
            Ok(_) => println!("Invalid move"),
            Err(_) => println!("Cannot parse move."),
        }
    }
}
