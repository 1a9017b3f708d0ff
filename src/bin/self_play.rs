//! Engine-vs-engine self-play from the standard start position.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white negamax:3 --black greedy`
//!
//! Options: `--white <strategy[:depth]>`, `--black <strategy[:depth]>`,
//! `--max-plies <n>`, `--seed <n>`, `--quiet`. Set `RUST_LOG=debug` to see
//! every engine decision.

use plum_rules::engines::strategy::{run_engine, SearchConfig};
use plum_rules::game_state::chess_types::{Color, Position};
use plum_rules::game_state::outcome::GameOutcome;
use plum_rules::utils::long_algebraic::move_to_long_algebraic;
use plum_rules::utils::render_game_state::render_game_state;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    white: SearchConfig,
    black: SearchConfig,
    max_plies: u16,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        white: SearchConfig::default(),
        black: SearchConfig::default(),
        max_plies: 200,
        quiet: false,
    };
    let mut seed = None;

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--white" => args.white = value()?.parse().map_err(|e| format!("--white: {e}"))?,
            "--black" => args.black = value()?.parse().map_err(|e| format!("--black: {e}"))?,
            "--max-plies" => {
                args.max_plies = value()?
                    .parse()
                    .map_err(|e| format!("--max-plies: {e}"))?
            }
            "--seed" => seed = Some(value()?.parse::<u64>().map_err(|e| format!("--seed: {e}"))?),
            "--quiet" | "-q" => args.quiet = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    if let Some(seed) = seed {
        args.white = args.white.with_seed(seed);
        args.black = args.black.with_seed(seed.wrapping_add(1));
    }
    Ok(args)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    let mut white = args.white.build_engine();
    let mut black = args.black.build_engine();
    info!(
        white = %args.white.strategy,
        white_depth = args.white.depth,
        black = %args.black.strategy,
        black_depth = args.black.depth,
        max_plies = args.max_plies,
        "starting self-play"
    );

    let mut position = Position::new_game();
    let mut played = Vec::new();
    let mut outcome = GameOutcome::Ongoing;

    for _ in 0..args.max_plies {
        let (legal_moves, status) = position
            .legal_moves_with_outcome()
            .map_err(|e| e.to_string())?;
        outcome = status;
        if outcome.is_terminal() {
            break;
        }

        let side = position.side_to_move();
        let engine = match side {
            Color::Light => white.as_mut(),
            Color::Dark => black.as_mut(),
        };
        let out = run_engine(engine, &mut position, &legal_moves).map_err(|e| e.to_string())?;
        let mv = out.best_move.ok_or("engine returned no move")?;

        played.push(move_to_long_algebraic(&mv));
        position.apply_move(&mv).map_err(|e| e.to_string())?;
        if !args.quiet {
            println!("{} {side}: {}", position.ply_count(), played[played.len() - 1]);
        }
    }

    if !outcome.is_terminal() {
        outcome = position
            .legal_moves_with_outcome()
            .map_err(|e| e.to_string())?
            .1;
    }

    println!("{}", render_game_state(&position));
    println!("fen: {}", position.get_fen());
    println!("moves: {}", played.join(" "));
    match outcome {
        GameOutcome::Checkmate => {
            println!("result: checkmate, {} wins", position.side_to_move().opposite())
        }
        GameOutcome::Stalemate => println!("result: stalemate"),
        GameOutcome::Check | GameOutcome::Ongoing => {
            println!("result: unfinished after {} plies", position.ply_count())
        }
    }
    Ok(())
}
