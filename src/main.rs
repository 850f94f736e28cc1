//! Wuziqi self-play demo
//!
//! Loads `config.yaml` (defaults when absent), lets the engine play both
//! sides and prints the final board.

use std::process::ExitCode;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wuziqi::config::CONFIG_FILE;
use wuziqi::{random_empty_cell, AIEngine, Config, Game, GameError, GameMode, GameOutcome};

fn main() -> ExitCode {
    let config = match Config::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match self_play(&config) {
        Ok(game) => {
            println!("{}", game.board);
            match &game.outcome {
                Some(GameOutcome::Win { winner, line }) => {
                    println!("{winner:?} wins in {} moves: {line:?}", game.history.len());
                }
                Some(GameOutcome::Draw) => println!("Draw after {} moves", game.history.len()),
                None => println!("Stopped after {} moves", game.history.len()),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("self-play failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn self_play(config: &Config) -> Result<Game, GameError> {
    let engine = AIEngine::with_config(config.engine);
    let mut game = Game::new(config.board_size, GameMode::PvP)?;
    let limit = config.self_play.max_moves.unwrap_or(usize::MAX);
    info!(
        "self-play on {0}x{0}, parallel={1}",
        config.board_size, config.engine.parallel
    );

    if config.self_play.random_opening {
        let mut rng = StdRng::seed_from_u64(config.self_play.seed);
        let pos = random_empty_cell(&game.board, &mut rng).ok_or(GameError::NoMoveAvailable)?;
        info!("random opening at ({}, {})", pos.row, pos.col);
        game.play(pos)?;
    }

    while !game.is_over() && game.history.len() < limit {
        let color = game.current_turn;
        let mv = game.play_ai(&engine)?;
        info!(
            "move {}: {color:?} ({}, {}) score={}",
            game.history.len(),
            mv.pos.row,
            mv.pos.col,
            mv.score
        );
    }
    Ok(game)
}
