//! Headless demo: an Easy sparring partner plays White through the human
//! entry points while the engine answers as Black.
//!
//! Usage: `greedy_chess [easy|medium|hard] [max-plies]`
//! Set `RUST_LOG=debug` to trace every move.

use std::process::ExitCode;

use greedy_chess::agent::{Difficulty, GreedyPlayer, Player};
use greedy_chess::game_repr::Color;
use greedy_chess::renderer::TextRenderer;
use greedy_chess::{GameConfig, Orchestrator};
use web_time::{Duration, Instant};

const DEFAULT_MAX_PLIES: usize = 200;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next().map(|s| s.parse::<Difficulty>()) {
        None => Difficulty::default(),
        Some(Ok(d)) => d,
        Some(Err(err)) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let max_plies = match args.next().map(|s| s.parse::<usize>()) {
        None => DEFAULT_MAX_PLIES,
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            eprintln!("invalid ply count: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = GameConfig::pvai(Color::White, difficulty).with_reply_delay(Duration::ZERO);
    let mut game = Orchestrator::new(config, Box::new(TextRenderer::stdout()));
    let mut sparring = GreedyPlayer::new(Difficulty::Easy);

    let mut plies = 0;
    while game.game_result().is_none() && plies < max_plies {
        let Some(mv) = sparring.get_move(game.board(), Color::White) else {
            break;
        };
        let outcome = game.attempt_move(mv.from, mv.to);
        if !outcome.accepted {
            log::error!("sparring move {} was rejected", mv);
            return ExitCode::FAILURE;
        }
        plies += 1;

        if let Some(reply) = game.tick(Instant::now()) {
            if reply.accepted {
                plies += 1;
            }
        }
    }

    match game.game_result() {
        Some(result) => log::info!("finished after {} plies: {:?}", plies, result),
        None => log::info!("stopped after {} plies without a result", plies),
    }
    ExitCode::SUCCESS
}
