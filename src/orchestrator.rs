//! Game flow coordination and the engine's outward-facing surface.
//!
//! The [`Orchestrator`] owns the [`GameState`] and is the only thing that commits
//! moves to it. A front end drives it with plain squares and receives plain
//! answers:
//!
//! - [`new_game`](Orchestrator::new_game) / [`undo`](Orchestrator::undo)
//! - [`attempt_move`](Orchestrator::attempt_move) and the two-click
//!   [`select_square`](Orchestrator::select_square)
//! - [`query_check_status`](Orchestrator::query_check_status)
//! - [`set_difficulty`](Orchestrator::set_difficulty)
//! - [`request_automated_move`](Orchestrator::request_automated_move) and the
//!   timer hook [`tick`](Orchestrator::tick)
//!
//! Visual and audio feedback goes out through the [`Renderer`] trait.
//!
//! # Example Flow
//!
//! ```text
//! [attempt_move] -> [GameState::try_move] -> [Cue::Move / Cue::Capture]
//!   -> [check status of the side now to move] -> [Cue::Check] -> [announce result]
//!   -> [schedule automated reply] ... [tick(now)] -> [request_automated_move]
//! ```
//!
//! # Deferred Reply
//!
//! The automated side never answers inside `attempt_move`. A reply deadline is
//! recorded instead and the front end's own timer or event loop calls
//! [`tick`](Orchestrator::tick); nothing here sleeps or blocks.

use web_time::Instant;

use crate::agent::ai::{Difficulty, GreedyPlayer};
use crate::agent::player::{GameResult, Player};
use crate::config::GameConfig;
use crate::error::{MoveError, MoveResult};
use crate::game_repr::{Board, CheckStatus, Color, GameState, Move, MoveRecord, Square};
use crate::renderer::{Cue, Renderer};

/// Answer to a human move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    /// The destination held an opposing piece before the move
    pub captured: bool,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            captured: false,
        }
    }
}

/// Answer to an automated move request.
///
/// `mv` is `None` when the automated side had nothing to play: no legal move,
/// the game is already over, or it is not its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatedMove {
    pub accepted: bool,
    pub mv: Option<Move>,
}

impl AutomatedMove {
    fn none() -> Self {
        Self {
            accepted: false,
            mv: None,
        }
    }
}

pub struct Orchestrator {
    state: GameState,
    config: GameConfig,
    renderer: Box<dyn Renderer>,

    /// Move source for the automated side; unused in PvP
    bot: GreedyPlayer,

    /// First click of a two-click move
    selected: Option<Square>,

    /// Set once checkmate or stalemate is reached
    game_result: Option<GameResult>,

    /// When the automated side should reply
    pending_reply: Option<Instant>,
}

impl Orchestrator {
    /// Create an orchestrator and start a game in the initial position.
    pub fn new(config: GameConfig, renderer: Box<dyn Renderer>) -> Self {
        let difficulty = config.difficulty().unwrap_or_default();
        let bot = match config.seed {
            Some(seed) => GreedyPlayer::seeded(difficulty, seed),
            None => GreedyPlayer::new(difficulty),
        };

        let mut orchestrator = Self {
            state: GameState::new(),
            config,
            renderer,
            bot,
            selected: None,
            game_result: None,
            pending_reply: None,
        };
        orchestrator.new_game();
        orchestrator
    }

    // ===========================
    // Queries
    // ===========================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.bot.difficulty()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    /// Deadline of the scheduled automated reply, if one is pending
    pub fn pending_reply(&self) -> Option<Instant> {
        self.pending_reply
    }

    /// Check status of `color` on the live board.
    ///
    /// Checkmate and stalemate are the caller's reading of the two flags.
    pub fn query_check_status(&self, color: Color) -> CheckStatus {
        self.state.check_status(color)
    }

    // ===========================
    // Game lifecycle
    // ===========================

    /// Start over from the initial position with White to move.
    pub fn new_game(&mut self) -> Board {
        self.state.reset();
        self.selected = None;
        self.game_result = None;
        self.pending_reply = None;
        log::info!(
            "new game ({:?}, automated side: {:?}, difficulty: {})",
            self.config.mode,
            self.config.automated_color(),
            self.bot.difficulty()
        );

        self.schedule_reply_if_automated();
        self.redraw();
        *self.state.board()
    }

    /// Start over with a new difficulty for the automated side
    pub fn new_game_with(&mut self, difficulty: Difficulty) -> Board {
        self.set_difficulty(difficulty);
        self.new_game()
    }

    /// Change the automated side's difficulty, effective from its next move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.set_difficulty(difficulty);
        self.bot.set_difficulty(difficulty);
        log::debug!("difficulty set to {}", difficulty);
    }

    /// Take back the last move (either side's).
    ///
    /// Returns the restored board, or `None` with nothing changed when there is
    /// no history. A finished game is reopened. Any pending reply is dropped and
    /// rescheduled when the automated side is the one to move again.
    pub fn undo(&mut self) -> Option<Board> {
        let restored = self.state.undo()?;
        self.selected = None;
        self.game_result = None;
        self.pending_reply = None;
        log::info!("undo, {:?} to move", self.state.turn());

        self.schedule_reply_if_automated();
        self.redraw();
        Some(restored)
    }

    // ===========================
    // Human moves
    // ===========================

    /// Try a move for the human side to move.
    ///
    /// Rejected moves leave everything untouched and produce no feedback.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.human_move(Move::new(from, to)) {
            Ok(record) => {
                self.schedule_reply_if_automated();
                self.redraw();
                MoveOutcome {
                    accepted: true,
                    captured: record.captured.is_some(),
                }
            }
            Err(err) => {
                log::debug!("move rejected: {}", err);
                MoveOutcome::rejected()
            }
        }
    }

    /// Two-click input: the first click picks up one of the mover's pieces, the
    /// second one tries to move it there.
    ///
    /// Returns the outcome when a move was attempted. The selection is cleared
    /// after every attempt, legal or not.
    pub fn select_square(&mut self, square: Square) -> Option<MoveOutcome> {
        if let Some(from) = self.selected.take() {
            let outcome = self.attempt_move(from, square);
            if !outcome.accepted {
                self.redraw();
            }
            return Some(outcome);
        }

        let own_piece = self
            .state
            .board()
            .piece_at(square)
            .map_or(false, |p| p.is(self.state.turn()));
        if own_piece && self.game_result.is_none() && !self.is_automated(self.state.turn()) {
            self.selected = Some(square);
            self.redraw();
        }
        None
    }

    fn human_move(&mut self, mv: Move) -> MoveResult<MoveRecord> {
        if self.game_result.is_some() {
            return Err(MoveError::GameOver);
        }

        let turn = self.state.turn();
        if self.is_automated(turn) {
            if let Some(piece) = self.state.board().piece_at(mv.from) {
                return Err(MoveError::NotYourTurn {
                    square: mv.from,
                    owner: piece.color,
                    to_move: turn,
                });
            }
        }

        self.commit(mv)
    }

    // ===========================
    // Automated moves
    // ===========================

    /// Let the automated side play now.
    ///
    /// When it has no legal move the game is finished (checkmate or stalemate,
    /// whichever applies) and `mv` is `None`.
    pub fn request_automated_move(&mut self) -> AutomatedMove {
        self.pending_reply = None;

        if self.game_result.is_some() {
            return AutomatedMove::none();
        }

        let color = self.state.turn();
        if !self.is_automated(color) {
            log::warn!("automated move requested while {:?} (human) is to move", color);
            return AutomatedMove::none();
        }

        let Some(mv) = self.bot.get_move(self.state.board(), color) else {
            let status = self.state.check_status(color);
            let result = GameResult::from_status(color, status).unwrap_or(GameResult::Stalemate);
            self.finish(result);
            return AutomatedMove::none();
        };

        let accepted = match self.commit(mv) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("{} produced a rejected move: {}", self.bot.name(), err);
                false
            }
        };
        self.redraw();

        AutomatedMove {
            accepted,
            mv: Some(mv),
        }
    }

    /// Timer hook: performs the scheduled automated reply once `now` has
    /// reached its deadline.
    pub fn tick(&mut self, now: Instant) -> Option<AutomatedMove> {
        match self.pending_reply {
            Some(due) if now >= due => Some(self.request_automated_move()),
            _ => None,
        }
    }

    // ===========================
    // Internals
    // ===========================

    fn is_automated(&self, color: Color) -> bool {
        self.config.automated_color() == Some(color)
    }

    /// Commit through the game state, then emit feedback and detect the end of
    /// the game for the side now to move.
    fn commit(&mut self, mv: Move) -> MoveResult<MoveRecord> {
        let record = self.state.try_move(mv)?;

        self.renderer.play_cue(if record.captured.is_some() {
            Cue::Capture
        } else {
            Cue::Move
        });

        let to_move = self.state.turn();
        let status = self.state.check_status(to_move);
        if status.in_check {
            log::debug!("{:?} is in check", to_move);
            self.renderer.play_cue(Cue::Check);
        }
        if let Some(result) = GameResult::from_status(to_move, status) {
            self.finish(result);
        }

        Ok(record)
    }

    fn finish(&mut self, result: GameResult) {
        log::info!("game over: {:?}", result);
        self.game_result = Some(result);
        self.pending_reply = None;
        self.bot.game_ended(result);
        self.renderer.announce(result);
    }

    fn schedule_reply_if_automated(&mut self) {
        if self.game_result.is_none() && self.is_automated(self.state.turn()) {
            self.pending_reply = Some(Instant::now() + self.config.reply_delay);
        }
    }

    fn redraw(&mut self) {
        self.renderer
            .draw_board(self.state.board(), self.selected, self.state.turn());
    }
}
