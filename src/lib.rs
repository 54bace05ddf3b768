//! Two-player chess rules engine with a difficulty-tiered automated opponent.
//!
//! - [`game_repr`]: board, per-piece legality, check and no-legal-move
//!   detection, move execution with undo history
//! - [`agent`]: material evaluation and the automated move selector
//! - [`orchestrator`]: the surface a front end drives, with deferred replies
//! - [`renderer`]: the trait through which feedback leaves the engine

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
pub mod renderer;

pub use config::GameConfig;
pub use error::MoveError;
pub use orchestrator::{AutomatedMove, MoveOutcome, Orchestrator};
