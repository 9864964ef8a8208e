//! Core engine types: puzzle, state, configuration, notices, actions, RNG.
//!
//! These are the building blocks the puzzle engine operates on. Callers tune
//! behavior via `EngineConfig` rather than modifying the engine.

pub mod puzzle;
pub mod error;
pub mod rng;
pub mod config;
pub mod notice;
pub mod action;
pub mod state;

pub use puzzle::{Currency, Phrase, Puzzle, PLACEHOLDER, SPACE};
pub use error::{SessionError, SessionResult};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::EngineConfig;
pub use notice::{Notice, NoticeQueue, PendingPurchase, PurchaseKind};
pub use action::PlayerAction;
pub use state::GameState;
