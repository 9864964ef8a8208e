//! # phrase-puzzle
//!
//! A single-player phrase-guessing puzzle engine with a bankroll economy.
//!
//! Players spend a bankroll to reveal letters, buy extra guesses or random
//! hints, and must reconstruct the hidden phrase before running out of both
//! guesses and money.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session State**: One `GameState` per session, owned by a
//!    `PuzzleSession`. No process-wide store.
//!
//! 2. **Notices, Not Dialogs**: Operations queue `Notice` values (win, loss,
//!    insufficient funds or guesses); the caller decides how to present them.
//!
//! 3. **Injectable Randomness**: Hint selection draws from a `RandomSource`,
//!    seedable for deterministic tests.
//!
//! 4. **Configuration Over Constants**: Prices, thresholds and starting
//!    resources come from `EngineConfig`.
//!
//! ## Modules
//!
//! - `core`: Puzzle, state, configuration, notices, actions, RNG, errors
//! - `economy`: Letter pricing and affordability checks
//! - `engine`: The puzzle state machine

pub mod core;
pub mod economy;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Currency, Phrase, Puzzle, PLACEHOLDER,
    SessionError, SessionResult,
    GameRng, GameRngState, RandomSource,
    EngineConfig,
    Notice, NoticeQueue, PendingPurchase, PurchaseKind,
    PlayerAction,
    GameState,
};

pub use crate::economy::{Economy, LetterPricing};

pub use crate::engine::{GamePhase, PuzzleSession, SessionBuilder};
