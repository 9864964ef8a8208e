//! Puzzle engine: the phrase-reveal state machine.
//!
//! A [`PuzzleSession`] owns one [`GameState`](crate::core::GameState) and
//! exposes every player operation:
//!
//! - Guess mode: `toggle_guess_mode`, `fill_active_box`, `delete_active_box`,
//!   `submit_guess`
//! - Purchases: `guess_letter`, `request_purchase`,
//!   `confirm_pending_purchase`, `cancel_pending_purchase`
//! - Lifecycle: `reset_game`, `start_round`
//!
//! Outcomes are reported through the session's notice queue rather than
//! return values.
//!
//! ## Example
//!
//! ```
//! use phrase_puzzle::core::Notice;
//! use phrase_puzzle::engine::{GamePhase, SessionBuilder};
//!
//! let mut session = SessionBuilder::new("cat").seed(42).build().unwrap();
//!
//! session.guess_letter('c');
//! session.guess_letter('a');
//! session.guess_letter('t');
//!
//! assert_eq!(session.phase(), GamePhase::Won);
//! assert!(matches!(session.drain_notices().as_slice(), [Notice::Won { streak: 1, .. }]));
//! ```

mod session;
mod guess_mode;
mod purchase;
mod phase;

pub use phase::GamePhase;
pub use session::{PuzzleSession, SessionBuilder};
