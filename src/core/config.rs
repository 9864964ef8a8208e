//! Engine configuration.
//!
//! Every tunable the engine consults lives here:
//! - `pricing`: per-letter reveal costs
//! - `guess_price` / `hint_price`: fixed purchase prices
//! - `continuation_threshold`: minimum bankroll to keep playing with no guesses
//! - `initial_bankroll` / `initial_guesses`: values restored on reset
//!
//! The engine never hardcodes these - callers override what they need.

use serde::{Deserialize, Serialize};

use super::error::{SessionError, SessionResult};
use super::puzzle::Currency;
use crate::economy::LetterPricing;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Letter reveal costs.
    pub pricing: LetterPricing,

    /// Price of one extra guess (default: 150).
    pub guess_price: Currency,

    /// Price of one random letter hint (default: 150).
    pub hint_price: Currency,

    /// With zero guesses left, a bankroll below this loses (default: 30).
    pub continuation_threshold: Currency,

    /// Bankroll at session start and after reset (default: 1000).
    pub initial_bankroll: Currency,

    /// Guesses at session start and after reset (default: 2).
    pub initial_guesses: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pricing: LetterPricing::default(),
            guess_price: 150,
            hint_price: 150,
            continuation_threshold: 30,
            initial_bankroll: 1000,
            initial_guesses: 2,
        }
    }
}

impl EngineConfig {
    /// Set the letter pricing table.
    #[must_use]
    pub fn with_pricing(mut self, pricing: LetterPricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Set the extra-guess price.
    #[must_use]
    pub fn with_guess_price(mut self, price: Currency) -> Self {
        self.guess_price = price;
        self
    }

    /// Set the hint price.
    #[must_use]
    pub fn with_hint_price(mut self, price: Currency) -> Self {
        self.hint_price = price;
        self
    }

    /// Set the continuation threshold.
    #[must_use]
    pub fn with_continuation_threshold(mut self, threshold: Currency) -> Self {
        self.continuation_threshold = threshold;
        self
    }

    /// Set the starting bankroll.
    #[must_use]
    pub fn with_initial_bankroll(mut self, bankroll: Currency) -> Self {
        self.initial_bankroll = bankroll;
        self
    }

    /// Set the starting guess count.
    #[must_use]
    pub fn with_initial_guesses(mut self, guesses: u32) -> Self {
        self.initial_guesses = guesses;
        self
    }

    /// Reject configurations that would make purchases free.
    pub fn validate(&self) -> SessionResult<()> {
        if self.guess_price == 0 {
            return Err(SessionError::InvalidConfig("guess price must be positive".into()));
        }
        if self.hint_price == 0 {
            return Err(SessionError::InvalidConfig("hint price must be positive".into()));
        }
        Ok(())
    }
}
