//! Letter pricing table and the economy view used by the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, EngineConfig};

/// Default frequency tiers. Common letters reveal more, so they cost more.
const DEFAULT_TIERS: [(&str, Currency); 4] = [
    ("etaoin", 100),
    ("shrdlucm", 70),
    ("wfgypb", 50),
    ("vkjxqz", 30),
];

const DEFAULT_FALLBACK: Currency = 100;

/// Cost of revealing each letter.
///
/// Lookup is ASCII case-insensitive. Characters missing from the table
/// cost `fallback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterPricing {
    costs: FxHashMap<char, Currency>,
    fallback: Currency,
}

impl Default for LetterPricing {
    fn default() -> Self {
        let mut costs = FxHashMap::default();
        for (letters, cost) in DEFAULT_TIERS {
            for letter in letters.chars() {
                costs.insert(letter, cost);
            }
        }

        Self {
            costs,
            fallback: DEFAULT_FALLBACK,
        }
    }
}

impl LetterPricing {
    /// Every letter costs the same.
    #[must_use]
    pub fn flat(cost: Currency) -> Self {
        Self {
            costs: FxHashMap::default(),
            fallback: cost,
        }
    }

    /// Override the cost of one letter.
    #[must_use]
    pub fn with_cost(mut self, letter: char, cost: Currency) -> Self {
        self.costs.insert(letter.to_ascii_lowercase(), cost);
        self
    }

    /// Set the cost for letters not in the table.
    #[must_use]
    pub fn with_fallback(mut self, cost: Currency) -> Self {
        self.fallback = cost;
        self
    }

    /// Cost of revealing `letter`.
    #[must_use]
    pub fn cost(&self, letter: char) -> Currency {
        self.costs
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.fallback)
    }
}

/// Read-only economy rules over an [`EngineConfig`].
///
/// Pure: every answer depends only on the configuration and its arguments.
#[derive(Clone, Copy, Debug)]
pub struct Economy<'a> {
    config: &'a EngineConfig,
}

impl<'a> Economy<'a> {
    #[must_use]
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Cost of revealing `letter`.
    #[must_use]
    pub fn letter_cost(&self, letter: char) -> Currency {
        self.config.pricing.cost(letter)
    }

    /// Price of one extra guess.
    #[must_use]
    pub fn guess_price(&self) -> Currency {
        self.config.guess_price
    }

    /// Price of one hint.
    #[must_use]
    pub fn hint_price(&self) -> Currency {
        self.config.hint_price
    }

    /// Can `bankroll` cover `cost`?
    #[must_use]
    pub fn can_afford(&self, bankroll: Currency, cost: Currency) -> bool {
        bankroll >= cost
    }

    /// Is `bankroll` too small to keep playing without guesses?
    #[must_use]
    pub fn is_below_threshold(&self, bankroll: Currency) -> bool {
        bankroll < self.config.continuation_threshold
    }
}
