//! Economy & pricing.
//!
//! A leaf component with no side effects: it answers what an action costs
//! and whether a bankroll can cover it. The engine performs the deduction.
//!
//! ## Example
//!
//! ```
//! use phrase_puzzle::core::EngineConfig;
//! use phrase_puzzle::economy::{Economy, LetterPricing};
//!
//! let config = EngineConfig::default()
//!     .with_pricing(LetterPricing::flat(25).with_cost('e', 90));
//! let economy = Economy::new(&config);
//!
//! assert_eq!(economy.letter_cost('e'), 90);
//! assert_eq!(economy.letter_cost('b'), 25);
//! assert!(economy.can_afford(100, economy.hint_price() - 50));
//! ```

mod pricing;

pub use pricing::{Economy, LetterPricing};
