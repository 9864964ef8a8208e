//! Game state: the single mutable aggregate of a puzzle session.
//!
//! ## GameState
//!
//! - Phrase and category (fixed for the round)
//! - Reveal progress: guessed letters, locked positions
//! - Resources: bankroll, guesses
//! - Guess-mode scratch buffer and cursor
//! - Terminal flags and streak counters
//! - The purchase awaiting confirmation
//!
//! Uses `im` persistent collections so a caller can clone a snapshot for
//! rendering in O(1) while the engine keeps mutating its own copy.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::notice::PendingPurchase;
use super::puzzle::{Currency, Phrase, Puzzle, PLACEHOLDER, SPACE};

/// Complete state of one puzzle session.
///
/// ## Invariants
///
/// - `correct_positions.len() == current_input.len() == phrase.len()`
/// - `correct_positions[i] == Some(c)` only if `phrase[i] == c`
/// - `active_box_index` is `None` whenever `is_guess_mode` is false
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Puzzle ===
    /// The hidden phrase.
    pub phrase: Phrase,

    /// Display category, opaque to the engine.
    pub category: String,

    // === Reveal Progress ===
    /// Letters ever purchased or hint-revealed.
    pub guessed_letters: OrdSet<char>,

    /// Revealed character per position, `None` while hidden.
    pub correct_positions: Vector<Option<char>>,

    // === Resources ===
    pub bankroll: Currency,

    /// Guesses remaining.
    pub guesses: u32,

    // === Guess Mode ===
    /// Scratch buffer; `PLACEHOLDER` marks unfilled positions.
    pub current_input: Vector<char>,

    /// Cursor into `current_input`.
    pub active_box_index: Option<usize>,

    pub is_guess_mode: bool,

    // === Outcome ===
    pub win_state: bool,
    pub loss_state: bool,

    /// Wins since the session started. Survives resets.
    pub current_cash_streak: u32,

    /// Largest bankroll held at any win. Survives resets.
    pub highest_cash_streak: Currency,

    // === Purchases ===
    /// Guess or hint purchase awaiting confirmation.
    pub pending_purchase: Option<PendingPurchase>,
}

impl GameState {
    /// Create the initial state for a puzzle.
    #[must_use]
    pub fn new(puzzle: Puzzle, config: &EngineConfig) -> Self {
        let len = puzzle.phrase.len();
        let mut state = Self {
            phrase: puzzle.phrase,
            category: puzzle.category,
            guessed_letters: OrdSet::new(),
            correct_positions: Vector::from(vec![None; len]),
            bankroll: config.initial_bankroll,
            guesses: config.initial_guesses,
            current_input: Vector::new(),
            active_box_index: None,
            is_guess_mode: false,
            win_state: false,
            loss_state: false,
            current_cash_streak: 0,
            highest_cash_streak: 0,
            pending_purchase: None,
        };
        state.current_input = state.rebuild_input();
        state
    }

    /// Restore every per-round field to its initial value.
    ///
    /// Phrase, category and streak counters are left alone.
    pub fn reset(&mut self, config: &EngineConfig) {
        self.guessed_letters = OrdSet::new();
        self.correct_positions = Vector::from(vec![None; self.phrase.len()]);
        self.bankroll = config.initial_bankroll;
        self.guesses = config.initial_guesses;
        self.active_box_index = None;
        self.is_guess_mode = false;
        self.win_state = false;
        self.loss_state = false;
        self.pending_purchase = None;
        self.current_input = self.rebuild_input();
    }

    /// Swap in a new puzzle and reset the round.
    pub fn install_puzzle(&mut self, puzzle: Puzzle, config: &EngineConfig) {
        self.phrase = puzzle.phrase;
        self.category = puzzle.category;
        self.reset(config);
    }

    // === Queries ===

    /// Has position `index` been revealed?
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        matches!(self.correct_positions.get(index), Some(Some(_)))
    }

    /// Is every non-space position revealed?
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.phrase
            .chars()
            .iter()
            .enumerate()
            .all(|(i, &c)| c == SPACE || self.correct_positions.get(i) == Some(&Some(c)))
    }

    /// Has the round ended in a win or a loss?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.win_state || self.loss_state
    }

    /// Build a guess-mode buffer from the current reveals.
    ///
    /// Spaces and locked positions pass through, everything else becomes
    /// `PLACEHOLDER`.
    #[must_use]
    pub fn rebuild_input(&self) -> Vector<char> {
        self.phrase
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &c)| match self.correct_positions.get(i) {
                Some(Some(locked)) => *locked,
                _ if c == SPACE => SPACE,
                _ => PLACEHOLDER,
            })
            .collect()
    }

    /// Does the guess-mode buffer spell the phrase exactly?
    #[must_use]
    pub fn input_matches_phrase(&self) -> bool {
        self.current_input.len() == self.phrase.len()
            && self.current_input.iter().zip(self.phrase.chars()).all(|(a, b)| a == b)
    }

    /// Index of the first placeholder in the guess-mode buffer.
    #[must_use]
    pub fn first_placeholder(&self) -> Option<usize> {
        self.current_input.index_of(&PLACEHOLDER)
    }

    /// The guess-mode buffer as a string.
    #[must_use]
    pub fn input_string(&self) -> String {
        self.current_input.iter().collect()
    }

    /// The board as the player sees it outside guess mode.
    #[must_use]
    pub fn revealed_string(&self) -> String {
        self.rebuild_input().iter().collect()
    }

    /// Bankroll formatted for display, e.g. `$1000.00`.
    #[must_use]
    pub fn formatted_bankroll(&self) -> String {
        format!("${}.00", self.bankroll)
    }

    // === Mutation Helpers ===

    /// Lock every position holding `letter`.
    ///
    /// Returns how many positions were newly locked.
    pub fn lock_letter(&mut self, letter: char) -> usize {
        let mut newly_locked = 0;
        for i in self.phrase.positions_of(letter) {
            if self.correct_positions.set(i, Some(letter)).is_none() {
                newly_locked += 1;
            }
        }
        newly_locked
    }
}
