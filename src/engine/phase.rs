//! Round phase derived from the game state.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Where a round stands.
///
/// `Idle` and `GuessMode` toggle back and forth; `Won` and `Lost` are
/// terminal until the round is reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    GuessMode,
    Won,
    Lost,
}

impl GamePhase {
    /// Read the phase off a state. Terminal flags take precedence.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.win_state {
            GamePhase::Won
        } else if state.loss_state {
            GamePhase::Lost
        } else if state.is_guess_mode {
            GamePhase::GuessMode
        } else {
            GamePhase::Idle
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}
