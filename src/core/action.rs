//! Player actions as data.
//!
//! Every caller-visible engine operation has a [`PlayerAction`] variant, so a
//! frontend can queue input events or replay a recorded session without
//! binding to individual method names.
//!
//! ```
//! use phrase_puzzle::core::{PendingPurchase, PlayerAction};
//!
//! let script = vec![
//!     PlayerAction::GuessLetter('e'),
//!     PlayerAction::RequestPurchase(PendingPurchase::Hint),
//!     PlayerAction::ConfirmPendingPurchase,
//! ];
//! assert_eq!(script[1].to_string(), "RequestPurchase(Hint)");
//! ```

use serde::{Deserialize, Serialize};

use super::notice::PendingPurchase;

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Enter or leave guess mode.
    ToggleGuessMode,
    /// Type a letter into the active box.
    FillActiveBox(char),
    /// Clear the active box and step back.
    DeleteActiveBox,
    /// Submit the guess-mode buffer.
    SubmitGuess,
    /// Buy a letter.
    GuessLetter(char),
    /// Stage a guess or hint purchase for confirmation.
    RequestPurchase(PendingPurchase),
    /// Execute the staged purchase.
    ConfirmPendingPurchase,
    /// Drop the staged purchase without charging.
    CancelPendingPurchase,
    /// Restart the round with the same phrase.
    ResetGame,
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::ToggleGuessMode => write!(f, "ToggleGuessMode"),
            PlayerAction::FillActiveBox(c) => write!(f, "FillActiveBox({c})"),
            PlayerAction::DeleteActiveBox => write!(f, "DeleteActiveBox"),
            PlayerAction::SubmitGuess => write!(f, "SubmitGuess"),
            PlayerAction::GuessLetter(c) => write!(f, "GuessLetter({c})"),
            PlayerAction::RequestPurchase(kind) => write!(f, "RequestPurchase({kind:?})"),
            PlayerAction::ConfirmPendingPurchase => write!(f, "ConfirmPendingPurchase"),
            PlayerAction::CancelPendingPurchase => write!(f, "CancelPendingPurchase"),
            PlayerAction::ResetGame => write!(f, "ResetGame"),
        }
    }
}
