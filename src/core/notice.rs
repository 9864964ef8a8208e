//! Notices: discrete user-facing events emitted by engine operations.
//!
//! The engine never presents anything itself. Operations push notices onto
//! a [`NoticeQueue`] and the caller drains it and decides how to show them
//! (alert, toast, log line, ...).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::puzzle::Currency;

/// A purchase awaiting caller confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingPurchase {
    /// One extra guess.
    Guess,
    /// One random letter reveal.
    Hint,
}

/// What the player tried to buy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseKind {
    Letter(char),
    Guess,
    Hint,
}

impl From<PendingPurchase> for PurchaseKind {
    fn from(pending: PendingPurchase) -> Self {
        match pending {
            PendingPurchase::Guess => PurchaseKind::Guess,
            PendingPurchase::Hint => PurchaseKind::Hint,
        }
    }
}

impl std::fmt::Display for PurchaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseKind::Letter(letter) => write!(f, "the letter '{letter}'"),
            PurchaseKind::Guess => write!(f, "a guess"),
            PurchaseKind::Hint => write!(f, "a hint"),
        }
    }
}

/// A user-facing event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Guess mode needs at least one guess remaining.
    InsufficientGuesses,

    /// The bankroll cannot cover a purchase. Nothing was deducted.
    InsufficientBankroll {
        purchase: PurchaseKind,
        required: Currency,
        available: Currency,
    },

    /// The phrase was fully revealed.
    Won { bankroll: Currency, streak: u32 },

    /// Out of guesses and below the continuation threshold.
    Lost,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InsufficientGuesses => {
                write!(f, "You need at least one guess remaining to enter guess mode!")
            }
            Notice::InsufficientBankroll { purchase, required, available } => write!(
                f,
                "Insufficient bankroll to buy {purchase}: costs ${required}, you have ${available}."
            ),
            Notice::Won { .. } => write!(f, "Congratulations! You've guessed the phrase!"),
            Notice::Lost => write!(f, "Game over. You've run out of resources to continue!"),
        }
    }
}

/// FIFO queue of notices waiting for the caller.
///
/// A single operation emits at most a couple of notices, so the buffer
/// stays inline until the caller falls behind on draining.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    pending: SmallVec<[Notice; 4]>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice.
    pub fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    /// Notices not yet drained, oldest first.
    #[must_use]
    pub fn peek(&self) -> &[Notice] {
        &self.pending
    }

    /// Take every queued notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.pending.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo() {
        let mut queue = NoticeQueue::new();
        assert!(queue.is_empty());

        queue.push(Notice::InsufficientGuesses);
        queue.push(Notice::Lost);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek()[0], Notice::InsufficientGuesses);

        let drained = queue.drain();
        assert_eq!(drained, vec![Notice::InsufficientGuesses, Notice::Lost]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_spills_past_inline_capacity() {
        let mut queue = NoticeQueue::new();
        for _ in 0..10 {
            queue.push(Notice::InsufficientGuesses);
        }
        assert_eq!(queue.drain().len(), 10);
    }

    #[test]
    fn test_display() {
        let notice = Notice::InsufficientBankroll {
            purchase: PurchaseKind::Letter('q'),
            required: 30,
            available: 10,
        };
        assert_eq!(
            notice.to_string(),
            "Insufficient bankroll to buy the letter 'q': costs $30, you have $10."
        );
        assert_eq!(PurchaseKind::from(PendingPurchase::Hint).to_string(), "a hint");
    }

    #[test]
    fn test_notice_serde() {
        let notice = Notice::Won { bankroll: 420, streak: 3 };
        let json = serde_json::to_string(&notice).unwrap();
        let restored: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, restored);
    }
}
