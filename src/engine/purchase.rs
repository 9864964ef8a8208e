//! Paid actions: letters, extra guesses and hints.
//!
//! Every deduction is preceded by a sufficiency check, so the bankroll never
//! goes below zero. A failed check emits [`Notice::InsufficientBankroll`] and
//! changes nothing.

use log::debug;

use crate::core::{Currency, Notice, PendingPurchase, PurchaseKind, RandomSource};

use super::session::PuzzleSession;

impl<R: RandomSource> PuzzleSession<R> {
    /// Buy `letter`, revealing every occurrence.
    ///
    /// Letters already bought or hinted are ignored. Letters not in the
    /// phrase still cost their price.
    pub fn guess_letter(&mut self, letter: char) {
        if self.ignore_if_over("guess_letter") || self.state.guessed_letters.contains(&letter) {
            return;
        }

        let cost = self.economy().letter_cost(letter);
        if !self.charge(PurchaseKind::Letter(letter), cost) {
            return;
        }

        self.state.guessed_letters.insert(letter);
        let revealed = self.state.lock_letter(letter);
        debug!("Bought '{letter}' for {cost}, {revealed} positions revealed");

        self.evaluate_outcome();
    }

    /// Stage a guess or hint purchase, replacing any earlier one.
    pub fn request_purchase(&mut self, kind: PendingPurchase) {
        self.state.pending_purchase = Some(kind);
    }

    /// Drop the staged purchase without charging.
    pub fn cancel_pending_purchase(&mut self) {
        self.state.pending_purchase = None;
    }

    /// Execute the staged purchase.
    ///
    /// The staged purchase is cleared afterwards whether or not it went
    /// through. Confirmed purchases are honored even after the round ended.
    pub fn confirm_pending_purchase(&mut self) {
        let pending = self.state.pending_purchase.take();
        match pending {
            Some(PendingPurchase::Guess) => self.buy_guess(),
            Some(PendingPurchase::Hint) => self.buy_hint(),
            None => {}
        }
    }

    fn buy_guess(&mut self) {
        let price = self.economy().guess_price();
        if self.charge(PurchaseKind::Guess, price) {
            self.state.guesses = self.state.guesses.saturating_add(1);
            debug!("Bought a guess, {} remaining", self.state.guesses);
        }
    }

    /// Reveal one random letter that is neither locked nor already guessed.
    ///
    /// Each distinct letter is equally likely. The price is charged even
    /// when no such letter is left.
    fn buy_hint(&mut self) {
        let price = self.economy().hint_price();
        if !self.charge(PurchaseKind::Hint, price) {
            return;
        }

        let candidates = self.hint_candidates();
        if candidates.is_empty() {
            debug!("Hint bought with no letters left to reveal");
        } else {
            let letter = candidates[self.rng.pick_index(candidates.len())];
            self.state.lock_letter(letter);
            self.state.guessed_letters.insert(letter);
            debug!("Hint revealed '{letter}'");
        }

        self.evaluate_outcome();
    }

    /// Distinct letters a hint may reveal, sorted.
    fn hint_candidates(&self) -> Vec<char> {
        let state = &self.state;
        state
            .phrase
            .distinct_letters()
            .into_iter()
            .filter(|c| !state.guessed_letters.contains(c))
            .filter(|&c| state.phrase.positions_of(c).any(|i| !state.is_locked(i)))
            .collect()
    }

    /// Deduct `cost` if the bankroll covers it, otherwise emit a notice.
    fn charge(&mut self, purchase: PurchaseKind, cost: Currency) -> bool {
        let available = self.state.bankroll;
        if !self.economy().can_afford(available, cost) {
            debug!("Cannot afford {purchase}: costs {cost}, have {available}");
            self.notices.push(Notice::InsufficientBankroll {
                purchase,
                required: cost,
                available,
            });
            return false;
        }

        self.state.bankroll = available - cost;
        true
    }
}
