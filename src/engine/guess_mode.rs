//! Guess mode: fill in the whole phrase box by box, then submit.
//!
//! Locked positions and spaces are pre-filled and never editable. The cursor
//! only moves onto editable positions.

use log::debug;

use crate::core::{Notice, RandomSource, PLACEHOLDER, SPACE};

use super::session::PuzzleSession;

impl<R: RandomSource> PuzzleSession<R> {
    /// Enter or leave guess mode.
    ///
    /// Blocked with [`Notice::InsufficientGuesses`] when no guesses remain.
    /// Entering rebuilds the buffer from the current reveals and puts the
    /// cursor on the first open box. Leaving is always allowed.
    pub fn toggle_guess_mode(&mut self) {
        let entering = !self.state.is_guess_mode;
        if entering && self.ignore_if_over("toggle_guess_mode") {
            return;
        }
        if self.state.guesses == 0 {
            self.notices.push(Notice::InsufficientGuesses);
            return;
        }

        let state = &mut self.state;
        state.is_guess_mode = !state.is_guess_mode;

        if state.is_guess_mode {
            state.current_input = state.rebuild_input();
            state.active_box_index = state.first_placeholder();
            debug!("Entered guess mode, cursor at {:?}", state.active_box_index);
        } else {
            state.active_box_index = None;
            debug!("Left guess mode");
        }
    }

    /// Type `letter` into the active box and advance the cursor.
    ///
    /// The cursor moves to the next open box to the right; if there is none
    /// it stays where it is.
    pub fn fill_active_box(&mut self, letter: char) {
        let state = &mut self.state;
        if !state.is_guess_mode {
            return;
        }
        let Some(active) = state.active_box_index else {
            return;
        };
        if state.is_locked(active) {
            return;
        }

        state.current_input.set(active, letter);

        let next = state
            .phrase
            .chars()
            .iter()
            .enumerate()
            .skip(active + 1)
            .find(|&(i, &c)| c != SPACE && state.current_input.get(i) == Some(&PLACEHOLDER))
            .map(|(i, _)| i);

        if let Some(next) = next {
            state.active_box_index = Some(next);
        }
    }

    /// Clear the active box and step the cursor back.
    ///
    /// The cursor moves to the nearest editable box to the left; if there is
    /// none it stays where it is.
    pub fn delete_active_box(&mut self) {
        let state = &mut self.state;
        if !state.is_guess_mode {
            return;
        }
        let Some(active) = state.active_box_index else {
            return;
        };

        if !state.is_locked(active) {
            state.current_input.set(active, PLACEHOLDER);
        }

        let previous = (0..active)
            .rev()
            .find(|&i| !state.phrase.is_space_at(i) && !state.is_locked(i));

        if let Some(previous) = previous {
            state.active_box_index = Some(previous);
        }
    }

    /// Submit the buffer.
    ///
    /// Every position typed correctly is locked; earlier locks are never
    /// undone. A full match wins, otherwise one guess is spent and the loss
    /// condition is checked. Guess mode always ends.
    pub fn submit_guess(&mut self) {
        if !self.state.is_guess_mode || self.ignore_if_over("submit_guess") {
            return;
        }

        let state = &mut self.state;
        let mut newly_locked = 0;
        for (i, &c) in state.phrase.chars().iter().enumerate() {
            if state.current_input.get(i) == Some(&c) && !state.is_locked(i) {
                state.correct_positions.set(i, Some(c));
                newly_locked += 1;
            }
        }
        state.current_input = state.rebuild_input();
        debug!("Guess submitted, {newly_locked} positions newly locked");

        if self.state.input_matches_phrase() {
            self.trigger_win();
        } else {
            if self.state.guesses > 0 {
                self.state.guesses -= 1;
            }
            self.check_loss_condition();
        }

        self.state.is_guess_mode = false;
        self.state.active_box_index = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Notice;
    use crate::engine::{GamePhase, SessionBuilder};

    #[test]
    fn test_toggle_enters_with_cursor_on_first_open_box() {
        let mut session = SessionBuilder::new("hi yo").seed(1).build().unwrap();
        session.guess_letter('h');

        session.toggle_guess_mode();

        assert!(session.state().is_guess_mode);
        assert_eq!(session.state().input_string(), "h_ __");
        assert_eq!(session.state().active_box_index, Some(1));
        assert_eq!(session.phase(), GamePhase::GuessMode);
    }

    #[test]
    fn test_toggle_blocked_without_guesses() {
        let mut session = SessionBuilder::new("cat").guesses(0).seed(1).build().unwrap();

        session.toggle_guess_mode();

        assert!(!session.state().is_guess_mode);
        assert_eq!(session.drain_notices(), vec![Notice::InsufficientGuesses]);
    }

    #[test]
    fn test_fill_skips_spaces_and_locked() {
        let mut session = SessionBuilder::new("ab cd").seed(1).build().unwrap();
        session.guess_letter('c');
        session.toggle_guess_mode();

        session.fill_active_box('a');
        assert_eq!(session.state().active_box_index, Some(1));

        session.fill_active_box('b');
        // Space at 2 and locked 'c' at 3 are skipped
        assert_eq!(session.state().active_box_index, Some(4));

        session.fill_active_box('d');
        // No open box to the right: cursor stays
        assert_eq!(session.state().active_box_index, Some(4));
        assert_eq!(session.state().input_string(), "ab cd");
    }

    #[test]
    fn test_fill_ignored_outside_guess_mode() {
        let mut session = SessionBuilder::new("cat").seed(1).build().unwrap();
        let before = session.state().clone();

        session.fill_active_box('c');
        session.delete_active_box();
        session.submit_guess();

        assert_eq!(session.state(), &before);
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_delete_steps_back_over_locked() {
        let mut session = SessionBuilder::new("abc").seed(1).build().unwrap();
        session.guess_letter('b');
        session.toggle_guess_mode();

        session.fill_active_box('a');
        assert_eq!(session.state().active_box_index, Some(2));

        session.delete_active_box();
        assert_eq!(session.state().input_string(), "ab_");
        assert_eq!(session.state().active_box_index, Some(0));

        session.delete_active_box();
        assert_eq!(session.state().input_string(), "_b_");
        // Nothing editable to the left: cursor stays
        assert_eq!(session.state().active_box_index, Some(0));
    }

    #[test]
    fn test_submit_locks_correct_positions() {
        let mut session = SessionBuilder::new("cat").seed(1).build().unwrap();
        session.toggle_guess_mode();

        for c in ['c', 'o', 't'] {
            session.fill_active_box(c);
        }
        session.submit_guess();

        let state = session.state();
        assert_eq!(state.correct_positions[0], Some('c'));
        assert_eq!(state.correct_positions[1], None);
        assert_eq!(state.correct_positions[2], Some('t'));
        assert_eq!(state.input_string(), "c_t");
        assert_eq!(state.guesses, 1);
        assert!(!state.is_guess_mode);
        assert_eq!(state.active_box_index, None);
        assert!(!state.win_state);
    }

    #[test]
    fn test_submit_full_match_wins_without_spending_guess() {
        let mut session = SessionBuilder::new("hi yo").seed(1).build().unwrap();
        session.toggle_guess_mode();

        for c in "hiyo".chars() {
            session.fill_active_box(c);
        }
        session.submit_guess();

        assert!(session.state().win_state);
        assert_eq!(session.state().guesses, 2);
        assert_eq!(session.state().current_cash_streak, 1);
        assert_eq!(
            session.drain_notices(),
            vec![Notice::Won { bankroll: 1000, streak: 1 }]
        );
    }

    #[test]
    fn test_submit_never_unlocks() {
        let mut session = SessionBuilder::new("cat").seed(1).build().unwrap();
        session.guess_letter('a');
        session.toggle_guess_mode();

        // Cursor never lands on the locked 'a', so typing cannot touch it
        session.fill_active_box('x');
        session.fill_active_box('y');
        session.submit_guess();

        assert_eq!(session.state().correct_positions[1], Some('a'));
        assert_eq!(session.state().input_string(), "_a_");
    }
}
