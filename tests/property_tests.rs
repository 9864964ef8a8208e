//! Property tests over random action sequences.
//!
//! Every reachable state must keep reveals consistent with the phrase, never
//! overdraw the bankroll, and only grow the guessed-letter set until a reset.

use phrase_puzzle::core::{GameState, PendingPurchase, PlayerAction, SPACE};
use phrase_puzzle::engine::SessionBuilder;
use proptest::prelude::*;

const PHRASE: &str = "[a-e]{1,4}( [a-e]{1,4}){0,2}";

fn letter() -> impl Strategy<Value = char> {
    prop::char::range('a', 'f')
}

fn action() -> impl Strategy<Value = PlayerAction> {
    prop_oneof![
        3 => Just(PlayerAction::ToggleGuessMode),
        4 => letter().prop_map(PlayerAction::FillActiveBox),
        2 => Just(PlayerAction::DeleteActiveBox),
        2 => Just(PlayerAction::SubmitGuess),
        4 => letter().prop_map(PlayerAction::GuessLetter),
        2 => prop_oneof![Just(PendingPurchase::Guess), Just(PendingPurchase::Hint)]
            .prop_map(PlayerAction::RequestPurchase),
        2 => Just(PlayerAction::ConfirmPendingPurchase),
        1 => Just(PlayerAction::CancelPendingPurchase),
        1 => Just(PlayerAction::ResetGame),
    ]
}

fn reveals_are_consistent(state: &GameState) -> bool {
    state.correct_positions.len() == state.phrase.len()
        && state.current_input.len() == state.phrase.len()
        && state
            .correct_positions
            .iter()
            .enumerate()
            .all(|(i, locked)| match locked {
                Some(c) => state.phrase.char_at(i) == Some(*c) || state.phrase.is_space_at(i),
                None => true,
            })
}

proptest! {
    /// Locked positions always match the phrase.
    #[test]
    fn prop_reveals_match_phrase(
        phrase in PHRASE,
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut session = SessionBuilder::new(phrase).seed(seed).build().unwrap();

        for action in actions {
            session.apply(action);
            prop_assert!(reveals_are_consistent(session.state()));
        }
    }

    /// The bankroll only moves down, except when a reset restores it.
    #[test]
    fn prop_bankroll_never_overdrawn(
        phrase in PHRASE,
        bankroll in 0u64..600,
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut session = SessionBuilder::new(phrase).bankroll(bankroll).seed(seed).build().unwrap();

        for action in actions {
            let before = session.state().bankroll;
            session.apply(action);
            let after = session.state().bankroll;

            if action == PlayerAction::ResetGame {
                prop_assert_eq!(after, bankroll);
            } else {
                prop_assert!(after <= before);
            }
        }
    }

    /// Guessed letters only grow until a reset.
    #[test]
    fn prop_guessed_letters_monotone(
        phrase in PHRASE,
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut session = SessionBuilder::new(phrase).seed(seed).build().unwrap();

        for action in actions {
            let before = session.state().guessed_letters.clone();
            session.apply(action);
            let after = &session.state().guessed_letters;

            if action == PlayerAction::ResetGame {
                prop_assert!(after.is_empty());
            } else {
                prop_assert!(before.is_subset(after));
            }
        }
    }

    /// Buying the same letter twice in a row is the same as buying it once.
    #[test]
    fn prop_guess_letter_idempotent(
        phrase in PHRASE,
        setup in prop::collection::vec(action(), 0..20),
        target in letter(),
    ) {
        let mut session = SessionBuilder::new(phrase).seed(5).build().unwrap();
        for action in setup {
            session.apply(action);
        }

        session.guess_letter(target);
        let once = session.state().clone();
        session.guess_letter(target);

        prop_assert_eq!(session.state(), &once);
    }

    /// Entering and leaving guess mode without edits restores the cursor.
    #[test]
    fn prop_toggle_round_trip(
        phrase in PHRASE,
        setup in prop::collection::vec(letter().prop_map(PlayerAction::GuessLetter), 0..4),
    ) {
        let mut session = SessionBuilder::new(phrase).bankroll(10_000).seed(5).build().unwrap();
        for action in setup {
            session.apply(action);
        }
        prop_assume!(!session.state().is_over());

        session.toggle_guess_mode();
        session.toggle_guess_mode();

        prop_assert!(!session.state().is_guess_mode);
        prop_assert_eq!(session.state().active_box_index, None);
    }

    /// The cursor only exists in guess mode and never rests on a space.
    #[test]
    fn prop_cursor_on_editable_box(
        phrase in PHRASE,
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..60),
    ) {
        let mut session = SessionBuilder::new(phrase).seed(seed).build().unwrap();

        for action in actions {
            session.apply(action);
            let state = session.state();
            if let Some(index) = state.active_box_index {
                prop_assert!(state.is_guess_mode);
                prop_assert_ne!(state.phrase.char_at(index), Some(SPACE));
            }
        }
    }
}
