//! Puzzle session: owns the state and drives the round lifecycle.

use log::{debug, info};

use crate::core::{
    Currency, EngineConfig, GameRng, GameRngState, GameState, Notice, NoticeQueue, PlayerAction,
    Puzzle, RandomSource, SessionResult,
};
use crate::economy::Economy;

use super::phase::GamePhase;

/// One player's puzzle session.
///
/// Owns the only mutable [`GameState`]. Every operation runs to completion
/// synchronously; concurrent callers must serialize access themselves.
///
/// Generic over the hint [`RandomSource`] so tests can script hint picks.
pub struct PuzzleSession<R: RandomSource = GameRng> {
    pub(super) config: EngineConfig,
    pub(super) state: GameState,
    pub(super) rng: R,
    pub(super) notices: NoticeQueue,
}

/// Builder for creating a [`PuzzleSession`].
///
/// ```
/// use phrase_puzzle::SessionBuilder;
///
/// let session = SessionBuilder::new("hello world")
///     .category("Greeting")
///     .bankroll(500)
///     .guesses(3)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.state().bankroll, 500);
/// assert_eq!(session.state().guesses, 3);
/// ```
pub struct SessionBuilder {
    phrase: String,
    category: String,
    config: EngineConfig,
    bankroll: Option<Currency>,
    guesses: Option<u32>,
    seed: Option<u64>,
    saved_rng: Option<GameRngState>,
}

impl SessionBuilder {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            category: "Phrase".to_string(),
            config: EngineConfig::default(),
            bankroll: None,
            guesses: None,
            seed: None,
            saved_rng: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Replace the whole configuration.
    ///
    /// `bankroll` and `guesses` overrides win regardless of call order.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Starting (and reset) bankroll.
    pub fn bankroll(mut self, bankroll: Currency) -> Self {
        self.bankroll = Some(bankroll);
        self
    }

    /// Starting (and reset) guess count.
    pub fn guesses(mut self, guesses: u32) -> Self {
        self.guesses = Some(guesses);
        self
    }

    /// Seed for hint selection. Unseeded sessions draw from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Continue the hint sequence of a saved session.
    ///
    /// Takes precedence over `seed`.
    pub fn resume_rng(mut self, saved: GameRngState) -> Self {
        self.saved_rng = Some(saved);
        self
    }

    /// Build a session with the built-in ChaCha RNG.
    pub fn build(self) -> SessionResult<PuzzleSession<GameRng>> {
        let rng = match (&self.saved_rng, self.seed) {
            (Some(saved), _) => GameRng::from_state(saved),
            (None, Some(seed)) => GameRng::new(seed),
            (None, None) => GameRng::from_entropy(),
        };
        debug!("Hint RNG seeded with {}", rng.seed());
        self.build_with_rng(rng)
    }

    /// Build a session with a caller-supplied random source.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> SessionResult<PuzzleSession<R>> {
        let mut config = self.config;
        if let Some(bankroll) = self.bankroll {
            config.initial_bankroll = bankroll;
        }
        if let Some(guesses) = self.guesses {
            config.initial_guesses = guesses;
        }

        let puzzle = Puzzle::new(&self.phrase, self.category)?;
        PuzzleSession::with_rng(puzzle, config, rng)
    }
}

impl PuzzleSession<GameRng> {
    /// Create a session with a seeded ChaCha RNG.
    pub fn new(puzzle: Puzzle, config: EngineConfig, seed: u64) -> SessionResult<Self> {
        Self::with_rng(puzzle, config, GameRng::new(seed))
    }

    /// Position of the hint RNG, for saving alongside [`GameState`].
    ///
    /// Pass it to [`SessionBuilder::resume_rng`] to draw the same hints
    /// after reload.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Create a session with a caller-supplied random source.
    pub fn with_rng(puzzle: Puzzle, config: EngineConfig, rng: R) -> SessionResult<Self> {
        config.validate()?;
        info!(
            "Starting session: {} characters, category '{}'",
            puzzle.phrase.len(),
            puzzle.category
        );

        let state = GameState::new(puzzle, &config);
        Ok(Self {
            config,
            state,
            rng,
            notices: NoticeQueue::new(),
        })
    }

    // === Observation ===

    /// Current state, readable at any time for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Where the round stands.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(&self.state)
    }

    /// Cost of buying `letter`.
    #[must_use]
    pub fn letter_cost(&self, letter: char) -> Currency {
        self.economy().letter_cost(letter)
    }

    /// Notices not yet drained.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        self.notices.peek()
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    // === Dispatch ===

    /// Apply a player action.
    pub fn apply(&mut self, action: PlayerAction) {
        debug!("Applying {action}");
        match action {
            PlayerAction::ToggleGuessMode => self.toggle_guess_mode(),
            PlayerAction::FillActiveBox(letter) => self.fill_active_box(letter),
            PlayerAction::DeleteActiveBox => self.delete_active_box(),
            PlayerAction::SubmitGuess => self.submit_guess(),
            PlayerAction::GuessLetter(letter) => self.guess_letter(letter),
            PlayerAction::RequestPurchase(kind) => self.request_purchase(kind),
            PlayerAction::ConfirmPendingPurchase => self.confirm_pending_purchase(),
            PlayerAction::CancelPendingPurchase => self.cancel_pending_purchase(),
            PlayerAction::ResetGame => self.reset_game(),
        }
    }

    // === Lifecycle ===

    /// Restart the round with the same phrase.
    ///
    /// Streak counters persist across resets.
    pub fn reset_game(&mut self) {
        self.state.reset(&self.config);
        debug!("Round reset");
    }

    /// Reset and install a new phrase and category.
    pub fn start_round(&mut self, puzzle: Puzzle) {
        info!(
            "Starting round: {} characters, category '{}'",
            puzzle.phrase.len(),
            puzzle.category
        );
        self.state.install_puzzle(puzzle, &self.config);
    }

    // === Outcome ===

    /// Win if every letter is showing, otherwise check for a loss.
    ///
    /// Does nothing once the round has ended, so a win is counted once.
    pub(super) fn evaluate_outcome(&mut self) {
        if self.state.is_over() {
            return;
        }
        if self.state.all_revealed() {
            self.trigger_win();
        } else {
            self.check_loss_condition();
        }
    }

    /// Lose if out of guesses and below the continuation threshold.
    pub(super) fn check_loss_condition(&mut self) {
        if self.state.guesses == 0 && self.economy().is_below_threshold(self.state.bankroll) {
            self.trigger_loss();
        }
    }

    pub(super) fn trigger_win(&mut self) {
        let state = &mut self.state;
        state.win_state = true;
        state.current_cash_streak = state.current_cash_streak.saturating_add(1);
        state.highest_cash_streak = state.highest_cash_streak.max(state.bankroll);

        info!(
            "Phrase solved with {} remaining, streak {}",
            state.bankroll, state.current_cash_streak
        );
        self.notices.push(Notice::Won {
            bankroll: state.bankroll,
            streak: state.current_cash_streak,
        });
    }

    pub(super) fn trigger_loss(&mut self) {
        self.state.loss_state = true;
        info!("Round lost with {} remaining", self.state.bankroll);
        self.notices.push(Notice::Lost);
    }

    /// Won or lost rounds accept no reveals or guesses until reset.
    pub(super) fn ignore_if_over(&self, operation: &str) -> bool {
        if self.state.is_over() {
            debug!("Ignoring {operation}: round is over");
            true
        } else {
            false
        }
    }

    pub(super) fn economy(&self) -> Economy<'_> {
        Economy::new(&self.config)
    }
}
