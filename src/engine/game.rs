//! The game engine proper.
//!
//! `GameEngine` owns every piece of game state: the challenge sequence, the
//! round counter, the playback interval, the phase machine, and the
//! accumulated statistics. It is generic over its two collaborators, a
//! [`Presenter`] that renders notifications and a [`StatsStore`] that holds
//! statistics between sessions.
//!
//! The engine runs one command at a time and never blocks. Anything that must
//! happen after a delay is returned to the driver as a [`ScheduledAdvance`]
//! ticket; the driver waits out the delay and passes the ticket back through
//! [`GameEngine::fire_scheduled`]. Likewise the engine hands machine playback
//! to the presenter and waits for the driver to call
//! [`GameEngine::report_playback_done`]. Both hand-offs are guarded by the
//! engine's [`Epoch`], so continuations that outlive a reset or a restart are
//! rejected instead of corrupting the new game.

use std::time::Duration;

use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::presenter::{MessageKind, Presenter};
use crate::rng::GameRng;
use crate::signal::{Sequence, Signal};
use crate::stats::Statistics;
use crate::store::{StatsStore, StoreError};

use super::phase::Phase;
use super::schedule::{Epoch, ScheduledAdvance};

/// Delay between pressing start and the first playback.
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Acknowledgment beat between a completed round and the next playback.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// What a submitted signal did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The engine was not accepting input; nothing changed.
    Ignored,
    /// Correct signal at `position`; more positions remain this round.
    Matched { position: usize },
    /// Correct signal completed the round. Fire the ticket after its delay
    /// to reveal the next level.
    RoundComplete(ScheduledAdvance),
    /// Wrong signal. The game is over with this final score.
    GameOver { score: u32 },
}

/// The Simon state machine.
///
/// Owns its collaborators. Statistics are loaded from the store once at
/// construction and persisted after every completed game; a failing store
/// degrades the session to stat-less play rather than aborting it.
pub struct GameEngine<P: Presenter, S: StatsStore> {
    /// State-machine discriminant.
    phase: Phase,

    /// Rounds revealed so far. Equals the sequence length once a round
    /// has started.
    level: u32,

    /// Playback interval for the current round.
    interval: Duration,

    /// The challenge revealed so far.
    sequence: Sequence,

    /// Position of the next expected input within the sequence.
    progress: usize,

    /// Active difficulty selection.
    difficulty: Difficulty,

    /// Timing profile of the active difficulty.
    profile: DifficultyProfile,

    /// Generation counter guarding scheduled continuations.
    epoch: Epoch,

    /// Signal source.
    rng: GameRng,

    /// Presentation sink.
    presenter: P,

    /// Durable statistics slot.
    store: S,

    /// Accumulated statistics.
    stats: Statistics,

    /// Presentation-only sound preference.
    sound_enabled: bool,
}

impl<P: Presenter, S: StatsStore> GameEngine<P, S> {
    /// Create an idle engine, loading any persisted statistics from `store`.
    pub fn new(presenter: P, store: S) -> Self {
        let stats = store.load().unwrap_or_default();
        let difficulty = Difficulty::default();
        let profile = difficulty.profile();

        Self {
            phase: Phase::Idle,
            level: 0,
            interval: profile.initial_interval,
            sequence: Sequence::new(),
            progress: 0,
            difficulty,
            profile,
            epoch: Epoch::new(),
            rng: GameRng::from_entropy(),
            presenter,
            store,
            stats,
            sound_enabled: true,
        }
    }

    /// Use a deterministic signal source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// Select the starting difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.apply_difficulty(difficulty);
        self
    }

    /// Begin a new game.
    ///
    /// Valid from `Idle` or `GameOver`; returns `None` (and changes nothing)
    /// otherwise. Clears the previous game, re-arms the interval from the
    /// active profile, and returns the ticket for the first level reveal.
    /// The first signal is appended when that ticket fires.
    #[must_use]
    pub fn start(&mut self) -> Option<ScheduledAdvance> {
        if !self.phase.startable() {
            return None;
        }

        self.sequence.clear();
        self.progress = 0;
        self.level = 0;
        self.interval = self.profile.initial_interval;
        self.epoch = self.epoch.next();
        self.phase = Phase::AwaitingPlayback;

        log::debug!(
            "game started: difficulty {}, epoch {}",
            self.difficulty,
            self.epoch
        );
        self.presenter.set_input_enabled(false);
        self.presenter.show_message("Get Ready...", MessageKind::Info);

        Some(ScheduledAdvance::new(self.epoch, START_DELAY))
    }

    /// Reveal the next level.
    ///
    /// Appends one uniformly random signal, increments the level, tightens
    /// the interval by the profile's decrement (floored at its minimum), and
    /// hands the full sequence to the presenter for playback. Returns the
    /// epoch the driver must echo through [`Self::report_playback_done`].
    ///
    /// Valid in `AwaitingPlayback` (the scheduled path) or `Playback`;
    /// returns `None` elsewhere.
    #[must_use]
    pub fn advance_level(&mut self) -> Option<Epoch> {
        if !matches!(self.phase, Phase::AwaitingPlayback | Phase::Playback) {
            return None;
        }

        self.sequence.push(self.rng.next_signal());
        self.level += 1;
        self.interval = self.profile.next_interval(self.interval);
        self.progress = 0;
        self.epoch = self.epoch.next();
        self.phase = Phase::Playback;

        log::debug!(
            "level {} playback at {:?}, epoch {}",
            self.level,
            self.interval,
            self.epoch
        );
        self.presenter.set_input_enabled(false);
        self.presenter
            .show_message(&format!("Level {}", self.level), MessageKind::Level);
        self.presenter.play_sequence(&self.sequence, self.interval);

        Some(self.epoch)
    }

    /// Driver report that machine playback finished.
    ///
    /// Opens the user's turn when `epoch` is current and the engine is in
    /// `Playback`. Stale epochs and out-of-phase reports are ignored;
    /// returns whether the turn opened.
    pub fn report_playback_done(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch {
            log::debug!("ignoring stale playback completion, epoch {}", epoch);
            return false;
        }
        if self.phase != Phase::Playback {
            return false;
        }

        self.phase = Phase::AwaitingInput;
        self.progress = 0;
        self.presenter.set_input_enabled(true);
        self.presenter.show_message("Your Turn!", MessageKind::UserTurn);
        true
    }

    /// Validate one input signal against the sequence.
    ///
    /// Outside `AwaitingInput` this is a no-op returning
    /// [`InputOutcome::Ignored`], so mis-clicks during playback cost nothing.
    /// An accepted signal is echoed through the presenter, then compared at
    /// the current position: a mismatch ends the game immediately, a match on
    /// the final position completes the round and schedules the next reveal.
    #[must_use]
    pub fn submit_input(&mut self, signal: Signal) -> InputOutcome {
        if !self.phase.accepts_input() {
            return InputOutcome::Ignored;
        }

        self.presenter.play_signal(signal);

        // progress < sequence.len() whenever input is accepted
        let position = self.progress;
        if signal != self.sequence[position] {
            return self.fail_game();
        }

        self.progress += 1;
        if self.progress < self.sequence.len() {
            return InputOutcome::Matched { position };
        }

        self.phase = Phase::AwaitingPlayback;
        self.progress = 0;
        self.presenter.set_input_enabled(false);
        self.presenter
            .show_message("Correct! Next Level...", MessageKind::Success);

        InputOutcome::RoundComplete(ScheduledAdvance::new(self.epoch, ADVANCE_DELAY))
    }

    /// Change difficulty for the next game.
    ///
    /// Takes effect in `Idle` or `GameOver` only; a game in progress keeps
    /// the profile it started with. Returns whether the change applied.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase.in_game() {
            return false;
        }
        self.apply_difficulty(difficulty);
        true
    }

    /// Abandon the current game and return to `Idle`.
    ///
    /// Safe in every phase. Bumps the epoch, so every outstanding ticket and
    /// playback completion from before the reset is rejected afterwards.
    /// Statistics are untouched.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.next();
        self.phase = Phase::Idle;
        self.sequence.clear();
        self.progress = 0;
        self.level = 0;
        self.interval = self.profile.initial_interval;

        log::debug!("reset to idle, epoch {}", self.epoch);
        self.presenter.set_input_enabled(false);
        self.presenter
            .show_message("Press Space or Start to begin", MessageKind::Reset);
    }

    /// Soft-pause when the host loses visibility.
    ///
    /// Valid during `Playback` or `AwaitingInput`; no-op elsewhere. The
    /// sequence is kept but the game cannot resume: pause is terminal until
    /// [`Self::reset`] and a fresh [`Self::start`]. Returns whether the
    /// engine paused.
    pub fn pause(&mut self) -> bool {
        if !matches!(self.phase, Phase::Playback | Phase::AwaitingInput) {
            return false;
        }

        self.phase = Phase::Paused;
        self.presenter.set_input_enabled(false);
        self.presenter.show_message("Game Paused", MessageKind::Paused);
        true
    }

    /// Run a scheduled level reveal.
    ///
    /// Advances only when the ticket's epoch is still current and the engine
    /// is in `AwaitingPlayback`; a ticket surviving a reset, a restart, or an
    /// earlier duplicate fire is dropped. Returns what
    /// [`Self::advance_level`] returns when the ticket is live.
    #[must_use]
    pub fn fire_scheduled(&mut self, handle: ScheduledAdvance) -> Option<Epoch> {
        if handle.epoch() != self.epoch {
            log::debug!("dropping stale scheduled advance, epoch {}", handle.epoch());
            return None;
        }
        if self.phase != Phase::AwaitingPlayback {
            return None;
        }
        self.advance_level()
    }

    /// Flip the sound preference and forward it to the presenter.
    ///
    /// Purely presentational; game rules are unaffected. Returns the new
    /// state.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.presenter.set_sound_enabled(self.sound_enabled);
        self.sound_enabled
    }

    /// Flush statistics to the store.
    ///
    /// Also runs automatically after every completed game; call it at
    /// session end for an explicit flush.
    pub fn save_stats(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.stats)
    }

    fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
        self.interval = self.profile.initial_interval;
    }

    fn fail_game(&mut self) -> InputOutcome {
        // Only the fully confirmed rounds count; the round that failed does
        // not.
        let score = self.level.saturating_sub(1);

        self.phase = Phase::GameOver;
        self.presenter.set_input_enabled(false);

        self.stats.record_game(score);
        self.persist_stats();

        self.presenter.play_game_over();
        self.presenter.show_message(
            &format!(
                "Game Over! Final Score: {}\nHigh Score: {}",
                score, self.stats.high_score
            ),
            MessageKind::GameOver,
        );
        log::debug!("game over: score {}, level {}", score, self.level);

        InputOutcome::GameOver { score }
    }

    fn persist_stats(&mut self) {
        if let Err(err) = self.store.save(&self.stats) {
            log::warn!("could not save game stats: {}", err);
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current level (0 before the first reveal).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Playback interval for the current round.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The challenge revealed so far.
    #[must_use]
    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    /// Position of the next expected input.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Active difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current continuation generation.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Accumulated statistics snapshot.
    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Current sound preference.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// The presentation sink.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presentation sink.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The statistics store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
