//! Presentation seam.
//!
//! The engine never renders anything itself. Every user-visible effect is
//! funneled through the [`Presenter`] trait: status messages, signal flashes,
//! machine playback, input gating, and sound cues. A real front end implements
//! this over its UI toolkit; this crate ships only the headless
//! [`NullPresenter`] and the test-oriented [`RecordingPresenter`].

use std::time::Duration;

use crate::signal::Signal;

/// Category of a status message, so presenters can style without parsing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Neutral announcements ("Get Ready...").
    Info,
    /// The level banner shown before playback.
    Level,
    /// Prompt to begin reproducing the sequence.
    UserTurn,
    /// Acknowledgment of a fully correct round.
    Success,
    /// Final-score announcement after a mistake.
    GameOver,
    /// Soft-pause notice.
    Paused,
    /// Prompt shown after a reset, inviting a new game.
    Reset,
}

/// Renders engine notifications to the user.
///
/// All methods are fire-and-forget from the engine's point of view; the one
/// obligation a driver carries is reporting playback completion back through
/// `GameEngine::report_playback_done` after servicing [`Self::play_sequence`].
pub trait Presenter {
    /// Display a status message.
    fn show_message(&mut self, text: &str, kind: MessageKind);

    /// Acknowledge a single signal with its flash and tone.
    ///
    /// Suggested pacing: 300 ms lit plus a 100 ms gap before the next flash.
    fn play_signal(&mut self, signal: Signal);

    /// Play back the whole challenge, one signal per `interval`.
    ///
    /// Pacing is the implementor's job: wait one interval, flash, repeat.
    /// The driver reports completion afterwards; the engine does not time
    /// playback itself.
    fn play_sequence(&mut self, sequence: &[Signal], interval: Duration);

    /// Gate the input surface on or off.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Distinct failure cue, played alongside the final-score message.
    fn play_game_over(&mut self);

    /// Apply the user's sound preference.
    fn set_sound_enabled(&mut self, enabled: bool);
}

/// Presenter that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_message(&mut self, _text: &str, _kind: MessageKind) {}
    fn play_signal(&mut self, _signal: Signal) {}
    fn play_sequence(&mut self, _sequence: &[Signal], _interval: Duration) {}
    fn set_input_enabled(&mut self, _enabled: bool) {}
    fn play_game_over(&mut self) {}
    fn set_sound_enabled(&mut self, _enabled: bool) {}
}

/// One captured notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    Message { text: String, kind: MessageKind },
    Signal(Signal),
    Sequence { signals: Vec<Signal>, interval: Duration },
    InputEnabled(bool),
    GameOverCue,
    SoundEnabled(bool),
}

/// Presenter that records every notification in order, for assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drop recorded notifications.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The most recent message, if any message was shown.
    #[must_use]
    pub fn last_message(&self) -> Option<(&str, MessageKind)> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::Message { text, kind } => Some((text.as_str(), *kind)),
            _ => None,
        })
    }

    /// The most recent playback hand-off, if any.
    #[must_use]
    pub fn last_sequence(&self) -> Option<(&[Signal], Duration)> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::Sequence { signals, interval } => {
                Some((signals.as_slice(), *interval))
            }
            _ => None,
        })
    }

    /// Latest input-gating state, or `None` if it was never set.
    #[must_use]
    pub fn input_enabled(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::InputEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Number of game-over cues played.
    #[must_use]
    pub fn game_over_cues(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PresenterEvent::GameOverCue))
            .count()
    }
}

impl Presenter for RecordingPresenter {
    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.events.push(PresenterEvent::Message {
            text: text.to_string(),
            kind,
        });
    }

    fn play_signal(&mut self, signal: Signal) {
        self.events.push(PresenterEvent::Signal(signal));
    }

    fn play_sequence(&mut self, sequence: &[Signal], interval: Duration) {
        self.events.push(PresenterEvent::Sequence {
            signals: sequence.to_vec(),
            interval,
        });
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.events.push(PresenterEvent::InputEnabled(enabled));
    }

    fn play_game_over(&mut self) {
        self.events.push(PresenterEvent::GameOverCue);
    }

    fn set_sound_enabled(&mut self, enabled: bool) {
        self.events.push(PresenterEvent::SoundEnabled(enabled));
    }
}
