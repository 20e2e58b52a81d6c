//! Engine phases.
//!
//! The round cycle is `Idle -> AwaitingPlayback -> Playback -> AwaitingInput`
//! and then either back to `AwaitingPlayback` for the next level or to
//! `GameOver`. `Paused` is a non-accepting variant of the in-round states,
//! entered when the host loses visibility; it holds the sequence but rejects
//! input until the user resets and restarts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of the engine state machine. Level and interval live as
/// engine fields beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game in progress; waiting for start.
    Idle,
    /// A round advance has been scheduled but has not fired yet.
    AwaitingPlayback,
    /// The machine is revealing the sequence; input is gated off.
    Playback,
    /// The user is reproducing the sequence.
    AwaitingInput,
    /// Soft pause. Terminal until reset + start.
    Paused,
    /// The last game ended on a mistake; a new game may start.
    GameOver,
}

impl Phase {
    /// True when `submit_input` may validate a signal.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Phase::AwaitingInput)
    }

    /// True when a new game may begin.
    #[must_use]
    pub const fn startable(self) -> bool {
        matches!(self, Phase::Idle | Phase::GameOver)
    }

    /// True while a sequence is live (including paused games).
    #[must_use]
    pub const fn in_game(self) -> bool {
        matches!(
            self,
            Phase::AwaitingPlayback | Phase::Playback | Phase::AwaitingInput | Phase::Paused
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingPlayback => "awaiting_playback",
            Phase::Playback => "playback",
            Phase::AwaitingInput => "awaiting_input",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_awaiting_input_accepts_input() {
        for phase in [
            Phase::Idle,
            Phase::AwaitingPlayback,
            Phase::Playback,
            Phase::Paused,
            Phase::GameOver,
        ] {
            assert!(!phase.accepts_input(), "{phase} should reject input");
        }
        assert!(Phase::AwaitingInput.accepts_input());
    }

    #[test]
    fn test_startable_phases() {
        assert!(Phase::Idle.startable());
        assert!(Phase::GameOver.startable());
        assert!(!Phase::Playback.startable());
        assert!(!Phase::Paused.startable());
    }

    #[test]
    fn test_in_game_covers_live_sequence_phases() {
        assert!(Phase::AwaitingPlayback.in_game());
        assert!(Phase::Playback.in_game());
        assert!(Phase::AwaitingInput.in_game());
        assert!(Phase::Paused.in_game());
        assert!(!Phase::Idle.in_game());
        assert!(!Phase::GameOver.in_game());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Phase::AwaitingPlayback.to_string(), "awaiting_playback");
        assert_eq!(Phase::GameOver.to_string(), "game_over");
    }
}
