//! Difficulty profiles: named timing configurations.
//!
//! A profile fixes how fast playback starts, how much it speeds up per
//! round, and the floor it never drops below. The caller selects a
//! difficulty before a game starts; it is fixed for the game's duration.
//!
//! Difficulties form a closed enumeration rather than a stringly-keyed
//! settings map: every selectable difficulty is a variant, and an
//! unrecognized name surfaces as [`UnknownDifficulty`] at the parsing edge
//! instead of a failed lookup mid-game.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, immutable timing configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Interval between playback signals at the start of a game.
    pub initial_interval: Duration,

    /// Floor the interval never drops below.
    pub min_interval: Duration,

    /// Amount removed from the interval on each round advance.
    pub decrement: Duration,
}

impl DifficultyProfile {
    /// Create a profile from millisecond values.
    #[must_use]
    pub const fn from_millis(initial: u64, min: u64, decrement: u64) -> Self {
        Self {
            initial_interval: Duration::from_millis(initial),
            min_interval: Duration::from_millis(min),
            decrement: Duration::from_millis(decrement),
        }
    }

    /// The interval for the next round: one decrement faster, clamped to
    /// `min_interval`.
    #[must_use]
    pub fn next_interval(&self, current: Duration) -> Duration {
        current.saturating_sub(self.decrement).max(self.min_interval)
    }
}

/// The closed set of selectable difficulties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// The timing profile this difficulty selects.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::from_millis(1200, 600, 30),
            Difficulty::Medium => DifficultyProfile::from_millis(1000, 400, 50),
            Difficulty::Hard => DifficultyProfile::from_millis(800, 300, 70),
            Difficulty::Expert => DifficultyProfile::from_millis(600, 200, 100),
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a difficulty name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}'")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.name()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}
