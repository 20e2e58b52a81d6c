//! Cross-session game statistics.
//!
//! Statistics accumulate monotonically across games and survive sessions via
//! a [`StatsStore`](crate::store::StatsStore). The average is always derived
//! from `total_score / games_played`, never stored, so the persisted
//! document cannot drift out of agreement with its own counters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accumulated statistics for all completed games.
///
/// Every field only grows except `current_streak`, which snaps back to zero
/// whenever a game fails to beat the prior high score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Completed games.
    pub games_played: u32,

    /// Sum of all final scores.
    pub total_score: u64,

    /// Best final score ever reached.
    pub high_score: u32,

    /// Consecutive games, ending with the latest, that each set a new
    /// high score.
    pub current_streak: u32,

    /// Longest streak ever reached.
    pub best_streak: u32,
}

impl Statistics {
    /// Create zeroed statistics (first-run state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean score per completed game; 0.0 before the first game.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }

    /// Fold one finished game into the counters.
    ///
    /// Returns true when `score` set a new high score. The high score never
    /// decreases; the streak grows only when it is beaten.
    pub fn record_game(&mut self, score: u32) -> bool {
        self.games_played += 1;
        self.total_score += u64::from(score);

        if score > self.high_score {
            self.high_score = score;
            self.best_streak = self.best_streak.max(self.current_streak + 1);
            self.current_streak += 1;
            true
        } else {
            self.current_streak = 0;
            false
        }
    }

    /// Decode statistics from a JSON value, field by field.
    ///
    /// Any field that is missing or not an unsigned integer falls back to
    /// its default instead of failing the whole load. A document that is not
    /// an object decodes to zeroed statistics.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        fn field_u32(value: &Value, key: &str) -> u32 {
            value
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0)
        }

        Self {
            games_played: field_u32(value, "games_played"),
            total_score: value.get("total_score").and_then(Value::as_u64).unwrap_or(0),
            high_score: field_u32(value, "high_score"),
            current_streak: field_u32(value, "current_streak"),
            best_streak: field_u32(value, "best_streak"),
        }
    }
}
