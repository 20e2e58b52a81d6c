//! Scheduling handles.
//!
//! The engine never sleeps. Whenever a transition must happen "later" (the
//! first advance after start, the next advance after a correct round) it hands
//! the driver a [`ScheduledAdvance`]: wait for `delay`, then pass the handle
//! back through `GameEngine::fire_scheduled`. Every handle carries the
//! [`Epoch`] that minted it; reset and restart bump the engine's epoch, so a
//! handle surviving from a discarded round is rejected instead of corrupting
//! the new one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Generation counter for scheduled continuations.
///
/// Monotonically increasing. Advances on start, on reset, and on every round,
/// so both cross-reset and duplicate same-game continuations go stale.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Epoch(u64);

impl Epoch {
    /// The starting generation.
    #[must_use]
    pub const fn new() -> Self {
        Epoch(0)
    }

    /// The following generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Epoch(self.0 + 1)
    }

    /// Numeric value, for logging.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Driver ticket for a deferred `advance_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledAdvance {
    epoch: Epoch,
    delay: Duration,
}

impl ScheduledAdvance {
    pub(crate) const fn new(epoch: Epoch, delay: Duration) -> Self {
        Self { epoch, delay }
    }

    /// Generation this ticket belongs to.
    #[must_use]
    pub const fn epoch(self) -> Epoch {
        self.epoch
    }

    /// How long the driver should wait before firing.
    #[must_use]
    pub const fn delay(self) -> Duration {
        self.delay
    }
}
