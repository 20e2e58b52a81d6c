//! # simon-core
//!
//! Engine for a Simon-style memory game: the machine reveals an ever-longer
//! sequence of colored signals and the player must reproduce it in order.
//!
//! ## Design Principles
//!
//! 1. **Headless Core**: No rendering, audio, or timers. The engine mutates
//!    state and tells a [`Presenter`] what to show; the driver owns the clock.
//!
//! 2. **Driver Hand-offs Over Callbacks**: Anything delayed is returned as a
//!    [`ScheduledAdvance`] ticket the driver fires later, and machine playback
//!    completion is reported back explicitly. No hidden timer chains.
//!
//! 3. **Generation-Guarded Continuations**: Reset, restart, and every round
//!    bump an [`Epoch`]; stale tickets and late playback reports are rejected
//!    by comparison, never by cancellation plumbing.
//!
//! ## Architecture
//!
//! - **State machine**: `Idle -> AwaitingPlayback -> Playback ->
//!   AwaitingInput`, looping back one level longer per correct round until a
//!   mistake lands in `GameOver`. A visibility loss soft-pauses terminally.
//!
//! - **Collaborator seams**: `GameEngine<P: Presenter, S: StatsStore>` is
//!   generic over presentation and persistence; the crate ships only headless
//!   and in-memory/file implementations.
//!
//! - **Degraded over dead**: storage failures log a warning and leave the
//!   session playable; malformed persisted statistics decode field-by-field
//!   with defaults.
//!
//! ## Modules
//!
//! - `signal`: The four colored signals and their tone frequencies
//! - `difficulty`: Difficulty levels and their timing profiles
//! - `rng`: Seedable signal source
//! - `stats`: Accumulated statistics and their update rules
//! - `store`: Persistence seam with in-memory and JSON-file slots
//! - `presenter`: Presentation seam with headless and recording doubles
//! - `engine`: The state machine, phases, and scheduling handles

pub mod difficulty;
pub mod engine;
pub mod presenter;
pub mod rng;
pub mod signal;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use crate::difficulty::{Difficulty, DifficultyProfile, UnknownDifficulty};

pub use crate::engine::{
    Epoch, GameEngine, InputOutcome, Phase, ScheduledAdvance, ADVANCE_DELAY, START_DELAY,
};

pub use crate::presenter::{
    MessageKind, NullPresenter, Presenter, PresenterEvent, RecordingPresenter,
};

pub use crate::rng::GameRng;

pub use crate::signal::{Sequence, Signal};

pub use crate::stats::Statistics;

pub use crate::store::{JsonFileStore, MemoryStore, StatsStore, StoreError};
