//! Game engine: the state machine, its phases, and its scheduling handles.
//!
//! The driver loop owns a [`GameEngine`] and feeds it discrete events (user
//! input, fired timers, playback completions, visibility changes). Every
//! deferred transition travels as a [`ScheduledAdvance`] stamped with an
//! [`Epoch`], which is how the engine discards continuations left over from a
//! reset or finished game.

pub mod game;
pub mod phase;
pub mod schedule;

pub use game::{GameEngine, InputOutcome, ADVANCE_DELAY, START_DELAY};
pub use phase::Phase;
pub use schedule::{Epoch, ScheduledAdvance};
