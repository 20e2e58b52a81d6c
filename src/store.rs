//! Durable statistics storage.
//!
//! The engine treats persistence as a single key-value slot: load once at
//! startup, save after every completed game and on session end. Saving is
//! best-effort; a failing store degrades the session to stat-less play, it
//! never aborts gameplay.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::stats::Statistics;

/// Error raised by a statistics store on save.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed (missing directory, permissions, full disk).
    #[error("stats I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Statistics could not be encoded.
    #[error("stats encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store was configured as unavailable.
    #[error("stats store unavailable")]
    Unavailable,
}

/// A durable slot for [`Statistics`], keyed by a fixed identifier.
///
/// `load` returning `None` means "no prior data": first run, or a slot whose
/// contents were unreadable. The engine merges `None` into default-zeroed
/// statistics.
pub trait StatsStore {
    /// Read the persisted statistics, if any.
    fn load(&self) -> Option<Statistics>;

    /// Write the statistics. Best-effort: callers log and continue on error.
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}

/// In-memory slot, held for the process lifetime only.
///
/// `fail_saves` turns every save into an error so tests can exercise the
/// degraded stat-less path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<Statistics>,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with `stats`.
    #[must_use]
    pub fn with_stats(stats: Statistics) -> Self {
        Self {
            slot: Some(stats),
            fail_saves: false,
        }
    }

    /// Make every subsequent save fail.
    #[must_use]
    pub fn fail_saves(mut self, fail: bool) -> Self {
        self.fail_saves = fail;
        self
    }

    /// The statistics currently held in the slot.
    #[must_use]
    pub fn saved(&self) -> Option<&Statistics> {
        self.slot.as_ref()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Option<Statistics> {
        self.slot.clone()
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable);
        }
        self.slot = Some(stats.clone());
        Ok(())
    }
}

/// File-backed slot: one JSON document at a fixed path.
///
/// Saves are staged through a sibling file and renamed into place, so the
/// slot always holds a complete document even when a save is interrupted.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Default file name for the stats slot.
    pub const DEFAULT_FILE: &'static str = "simon_stats.json";

    /// Create a slot at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a slot under `dir` using [`Self::DEFAULT_FILE`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::DEFAULT_FILE),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staging sibling for `save`. Lives in the same directory as the slot
    /// so the rename never crosses filesystems.
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Option<Statistics> {
        let text = fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str::<serde_json::Value>(&text) {
            // Field-lenient: bad fields default rather than poisoning the load.
            Ok(value) => Some(Statistics::from_json_value(&value)),
            Err(err) => {
                log::warn!(
                    "discarding unreadable stats at {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(stats)?;

        // Stage the full document next to the slot, then rename it in. An
        // interrupted save leaves only the staging file; the slot keeps
        // the prior complete document.
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
