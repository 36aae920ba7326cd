//! Configuration system for the memory simulator.
//!
//! This module defines the parameters of a simulation run. It provides:
//! 1. **Defaults:** Baseline frame budget, replacement algorithm and backing store path.
//! 2. **Structures:** The flat `Config` consumed by the simulator.
//! 3. **Enums:** The page replacement algorithm selector.
//!
//! Configuration is built from command-line arguments, optionally layered over a
//! JSON file, and must pass [`Config::validate`] before a run starts.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_BACKING_STORE, MAX_FRAMES, MIN_FRAMES};
use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    /// Frame budget when none is given (one frame per page, so no evictions).
    pub const FRAMES: usize = 256;
}

/// Page replacement algorithms.
///
/// Selects how a victim frame is chosen when a page fault occurs with
/// physical memory full. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageReplacementAlgorithm {
    /// First In First Out replacement.
    ///
    /// Evicts the frame that was populated longest ago.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used replacement.
    ///
    /// Evicts the frame whose last reference is oldest.
    #[serde(alias = "Lru")]
    Lru,
    /// Optimal (offline) replacement.
    ///
    /// Evicts the frame whose page is referenced farthest in the future.
    #[serde(alias = "Opt")]
    Opt,
}

impl PageReplacementAlgorithm {
    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
        }
    }
}

impl fmt::Display for PageReplacementAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageReplacementAlgorithm {
    type Err = SimError;

    /// Parses one of the exact names `FIFO`, `LRU` or `OPT`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FIFO" => Ok(Self::Fifo),
            "LRU" => Ok(Self::Lru),
            "OPT" => Ok(Self::Opt),
            other => Err(SimError::Configuration(format!(
                "PRA must be 'FIFO', 'LRU', or 'OPT' (got '{other}')"
            ))),
        }
    }
}

/// Root configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Number of physical frames (1-256).
    #[serde(default = "Config::default_frames")]
    pub frames: usize,

    /// Page replacement algorithm for physical frames.
    #[serde(default)]
    pub policy: PageReplacementAlgorithm,

    /// Reject address lines that do not start with an integer instead of
    /// treating them as address 0.
    #[serde(default)]
    pub strict: bool,

    /// Path of the backing store image.
    #[serde(default = "Config::default_backing_store")]
    pub backing_store: PathBuf,
}

impl Config {
    /// Returns the default frame budget.
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Returns the default backing store path.
    fn default_backing_store() -> PathBuf {
        PathBuf::from(DEFAULT_BACKING_STORE)
    }

    /// Parses a configuration from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimError::Configuration(format!("invalid config: {e}")))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::ResourceUnavailable`] if the file cannot be read,
    /// [`SimError::Configuration`] if it is not valid configuration JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the frame budget is within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] if `frames` is outside `[1, 256]`.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FRAMES..=MAX_FRAMES).contains(&self.frames) {
            return Err(SimError::Configuration(format!(
                "FRAMES must be an integer between {MIN_FRAMES} and {MAX_FRAMES} (got {})",
                self.frames
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            policy: PageReplacementAlgorithm::default(),
            strict: false,
            backing_store: PathBuf::from(DEFAULT_BACKING_STORE),
        }
    }
}
