//! Simulator error definitions.
//!
//! This module defines the error taxonomy of a simulation run. It provides:
//! 1. **Configuration Errors:** Invalid frame budgets, unknown policies and unreadable config files.
//! 2. **Resource Errors:** Input files or backing stores that cannot be opened.
//! 3. **Store Errors:** Short or failed reads from the backing store during a page load.
//! 4. **Input Errors:** Malformed address lines when strict parsing is enabled.
//!
//! None of these are retried: every fault path either continues with a defined
//! fallback or aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::{FrameId, PageNumber};

/// Errors raised while configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Bad argument value, unknown policy name, or an unreadable configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input file or backing store could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    ResourceUnavailable {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The backing store returned fewer than a full page of bytes.
    #[error("short read from backing store for page {page}: got {read} bytes")]
    StoreRead {
        /// Page being loaded.
        page: PageNumber,
        /// Number of bytes actually read.
        read: usize,
    },

    /// Seeking or reading the backing store failed.
    #[error("backing store I/O failed for page {page}: {source}")]
    StoreIo {
        /// Page being loaded.
        page: PageNumber,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading the reference file failed part way through.
    #[error("failed to read input: {0}")]
    InputRead(#[source] io::Error),

    /// An input line did not start with an integer (strict mode only).
    #[error("malformed address on line {line}: {text:?}")]
    MalformedAddress {
        /// 1-based line number in the reference file.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A frame id was out of range or had no resident page when one was required.
    #[error("frame directory has no resident page for frame {0}")]
    FrameDirectory(FrameId),

    /// The replacement policy had no frame to offer.
    #[error("replacement policy could not select a victim frame")]
    NoVictim,

    /// Writing translation results failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result alias used throughout the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
