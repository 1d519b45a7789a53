//! Simulator error definitions.
//!
//! This module defines the error type shared by every fallible operation. It provides:
//! 1. **Load Errors:** Malformed encodings and unreadable program files.
//! 2. **Control Errors:** Stepping an unloaded or finished program, bad breakpoints.
//! 3. **Execution Errors:** Out-of-range data accesses and runaway programs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// A program line is not a valid 32-character encoding of a known instruction.
    #[error("invalid instruction encoding: {0:?}")]
    InvalidEncoding(String),

    /// `step` or a run operation was invoked with no program loaded.
    #[error("no program loaded")]
    ProgramNotLoaded,

    /// A run operation was invoked after the program already finished.
    #[error("program already complete")]
    ProgramAlreadyComplete,

    /// The requested breakpoint cannot be reached by any instruction.
    #[error("invalid breakpoint: {0}")]
    InvalidBreakpoint(String),

    /// The program finished before the breakpoint was observed.
    #[error("program completed before reaching breakpoint pc={pc} stage={stage}")]
    ExecutionComplete {
        /// Program counter named by the breakpoint.
        pc: i64,
        /// Stage named by the breakpoint.
        stage: String,
    },

    /// A Load or Store computed an address outside data memory.
    #[error("data address {addr} out of range (memory holds {size} words)")]
    AddressOutOfRange {
        /// Effective address computed in Execute.
        addr: i64,
        /// Number of words in data memory.
        size: usize,
    },

    /// The run exceeded the configured cycle limit.
    #[error("cycle limit of {0} exceeded")]
    CycleLimitExceeded(u64),

    /// A program or configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is malformed or holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias for results carrying a [`SimError`].
pub type SimResult<T> = Result<T, SimError>;

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
