//! Program Loader.
//!
//! This module turns program text into program memory. It performs:
//! 1. **Line parsing:** One 32-character binary encoding per line; surrounding
//!    whitespace, blank lines, and `#` comment lines are skipped.
//! 2. **Permissive decoding:** Lines that do not decode are left out of program
//!    memory and listed in the [`LoadReport`] instead of failing the load.
//! 3. **File access:** Reads a program file from disk.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::common::error::{SimError, SimResult};
use crate::core::arch::Program;
use crate::isa::decode_line;

/// A program line that was not loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

/// Result of parsing a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The decoded instructions, in source order.
    pub program: Program,
    /// Lines that did not decode.
    pub rejected: Vec<RejectedLine>,
}

/// Parses program text.
///
/// # Arguments
///
/// * `text` - Program source, one binary encoding per line.
///
/// # Returns
///
/// The program built from every line that decoded, and the lines that did not.
pub fn parse_program(text: &str) -> LoadReport {
    let mut insts = Vec::new();
    let mut rejected = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match decode_line(line) {
            Ok(inst) => insts.push(inst),
            Err(err) => {
                warn!(line = idx + 1, "skipping program line: {err}");
                rejected.push(RejectedLine {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    info!(
        loaded = insts.len(),
        rejected = rejected.len(),
        "program parsed"
    );
    LoadReport {
        program: Program::new(insts),
        rejected,
    }
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text file.
///
/// # Returns
///
/// The [`LoadReport`], or [`SimError::Io`] if the file cannot be read.
pub fn load_program_file(path: &Path) -> SimResult<LoadReport> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_program(&text))
}
