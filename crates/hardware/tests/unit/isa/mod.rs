//! Unit tests for the instruction set.

/// Text and word decoding of every instruction shape.
pub mod decode;
