//! Data Memory.
//!
//! A flat array of signed words indexed directly by the effective address
//! computed in Execute. Addresses are word indices, not byte offsets.

use crate::common::error::{SimError, SimResult};

/// Word-addressed data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i64>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Maps an address to an index, failing outside `0..len`.
    fn slot(&self, addr: i64) -> SimResult<usize> {
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < self.words.len())
            .ok_or(SimError::AddressOutOfRange {
                addr,
                size: self.words.len(),
            })
    }

    /// Reads the word at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address.
    ///
    /// # Returns
    ///
    /// The stored word, or [`SimError::AddressOutOfRange`].
    pub fn read(&self, addr: i64) -> SimResult<i64> {
        let idx = self.slot(addr)?;
        Ok(self.words[idx])
    }

    /// Writes `val` to the word at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address.
    /// * `val` - The value to store.
    pub fn write(&mut self, addr: i64, val: i64) -> SimResult<()> {
        let idx = self.slot(addr)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Returns all words.
    pub fn words(&self) -> &[i64] {
        &self.words
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
