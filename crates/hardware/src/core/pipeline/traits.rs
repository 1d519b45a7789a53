//! Pipeline Latch Interface.
//!
//! Provides the common methods shared by the four inter-stage latches.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the payload of one instruction between two stages. They support
/// flushing and occupancy checks.
pub trait PipelineLatch {
    /// Clears the latch back to its empty state.
    ///
    /// Called when the pipeline is reset.
    fn flush(&mut self);

    /// Returns the sequence number of the instruction that last wrote the latch.
    fn occupant(&self) -> Option<u64>;

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if no instruction has written the latch since the last flush.
    fn is_empty(&self) -> bool {
        self.occupant().is_none()
    }
}
