//! Sliding window of the most recent landmark frames.
//!
//! The buffer is the leaf of the recognition pipeline: a fixed-capacity FIFO
//! that the session owner pushes into once per capture tick and the
//! classifier reads as an ordered snapshot, oldest first.

use crate::landmark::Frame;

/// Fixed-capacity FIFO window over landmark frames.
///
/// Capacity is fixed at construction so history-length-dependent rules stay
/// easy to reason about. Storage is preallocated; at steady state each push
/// evicts the oldest frame.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    frames: Vec<Frame>,
    capacity: usize,
}

impl FrameBuffer {
    /// Create a buffer holding at most `capacity` frames.
    ///
    /// A zero capacity is clamped to one frame.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a frame as newest, evicting the oldest at capacity.
    ///
    /// Short or empty frames are accepted as-is; they degrade classification
    /// rather than fail it.
    pub fn push(&mut self, frame: Frame) {
        if self.frames.len() == self.capacity {
            self.frames.remove(0);
        }
        self.frames.push(frame);
    }

    /// Ordered read-only view of the retained frames, newest last
    #[must_use]
    pub fn snapshot(&self) -> &[Frame] {
        &self.frames
    }

    /// Drop all retained frames; used on session or stage reset
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Number of frames currently retained
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frames are retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Maximum number of frames the buffer retains
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
