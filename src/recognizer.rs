//! Per-session recognition context: buffer plus classifier.
//!
//! One recognizer lives per active game session. The host pushes one frame
//! per capture tick through [`GestureRecognizer::process`] and receives a
//! fresh, independent judgment each time; debouncing across ticks is the
//! host's concern.

use log::debug;

use crate::classifier::{Gesture, GestureClassifier};
use crate::config::Config;
use crate::frame_buffer::FrameBuffer;
use crate::landmark::Frame;

/// Session-owned recognition pipeline over a landmark frame stream.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    buffer: FrameBuffer,
    classifier: GestureClassifier,
}

impl GestureRecognizer {
    /// Create a recognizer from a configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            buffer: FrameBuffer::new(config.buffer.capacity),
            classifier: GestureClassifier::new(config.thresholds.clone()),
        }
    }

    /// Push one tick's frame and classify the updated window.
    ///
    /// Push and classify are strictly sequenced on the caller's thread; the
    /// classifier only ever reads the snapshot.
    pub fn process(&mut self, frame: Frame) -> Option<Gesture> {
        self.buffer.push(frame);
        let result = self.classifier.classify(self.buffer.snapshot());
        if let Some(gesture) = result {
            debug!("recognized {gesture} over {} frames", self.buffer.len());
        }
        result
    }

    /// Drop all buffered history, e.g. on stage restart
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// The underlying sliding window
    #[must_use]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// The classifier and its thresholds
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
