//! Gesture recognition core for a sign-vocabulary trainer.
//!
//! This library turns a live stream of body-pose landmark frames into
//! discrete, high-confidence gesture events from a closed vocabulary
//! (HOT, COLD, HAPPY, HUNGRY, TIRED). It consists of:
//! 1. A fixed-capacity sliding window over the most recent landmark frames
//! 2. Kinematic feature primitives (path length, net displacement,
//!    oscillation count, dwell tests) over trailing windows
//! 3. A deterministic rule cascade with tuned thresholds; first match wins
//!
//! The upstream pose estimator and the host game UI are external
//! collaborators: frames come in as opaque landmark arrays under the
//! `BlazePose` 33-point schema, labels go out as `Option<Gesture>` once per
//! tick. The core never errors on malformed input; missing history, empty
//! frames and absent landmarks all degrade to "no gesture".
//!
//! # Examples
//!
//! ## Per-tick recognition
//!
//! ```
//! use gesture_recognition::config::Config;
//! use gesture_recognition::landmark::Frame;
//! use gesture_recognition::recognizer::GestureRecognizer;
//!
//! let config = Config::default();
//! config.validate().expect("default config is valid");
//! let mut recognizer = GestureRecognizer::new(&config);
//!
//! // One frame per capture tick; an empty frame is a valid no-detection tick
//! let label = recognizer.process(Frame::empty());
//! assert!(label.is_none());
//! ```
//!
//! ## Driving buffer and classifier directly
//!
//! ```
//! use gesture_recognition::classifier::GestureClassifier;
//! use gesture_recognition::frame_buffer::FrameBuffer;
//! use gesture_recognition::landmark::{Frame, Landmark};
//!
//! let mut buffer = FrameBuffer::new(30);
//! let classifier = GestureClassifier::default();
//!
//! for _ in 0..30 {
//!     buffer.push(Frame::new(vec![Landmark::at(0.5, 0.2)]));
//!     let label = classifier.classify(buffer.snapshot());
//!     assert!(label.is_none()); // a lone static nose matches no rule
//! }
//! ```

/// Landmark and frame types under the skeletal pose schema
pub mod landmark;

/// Fixed-capacity FIFO sliding window of frames
pub mod frame_buffer;

/// Kinematic feature primitives over a frame snapshot
pub mod features;

/// Gesture vocabulary, thresholds and the rule cascade
pub mod classifier;

/// Per-session facade wiring buffer and classifier
pub mod recognizer;

/// Configuration management
pub mod config;

/// Default thresholds and window lengths
pub mod constants;

/// Error types and result handling
pub mod error;

pub use classifier::{Gesture, GestureClassifier, Thresholds};
pub use error::{Error, Result};
pub use frame_buffer::FrameBuffer;
pub use landmark::{Frame, Landmark};
pub use recognizer::GestureRecognizer;
