//! Landmark and frame types for the skeletal pose schema.
//!
//! Frames follow the `BlazePose` 33-point topology. Only the indices listed
//! below are consulted by the gesture rules; the rest are carried through
//! untouched. A frame may be empty when the upstream detector produced no
//! pose for that tick.

use serde::{Deserialize, Serialize};

/// Nose tip
pub const NOSE: usize = 0;
/// Left shoulder
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow
pub const LEFT_ELBOW: usize = 13;
/// Right elbow
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist
pub const LEFT_WRIST: usize = 15;
/// Right wrist
pub const RIGHT_WRIST: usize = 16;
/// Left index fingertip
pub const LEFT_INDEX: usize = 19;
/// Right index fingertip
pub const RIGHT_INDEX: usize = 20;
/// Left hip
pub const LEFT_HIP: usize = 23;
/// Right hip
pub const RIGHT_HIP: usize = 24;

/// Number of landmarks in a full pose frame
pub const NUM_POSE_LANDMARKS: usize = 33;

/// A single tracked body point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to frame width
    pub x: f32,
    /// Vertical position, normalized to frame height (y grows downward)
    pub y: f32,
    /// Depth estimate, unused by the gesture rules
    #[serde(default)]
    pub z: f32,
    /// Detection confidence, unused by the gesture rules
    #[serde(default = "default_visibility")]
    pub visibility: f32,
}

fn default_visibility() -> f32 {
    1.0
}

impl Landmark {
    /// Create a landmark with full position and confidence data
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Create a landmark at an (x, y) position with neutral z and visibility
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// Euclidean distance to another landmark in the (x, y) plane.
    ///
    /// z is ignored throughout the gesture rules; the heuristics trade 3D
    /// fidelity for robustness to depth noise.
    #[must_use]
    pub fn distance(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Midpoint of two landmarks in the (x, y) plane
#[must_use]
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    Landmark::at((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// One capture tick's full set of body landmarks.
///
/// Serializes as a plain landmark array, matching the upstream pose
/// pipeline's per-tick output. An empty frame is a valid no-detection tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    landmarks: Vec<Landmark>,
}

impl Frame {
    /// Create a frame from a landmark sequence
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Create an empty frame representing a no-detection tick
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Landmark at a schema index, or `None` if the frame is too short
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Number of landmarks in this frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True when the frame carries no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterate over the landmarks in schema order
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }
}

impl From<Vec<Landmark>> for Frame {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}
