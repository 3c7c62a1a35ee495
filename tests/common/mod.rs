//! Shared pose-building helpers for integration tests.

#![allow(dead_code)]

use gesture_recognition::landmark::{
    Frame, Landmark, LEFT_ELBOW, LEFT_HIP, LEFT_INDEX, LEFT_SHOULDER, LEFT_WRIST, NOSE,
    NUM_POSE_LANDMARKS, RIGHT_ELBOW, RIGHT_HIP, RIGHT_INDEX, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Builder for full 33-landmark frames around a neutral standing pose.
///
/// The neutral pose keeps hands hanging low at the sides, outside every rule
/// zone, so scenarios only move the joints they care about.
#[derive(Clone)]
pub struct PoseBuilder {
    landmarks: Vec<Landmark>,
}

impl PoseBuilder {
    pub fn neutral() -> Self {
        let mut landmarks = vec![Landmark::at(0.5, 0.5); NUM_POSE_LANDMARKS];
        landmarks[NOSE] = Landmark::at(0.5, 0.2);
        landmarks[LEFT_SHOULDER] = Landmark::at(0.6, 0.35);
        landmarks[RIGHT_SHOULDER] = Landmark::at(0.4, 0.35);
        landmarks[LEFT_ELBOW] = Landmark::at(0.65, 0.55);
        landmarks[RIGHT_ELBOW] = Landmark::at(0.35, 0.55);
        landmarks[LEFT_WRIST] = Landmark::at(0.72, 0.8);
        landmarks[RIGHT_WRIST] = Landmark::at(0.28, 0.8);
        landmarks[LEFT_INDEX] = Landmark::at(0.74, 0.82);
        landmarks[RIGHT_INDEX] = Landmark::at(0.26, 0.82);
        landmarks[LEFT_HIP] = Landmark::at(0.57, 0.7);
        landmarks[RIGHT_HIP] = Landmark::at(0.43, 0.7);
        Self { landmarks }
    }

    pub fn with(mut self, index: usize, x: f32, y: f32) -> Self {
        self.landmarks[index] = Landmark::at(x, y);
        self
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.landmarks.clone())
    }
}

/// A run of identical neutral-pose frames
pub fn neutral_frames(count: usize) -> Vec<Frame> {
    let pose = PoseBuilder::neutral();
    (0..count).map(|_| pose.frame()).collect()
}
