//! Kinematic feature primitives over a frame snapshot.
//!
//! Each primitive reads a trailing window of the snapshot for one landmark
//! index. Windows clamp to the start of history when the buffer is still
//! filling. A frame inside the window that lacks the requested landmark makes
//! the feature unavailable (`None`, or `false` for the dwell test) so the
//! calling rule falls through instead of failing the whole classification.

use nalgebra::Vector2;

use crate::landmark::{Frame, Landmark};

/// Trailing `history` frames of the snapshot, clamped to its start
fn trailing(frames: &[Frame], history: usize) -> &[Frame] {
    &frames[frames.len().saturating_sub(history)..]
}

/// Total path length of a landmark over the trailing window.
///
/// This sums per-step distances, so it measures how much the limb moved, not
/// how far it ended up from where it started. Returns `None` when any frame
/// in the window lacks the landmark.
#[must_use]
pub fn motion(frames: &[Frame], index: usize, history: usize) -> Option<f32> {
    let recent = trailing(frames, history);
    let mut total = 0.0;
    for pair in recent.windows(2) {
        let prev = pair[0].get(index)?;
        let curr = pair[1].get(index)?;
        total += prev.distance(curr);
    }
    Some(total)
}

/// Net displacement of a landmark over the trailing window.
///
/// End position minus start position; smooth travel and oscillation in place
/// produce very different vectors for the same path length.
#[must_use]
pub fn direction(frames: &[Frame], index: usize, history: usize) -> Option<Vector2<f32>> {
    let recent = trailing(frames, history);
    let start = recent.first()?.get(index)?;
    let end = recent.last()?.get(index)?;
    Some(Vector2::new(end.x - start.x, end.y - start.y))
}

/// Direction reversals of a landmark over the trailing window.
///
/// A reversal is a negative dot product between consecutive per-step
/// displacement vectors. Steps shorter than `noise_floor` are jitter: they
/// neither count as reversals nor replace the reference vector, so slow
/// rubbing with noisy sampling still registers its true flips.
#[must_use]
pub fn oscillations(frames: &[Frame], index: usize, history: usize, noise_floor: f32) -> Option<u32> {
    let recent = trailing(frames, history);
    let mut flips = 0;
    let mut last_step: Option<Vector2<f32>> = None;

    for pair in recent.windows(2) {
        let prev = pair[0].get(index)?;
        let curr = pair[1].get(index)?;
        let step = Vector2::new(curr.x - prev.x, curr.y - prev.y);

        if step.norm() < noise_floor {
            continue;
        }
        if let Some(last) = last_step {
            if step.dot(&last) < 0.0 {
                flips += 1;
            }
        }
        last_step = Some(step);
    }

    Some(flips)
}

/// Dwell test: the landmark stayed within `radius` of `target` for the whole
/// trailing window.
///
/// Requiring every frame, not just the newest, distinguishes a limb that has
/// arrived and stayed from one passing through the zone. A missing landmark
/// anywhere in the window fails the test.
#[must_use]
pub fn in_zone(frames: &[Frame], index: usize, target: &Landmark, radius: f32, history: usize) -> bool {
    trailing(frames, history)
        .iter()
        .all(|frame| frame.get(index).map_or(false, |lm| lm.distance(target) < radius))
}
