//! Rule-based gesture classification over a frame snapshot.
//!
//! The classifier is a pure function of the buffer contents: it derives a few
//! anchor points from the newest frame, computes kinematic features over
//! trailing windows, and walks a fixed-priority rule cascade. The first
//! matching rule wins. HOT and COLD are quick positional checks and go first;
//! HAPPY, HUNGRY and TIRED all live in the hand-near-torso region and are
//! disambiguated by motion and oscillation magnitude, so their thresholds are
//! tuned to be mutually near-exclusive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::features::{in_zone, motion, oscillations};
use crate::landmark::{
    midpoint, Frame, Landmark, LEFT_ELBOW, LEFT_HIP, LEFT_INDEX, LEFT_SHOULDER, LEFT_WRIST, NOSE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_INDEX, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Recognized gesture vocabulary.
///
/// Classification results are instantaneous judgments; the host debounces
/// them before awarding game credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gesture {
    /// Hand starts at the mouth, then drops away
    Hot,
    /// Self-hug with wrists at opposite shoulders or crossed forearms
    Cold,
    /// Rhythmic rubbing at the chest
    Happy,
    /// Rhythmic rubbing at the belly
    Hungry,
    /// Hand resting near-static at shoulder or chest
    Tired,
}

impl Gesture {
    /// All labels in cascade priority order
    pub const ALL: [Gesture; 5] = [
        Gesture::Hot,
        Gesture::Cold,
        Gesture::Happy,
        Gesture::Hungry,
        Gesture::Tired,
    ];

    /// Upper-case vocabulary string for this label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Hot => "HOT",
            Gesture::Cold => "COLD",
            Gesture::Happy => "HAPPY",
            Gesture::Hungry => "HUNGRY",
            Gesture::Tired => "TIRED",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable thresholds for the rule cascade.
///
/// Distances are normalized image units, windows are frame counts. Defaults
/// come from [`crate::constants`]; the host or a test harness can retune
/// sensitivity here without altering control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum frames of history before any rule is evaluated
    pub min_history_frames: usize,
    /// How far back HOT samples the start pose
    pub hot_lookback_frames: usize,
    /// HOT start radius around the nose
    pub hot_mouth_radius: f32,
    /// HOT required downward travel in y
    pub hot_drop_distance: f32,
    /// COLD wrist-to-opposite-shoulder radius
    pub cold_wrist_shoulder_radius: f32,
    /// COLD wrist-to-wrist radius for crossed forearms
    pub cold_wrist_cross_radius: f32,
    /// COLD elbow-to-elbow radius for crossed forearms
    pub cold_elbow_cross_radius: f32,
    /// HAPPY/HUNGRY dwell radius around chest or belly
    pub rub_zone_radius: f32,
    /// HAPPY/HUNGRY dwell and motion window
    pub rub_dwell_frames: usize,
    /// HAPPY/HUNGRY minimum path length over the window
    pub rub_min_motion: f32,
    /// HAPPY/HUNGRY minimum direction reversals over the window
    pub rub_min_oscillations: u32,
    /// HUNGRY horizontal tolerance around the belly x
    pub hungry_center_tolerance: f32,
    /// TIRED dwell radius around shoulder or chest
    pub tired_zone_radius: f32,
    /// TIRED dwell and motion window
    pub tired_dwell_frames: usize,
    /// TIRED maximum path length over the window
    pub tired_max_motion: f32,
    /// Per-step displacement below this never counts as a reversal
    pub oscillation_noise_floor: f32,
    /// Downward shift from the torso midpoint to the belly anchor
    pub belly_y_offset: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_history_frames: constants::MIN_HISTORY_FRAMES,
            hot_lookback_frames: constants::HOT_LOOKBACK_FRAMES,
            hot_mouth_radius: constants::HOT_MOUTH_RADIUS,
            hot_drop_distance: constants::HOT_DROP_DISTANCE,
            cold_wrist_shoulder_radius: constants::COLD_WRIST_SHOULDER_RADIUS,
            cold_wrist_cross_radius: constants::COLD_WRIST_CROSS_RADIUS,
            cold_elbow_cross_radius: constants::COLD_ELBOW_CROSS_RADIUS,
            rub_zone_radius: constants::RUB_ZONE_RADIUS,
            rub_dwell_frames: constants::RUB_DWELL_FRAMES,
            rub_min_motion: constants::RUB_MIN_MOTION,
            rub_min_oscillations: constants::RUB_MIN_OSCILLATIONS,
            hungry_center_tolerance: constants::HUNGRY_CENTER_TOLERANCE,
            tired_zone_radius: constants::TIRED_ZONE_RADIUS,
            tired_dwell_frames: constants::TIRED_DWELL_FRAMES,
            tired_max_motion: constants::TIRED_MAX_MOTION,
            oscillation_noise_floor: constants::OSCILLATION_NOISE_FLOOR,
            belly_y_offset: constants::BELLY_Y_OFFSET,
        }
    }
}

/// Deterministic rule-cascade classifier.
///
/// Stateless between calls: identical snapshots always produce identical
/// results, and the snapshot is never mutated.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    thresholds: Thresholds,
}

impl GestureClassifier {
    /// Create a classifier with the given thresholds
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in effect for this classifier
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify the current buffer snapshot, oldest frame first.
    ///
    /// Returns `None` when history is too short to disambiguate a gesture
    /// from noise, when the newest frame carries no pose, or when no rule
    /// matches. Rules are evaluated in table order and the first match wins;
    /// a rule whose required landmarks are absent falls through to the next
    /// rule instead of failing the call.
    #[must_use]
    pub fn classify(&self, frames: &[Frame]) -> Option<Gesture> {
        if frames.len() < self.thresholds.min_history_frames {
            return None;
        }
        let current = frames.last()?;
        if current.is_empty() {
            return None;
        }

        // Anchor points derived from the newest frame
        let chest = pair(current, LEFT_SHOULDER, RIGHT_SHOULDER).map(|(l, r)| midpoint(l, r));
        let stomach = pair(current, LEFT_HIP, RIGHT_HIP).map(|(l, r)| midpoint(l, r));
        let belly = match (&chest, &stomach) {
            (Some(c), Some(s)) => {
                let mid = midpoint(c, s);
                Some(Landmark::at(mid.x, mid.y + self.thresholds.belly_y_offset))
            }
            _ => None,
        };

        if self.check_hot(frames, current) {
            return Some(Gesture::Hot);
        }
        if self.check_cold(current) {
            return Some(Gesture::Cold);
        }
        if self.check_happy(frames, chest.as_ref()) {
            return Some(Gesture::Happy);
        }
        if self.check_hungry(frames, current, belly.as_ref()) {
            return Some(Gesture::Hungry);
        }
        if self.check_tired(frames, current, chest.as_ref()) {
            return Some(Gesture::Tired);
        }
        None
    }

    /// HOT: hand starts pinched at the mouth, then drops away.
    ///
    /// Purely positional: the wrist or fingertip sat near the nose a few
    /// frames ago and the wrist is now markedly lower in screen space. No
    /// finger-pinch detection; the pose model is too coarse for it.
    fn check_hot(&self, frames: &[Frame], current: &Frame) -> bool {
        let t = &self.thresholds;
        let past_index = frames.len().saturating_sub(t.hot_lookback_frames);
        let past = &frames[past_index];

        for (wrist, fingertip) in [(LEFT_WRIST, LEFT_INDEX), (RIGHT_WRIST, RIGHT_INDEX)] {
            let Some(past_nose) = past.get(NOSE) else { continue };
            let Some(past_wrist) = past.get(wrist) else { continue };
            let Some(curr_wrist) = current.get(wrist) else { continue };

            let started_near_mouth = past_wrist.distance(past_nose) < t.hot_mouth_radius
                || past
                    .get(fingertip)
                    .map_or(false, |tip| tip.distance(past_nose) < t.hot_mouth_radius);
            // y grows downward, so dropping the hand increases y
            let moved_down = curr_wrist.y > past_wrist.y + t.hot_drop_distance;

            if started_near_mouth && moved_down {
                return true;
            }
        }
        false
    }

    /// COLD: instantaneous self-hug, held momentarily.
    ///
    /// Either wrists at opposite shoulders, or forearms crossed tightly in
    /// front. No motion or dwell requirement.
    fn check_cold(&self, current: &Frame) -> bool {
        let t = &self.thresholds;

        if let (Some((lw, rw)), Some((ls, rs))) = (
            pair(current, LEFT_WRIST, RIGHT_WRIST),
            pair(current, LEFT_SHOULDER, RIGHT_SHOULDER),
        ) {
            if lw.distance(rs) < t.cold_wrist_shoulder_radius && rw.distance(ls) < t.cold_wrist_shoulder_radius {
                return true;
            }
        }
        if let (Some((lw, rw)), Some((le, re))) = (
            pair(current, LEFT_WRIST, RIGHT_WRIST),
            pair(current, LEFT_ELBOW, RIGHT_ELBOW),
        ) {
            if lw.distance(rw) < t.cold_wrist_cross_radius && le.distance(re) < t.cold_elbow_cross_radius {
                return true;
            }
        }
        false
    }

    /// HAPPY: rhythmic rubbing at the chest.
    ///
    /// The wrist must have dwelt in the chest zone for the whole window, so
    /// an approach motion cannot trigger it, and must show both significant
    /// path length and direction reversals, which excludes a static rest.
    fn check_happy(&self, frames: &[Frame], chest: Option<&Landmark>) -> bool {
        let t = &self.thresholds;
        let Some(chest) = chest else { return false };

        for wrist in [LEFT_WRIST, RIGHT_WRIST] {
            if !in_zone(frames, wrist, chest, t.rub_zone_radius, t.rub_dwell_frames) {
                continue;
            }
            if self.is_rubbing(frames, wrist) {
                return true;
            }
        }
        false
    }

    /// HUNGRY: the same rubbing signature as HAPPY, anchored to the belly.
    ///
    /// Extra positional guards keep hands hanging at the sides from passing:
    /// both wrists above their hips, and the rubbing wrist horizontally
    /// centered on the belly.
    fn check_hungry(&self, frames: &[Frame], current: &Frame, belly: Option<&Landmark>) -> bool {
        let t = &self.thresholds;
        let Some(belly) = belly else { return false };
        let Some((lw, rw)) = pair(current, LEFT_WRIST, RIGHT_WRIST) else {
            return false;
        };
        let Some((lh, rh)) = pair(current, LEFT_HIP, RIGHT_HIP) else {
            return false;
        };

        let hands_above_hips = lw.y < lh.y && rw.y < rh.y;
        if !hands_above_hips {
            return false;
        }

        let l_zone = in_zone(frames, LEFT_WRIST, belly, t.rub_zone_radius, t.rub_dwell_frames);
        let r_zone = in_zone(frames, RIGHT_WRIST, belly, t.rub_zone_radius, t.rub_dwell_frames);
        let l_centered = (lw.x - belly.x).abs() < t.hungry_center_tolerance;
        let r_centered = (rw.x - belly.x).abs() < t.hungry_center_tolerance;
        if !((l_zone || r_zone) && (l_centered || r_centered)) {
            return false;
        }

        (l_zone && self.is_rubbing(frames, LEFT_WRIST)) || (r_zone && self.is_rubbing(frames, RIGHT_WRIST))
    }

    /// TIRED: hand resting near-static at shoulder or chest.
    ///
    /// The low-motion branch is what separates this from HAPPY's high-motion
    /// rubbing in the same region. The motion bound stays loose enough to
    /// tolerate breathing and tracking micro-movement.
    fn check_tired(&self, frames: &[Frame], current: &Frame, chest: Option<&Landmark>) -> bool {
        let t = &self.thresholds;

        for (wrist, shoulder) in [(LEFT_WRIST, LEFT_SHOULDER), (RIGHT_WRIST, RIGHT_SHOULDER)] {
            let near_shoulder = current.get(shoulder).map_or(false, |s| {
                in_zone(frames, wrist, s, t.tired_zone_radius, t.tired_dwell_frames)
            });
            let near_chest = chest.map_or(false, |c| {
                in_zone(frames, wrist, c, t.tired_zone_radius, t.tired_dwell_frames)
            });
            if !(near_shoulder || near_chest) {
                continue;
            }
            let resting = motion(frames, wrist, t.tired_dwell_frames).map_or(false, |m| m < t.tired_max_motion);
            if resting {
                return true;
            }
        }
        false
    }

    /// Shared rub signature: continuous motion plus direction reversals over
    /// the rub window
    fn is_rubbing(&self, frames: &[Frame], wrist: usize) -> bool {
        let t = &self.thresholds;
        let moved = motion(frames, wrist, t.rub_dwell_frames).map_or(false, |m| m > t.rub_min_motion);
        let flipped = oscillations(frames, wrist, t.rub_dwell_frames, t.oscillation_noise_floor)
            .map_or(false, |o| o >= t.rub_min_oscillations);
        moved && flipped
    }
}

/// Both landmarks or neither; rules needing a pair fall through on a partial
/// frame
fn pair<'a>(frame: &'a Frame, a: usize, b: usize) -> Option<(&'a Landmark, &'a Landmark)> {
    Some((frame.get(a)?, frame.get(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_display_uses_vocabulary_strings() {
        assert_eq!(Gesture::Hot.to_string(), "HOT");
        assert_eq!(Gesture::Hungry.to_string(), "HUNGRY");
    }

    #[test]
    fn test_gesture_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Gesture::Cold).unwrap(), "\"COLD\"");
        let parsed: Gesture = serde_json::from_str("\"TIRED\"").unwrap();
        assert_eq!(parsed, Gesture::Tired);
    }

    #[test]
    fn test_insufficient_history_returns_none() {
        let classifier = GestureClassifier::default();
        let frames = vec![Frame::new(vec![Landmark::at(0.5, 0.5)]); 9];

        assert_eq!(classifier.classify(&frames), None);
    }

    #[test]
    fn test_empty_current_frame_returns_none() {
        let classifier = GestureClassifier::default();
        let mut frames = vec![Frame::new(vec![Landmark::at(0.5, 0.5)]); 10];
        frames.push(Frame::empty());

        assert_eq!(classifier.classify(&frames), None);
    }

    #[test]
    fn test_short_frames_degrade_to_none() {
        // Frames holding only a nose cannot satisfy any rule, but must not
        // panic either
        let classifier = GestureClassifier::default();
        let frames = vec![Frame::new(vec![Landmark::at(0.5, 0.2)]); 30];

        assert_eq!(classifier.classify(&frames), None);
    }

    #[test]
    fn test_thresholds_default_matches_constants() {
        let t = Thresholds::default();
        assert_eq!(t.min_history_frames, constants::MIN_HISTORY_FRAMES);
        assert_eq!(t.rub_dwell_frames, constants::RUB_DWELL_FRAMES);
        assert!((t.hot_mouth_radius - constants::HOT_MOUTH_RADIUS).abs() < f32::EPSILON);
    }
}
