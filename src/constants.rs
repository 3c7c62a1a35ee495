//! Default thresholds and window lengths for the gesture rules.
//!
//! Distances are in normalized image units, windows in frame counts at the
//! assumed 30 fps capture rate. These defaults seed
//! [`crate::classifier::Thresholds`] and can be retuned through the
//! configuration surface without touching the rule logic.

/// Default sliding-window capacity in frames
pub const DEFAULT_BUFFER_CAPACITY: usize = 30;

/// Minimum history required before any rule is evaluated
pub const MIN_HISTORY_FRAMES: usize = 10;

/// Assumed capture rate in frames per second
pub const DEFAULT_FPS: f64 = 30.0;

/// How far back the HOT rule samples the gesture start pose
pub const HOT_LOOKBACK_FRAMES: usize = 8;

/// HOT: wrist or fingertip must start within this radius of the nose
pub const HOT_MOUTH_RADIUS: f32 = 0.2;

/// HOT: wrist must drop by more than this in y between start and now
pub const HOT_DROP_DISTANCE: f32 = 0.15;

/// COLD: wrist-to-opposite-shoulder radius for the self-hug pose
pub const COLD_WRIST_SHOULDER_RADIUS: f32 = 0.25;

/// COLD: wrist-to-wrist radius for the crossed-hands variant
pub const COLD_WRIST_CROSS_RADIUS: f32 = 0.2;

/// COLD: elbow-to-elbow radius for the crossed-hands variant
pub const COLD_ELBOW_CROSS_RADIUS: f32 = 0.4;

/// HAPPY/HUNGRY: dwell radius around the chest or belly anchor
pub const RUB_ZONE_RADIUS: f32 = 0.3;

/// HAPPY/HUNGRY: dwell and motion window length
pub const RUB_DWELL_FRAMES: usize = 20;

/// HAPPY/HUNGRY: minimum path length over the rub window
pub const RUB_MIN_MOTION: f32 = 0.15;

/// HAPPY/HUNGRY: minimum direction reversals over the rub window
pub const RUB_MIN_OSCILLATIONS: u32 = 2;

/// HUNGRY: wrist x must stay within this of the belly x
pub const HUNGRY_CENTER_TOLERANCE: f32 = 0.2;

/// TIRED: dwell radius around the shoulder or chest anchor
pub const TIRED_ZONE_RADIUS: f32 = 0.35;

/// TIRED: dwell and motion window length
pub const TIRED_DWELL_FRAMES: usize = 15;

/// TIRED: path length over the window must stay below this
pub const TIRED_MAX_MOTION: f32 = 0.10;

/// Per-step displacement below this is jitter and never counts as a reversal
pub const OSCILLATION_NOISE_FLOOR: f32 = 0.01;

/// Downward shift from the chest/stomach midpoint to the belly anchor
pub const BELLY_Y_OFFSET: f32 = 0.1;

/// Default consecutive-tick streak the replay driver requires before
/// announcing a label
pub const DEFAULT_DEBOUNCE_STREAK: usize = 3;
