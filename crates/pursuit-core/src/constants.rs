//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Perception ---

/// Default range at which a target is acquired (m).
pub const DEFAULT_DETECTION_RANGE: f32 = 30.0;

/// Default range beyond which a chased target is lost (m).
pub const DEFAULT_LOST_RANGE: f32 = 35.0;

/// Default range inside which the agent stops and holds (m).
pub const DEFAULT_STOP_RANGE: f32 = 3.0;

/// Gap applied when a configured lost range does not exceed the detection range.
pub const LOST_RANGE_MARGIN: f32 = 1.0;

// --- Wander ---

/// Default wander radius around the wander center (m).
pub const DEFAULT_PATROL_RADIUS: f32 = 15.0;

/// Smallest wander radius accepted by configuration (m).
pub const MIN_PATROL_RADIUS: f32 = 0.1;

/// Default lower bound of the wait between wander refreshes (s).
pub const DEFAULT_PATROL_WAIT_MIN: f32 = 1.5;

/// Default upper bound of the wait between wander refreshes (s).
pub const DEFAULT_PATROL_WAIT_MAX: f32 = 3.5;

/// Sampling attempts per wander refresh before falling back to the center.
pub const WANDER_SAMPLE_ATTEMPTS: u32 = 10;

/// Search distance handed to the surface sampler for each candidate (m).
pub const SURFACE_SAMPLE_TOLERANCE: f32 = 2.0;

// --- Arrival ---

/// Floor for the arrival tolerance when stopping distance is tiny (m).
pub const ARRIVAL_MIN_DISTANCE: f32 = 0.1;

/// Squared speed under which an agent on a path counts as settled (m²/s²).
pub const ARRIVAL_MAX_SPEED_SQ: f32 = 0.01;

// --- Presentation ---

/// Default smoothing time for the locomotion blend (s).
pub const DEFAULT_BLEND_DAMP_TIME: f32 = 0.1;

/// Max speed at or below which the locomotion blend is forced to zero (m/s).
pub const BLEND_MIN_MAX_SPEED: f32 = 1e-3;

/// Default facing turn rate (deg/s).
pub const DEFAULT_ROTATE_SPEED_DEG_PER_SEC: f32 = 540.0;

/// Squared horizontal speed under which facing is left untouched (m²/s²).
pub const FACING_MIN_SPEED_SQ: f32 = 1e-4;

// --- Reference navigator ---

/// Default cruise speed of the kinematic navigator (m/s).
pub const NAV_DEFAULT_SPEED: f32 = 3.5;

/// Default acceleration of the kinematic navigator (m/s²).
pub const NAV_DEFAULT_ACCELERATION: f32 = 8.0;

/// Ticks a path request stays pending before the path becomes active.
pub const NAV_PATH_LATENCY_TICKS: u32 = 2;

/// Distance under which a path is considered fully consumed (m).
pub const NAV_PATH_END_EPSILON: f32 = 1e-3;

// --- Player & props ---

/// Player walking speed (m/s).
pub const PLAYER_SPEED: f32 = 5.0;

/// Collectible spin rate about its forward axis (deg/s).
pub const COLLECTIBLE_SPIN_DEG_PER_SEC: f32 = 100.0;

/// Trigger radius of the player collider (m).
pub const PLAYER_TRIGGER_RADIUS: f32 = 0.5;

/// Trigger radius of an agent collider (m).
pub const AGENT_TRIGGER_RADIUS: f32 = 0.6;

/// Trigger radius of a collectible (m).
pub const COLLECTIBLE_TRIGGER_RADIUS: f32 = 0.5;
