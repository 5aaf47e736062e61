//! Agent tuning parameters.
//!
//! Configuration is permissive: out-of-range values are corrected to the
//! nearest valid value instead of being rejected, so an agent is always in a
//! runnable state. Only reading a config file can fail.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Behavior tuning for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    // --- Chase ---
    /// Distance at which a target is acquired (m).
    pub detection_range: f32,
    /// Distance at which a chased target is dropped (m). Always above `detection_range`.
    pub lost_range: f32,
    /// Distance inside which the agent stops pathing and holds (m).
    pub stop_range: f32,

    // --- Wander ---
    /// Radius around the wander center that points are sampled from (m).
    pub patrol_radius: f32,
    /// Minimum wait between wander refreshes (s).
    pub patrol_wait_min: f32,
    /// Maximum wait between wander refreshes (s).
    pub patrol_wait_max: f32,
    /// Explicit wander center. `None` wanders around the spawn position.
    pub wander_center: Option<Vec3>,

    // --- Animation ---
    /// Smoothing time constant handed to the presentation sink (s).
    pub blend_damp_time: f32,

    // --- Rotation ---
    /// Turn the agent from its velocity here instead of letting the navigator do it.
    pub manual_rotate: bool,
    /// Maximum facing turn rate (deg/s).
    pub rotate_speed_deg_per_sec: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            detection_range: DEFAULT_DETECTION_RANGE,
            lost_range: DEFAULT_LOST_RANGE,
            stop_range: DEFAULT_STOP_RANGE,
            patrol_radius: DEFAULT_PATROL_RADIUS,
            patrol_wait_min: DEFAULT_PATROL_WAIT_MIN,
            patrol_wait_max: DEFAULT_PATROL_WAIT_MAX,
            wander_center: None,
            blend_damp_time: DEFAULT_BLEND_DAMP_TIME,
            manual_rotate: true,
            rotate_speed_deg_per_sec: DEFAULT_ROTATE_SPEED_DEG_PER_SEC,
        }
    }
}

impl AgentConfig {
    /// Parse a JSON document. Missing fields take their defaults; the result is validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AgentConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Return a copy with every invariant restored by clamping.
    pub fn validated(mut self) -> Self {
        let defaults = AgentConfig::default();

        self.detection_range = finite_or(self.detection_range, defaults.detection_range);
        self.lost_range = finite_or(self.lost_range, defaults.lost_range);
        self.stop_range = finite_or(self.stop_range, defaults.stop_range);
        self.patrol_radius = finite_or(self.patrol_radius, defaults.patrol_radius);
        self.patrol_wait_min = finite_or(self.patrol_wait_min, defaults.patrol_wait_min);
        self.patrol_wait_max = finite_or(self.patrol_wait_max, defaults.patrol_wait_max);
        self.blend_damp_time = finite_or(self.blend_damp_time, defaults.blend_damp_time);
        self.rotate_speed_deg_per_sec = finite_or(
            self.rotate_speed_deg_per_sec,
            defaults.rotate_speed_deg_per_sec,
        );
        if self.wander_center.is_some_and(|c| !c.is_finite()) {
            tracing::warn!("non-finite wander center dropped; wandering around spawn");
            self.wander_center = None;
        }

        if self.detection_range < 0.0 {
            tracing::warn!(value = self.detection_range, "detection_range clamped to 0");
            self.detection_range = 0.0;
        }
        if self.lost_range <= self.detection_range {
            let corrected = self.detection_range + LOST_RANGE_MARGIN;
            tracing::warn!(
                value = self.lost_range,
                corrected,
                "lost_range must exceed detection_range"
            );
            self.lost_range = corrected;
        }
        if self.stop_range < 0.0 {
            tracing::warn!(value = self.stop_range, "stop_range clamped to 0");
            self.stop_range = 0.0;
        }
        if self.patrol_radius < MIN_PATROL_RADIUS {
            tracing::warn!(
                value = self.patrol_radius,
                corrected = MIN_PATROL_RADIUS,
                "patrol_radius too small"
            );
            self.patrol_radius = MIN_PATROL_RADIUS;
        }
        if self.patrol_wait_min < 0.0 {
            self.patrol_wait_min = 0.0;
        }
        if self.patrol_wait_max < self.patrol_wait_min {
            tracing::warn!(
                value = self.patrol_wait_max,
                corrected = self.patrol_wait_min,
                "patrol_wait_max below patrol_wait_min"
            );
            self.patrol_wait_max = self.patrol_wait_min;
        }
        if self.rotate_speed_deg_per_sec < 0.0 {
            self.rotate_speed_deg_per_sec = 0.0;
        }
        if self.blend_damp_time < 0.0 {
            self.blend_damp_time = 0.0;
        }

        self
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
