//! Diagnostic wire shapes for an agent's ranges.

use glam::Vec3;

use pursuit_core::config::AgentConfig;
use pursuit_core::state::{DebugSphere, OverlayColor};

/// Detection range (yellow) and stop range (red) around the agent, plus the
/// patrol area (gray) around the wander center.
pub fn range_spheres(position: Vec3, wander_center: Vec3, config: &AgentConfig) -> [DebugSphere; 3] {
    [
        DebugSphere {
            center: position,
            radius: config.detection_range,
            color: OverlayColor::Yellow,
        },
        DebugSphere {
            center: position,
            radius: config.stop_range,
            color: OverlayColor::Red,
        },
        DebugSphere {
            center: wander_center,
            radius: config.patrol_radius,
            color: OverlayColor::Gray,
        },
    ]
}
