//! Target acquisition with range hysteresis.

/// Outcome of feeding one distance sample into [`PerceptionState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Acquired,
    Lost,
}

/// Chase / not-chase state over target distance.
///
/// The band between the detection and lost ranges keeps the state from
/// oscillating when the target hovers near a single boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerceptionState {
    is_chasing: bool,
}

impl PerceptionState {
    pub fn is_chasing(&self) -> bool {
        self.is_chasing
    }

    /// Feed the squared distance to the target. Flips at most once per call.
    pub fn update(&mut self, distance_sq: f32, detection_range: f32, lost_range: f32) -> Transition {
        if !self.is_chasing {
            if distance_sq <= detection_range * detection_range {
                self.is_chasing = true;
                return Transition::Acquired;
            }
        } else if distance_sq >= lost_range * lost_range {
            self.is_chasing = false;
            return Transition::Lost;
        }
        Transition::None
    }
}
