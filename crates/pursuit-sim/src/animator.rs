//! Damped blend parameter standing in for an animation controller.

use pursuit_core::nav::PresentationSink;

/// A single smoothed blend value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlendAnimator {
    value: f32,
}

impl BlendAnimator {
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl PresentationSink for BlendAnimator {
    fn set_blend(&mut self, value: f32, damp_time: f32, dt: f32) {
        let target = value.clamp(0.0, 1.0);
        if damp_time <= 0.0 {
            self.value = target;
            return;
        }
        let k = 1.0 - (-dt.max(0.0) / damp_time).exp();
        self.value += (target - self.value) * k;
    }
}
