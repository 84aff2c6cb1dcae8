//! Easing curves for tweened animation.

use std::f32::consts::PI;

/// Normalized easing curve: maps t in [0,1] to an eased value in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Sinusoidal ease in and out
    SineInOut,
    /// Quadratic ease in and out
    Power2InOut,
    /// Quadratic ease out
    Power2Out,
}

impl Easing {
    /// Look up a curve by its timeline-config name. Unknown names fall
    /// back to linear ("none" is an explicit alias for it).
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" | "none" => Easing::Linear,
            "sine.inOut" => Easing::SineInOut,
            "power2.inOut" => Easing::Power2InOut,
            "power2.out" => Easing::Power2Out,
            _ => Easing::Linear,
        }
    }

    /// Apply the curve to a normalized time value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[cfg(test)]
#[path = "easing_tests.rs"]
mod tests;
