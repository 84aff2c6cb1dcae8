//! Scalar tween — one animated value advanced by wall-clock deltas.

use super::easing::Easing;

/// Repeat behavior after a tween's duration elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and hold the end value
    Once,
    /// Wrap back to the start every cycle
    Loop,
    /// Bounce between start and end forever
    Yoyo,
}

/// A scalar value animated from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing, repeat: Repeat) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            easing,
            repeat,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        let cycles = self.elapsed / self.duration;
        let t = match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Loop => cycles.fract(),
            Repeat::Yoyo => {
                let phase = cycles.fract();
                // Even cycles run forward, odd cycles run back
                if (cycles as u64) % 2 == 0 {
                    phase
                } else {
                    1.0 - phase
                }
            }
        };
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// End value this tween settles on (meaningful for `Once`).
    pub fn end_value(&self) -> f32 {
        self.to
    }

    /// True once a `Once` tween has played out. Repeating tweens never
    /// finish.
    pub fn finished(&self) -> bool {
        self.repeat == Repeat::Once && self.elapsed >= self.duration
    }
}

#[cfg(test)]
#[path = "tween_tests.rs"]
mod tests;
