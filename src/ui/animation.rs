//! Timing helpers for the counters and staggered entrances.

use std::time::Duration;

/// Frame interval for script-driven animations (~60 fps).
pub const FRAME: Duration = Duration::from_millis(16);

pub fn ease_out_power2(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(2)
}

pub fn ease_out_power3(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Power2,
    Power3,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Power2 => ease_out_power2(t),
            Easing::Power3 => ease_out_power3(t),
        }
    }
}

/// Counter value after `elapsed` of a `duration`-long count from zero to `target`,
/// snapped to whole numbers.
pub fn counter_frame(target: u64, elapsed: Duration, duration: Duration, easing: Easing) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (target as f64 * easing.apply(progress)).round() as u64
}

/// Inline style delaying the n-th element of a staggered group.
pub fn stagger_style(index: usize, step: Duration) -> String {
    let delay = step.as_millis() * index as u128;
    format!("animation-delay: {delay}ms;")
}
