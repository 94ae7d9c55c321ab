//! Handle scale transitions.
//!
//! Purely visual: the committed values never wait on a transition, and a new
//! gesture may retarget a transition mid-flight without a visual jump.

use web_time::{Duration, Instant};

/// Duration of the handle grow/shrink transition.
pub const HANDLE_SCALE_DURATION: Duration = Duration::from_millis(300);

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// An ease-in-ease-out interpolation between two handle scales.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTransition {
    from: f32,
    to: f32,
    started: Instant,
}

impl ScaleTransition {
    /// A completed transition resting at `scale`.
    pub fn resting(scale: f32) -> Self {
        // Backdating the start can underflow on platforms whose clock epoch
        // is recent (page load on wasm); fall back to now, which samples the
        // same value since `from == to`.
        let now = Instant::now();
        Self {
            from: scale,
            to: scale,
            started: now.checked_sub(HANDLE_SCALE_DURATION).unwrap_or(now),
        }
    }

    /// The scale being animated towards.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start animating towards `to` from the current interpolated scale, so
    /// retargeting mid-flight never jumps.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
    }

    /// The interpolated scale at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= HANDLE_SCALE_DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / HANDLE_SCALE_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= HANDLE_SCALE_DURATION
    }
}
