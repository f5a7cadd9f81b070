//! Frame-sampled scroll animation for strips that cannot smooth-scroll natively.
//!
//! The [`crate::Controller`] writes one sampled offset per frame with
//! [`ScrollBehavior::Instant`](carousel::ScrollBehavior::Instant), so every write lands
//! exactly and the carousel resolves it like any user scroll.

/// A scroll from one offset to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    /// Never zero; [`Tween::new`] bumps it to 1 ms.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear time progress in `[0, 1]`, before easing.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).min(1.0)
    }

    /// Offset to write at `now_ms`. Exactly `to` once the duration has elapsed, so the
    /// last frame always hits the item's leading edge.
    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));
        let (from, to) = (self.from as f64, self.to as f64);
        (from + (to - from) * eased).round().max(0.0) as u64
    }

    /// Heads for `new_to` from wherever the strip is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let from = self.sample(now_ms);
        *self = Self::new(from, new_to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curve applied to [`Tween::progress`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Fast start, long soft landing; close to `cubic-bezier(0.16, 1, 0.3, 1)`.
    #[default]
    EaseOutExpo,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to eased progress; both ends are fixed points.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            Self::EaseOutExpo if t >= 1.0 => 1.0,
            Self::EaseOutExpo => 1.0 - 2f64.powf(-10.0 * t),
        }
    }
}
