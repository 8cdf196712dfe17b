#![forbid(unsafe_code)]

//! Damped harmonic oscillator used to smooth the scroll progress bar.
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! Integration is semi-implicit Euler; large frame deltas are subdivided
//! into steps of at most 4 ms so a tab returning from the background does
//! not overshoot.
//!
//! # Invariants
//!
//! 1. `value()` is the position clamped to [0.0, 1.0].
//! 2. A spring at rest stays at rest until `set_target()` or `impulse()`.
//! 3. Stiffness is at least 0.1 and damping at least 0.0.
//! 4. One `advance()` integrates at most 100 ms, so its cost is bounded
//!    whatever delta the host reports.

use web_time::Duration;

const MAX_STEP_SECS: f64 = 0.004;
const MAX_ADVANCE_SECS: f64 = 0.1;
const DEFAULT_REST_THRESHOLD: f64 = 0.001;
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;
const MIN_STIFFNESS: f64 = 0.1;

/// A damped spring interpolating toward a target.
///
/// ```
/// use folio_runtime::Spring;
/// use std::time::Duration;
///
/// let mut spring = Spring::scroll_progress();
/// spring.set_target(1.0);
/// for _ in 0..240 {
///     spring.advance(Duration::from_millis(16));
/// }
/// assert!((spring.position() - 1.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring resting at `initial`, heading for `target`.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            stiffness: 170.0,
            damping: 26.0,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: initial == target,
        }
    }

    /// The page's scroll indicator: stiffness 100, damping 30, rest delta 0.001.
    #[must_use]
    pub fn scroll_progress() -> Self {
        Self::new(0.0, 0.0)
            .with_stiffness(100.0)
            .with_damping(30.0)
            .with_rest_threshold(0.001)
    }

    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    #[must_use]
    pub fn with_rest_threshold(mut self, threshold: f64) -> Self {
        self.rest_threshold = threshold.abs();
        self
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Position clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Change the target. Wakes the spring when the change is noticeable.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.at_rest = false;
        }
    }

    pub fn impulse(&mut self, velocity_delta: f64) {
        self.velocity += velocity_delta;
        self.at_rest = false;
    }

    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Integrate over `dt`, capped at 100 ms.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64().min(MAX_ADVANCE_SECS);
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }
        if (self.position - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::scroll_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::scroll_progress();
        assert!(spring.is_at_rest());
        spring.set_target(0.5);
        assert!(!spring.is_at_rest());
        for _ in 0..600 {
            spring.advance(Duration::from_millis(16));
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 0.5);
    }

    #[test]
    fn overdamped_scroll_spring_does_not_overshoot() {
        let mut spring = Spring::scroll_progress();
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.advance(Duration::from_millis(16));
            assert!(spring.position() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn tiny_target_change_keeps_rest() {
        let mut spring = Spring::scroll_progress();
        spring.set_target(0.0005);
        assert!(spring.is_at_rest());
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn large_dt_is_subdivided() {
        let mut spring = Spring::new(0.0, 1.0).with_stiffness(400.0).with_damping(10.0);
        spring.advance(Duration::from_secs(2));
        assert!(spring.position().is_finite());
        assert!((0.0..=1.0).contains(&spring.value()));
    }

    #[test]
    fn huge_dt_is_capped() {
        let mut capped = Spring::scroll_progress();
        capped.set_target(1.0);
        capped.advance(Duration::MAX);
        let mut reference = Spring::scroll_progress();
        reference.set_target(1.0);
        reference.advance(Duration::from_millis(100));
        assert_eq!(capped, reference);
    }
}
