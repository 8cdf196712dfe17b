#![forbid(unsafe_code)]

//! Scroll-reveal bookkeeping.
//!
//! The host reports how much of each tracked element is inside the
//! viewport. An element is revealed the first time its visible ratio
//! reaches its threshold and stays revealed afterwards; scrolling back out
//! never replays the entrance.

use std::collections::HashMap;

use tracing::trace;

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Entrance effect, rendered as CSS custom properties on the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Vertical offset the element slides in from, in pixels.
    pub offset_px: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    /// Section-level fade up.
    pub const SECTION: Self = Self {
        offset_px: 20.0,
        duration_ms: 600,
        delay_ms: 0,
    };

    /// Same effect, started `index * step_ms` later. Used for card grids.
    #[must_use]
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay_ms: self.delay_ms.saturating_add(index.saturating_mul(step_ms)),
            ..self
        }
    }

    /// Inline style for the element.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--reveal-offset:{}px;--reveal-duration:{}ms;--reveal-delay:{}ms",
            self.offset_px, self.duration_ms, self.delay_ms
        )
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::SECTION
    }
}

#[derive(Debug, Clone, Copy)]
struct Tracked {
    threshold: f32,
    revealed: bool,
}

/// Once-only visibility tracking for page elements.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    tracked: HashMap<String, Tracked>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `id`. Re-registering keeps the revealed state and updates the
    /// threshold. Thresholds are clamped to [0, 1].
    pub fn register(&mut self, id: &str, threshold: f32) {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        self.tracked
            .entry(id.to_owned())
            .and_modify(|t| t.threshold = threshold)
            .or_insert(Tracked {
                threshold,
                revealed: false,
            });
    }

    /// Report the visible ratio of `id`. Returns `true` only on the report
    /// that reveals it. Unknown ids are ignored.
    pub fn report(&mut self, id: &str, ratio: f32) -> bool {
        let Some(tracked) = self.tracked.get_mut(id) else {
            trace!(id, "visibility report for untracked element");
            return false;
        };
        if tracked.revealed || !ratio.is_finite() || ratio < tracked.threshold {
            return false;
        }
        tracked.revealed = true;
        trace!(id, ratio, "element revealed");
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.tracked.get(id).is_some_and(|t| t.revealed)
    }

    #[must_use]
    pub fn is_tracked(&self, id: &str) -> bool {
        self.tracked.contains_key(id)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.tracked.values().filter(|t| t.revealed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_at_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.register("about", 0.1);
        assert!(!tracker.report("about", 0.05));
        assert!(!tracker.is_revealed("about"));
        assert!(tracker.report("about", 0.1));
        assert!(!tracker.report("about", 1.0));
        assert!(!tracker.report("about", 0.0));
        assert!(tracker.is_revealed("about"));
    }

    #[test]
    fn unknown_ids_and_nan_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.report("ghost", 1.0));
        tracker.register("skills", 0.5);
        assert!(!tracker.report("skills", f32::NAN));
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn reregister_keeps_state() {
        let mut tracker = RevealTracker::new();
        tracker.register("a", 0.2);
        assert!(tracker.report("a", 0.3));
        tracker.register("a", 0.9);
        assert!(tracker.is_revealed("a"));
    }

    #[test]
    fn staggered_entrance_vars() {
        let e = Entrance::SECTION.staggered(3, 100);
        assert_eq!(e.delay_ms, 300);
        assert_eq!(
            e.css_vars(),
            "--reveal-offset:20px;--reveal-duration:600ms;--reveal-delay:300ms"
        );
    }
}
