// SPDX-License-Identifier: MPL-2.0
//! Time-based transitions for fades, geometry and pan margins.
//!
//! A [`Tween`] never runs on its own: it stores where it started, where it is
//! heading and when, and is sampled with the instant of the latest frame
//! tick. Retargeting mid-flight starts the new transition from the value
//! currently shown, so interrupted animations never jump.

use crate::ui::viewer::fit::Geometry;
use iced::Vector;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Values that can be interpolated.
pub trait Lerp: Copy {
    /// Interpolates towards `to`; `t` is in `[0, 1]`.
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vector {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vector::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

impl Lerp for Geometry {
    fn lerp(self, to: Self, t: f32) -> Self {
        Geometry {
            width: self.width.lerp(to.width, t),
            height: self.height.lerp(to.height, t),
            top: self.top.lerp(to.top, t),
            left: self.left.lerp(to.left, t),
        }
    }
}

/// Slow-fast-slow easing curve.
#[must_use]
pub fn swing(progress: f32) -> f32 {
    0.5 - (PI * progress).cos() / 2.0
}

/// A value moving from one state to another over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T> {
    from: T,
    to: T,
    started: Instant,
    duration: Duration,
}

impl<T: Lerp> Tween<T> {
    /// A tween resting at `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Starts moving towards `to` from the value shown at `now`.
    ///
    /// A zero duration jumps straight to `to`.
    pub fn animate_to(&mut self, now: Instant, to: T, duration: Duration) {
        if duration.is_zero() {
            self.snap_to(to);
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
        self.duration = duration;
    }

    pub fn snap_to(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.duration = Duration::ZERO;
    }

    /// Completes the running transition immediately.
    pub fn finish(&mut self) {
        self.snap_to(self.to);
    }

    /// Eased progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let linear = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        swing(linear)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, progress)
        }
    }

    /// Where the tween ends up.
    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now < self.started + self.duration
    }
}

impl<T: Lerp + Default> Default for Tween<T> {
    fn default() -> Self {
        Self::settled(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn swing_eases_between_bounds() {
        assert_abs_diff_eq!(swing(0.0), 0.0);
        assert_abs_diff_eq!(swing(0.5), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(swing(1.0), 1.0);
        assert!(swing(0.1) < 0.1, "starts slow");
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0_f32);
        tween.animate_to(start, 10.0, Duration::from_millis(200));

        assert!(tween.is_animating(start));
        assert_abs_diff_eq!(tween.value_at(start), 0.0);
        assert_abs_diff_eq!(
            tween.value_at(start + Duration::from_millis(100)),
            5.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(tween.value_at(start + Duration::from_millis(200)), 10.0);
        assert!(!tween.is_animating(start + Duration::from_millis(250)));
    }

    #[test]
    fn zero_duration_snaps() {
        let now = Instant::now();
        let mut tween = Tween::settled(Geometry::default());
        let target = Geometry {
            width: 100.0,
            height: 50.0,
            top: 10.0,
            left: 20.0,
        };
        tween.animate_to(now, target, Duration::ZERO);

        assert!(!tween.is_animating(now));
        assert_eq!(tween.value_at(now), target);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0_f32);
        tween.animate_to(start, 10.0, Duration::from_millis(100));

        let midway = start + Duration::from_millis(50);
        tween.animate_to(midway, 0.0, Duration::from_millis(100));
        assert_abs_diff_eq!(tween.value_at(midway), 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(tween.target(), 0.0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let now = Instant::now();
        let mut tween = Tween::settled(Vector::new(0.0, 0.0));
        tween.animate_to(now, Vector::new(-30.0, 12.0), Duration::from_secs(1));
        tween.finish();

        assert!(!tween.is_animating(now));
        assert_eq!(tween.value_at(now), Vector::new(-30.0, 12.0));
    }
}
