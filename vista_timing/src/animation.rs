// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Identifier of a scheduled animation, unique within its [`crate::Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Linear interpolation of one numeric property over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation<T> {
    id: AnimationId,
    target: T,
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl<T: Copy> Animation<T> {
    pub(crate) fn new(id: AnimationId, target: T, from: f64, to: f64, duration: Duration) -> Self {
        Self {
            id,
            target,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the identifier assigned when the animation was scheduled.
    #[must_use]
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Returns the animated property key.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns the start value.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// Returns the end value.
    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.to
    }

    /// Returns the total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the time advanced so far, capped at the duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns progress in `0.0..=1.0`. Zero-length animations are complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the interpolated value at the current progress.
    ///
    /// The end value is returned exactly once the animation is finished.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress()
    }

    pub(crate) fn advance(&mut self, dt: Duration) -> Sample<T> {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        Sample {
            id: self.id,
            target: self.target,
            value: self.value(),
            finished: self.is_finished(),
        }
    }
}

/// Value produced for one animation by a [`crate::Timeline`] frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<T> {
    /// Animation that produced the value.
    pub id: AnimationId,
    /// Property the value belongs to.
    pub target: T,
    /// Interpolated property value for this frame.
    pub value: f64,
    /// `true` on the last sample of the animation.
    pub finished: bool,
}
