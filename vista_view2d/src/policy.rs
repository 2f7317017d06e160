// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::zoom::ZoomState;

/// How a zoom request should be delivered to a [`ZoomState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Apply the new zoom on the same input event (wheel input).
    #[default]
    Immediate,
    /// Interpolate from the current zoom to the new zoom over a short
    /// duration (keyboard shortcuts). Scheduling is left to the caller.
    Animated,
}

/// Converts signed input deltas into new zoom values.
///
/// The multiplier for a delta is `1 + sensitivity * delta`. Multipliers at or
/// below zero are replaced with [`ZoomPolicy::MIN_MULTIPLIER`] so a zoom value
/// can never reach zero or flip sign before clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPolicy {
    sensitivity: f64,
}

impl ZoomPolicy {
    /// Zoom change per unit of input delta.
    pub const DEFAULT_SENSITIVITY: f64 = 0.001;

    /// Replacement multiplier used when `1 + sensitivity * delta <= 0`.
    pub const MIN_MULTIPLIER: f64 = 1e-6;

    /// Creates a policy with the given sensitivity.
    #[must_use]
    pub fn new(sensitivity: f64) -> Self {
        Self { sensitivity }
    }

    /// Returns the configured sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Returns the zoom multiplier for an input delta.
    #[must_use]
    pub fn multiplier(&self, delta: f64) -> f64 {
        let factor = 1.0 + self.sensitivity * delta;
        if factor <= 0.0 {
            Self::MIN_MULTIPLIER
        } else {
            factor
        }
    }

    /// Returns the unclamped zoom reached by applying `delta` to `current`.
    ///
    /// Clamping happens when the value is handed to [`ZoomState::set_zoom`],
    /// either directly or on every animation frame.
    #[must_use]
    pub fn target_zoom(&self, current: f64, delta: f64) -> f64 {
        current * self.multiplier(delta)
    }

    /// Applies `delta` to `state` immediately and returns the stored zoom.
    pub fn apply(&self, state: &mut ZoomState, delta: f64) -> f64 {
        let target = self.target_zoom(state.zoom(), delta);
        state.set_zoom(target);
        state.zoom()
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SENSITIVITY)
    }
}
