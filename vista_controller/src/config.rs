// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use vista_timing::OverlapPolicy;
use vista_view2d::ZoomPolicy;

use crate::input::{KeyBindings, Modifiers};

/// Tunable behavior of a [`crate::ViewportController`].
///
/// The defaults reproduce the classic graph-view behavior: `Shift` turns the
/// wheel and the up/down keys into zoom, keys pan by 150 units, discrete
/// changes animate over 100 ms, and a click must not move at all.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Scroll offset change per directional key press.
    pub pan_step: f64,
    /// Zoom delta fed to the zoom policy by the up/down zoom keys.
    pub keyboard_zoom_delta: f64,
    /// Duration of keyboard pan and zoom animations.
    pub animation_duration: Duration,
    /// Maximum press/release distance, in view units, still counted as a
    /// click. `0.0` requires exact equality.
    pub click_tolerance: f64,
    /// Modifier set that must be held, exactly, to zoom with the wheel or keys.
    pub zoom_modifiers: Modifiers,
    /// Policy for a new animation on a property that is still animating.
    pub overlap_policy: OverlapPolicy,
    /// Conversion of input deltas into zoom values.
    pub zoom_policy: ZoomPolicy,
    /// Keys that pan the view.
    pub key_bindings: KeyBindings,
}

impl ControllerConfig {
    /// Default [`ControllerConfig::pan_step`].
    pub const DEFAULT_PAN_STEP: f64 = 150.0;
    /// Default [`ControllerConfig::keyboard_zoom_delta`].
    pub const DEFAULT_KEYBOARD_ZOOM_DELTA: f64 = 200.0;
    /// Default [`ControllerConfig::animation_duration`].
    pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(100);

    /// Returns a copy with a different pan step.
    #[must_use]
    pub fn with_pan_step(mut self, pan_step: f64) -> Self {
        self.pan_step = pan_step;
        self
    }

    /// Returns a copy with a different keyboard zoom delta.
    #[must_use]
    pub fn with_keyboard_zoom_delta(mut self, delta: f64) -> Self {
        self.keyboard_zoom_delta = delta;
        self
    }

    /// Returns a copy with a different animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Returns a copy with a different click tolerance.
    #[must_use]
    pub fn with_click_tolerance(mut self, tolerance: f64) -> Self {
        self.click_tolerance = tolerance;
        self
    }

    /// Returns a copy with a different zoom modifier set.
    #[must_use]
    pub fn with_zoom_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.zoom_modifiers = modifiers;
        self
    }

    /// Returns a copy with a different overlap policy.
    #[must_use]
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Returns a copy with a different zoom policy.
    #[must_use]
    pub fn with_zoom_policy(mut self, policy: ZoomPolicy) -> Self {
        self.zoom_policy = policy;
        self
    }

    /// Returns a copy with different key bindings.
    #[must_use]
    pub fn with_key_bindings(mut self, bindings: KeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pan_step: Self::DEFAULT_PAN_STEP,
            keyboard_zoom_delta: Self::DEFAULT_KEYBOARD_ZOOM_DELTA,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            click_tolerance: 0.0,
            zoom_modifiers: Modifiers::SHIFT,
            overlap_policy: OverlapPolicy::default(),
            zoom_policy: ZoomPolicy::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}
