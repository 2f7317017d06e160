// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Empty-space click recognition: tell a plain click on empty canvas space
//! apart from a drag or a release over an item.
//!
//! ## Usage
//!
//! 1) On a primary-button press, call [`EmptyClickState::on_press`] with the
//!    viewport-local position and whether the host found an item there.
//! 2) On the matching release, call [`EmptyClickState::on_release`] the same
//!    way and act on the returned [`ReleaseOutcome`].
//!
//! The state machine has two states. It enters *pressed* only for a press over
//! empty space and always returns to *idle* on release. A release produces
//! [`ReleaseOutcome::EmptySpaceClick`] only when no item is under the pointer
//! and the release position is within the configured tolerance of the press
//! position. The default tolerance is `0.0`, which requires exact equality.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vista_event_state::click::{EmptyClickState, ReleaseOutcome};
//!
//! let mut clicks = EmptyClickState::with_tolerance(2.0);
//!
//! clicks.on_press(Point::new(5.0, 5.0), false);
//! assert!(clicks.is_pressed());
//!
//! // Sub-pixel jitter stays within tolerance.
//! let outcome = clicks.on_release(Point::new(5.5, 4.5), false);
//! assert_eq!(outcome, ReleaseOutcome::EmptySpaceClick);
//! assert!(!clicks.is_pressed());
//! ```

use kurbo::Point;

/// Classification of a primary-button release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Press and release happened on empty space at the same position.
    EmptySpaceClick,
    /// The pointer moved between press and release (a drag).
    Moved,
    /// The release happened over an item.
    OverItem,
    /// No press over empty space was being tracked.
    NotPressed,
}

/// Tracks a primary-button press over empty space until its release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmptyClickState {
    press_pos: Option<Point>,
    tolerance: f64,
}

impl EmptyClickState {
    /// Creates an idle state machine requiring exact press/release equality.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle state machine accepting releases within `tolerance`
    /// view units (Euclidean distance) of the press position.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            press_pos: None,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Returns the click tolerance in view units.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sets the click tolerance. Negative values are treated as `0.0`.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance.max(0.0);
    }

    /// Handles a primary-button press.
    ///
    /// Starts tracking when `over_item` is `false` and returns `true` in that
    /// case. A press over an item resets the machine to idle, so a later
    /// release never reports a click for it.
    pub fn on_press(&mut self, pos: Point, over_item: bool) -> bool {
        if over_item {
            self.press_pos = None;
            return false;
        }
        self.press_pos = Some(pos);
        true
    }

    /// Handles a primary-button release and returns to idle.
    pub fn on_release(&mut self, pos: Point, over_item: bool) -> ReleaseOutcome {
        let Some(press_pos) = self.press_pos.take() else {
            return ReleaseOutcome::NotPressed;
        };
        if over_item {
            return ReleaseOutcome::OverItem;
        }
        if self.within_tolerance(press_pos, pos) {
            log::trace!("empty-space click at {pos:?}");
            ReleaseOutcome::EmptySpaceClick
        } else {
            ReleaseOutcome::Moved
        }
    }

    /// Drops any tracked press without classifying it.
    pub fn cancel(&mut self) {
        self.press_pos = None;
    }

    /// Returns `true` while a press over empty space is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Returns the recorded press position, if any.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        self.press_pos
    }

    fn within_tolerance(&self, press: Point, release: Point) -> bool {
        if self.tolerance == 0.0 {
            return press == release;
        }
        (release - press).hypot2() <= self.tolerance * self.tolerance
    }
}
