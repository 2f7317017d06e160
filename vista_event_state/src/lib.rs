// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_event_state --heading-base-level=0

//! Vista Event State: pointer interaction state machines for canvas views.
//!
//! Canvas views need to tell apart gestures that start with the same pointer
//! press. The state machines in this crate track just enough state across
//! events to classify what happened:
//!
//! - [`click`]: recognize a press and release on empty canvas space at the
//!   same position, as opposed to a drag or a release over an item.
//!
//! The crate performs no hit testing of its own. Callers pass in whether the
//! host reported an item under the pointer, which keeps the machines usable
//! with any scene representation.
//!
//! ### Empty-space clicks
//!
//! ```rust
//! # #[cfg(feature = "click")]
//! # fn example() {
//! use kurbo::Point;
//! use vista_event_state::click::{EmptyClickState, ReleaseOutcome};
//!
//! let mut clicks = EmptyClickState::new();
//!
//! // Press on empty space, release at the same point.
//! clicks.on_press(Point::new(10.0, 20.0), false);
//! let outcome = clicks.on_release(Point::new(10.0, 20.0), false);
//! assert_eq!(outcome, ReleaseOutcome::EmptySpaceClick);
//!
//! // Press on empty space, release somewhere else: a drag.
//! clicks.on_press(Point::new(10.0, 20.0), false);
//! let outcome = clicks.on_release(Point::new(30.0, 20.0), false);
//! assert_eq!(outcome, ReleaseOutcome::Moved);
//! # }
//! ```
//!
//! ## Features
//!
//! - `click`: Enable empty-space click recognition (requires `kurbo` dependency)
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "click")]
pub mod click;
