// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_controller --heading-base-level=0

//! Vista Controller: the interactive viewport controller of a zoomable canvas.
//!
//! [`ViewportController`] turns pointer, keyboard and wheel input into pan and
//! zoom changes of a host canvas:
//!
//! - **Zoom**: the user zoom and the application zoom from
//!   [`vista_view2d::ZoomState`] are combined into a scale-only transform and
//!   pushed to the host whenever either changes. `Shift` + wheel zooms
//!   immediately; `Shift` + up/down zooms with a short animation.
//! - **Pan**: directional keys animate the host scroll offsets by a fixed step.
//! - **Empty-space clicks**: a primary press and release at the same position
//!   with nothing under the pointer produces
//!   [`Notification::EmptySpaceClicked`]. Pointer events are always forwarded
//!   to the host's own handling as well.
//!
//! The controller does no rendering, layout, selection or hit testing. Those
//! belong to the host, reached through the [`CanvasHost`] trait. Animations
//! run on a [`vista_timing::Timeline`] that the host advances once per frame
//! with [`ViewportController::advance`].
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Affine, Point};
//! use vista_controller::{
//!     Axis, CanvasHost, Key, KeyEvent, Modifiers, ViewportController, WheelEvent,
//! };
//!
//! #[derive(Default)]
//! struct Canvas {
//!     transform: Affine,
//!     scroll: (f64, f64),
//! }
//!
//! impl CanvasHost for Canvas {
//!     fn hit_test(&self, _point: Point) -> bool {
//!         false
//!     }
//!     fn apply_transform(&mut self, transform: Affine) {
//!         self.transform = transform;
//!     }
//!     fn scroll_offset(&self, axis: Axis) -> f64 {
//!         match axis {
//!             Axis::Horizontal => self.scroll.0,
//!             Axis::Vertical => self.scroll.1,
//!         }
//!     }
//!     fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
//!         match axis {
//!             Axis::Horizontal => self.scroll.0 = value,
//!             Axis::Vertical => self.scroll.1 = value,
//!         }
//!     }
//! }
//!
//! let mut canvas = Canvas::default();
//! let mut controller = ViewportController::default();
//!
//! // Shift + one wheel notch zooms in by 12% right away.
//! let wheel = WheelEvent {
//!     delta: 120.0,
//!     position: Point::new(50.0, 50.0),
//!     modifiers: Modifiers::SHIFT,
//! };
//! controller.wheel(&mut canvas, &wheel);
//! assert!((canvas.transform.as_coeffs()[0] - 1.12).abs() < 1e-12);
//!
//! // `D` pans right by 150 units over 100 ms.
//! controller.key_down(&mut canvas, &KeyEvent::new(Key::Character('d'), Modifiers::empty()));
//! while controller.advance(&mut canvas, Duration::from_millis(16)) {}
//! assert_eq!(canvas.scroll, (150.0, 0.0));
//! ```
//!
//! ## Overlapping animations
//!
//! By default a new animation on a property that is still animating replaces
//! the running one (see [`vista_timing::OverlapPolicy`]). A second key press
//! during a pan therefore starts from the current, partially scrolled offset.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod input;

pub use config::ControllerConfig;
pub use controller::{AnimatedProperty, KeyOutcome, Notification, ViewportController, WheelOutcome};
pub use host::{Axis, CanvasHost, CursorShape};
pub use input::{
    Direction, InputEvent, Key, KeyBindings, KeyEvent, Modifiers, PointerButton, PointerEvent,
    PointerPhase, WheelEvent,
};
pub use vista_timing::OverlapPolicy;
pub use vista_view2d::{ZoomMode, ZoomPolicy};
