// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the canvas widget that embeds it.

use kurbo::{Affine, Point};

use crate::input::{PointerEvent, WheelEvent};

/// One of the two independent scroll axes of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right scrolling.
    Horizontal,
    /// Up/down scrolling.
    Vertical,
}

/// Pointer cursor shapes the controller requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// The default arrow cursor, restored after every pointer release.
    #[default]
    Arrow,
}

/// Services the controller needs from the canvas widget.
///
/// The host owns the scrollable content, performs hit testing, renders with
/// the transform it is given and keeps its own default input handling
/// (selection, drag panning, plain wheel scrolling). All calls happen on the
/// UI thread, from inside the controller's event handlers.
pub trait CanvasHost {
    /// Returns `true` if a selectable item lies under `point`, given in
    /// viewport-local coordinates.
    fn hit_test(&self, point: Point) -> bool;

    /// Installs a new rendering transform.
    fn apply_transform(&mut self, transform: Affine);

    /// Returns the current scroll offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f64;

    /// Sets the scroll offset along `axis`. The host may clamp it to its
    /// scrollable range.
    fn set_scroll_offset(&mut self, axis: Axis, value: f64);

    /// Runs the host's default handling for a pointer press or release.
    fn forward_pointer(&mut self, event: &PointerEvent) {
        let _ = event;
    }

    /// Runs the host's default handling for a wheel event (plain scrolling).
    fn forward_wheel(&mut self, event: &WheelEvent) {
        let _ = event;
    }

    /// Changes the pointer cursor shown over the viewport.
    fn set_cursor(&mut self, cursor: CursorShape) {
        let _ = cursor;
    }
}
