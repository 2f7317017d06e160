// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::mem;
use core::time::Duration;

use vista_event_state::click::{EmptyClickState, ReleaseOutcome};
use vista_timing::{OverlapPolicy, Sample, Timeline};
use vista_view2d::{ZoomMode, ZoomState};

use crate::config::ControllerConfig;
use crate::host::{Axis, CanvasHost, CursorShape};
use crate::input::{
    Direction, InputEvent, KeyEvent, PointerButton, PointerEvent, PointerPhase, WheelEvent,
};

/// Property driven by a controller animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// The user zoom factor.
    Zoom,
    /// The host scroll offset along an axis.
    ScrollOffset(Axis),
}

/// Notifications produced by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    /// The primary button was pressed and released at the same position with
    /// no item under the pointer at either moment.
    EmptySpaceClicked,
}

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A pan animation was scheduled.
    Panned,
    /// An animated zoom was scheduled.
    Zoomed,
    /// The key is not bound; nothing happened.
    Ignored,
}

/// What a wheel event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The zoom was changed immediately.
    Zoomed,
    /// The event went to the host's default scrolling.
    Forwarded,
}

/// Interactive pan/zoom controller for one canvas view.
///
/// The controller owns the zoom state, the empty-space click state machine
/// and the animation timeline. The host widget is passed to every handler, so
/// the controller never holds on to it.
///
/// - Pointer presses and releases are always forwarded to the host; a matching
///   press/release on empty space additionally yields
///   [`Notification::EmptySpaceClicked`].
/// - Wheel events with the zoom modifiers held zoom immediately; all other
///   wheel events are forwarded.
/// - Bound directional keys animate the host scroll offsets. With the zoom
///   modifiers held, up/down animate the zoom instead.
/// - [`ViewportController::advance`] must be called once per frame while
///   [`ViewportController::is_animating`] is `true`.
///
/// Every zoom change, including each animation frame, pushes the new
/// transform to the host before the handler returns.
#[derive(Clone, Debug)]
pub struct ViewportController {
    config: ControllerConfig,
    zoom: ZoomState,
    clicks: EmptyClickState,
    timeline: Timeline<AnimatedProperty>,
    scratch: Vec<Sample<AnimatedProperty>>,
}

impl ViewportController {
    /// Creates a controller with both zoom factors at `1.0`.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        let clicks = EmptyClickState::with_tolerance(config.click_tolerance);
        let timeline = Timeline::with_policy(config.overlap_policy);
        Self {
            config,
            zoom: ZoomState::new(),
            clicks,
            timeline,
            scratch: Vec::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replaces the configuration. Running animations keep running.
    pub fn set_config(&mut self, config: ControllerConfig) {
        self.clicks.set_tolerance(config.click_tolerance);
        self.timeline.set_policy(config.overlap_policy);
        self.config = config;
    }

    /// Returns the zoom state.
    #[must_use]
    pub fn zoom_state(&self) -> &ZoomState {
        &self.zoom
    }

    /// Returns the user zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.zoom()
    }

    /// Returns the application zoom factor.
    #[must_use]
    pub fn app_zoom(&self) -> f64 {
        self.zoom.app_zoom()
    }

    /// Returns the scale the host currently renders with.
    #[must_use]
    pub fn combined_scale(&self) -> f64 {
        self.zoom.combined_scale()
    }

    /// Pushes the current transform to `host`, for example right after the
    /// host widget was created.
    pub fn sync_transform<H: CanvasHost + ?Sized>(&self, host: &mut H) {
        host.apply_transform(self.zoom.transform());
    }

    /// Sets the user zoom factor (clamped) and pushes the new transform.
    ///
    /// With [`OverlapPolicy::Replace`] this also stops a running zoom
    /// animation, so later frames do not overwrite the new value.
    pub fn set_zoom<H: CanvasHost + ?Sized>(&mut self, host: &mut H, zoom: f64) {
        self.cancel_replaced_zoom();
        self.write_zoom(host, zoom);
    }

    fn write_zoom<H: CanvasHost + ?Sized>(&mut self, host: &mut H, zoom: f64) {
        self.zoom.set_zoom(zoom);
        self.sync_transform(host);
    }

    fn cancel_replaced_zoom(&mut self) {
        if self.config.overlap_policy == OverlapPolicy::Replace {
            self.timeline.cancel_target(AnimatedProperty::Zoom);
        }
    }

    /// Sets the application zoom factor (unclamped) and pushes the new
    /// transform. The user zoom is left untouched.
    pub fn set_app_zoom<H: CanvasHost + ?Sized>(&mut self, host: &mut H, app_zoom: f64) {
        self.zoom.set_app_zoom(app_zoom);
        self.sync_transform(host);
    }

    /// Applies `delta` to the user zoom through the configured zoom policy.
    ///
    /// [`ZoomMode::Immediate`] sets the zoom right away, replacing a running
    /// zoom animation as [`set_zoom`](Self::set_zoom) does.
    /// [`ZoomMode::Animated`] schedules an animation from the current zoom to
    /// the new one over the configured duration.
    pub fn update_zoom<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        delta: f64,
        mode: ZoomMode,
    ) {
        let current = self.zoom.zoom();
        match mode {
            ZoomMode::Immediate => {
                self.cancel_replaced_zoom();
                let zoom = self.config.zoom_policy.apply(&mut self.zoom, delta);
                log::debug!("zoom {current} -> {zoom} (delta {delta})");
                self.sync_transform(host);
            }
            ZoomMode::Animated => {
                let target = self.config.zoom_policy.target_zoom(current, delta);
                self.timeline.schedule(
                    AnimatedProperty::Zoom,
                    current,
                    target,
                    self.config.animation_duration,
                );
            }
        }
    }

    /// Routes any input event to its handler.
    ///
    /// Returns the notification produced by the event, if any.
    pub fn handle<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &InputEvent,
    ) -> Option<Notification> {
        match event {
            InputEvent::Pointer(pointer) => match pointer.phase {
                PointerPhase::Down => {
                    self.pointer_down(host, pointer);
                    None
                }
                PointerPhase::Up => self.pointer_up(host, pointer),
            },
            InputEvent::Key(key) => {
                self.key_down(host, key);
                None
            }
            InputEvent::Wheel(wheel) => {
                self.wheel(host, wheel);
                None
            }
        }
    }

    /// Handles a pointer press.
    ///
    /// A primary press with no item under the pointer starts click tracking.
    /// The event is always forwarded to the host afterwards.
    pub fn pointer_down<H: CanvasHost + ?Sized>(&mut self, host: &mut H, event: &PointerEvent) {
        if event.button == PointerButton::Primary {
            let over_item = host.hit_test(event.position);
            self.clicks.on_press(event.position, over_item);
        }
        host.forward_pointer(event);
    }

    /// Handles a pointer release.
    ///
    /// The event is always forwarded to the host, and the cursor is reset to
    /// the arrow shape afterwards, whatever the outcome.
    pub fn pointer_up<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> Option<Notification> {
        let mut notification = None;
        if event.button == PointerButton::Primary {
            let over_item = self.clicks.is_pressed() && host.hit_test(event.position);
            let outcome = self.clicks.on_release(event.position, over_item);
            if outcome == ReleaseOutcome::EmptySpaceClick {
                log::debug!("empty space clicked at {:?}", event.position);
                notification = Some(Notification::EmptySpaceClicked);
            }
        }
        host.forward_pointer(event);
        host.set_cursor(CursorShape::Arrow);
        notification
    }

    /// Handles a wheel rotation.
    ///
    /// With exactly the zoom modifiers held and a non-zero delta the zoom
    /// changes immediately; otherwise the event is forwarded to the host.
    pub fn wheel<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &WheelEvent,
    ) -> WheelOutcome {
        if event.modifiers == self.config.zoom_modifiers && event.delta != 0.0 {
            self.update_zoom(host, event.delta, ZoomMode::Immediate);
            return WheelOutcome::Zoomed;
        }
        host.forward_wheel(event);
        WheelOutcome::Forwarded
    }

    /// Handles a key press.
    ///
    /// Bound keys schedule a pan animation of the matching scroll axis. With
    /// exactly the zoom modifiers held, up zooms in and down zooms out
    /// (animated) instead of panning.
    pub fn key_down<H: CanvasHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &KeyEvent,
    ) -> KeyOutcome {
        let Some(direction) = self.config.key_bindings.direction(event.key) else {
            return KeyOutcome::Ignored;
        };

        if event.modifiers == self.config.zoom_modifiers {
            let delta = match direction {
                Direction::Up => Some(self.config.keyboard_zoom_delta),
                Direction::Down => Some(-self.config.keyboard_zoom_delta),
                Direction::Left | Direction::Right => None,
            };
            if let Some(delta) = delta {
                self.update_zoom(host, delta, ZoomMode::Animated);
                return KeyOutcome::Zoomed;
            }
        }

        let offset = direction.offset(self.config.pan_step);
        for (axis, delta) in [(Axis::Horizontal, offset.x), (Axis::Vertical, offset.y)] {
            if delta != 0.0 {
                let current = host.scroll_offset(axis);
                self.timeline.schedule(
                    AnimatedProperty::ScrollOffset(axis),
                    current,
                    current + delta,
                    self.config.animation_duration,
                );
            }
        }
        KeyOutcome::Panned
    }

    /// Advances running animations by `dt` and writes their values to the
    /// zoom state and the host.
    ///
    /// Returns `true` while animations remain, so the host knows whether to
    /// request another frame.
    pub fn advance<H: CanvasHost + ?Sized>(&mut self, host: &mut H, dt: Duration) -> bool {
        let mut samples = mem::take(&mut self.scratch);
        self.timeline.advance_into(dt, &mut samples);
        for sample in samples.drain(..) {
            match sample.target {
                AnimatedProperty::Zoom => self.write_zoom(host, sample.value),
                AnimatedProperty::ScrollOffset(axis) => {
                    host.set_scroll_offset(axis, sample.value);
                }
            }
        }
        self.scratch = samples;
        self.is_animating()
    }

    /// Returns `true` while any animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    /// Returns `true` while `property` is animating.
    #[must_use]
    pub fn is_property_animating(&self, property: AnimatedProperty) -> bool {
        self.timeline.is_animating(property)
    }

    /// Stops every running animation, leaving properties at their current values.
    pub fn stop_animations(&mut self) {
        self.timeline.clear();
    }

    /// Returns `true` while a primary press on empty space awaits its release.
    #[must_use]
    pub fn is_tracking_click(&self) -> bool {
        self.clicks.is_pressed()
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
