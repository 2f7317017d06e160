// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vista_controller` crate.
//!
//! These drive a `ViewportController` against a recording host and check the
//! interplay of zoom state, keyboard panning, wheel routing and empty-space
//! click detection.

use core::time::Duration;

use kurbo::{Affine, Point, Rect};
use vista_controller::{
    AnimatedProperty, Axis, CanvasHost, ControllerConfig, CursorShape, Direction, InputEvent, Key,
    KeyEvent, KeyOutcome, Modifiers, Notification, OverlapPolicy, PointerButton, PointerEvent,
    PointerPhase, ViewportController, WheelEvent, WheelOutcome, ZoomMode,
};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Transform(Affine),
    Scroll(Axis, f64),
    Pointer(PointerPhase, PointerButton),
    Wheel(f64),
    Cursor(CursorShape),
}

#[derive(Default)]
struct RecordingHost {
    items: Vec<Rect>,
    x: f64,
    y: f64,
    calls: Vec<Call>,
}

impl RecordingHost {
    fn with_item(item: Rect) -> Self {
        Self {
            items: vec![item],
            ..Self::default()
        }
    }

    fn last_transform(&self) -> Option<Affine> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Transform(t) => Some(*t),
            _ => None,
        })
    }

    fn scrolls(&self, axis: Axis) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Scroll(a, v) if *a == axis => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl CanvasHost for RecordingHost {
    fn hit_test(&self, point: Point) -> bool {
        self.items.iter().any(|r| r.contains(point))
    }

    fn apply_transform(&mut self, transform: Affine) {
        self.calls.push(Call::Transform(transform));
    }

    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self.calls.push(Call::Scroll(axis, value));
    }

    fn forward_pointer(&mut self, event: &PointerEvent) {
        self.calls.push(Call::Pointer(event.phase, event.button));
    }

    fn forward_wheel(&mut self, event: &WheelEvent) {
        self.calls.push(Call::Wheel(event.delta));
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.calls.push(Call::Cursor(cursor));
    }
}

fn key(c: char, modifiers: Modifiers) -> KeyEvent {
    KeyEvent::new(Key::Character(c), modifiers)
}

fn wheel(delta: f64, modifiers: Modifiers) -> WheelEvent {
    WheelEvent {
        delta,
        position: Point::new(10.0, 10.0),
        modifiers,
    }
}

fn run_animations(controller: &mut ViewportController, host: &mut RecordingHost) -> usize {
    let mut frames = 0;
    while controller.is_animating() {
        controller.advance(host, FRAME);
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
    frames
}

fn click(
    controller: &mut ViewportController,
    host: &mut RecordingHost,
    press: Point,
    release: Point,
) -> Option<Notification> {
    controller.pointer_down(host, &PointerEvent::down(PointerButton::Primary, press));
    controller.pointer_up(host, &PointerEvent::up(PointerButton::Primary, release))
}

// --- Transform state ---------------------------------------------------------

#[test]
fn set_zoom_clamps_and_pushes_transform() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    for (requested, expected) in [(0.01, 0.1), (-5.0, 0.1), (250.0, 100.0), (7.5, 7.5)] {
        controller.set_zoom(&mut host, requested);
        assert_eq!(controller.zoom(), expected);
        assert_eq!(host.last_transform(), Some(Affine::scale(expected)));
    }
}

#[test]
fn combined_scale_follows_both_setters() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.set_app_zoom(&mut host, 0.5);
    assert_eq!(controller.combined_scale(), 0.5);
    assert_eq!(host.last_transform(), Some(Affine::scale(0.5)));

    controller.set_zoom(&mut host, 4.0);
    assert_eq!(controller.combined_scale(), 2.0);
    assert_eq!(host.last_transform(), Some(Affine::scale(2.0)));

    // Changing the application zoom leaves the user zoom alone.
    controller.set_app_zoom(&mut host, 300.0);
    assert_eq!(controller.zoom(), 4.0);
    assert_eq!(controller.app_zoom(), 300.0);
    assert_eq!(host.last_transform(), Some(Affine::scale(1_200.0)));
}

// --- Wheel -------------------------------------------------------------------

#[test]
fn shift_wheel_zooms_immediately() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    controller.set_zoom(&mut host, 2.0);

    let outcome = controller.wheel(&mut host, &wheel(-240.0, Modifiers::SHIFT));

    assert_eq!(outcome, WheelOutcome::Zoomed);
    let expected = (2.0_f64 * (1.0 + 0.001 * -240.0)).clamp(0.1, 100.0);
    assert!((controller.zoom() - expected).abs() < 1e-12);
    assert!(!controller.is_animating());
    assert!(!host.calls.iter().any(|c| matches!(c, Call::Wheel(_))));
}

#[test]
fn shift_wheel_result_is_clamped() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    controller.set_zoom(&mut host, 95.0);

    controller.wheel(&mut host, &wheel(600.0, Modifiers::SHIFT));
    assert_eq!(controller.zoom(), 100.0);

    controller.set_zoom(&mut host, 0.2);
    controller.wheel(&mut host, &wheel(-3_000.0, Modifiers::SHIFT));
    assert_eq!(controller.zoom(), 0.1);
}

#[test]
fn shift_wheel_replaces_running_keyboard_zoom() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('w', Modifiers::SHIFT));
    controller.advance(&mut host, FRAME);
    let mid = controller.zoom();
    assert!(mid > 1.0 && mid < 1.2, "zoom {mid} should be mid-animation");

    controller.wheel(&mut host, &wheel(-600.0, Modifiers::SHIFT));
    let after_wheel = controller.zoom();
    assert!((after_wheel - mid * 0.4).abs() < 1e-12);
    assert!(!controller.is_property_animating(AnimatedProperty::Zoom));

    run_animations(&mut controller, &mut host);
    assert_eq!(controller.zoom(), after_wheel);
    assert_eq!(host.last_transform(), Some(Affine::scale(after_wheel)));
}

#[test]
fn set_zoom_replaces_running_zoom_but_not_pans() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('s', Modifiers::SHIFT));
    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    controller.advance(&mut host, FRAME);

    controller.set_zoom(&mut host, 3.0);
    assert!(!controller.is_property_animating(AnimatedProperty::Zoom));
    let pan = AnimatedProperty::ScrollOffset(Axis::Horizontal);
    assert!(controller.is_property_animating(pan));

    run_animations(&mut controller, &mut host);
    assert_eq!(controller.zoom(), 3.0);
    assert_eq!(host.x, 150.0);
}

#[test]
fn layered_zoom_animation_survives_immediate_zoom() {
    let config = ControllerConfig::default().with_overlap_policy(OverlapPolicy::Layer);
    let mut controller = ViewportController::new(config);
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('w', Modifiers::SHIFT));
    controller.wheel(&mut host, &wheel(100.0, Modifiers::SHIFT));
    assert!(controller.is_property_animating(AnimatedProperty::Zoom));

    run_animations(&mut controller, &mut host);
    assert!((controller.zoom() - 1.2).abs() < 1e-12);
}

#[test]
fn plain_wheel_is_forwarded_and_zoom_unchanged() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    let outcome = controller.wheel(&mut host, &wheel(120.0, Modifiers::empty()));

    assert_eq!(outcome, WheelOutcome::Forwarded);
    assert_eq!(controller.zoom(), 1.0);
    assert_eq!(host.calls, [Call::Wheel(120.0)]);
}

#[test]
fn wheel_requires_exact_modifiers_and_non_zero_delta() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    let both = Modifiers::SHIFT | Modifiers::CONTROL;
    assert_eq!(
        controller.wheel(&mut host, &wheel(120.0, both)),
        WheelOutcome::Forwarded
    );
    assert_eq!(
        controller.wheel(&mut host, &wheel(0.0, Modifiers::SHIFT)),
        WheelOutcome::Forwarded
    );
    assert_eq!(controller.zoom(), 1.0);
}

// --- Keyboard pan ------------------------------------------------------------

#[test]
fn right_key_animates_horizontal_offset_by_step() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    host.x = 40.0;

    let outcome = controller.key_down(&mut host, &key('d', Modifiers::empty()));
    assert_eq!(outcome, KeyOutcome::Panned);
    assert!(controller.is_property_animating(AnimatedProperty::ScrollOffset(Axis::Horizontal)));
    assert!(!controller.is_property_animating(AnimatedProperty::ScrollOffset(Axis::Vertical)));

    // Scheduling returns immediately without touching the offset.
    assert_eq!(host.x, 40.0);

    let frames = run_animations(&mut controller, &mut host);
    assert_eq!(frames, 7);

    let xs = host.scrolls(Axis::Horizontal);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(xs.last().copied(), Some(190.0));
    assert!(host.scrolls(Axis::Vertical).is_empty());
}

#[test]
fn left_key_animates_horizontal_offset_backwards() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    host.x = 500.0;

    controller.key_down(&mut host, &key('a', Modifiers::empty()));
    run_animations(&mut controller, &mut host);

    assert_eq!(host.x, 350.0);
}

#[test]
fn up_and_down_keys_pan_vertically() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('s', Modifiers::empty()));
    run_animations(&mut controller, &mut host);
    assert_eq!(host.y, 150.0);

    controller.key_down(&mut host, &KeyEvent::new(Key::Arrow(Direction::Up), Modifiers::empty()));
    run_animations(&mut controller, &mut host);
    assert_eq!(host.y, 0.0);
    assert_eq!(host.x, 0.0);
}

#[test]
fn pan_animation_is_timed_by_configured_duration() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    controller.advance(&mut host, Duration::from_millis(50));
    assert!((host.x - 75.0).abs() < 1e-9);

    assert!(!controller.advance(&mut host, Duration::from_millis(50)));
    assert_eq!(host.x, 150.0);
}

#[test]
fn shift_left_still_pans() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    let outcome = controller.key_down(&mut host, &key('a', Modifiers::SHIFT));
    assert_eq!(outcome, KeyOutcome::Panned);
    run_animations(&mut controller, &mut host);
    assert_eq!(host.x, -150.0);
    assert_eq!(controller.zoom(), 1.0);
}

#[test]
fn unbound_key_is_ignored() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    assert_eq!(
        controller.key_down(&mut host, &key('q', Modifiers::empty())),
        KeyOutcome::Ignored
    );
    assert_eq!(
        controller.key_down(&mut host, &KeyEvent::new(Key::Unidentified, Modifiers::SHIFT)),
        KeyOutcome::Ignored
    );
    assert!(!controller.is_animating());
    assert!(host.calls.is_empty());
}

#[test]
fn repeated_pan_replaces_running_animation() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    controller.advance(&mut host, Duration::from_millis(50));
    assert!((host.x - 75.0).abs() < 1e-9);

    // The second press starts from the partially scrolled offset.
    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    run_animations(&mut controller, &mut host);
    assert!((host.x - 225.0).abs() < 1e-9);
}

#[test]
fn layered_pans_apply_latest_each_frame() {
    let config = ControllerConfig::default().with_overlap_policy(OverlapPolicy::Layer);
    let mut controller = ViewportController::new(config);
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    controller.advance(&mut host, Duration::from_millis(50));
    controller.key_down(&mut host, &key('d', Modifiers::empty()));

    // Both animations run until their own end; the later one ends last.
    run_animations(&mut controller, &mut host);
    assert!((host.x - 225.0).abs() < 1e-9);
}

// --- Keyboard zoom -----------------------------------------------------------

#[test]
fn shift_up_zooms_in_animated() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    let outcome = controller.key_down(&mut host, &key('w', Modifiers::SHIFT));
    assert_eq!(outcome, KeyOutcome::Zoomed);
    assert!(controller.is_property_animating(AnimatedProperty::Zoom));
    assert_eq!(controller.zoom(), 1.0);

    run_animations(&mut controller, &mut host);

    assert!((controller.zoom() - 1.2).abs() < 1e-12);
    assert_eq!(host.last_transform(), Some(Affine::scale(controller.zoom())));
    // No panning happened.
    assert!(host.scrolls(Axis::Horizontal).is_empty());
    assert!(host.scrolls(Axis::Vertical).is_empty());
}

#[test]
fn shift_down_zooms_out_animated() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    controller.set_zoom(&mut host, 5.0);

    controller.key_down(&mut host, &key('S', Modifiers::SHIFT));
    run_animations(&mut controller, &mut host);

    assert!((controller.zoom() - 4.0).abs() < 1e-12);
}

#[test]
fn zoom_animation_frames_push_transforms() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    controller.set_app_zoom(&mut host, 2.0);
    host.calls.clear();

    controller.key_down(&mut host, &key('w', Modifiers::SHIFT));
    let frames = run_animations(&mut controller, &mut host);

    let transforms: Vec<_> = host
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Transform(_)))
        .collect();
    assert_eq!(transforms.len(), frames);
    assert_eq!(host.last_transform(), Some(Affine::scale(2.0 * controller.zoom())));
}

#[test]
fn animated_zoom_is_clamped_every_frame() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    controller.set_zoom(&mut host, 99.0);

    controller.key_down(&mut host, &key('w', Modifiers::SHIFT));
    while controller.is_animating() {
        controller.advance(&mut host, FRAME);
        assert!(controller.zoom() <= 100.0);
    }
    assert_eq!(controller.zoom(), 100.0);
}

#[test]
fn update_zoom_with_huge_negative_delta_stays_positive() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.update_zoom(&mut host, -10_000.0, ZoomMode::Immediate);
    assert_eq!(controller.zoom(), 0.1);

    controller.set_zoom(&mut host, 1.0);
    controller.update_zoom(&mut host, -10_000.0, ZoomMode::Animated);
    run_animations(&mut controller, &mut host);
    assert!(controller.zoom() > 0.0);
    assert_eq!(controller.zoom(), 0.1);
}

// --- Empty-space clicks ------------------------------------------------------

#[test]
fn click_on_empty_space_notifies_once() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    let p = Point::new(20.0, 30.0);

    assert_eq!(
        click(&mut controller, &mut host, p, p),
        Some(Notification::EmptySpaceClicked)
    );
    assert!(!controller.is_tracking_click());

    // A stray release afterwards does not notify again.
    let again = controller.pointer_up(&mut host, &PointerEvent::up(PointerButton::Primary, p));
    assert_eq!(again, None);
}

#[test]
fn drag_on_empty_space_does_not_notify() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    let outcome = click(
        &mut controller,
        &mut host,
        Point::new(20.0, 30.0),
        Point::new(21.0, 30.0),
    );
    assert_eq!(outcome, None);
}

#[test]
fn press_over_item_never_notifies() {
    let item = Rect::new(0.0, 0.0, 10.0, 10.0);
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::with_item(item);

    let press = Point::new(5.0, 5.0);
    controller.pointer_down(&mut host, &PointerEvent::down(PointerButton::Primary, press));
    assert!(!controller.is_tracking_click());

    for release in [press, Point::new(50.0, 50.0)] {
        let outcome =
            controller.pointer_up(&mut host, &PointerEvent::up(PointerButton::Primary, release));
        assert_eq!(outcome, None);
    }
}

#[test]
fn release_over_item_does_not_notify() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    let p = Point::new(5.0, 5.0);

    controller.pointer_down(&mut host, &PointerEvent::down(PointerButton::Primary, p));
    // An item appears under the pointer before the release.
    host.items.push(Rect::new(0.0, 0.0, 10.0, 10.0));

    let outcome = controller.pointer_up(&mut host, &PointerEvent::up(PointerButton::Primary, p));
    assert_eq!(outcome, None);
}

#[test]
fn secondary_button_is_forwarded_but_ignored() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    let p = Point::new(5.0, 5.0);

    controller.pointer_down(&mut host, &PointerEvent::down(PointerButton::Secondary, p));
    assert!(!controller.is_tracking_click());
    let outcome =
        controller.pointer_up(&mut host, &PointerEvent::up(PointerButton::Secondary, p));
    assert_eq!(outcome, None);

    assert_eq!(
        host.calls,
        [
            Call::Pointer(PointerPhase::Down, PointerButton::Secondary),
            Call::Pointer(PointerPhase::Up, PointerButton::Secondary),
            Call::Cursor(CursorShape::Arrow),
        ]
    );
}

#[test]
fn pointer_events_are_forwarded_and_cursor_reset_after_release() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    let p = Point::new(1.0, 1.0);

    click(&mut controller, &mut host, p, p);
    click(&mut controller, &mut host, p, Point::new(9.0, 9.0));

    let expected = [
        Call::Pointer(PointerPhase::Down, PointerButton::Primary),
        Call::Pointer(PointerPhase::Up, PointerButton::Primary),
        Call::Cursor(CursorShape::Arrow),
    ];
    assert_eq!(host.calls[..3], expected);
    assert_eq!(host.calls[3..], expected);
}

#[test]
fn click_tolerance_is_configurable() {
    let config = ControllerConfig::default().with_click_tolerance(3.0);
    let mut controller = ViewportController::new(config);
    let mut host = RecordingHost::default();

    assert_eq!(
        click(
            &mut controller,
            &mut host,
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0)
        ),
        Some(Notification::EmptySpaceClicked)
    );
    assert_eq!(
        click(
            &mut controller,
            &mut host,
            Point::new(0.0, 0.0),
            Point::new(3.0, 3.0)
        ),
        None
    );
}

// --- Routing and configuration -----------------------------------------------

#[test]
fn handle_routes_each_event_kind() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();
    let p = Point::new(3.0, 3.0);

    let events = [
        InputEvent::Pointer(PointerEvent::down(PointerButton::Primary, p)),
        InputEvent::Pointer(PointerEvent::up(PointerButton::Primary, p)),
        InputEvent::Wheel(wheel(120.0, Modifiers::SHIFT)),
        InputEvent::Key(key('d', Modifiers::empty())),
    ];
    let notifications: Vec<_> = events
        .iter()
        .filter_map(|event| controller.handle(&mut host, event))
        .collect();

    assert_eq!(notifications, [Notification::EmptySpaceClicked]);
    assert!((controller.zoom() - 1.12).abs() < 1e-12);
    assert!(controller.is_animating());
}

#[test]
fn custom_config_changes_steps_and_modifiers() {
    let config = ControllerConfig::default()
        .with_pan_step(40.0)
        .with_keyboard_zoom_delta(500.0)
        .with_zoom_modifiers(Modifiers::CONTROL)
        .with_animation_duration(Duration::ZERO);
    let mut controller = ViewportController::new(config);
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    assert_eq!(run_animations(&mut controller, &mut host), 1);
    assert_eq!(host.x, 40.0);

    // Shift no longer zooms; Control does.
    assert_eq!(
        controller.key_down(&mut host, &key('w', Modifiers::SHIFT)),
        KeyOutcome::Panned
    );
    run_animations(&mut controller, &mut host);
    assert_eq!(
        controller.key_down(&mut host, &key('w', Modifiers::CONTROL)),
        KeyOutcome::Zoomed
    );
    run_animations(&mut controller, &mut host);
    assert!((controller.zoom() - 1.5).abs() < 1e-12);
}

#[test]
fn stop_animations_leaves_values_in_place() {
    let mut controller = ViewportController::default();
    let mut host = RecordingHost::default();

    controller.key_down(&mut host, &key('d', Modifiers::empty()));
    controller.advance(&mut host, Duration::from_millis(50));
    controller.stop_animations();

    assert!(!controller.is_animating());
    assert!(!controller.advance(&mut host, FRAME));
    assert!((host.x - 75.0).abs() < 1e-9);
}
