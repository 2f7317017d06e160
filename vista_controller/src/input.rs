// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by the host's event pipeline.

use bitflags::bitflags;
use kurbo::{Point, Vec2};
use smallvec::{SmallVec, smallvec};

bitflags! {
    /// Keyboard modifiers held while an event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 1 << 0;
        /// Either control key.
        const CONTROL = 1 << 1;
        /// Either alt/option key.
        const ALT = 1 << 2;
        /// Either meta/command/super key.
        const META = 1 << 3;
    }
}

/// Mouse/pen buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button, or the pen tip.
    Primary,
    /// Right button.
    Secondary,
    /// Middle button.
    Auxiliary,
    /// Any other button.
    Other(u8),
}

/// Whether a pointer event is a press or a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
}

/// A pointer press or release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Press or release.
    pub phase: PointerPhase,
    /// Button that changed state.
    pub button: PointerButton,
    /// Viewport-local position.
    pub position: Point,
    /// Keyboard modifiers held at the time.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates a press of `button` at `position` with no modifiers.
    #[must_use]
    pub fn down(button: PointerButton, position: Point) -> Self {
        Self {
            phase: PointerPhase::Down,
            button,
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Creates a release of `button` at `position` with no modifiers.
    #[must_use]
    pub fn up(button: PointerButton, position: Point) -> Self {
        Self {
            phase: PointerPhase::Up,
            button,
            position,
            modifiers: Modifiers::empty(),
        }
    }
}

/// A wheel rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Signed rotation delta; one notch of a classic wheel is `120`.
    /// Positive values rotate away from the user.
    pub delta: f64,
    /// Viewport-local pointer position.
    pub position: Point,
    /// Keyboard modifiers held at the time.
    pub modifiers: Modifiers,
}

/// Pan direction of a bound key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Scroll towards smaller vertical offsets.
    Up,
    /// Scroll towards larger vertical offsets.
    Down,
    /// Scroll towards smaller horizontal offsets.
    Left,
    /// Scroll towards larger horizontal offsets.
    Right,
}

impl Direction {
    /// Returns the scroll offset change for a step of `step` units.
    #[must_use]
    pub fn offset(self, step: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -step),
            Self::Down => Vec2::new(0.0, step),
            Self::Left => Vec2::new(-step, 0.0),
            Self::Right => Vec2::new(step, 0.0),
        }
    }
}

/// Logical key identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a character. Letters compare case-insensitively in
    /// [`KeyBindings`].
    Character(char),
    /// One of the arrow keys.
    Arrow(Direction),
    /// A key the host could not map.
    Unidentified,
}

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a key press.
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Any input event the controller handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer press or release.
    Pointer(PointerEvent),
    /// Key press.
    Key(KeyEvent),
    /// Wheel rotation.
    Wheel(WheelEvent),
}

/// Table mapping keys to pan directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: SmallVec<[(Key, Direction); 8]>,
}

impl KeyBindings {
    /// Creates a table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    /// `W`/`A`/`S`/`D` for up/left/down/right.
    #[must_use]
    pub fn wasd() -> Self {
        Self {
            bindings: smallvec![
                (Key::Character('w'), Direction::Up),
                (Key::Character('a'), Direction::Left),
                (Key::Character('s'), Direction::Down),
                (Key::Character('d'), Direction::Right),
            ],
        }
    }

    /// Binds `key` to `direction`, replacing an earlier binding of `key`.
    pub fn bind(&mut self, key: Key, direction: Direction) {
        let key = normalize(key);
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = direction;
        } else {
            self.bindings.push((key, direction));
        }
    }

    /// Removes the binding of `key`, if any.
    pub fn unbind(&mut self, key: Key) {
        let key = normalize(key);
        self.bindings.retain(|(k, _)| *k != key);
    }

    /// Returns the direction bound to `key`.
    #[must_use]
    pub fn direction(&self, key: Key) -> Option<Direction> {
        let key = normalize(key);
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, direction)| direction)
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// `W`/`A`/`S`/`D` plus the arrow keys.
impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::wasd();
        for direction in [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ] {
            bindings.bind(Key::Arrow(direction), direction);
        }
        bindings
    }
}

fn normalize(key: Key) -> Key {
    match key {
        Key::Character(c) => Key::Character(c.to_ascii_lowercase()),
        other => other,
    }
}
