// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_timing --heading-base-level=0

//! Vista Timing: a host-driven timeline of numeric property animations.
//!
//! A [`Timeline`] interpolates numeric properties, identified by a caller
//! chosen target key, from a start value to an end value over a fixed
//! duration. It owns no clock and spawns no tasks: the host advances it once
//! per frame with the elapsed time, and receives a [`Sample`] per running
//! animation to write back into the animated property.
//!
//! ```rust
//! use core::time::Duration;
//! use vista_timing::{Timeline, FRAME_INTERVAL};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Prop { ScrollX }
//!
//! let mut timeline = Timeline::new();
//! timeline.schedule(Prop::ScrollX, 0.0, 150.0, Duration::from_millis(100));
//!
//! let mut last = 0.0;
//! while !timeline.is_idle() {
//!     for sample in timeline.advance(FRAME_INTERVAL) {
//!         last = sample.value;
//!     }
//! }
//! assert_eq!(last, 150.0);
//! ```
//!
//! ## Overlapping animations
//!
//! Scheduling a second animation for a target that is still animating is
//! governed by [`OverlapPolicy`]:
//! - [`OverlapPolicy::Replace`] (default) cancels the running animation, so at
//!   most one animation per target is active.
//! - [`OverlapPolicy::Layer`] keeps both; their samples are emitted in
//!   scheduling order, so the most recently scheduled one wins each frame
//!   while it runs.
//!
//! Each scheduled animation also gets an [`AnimationId`] that can be used to
//! cancel it explicitly.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod timeline;

pub use animation::{Animation, AnimationId, Sample};
pub use timeline::{FRAME_INTERVAL, OverlapPolicy, Timeline};
