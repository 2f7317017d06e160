// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use crate::animation::{Animation, AnimationId, Sample};

/// Nominal frame interval for hosts that tick at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What happens when an animation is scheduled for a target that is already
/// animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Cancel the running animation and start the new one.
    #[default]
    Replace,
    /// Keep both. Samples are emitted in scheduling order.
    Layer,
}

/// Set of running property animations, advanced by the host.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    active: Vec<Animation<T>>,
    policy: OverlapPolicy,
    next_id: u64,
}

impl<T: Copy + PartialEq + Debug> Timeline<T> {
    /// Creates an empty timeline using [`OverlapPolicy::Replace`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(OverlapPolicy::default())
    }

    /// Creates an empty timeline with the given overlap policy.
    #[must_use]
    pub fn with_policy(policy: OverlapPolicy) -> Self {
        Self {
            active: Vec::new(),
            policy,
            next_id: 0,
        }
    }

    /// Returns the overlap policy.
    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Sets the overlap policy used by later calls to [`Timeline::schedule`].
    ///
    /// Animations that are already layered keep running.
    pub fn set_policy(&mut self, policy: OverlapPolicy) {
        self.policy = policy;
    }

    /// Schedules an animation of `target` from `from` to `to` over `duration`.
    ///
    /// Returns immediately; values are delivered by [`Timeline::advance`].
    pub fn schedule(&mut self, target: T, from: f64, to: f64, duration: Duration) -> AnimationId {
        if self.policy == OverlapPolicy::Replace {
            let replaced = self.cancel_target(target);
            if replaced > 0 {
                log::trace!("replaced {replaced} running animation(s) on {target:?}");
            }
        }
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        log::debug!("animating {target:?} from {from} to {to} over {duration:?} ({id:?})");
        self.active.push(Animation::new(id, target, from, to, duration));
        id
    }

    /// Advances every running animation by `dt` and returns one sample each.
    ///
    /// Finished animations emit their end value once and are then removed.
    pub fn advance(&mut self, dt: Duration) -> Vec<Sample<T>> {
        let mut out = Vec::with_capacity(self.active.len());
        self.advance_into(dt, &mut out);
        out
    }

    /// Like [`Timeline::advance`], but appends samples to a caller-owned
    /// buffer so per-frame allocation can be avoided.
    pub fn advance_into(&mut self, dt: Duration, out: &mut Vec<Sample<T>>) {
        for animation in &mut self.active {
            out.push(animation.advance(dt));
        }
        self.active.retain(|animation| {
            let done = animation.is_finished();
            if done {
                log::trace!(
                    "animation {:?} on {:?} finished",
                    animation.id(),
                    animation.target()
                );
            }
            !done
        });
    }

    /// Cancels one animation. Returns `true` if it was still running.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        let before = self.active.len();
        self.active.retain(|animation| animation.id() != id);
        self.active.len() != before
    }

    /// Cancels every animation of `target` and returns how many were running.
    pub fn cancel_target(&mut self, target: T) -> usize {
        let before = self.active.len();
        self.active.retain(|animation| animation.target() != target);
        before - self.active.len()
    }

    /// Cancels everything.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Returns `true` when nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Same as [`Timeline::is_idle`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }

    /// Returns the number of running animations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if `target` has at least one running animation.
    #[must_use]
    pub fn is_animating(&self, target: T) -> bool {
        self.active.iter().any(|animation| animation.target() == target)
    }

    /// Returns the running animations in scheduling order.
    pub fn animations(&self) -> impl Iterator<Item = &Animation<T>> + '_ {
        self.active.iter()
    }
}

impl<T: Copy + PartialEq + Debug> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
