// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_view2d --heading-base-level=0

//! Vista View 2D: zoom state and zoom update policy for a scrollable canvas.
//!
//! This crate provides the headless, numeric half of a zoomable canvas view:
//! - [`ZoomState`] holds two multiplicative zoom inputs and derives the
//!   scale-only [`kurbo::Affine`] a host canvas renders with.
//! - [`ZoomPolicy`] converts signed input deltas (wheel ticks, keyboard
//!   shortcuts) into new zoom values.
//!
//! It does **not** own any scene, scroll offsets, or rendering backend.
//! Panning is expected to be delegated to the host's scroll offsets; the
//! derived transform therefore never carries a translation.
//!
//! ## Two zoom factors
//!
//! The *user* zoom is driven by input and clamped to
//! [`MIN_ZOOM`]..=[`MAX_ZOOM`]. The *application* zoom is set by the embedding
//! application (display density, a different zoom baseline) and is never
//! clamped. The rendered scale is their product, so either side can change
//! without disturbing the other.
//!
//! ```rust
//! use vista_view2d::{ZoomPolicy, ZoomState};
//!
//! let mut state = ZoomState::new();
//! state.set_app_zoom(2.0);
//!
//! // A wheel tick of +120 zooms in by 12%.
//! let policy = ZoomPolicy::default();
//! policy.apply(&mut state, 120.0);
//!
//! assert!((state.zoom() - 1.12).abs() < 1e-12);
//! assert!((state.combined_scale() - 2.24).abs() < 1e-12);
//! assert_eq!(state.transform().as_coeffs()[4], 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod policy;
mod zoom;

pub use policy::{ZoomMode, ZoomPolicy};
pub use zoom::{MAX_ZOOM, MIN_ZOOM, ZoomDebugInfo, ZoomState};
