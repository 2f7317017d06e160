// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

/// Smallest user zoom factor accepted by [`ZoomState::set_zoom`].
pub const MIN_ZOOM: f64 = 0.1;

/// Largest user zoom factor accepted by [`ZoomState::set_zoom`].
pub const MAX_ZOOM: f64 = 100.0;

/// Zoom inputs of a canvas view and the transform derived from them.
///
/// `ZoomState` tracks:
/// - the user zoom, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`];
/// - the application zoom, set by the embedding application and unclamped;
/// - the combined scale transform `Affine::scale(app_zoom * zoom)`.
///
/// The transform is rebuilt synchronously by every setter, so
/// [`ZoomState::transform`] is never stale.
#[derive(Clone, Debug)]
pub struct ZoomState {
    zoom: f64,
    app_zoom: f64,
    transform: Affine,
}

impl ZoomState {
    /// Creates a new state with both factors at `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            app_zoom: 1.0,
            transform: Affine::IDENTITY,
        }
    }

    /// Returns the current user zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the user zoom factor, clamping it into [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    ///
    /// Out-of-range values are clamped, never rejected. A NaN input leaves the
    /// current zoom unchanged. The transform is rebuilt in every case.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_nan() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
        self.rebuild_transform();
        log::trace!("zoom set to {} (requested {zoom})", self.zoom);
    }

    /// Returns the current application zoom factor.
    #[must_use]
    pub fn app_zoom(&self) -> f64 {
        self.app_zoom
    }

    /// Sets the application zoom factor. The value is stored as given.
    pub fn set_app_zoom(&mut self, app_zoom: f64) {
        self.app_zoom = app_zoom;
        self.rebuild_transform();
        log::trace!("application zoom set to {app_zoom}");
    }

    /// Returns `app_zoom * zoom`, the uniform scale the canvas renders with.
    #[must_use]
    pub fn combined_scale(&self) -> f64 {
        self.app_zoom * self.zoom
    }

    /// Returns the scale-only transform derived from both zoom factors.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Snapshot of the current zoom state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            zoom: self.zoom,
            app_zoom: self.app_zoom,
            combined_scale: self.combined_scale(),
        }
    }

    fn rebuild_transform(&mut self) {
        self.transform = Affine::scale(self.combined_scale());
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`ZoomState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDebugInfo {
    /// Current user zoom factor.
    pub zoom: f64,
    /// Current application zoom factor.
    pub app_zoom: f64,
    /// Product of both factors.
    pub combined_scale: f64,
}
