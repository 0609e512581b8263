// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch zoom: apply scale‑gesture samples within the zoom thresholds.
//!
//! Each sample carries a factor relative to the previous sample and the
//! gesture's focal point. The factor is clamped so the resulting scale never
//! leaves `[init_scale, max_scale]`, the content is scaled about the focal
//! point, and the bounds correction is applied on both axes.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_zoom_gesture::ZoomGeometry;
//! use understory_zoom_gesture::pinch::{PinchZoom, ScaleGesture};
//!
//! let geometry = ZoomGeometry::settle(Size::new(400.0, 400.0), Size::new(200.0, 200.0)).unwrap();
//! let mut transform = geometry.initial_transform();
//! let mut pinch = PinchZoom::default();
//!
//! pinch.begin();
//! // Asking for 10x only reaches the 4x ceiling.
//! pinch.update(ScaleGesture::new(10.0, Point::new(200.0, 200.0)), &mut transform, &geometry);
//! pinch.end();
//! assert!((transform.scale() - geometry.thresholds.max_scale).abs() < 1e-9);
//! ```

use kurbo::Point;
use understory_zoom::{AxisCheck, ContentTransform, Thresholds};

use crate::geometry::ZoomGeometry;

/// One scale‑gesture sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleGesture {
    /// Scale relative to the previous sample; `> 1` enlarges, `< 1` shrinks.
    pub factor: f64,
    /// View‑space point that stays fixed while scaling.
    pub focus: Point,
}

impl ScaleGesture {
    /// Creates a sample.
    #[must_use]
    pub fn new(factor: f64, focus: Point) -> Self {
        Self { factor, focus }
    }
}

/// Clamps a relative `factor` against `thresholds` given the `current` scale.
///
/// Returns `None` when the sample must be dropped: the factor is not a finite
/// positive number, the thresholds are unfit, or the gesture pushes further
/// past a bound the scale already sits on.
#[must_use]
pub fn clamp_scale_factor(current: f64, factor: f64, thresholds: &Thresholds) -> Option<f64> {
    if !(factor.is_finite() && factor > 0.0) || !thresholds.is_fitted() {
        return None;
    }
    let enlarging = factor > 1.0 && current < thresholds.max_scale;
    let shrinking = factor < 1.0 && current > thresholds.init_scale;
    if !enlarging && !shrinking {
        return None;
    }

    let mut factor = factor;
    if current * factor < thresholds.init_scale {
        factor = thresholds.init_scale / current;
    }
    if current * factor > thresholds.max_scale {
        factor = thresholds.max_scale / current;
    }
    Some(factor)
}

/// Pinch gesture controller.
///
/// Begin and end notifications are tracked for inspection only; updates are
/// honored whether or not a gesture was begun.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchZoom {
    active: bool,
}

impl PinchZoom {
    /// Marks the start of a scale gesture. Always accepted.
    pub fn begin(&mut self) -> bool {
        self.active = true;
        true
    }

    /// Applies one scale sample. Returns `true` if `transform` changed.
    pub fn update(
        &mut self,
        gesture: ScaleGesture,
        transform: &mut ContentTransform,
        geometry: &ZoomGeometry,
    ) -> bool {
        let current = transform.scale();
        let Some(factor) = clamp_scale_factor(current, gesture.factor, &geometry.thresholds) else {
            return false;
        };
        if factor != gesture.factor {
            log::trace!(
                "pinch factor {} clamped to {factor} at scale {current}",
                gesture.factor
            );
        }
        let before = *transform;
        transform.scale_about(factor, gesture.focus);
        geometry.correct(transform, AxisCheck::BOTH);
        *transform != before
    }

    /// Marks the end of a scale gesture.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Returns `true` between [`PinchZoom::begin`] and [`PinchZoom::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
