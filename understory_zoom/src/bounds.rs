// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport bounds correction for transformed content.
//!
//! Each axis is handled independently:
//! - When the content is at least as large as the viewport on that axis it
//!   must cover the viewport: a gap at the leading edge (left/top) is closed
//!   first, otherwise a gap at the trailing edge (right/bottom).
//! - When the content is smaller it is centered on that axis.
//!
//! [`AxisCheck`] can exclude an axis from correction entirely.

use kurbo::{Rect, Size, Vec2};

/// Which axes take part in a bounds correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisCheck {
    /// Correct along the horizontal axis.
    pub x: bool,
    /// Correct along the vertical axis.
    pub y: bool,
}

impl AxisCheck {
    /// Both axes are corrected.
    pub const BOTH: Self = Self { x: true, y: true };
    /// Neither axis is corrected.
    pub const NONE: Self = Self { x: false, y: false };

    /// Checks only the axes on which `content_rect` is at least as large as
    /// the viewport.
    ///
    /// Content narrower (or shorter) than the viewport stays centered, so a
    /// drag has nothing to move on that axis.
    #[must_use]
    pub fn covering(content_rect: Rect, viewport: Size) -> Self {
        Self {
            x: content_rect.width() >= viewport.width,
            y: content_rect.height() >= viewport.height,
        }
    }
}

impl Default for AxisCheck {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Computes the translation that brings `content_rect` back within policy for
/// a viewport spanning `(0, 0)` to `viewport`.
///
/// Applying the returned delta and calling this again yields [`Vec2::ZERO`].
#[must_use]
pub fn bounds_correction(content_rect: Rect, viewport: Size, check: AxisCheck) -> Vec2 {
    let dx = if check.x {
        axis_correction(content_rect.x0, content_rect.x1, viewport.width)
    } else {
        0.0
    };
    let dy = if check.y {
        axis_correction(content_rect.y0, content_rect.y1, viewport.height)
    } else {
        0.0
    };
    Vec2::new(dx, dy)
}

fn axis_correction(near: f64, far: f64, view_extent: f64) -> f64 {
    let extent = far - near;
    if extent >= view_extent {
        if near > 0.0 {
            -near
        } else if far < view_extent {
            view_extent - far
        } else {
            0.0
        }
    } else {
        view_extent / 2.0 - far + extent / 2.0
    }
}
