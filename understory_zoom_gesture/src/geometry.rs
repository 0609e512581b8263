// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};
use understory_zoom::{AxisCheck, ContentTransform, Thresholds};

/// The settled layout that gesture controllers operate against.
///
/// A `ZoomGeometry` exists only once both the viewport and the content sizes
/// are known and the [`Thresholds`] for them have been computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomGeometry {
    /// Viewport size in device pixels; the viewport spans `(0, 0)` to this.
    pub viewport: Size,
    /// Intrinsic content size.
    pub content: Size,
    /// Zoom thresholds derived from the fit scale.
    pub thresholds: Thresholds,
}

impl ZoomGeometry {
    /// Computes thresholds and returns the settled geometry.
    ///
    /// Returns `None` for non‑positive sizes.
    #[must_use]
    pub fn settle(viewport: Size, content: Size) -> Option<Self> {
        Thresholds::fit(viewport, content).map(|thresholds| Self {
            viewport,
            content,
            thresholds,
        })
    }

    /// The initial transform for this geometry.
    #[must_use]
    pub fn initial_transform(&self) -> ContentTransform {
        ContentTransform::fitted(self.viewport, self.content, self.thresholds.init_scale)
    }

    /// Maps the content rectangle through `transform`.
    #[must_use]
    pub fn content_rect(&self, transform: &ContentTransform) -> Rect {
        transform.map_content_rect(self.content)
    }

    /// Applies the bounds correction for the checked axes.
    pub fn correct(&self, transform: &mut ContentTransform, check: AxisCheck) -> Vec2 {
        transform.clamp_to_viewport(self.content, self.viewport, check)
    }

    /// Returns `true` when the transformed content is wider or taller than
    /// the viewport.
    #[must_use]
    pub fn exceeds_viewport(&self, transform: &ContentTransform) -> bool {
        let rect = self.content_rect(transform);
        rect.width() > self.viewport.width || rect.height() > self.viewport.height
    }
}
