// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::bounds::{AxisCheck, bounds_correction};

/// Uniform scale + translation mapping content coordinates into the viewport.
///
/// A content point `p` maps to `p * scale + translation` in view space. There
/// is no rotation, skew, or per‑axis scale.
///
/// Updates are post‑composed: each operation is applied after the current
/// mapping, in view space, so repeated calls accumulate:
/// - [`ContentTransform::then_scale_about`] scales about a view‑space point.
/// - [`ContentTransform::then_translate`] translates in view space.
///
/// The type performs no bounds checking; zoom limits and viewport clamping are
/// applied by callers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    scale: f64,
    translation: Vec2,
}

impl ContentTransform {
    /// The identity transform: scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale and a translation.
    ///
    /// Non‑positive or non‑finite scales are replaced with `1.0` so that the
    /// scale component stays strictly positive.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self { scale, translation }
    }

    /// Initial placement of `content` inside `viewport`.
    ///
    /// Starting from identity, the content is translated so that its center
    /// lands on the viewport center, then scaled by `init_scale` about the
    /// viewport center. When `init_scale` is not positive (the "unfit"
    /// state) only the centering translation is applied.
    #[must_use]
    pub fn fitted(viewport: Size, content: Size, init_scale: f64) -> Self {
        let center = viewport.to_rect().center();
        let centered = Self::IDENTITY.then_translate(Vec2::new(
            (viewport.width - content.width) / 2.0,
            (viewport.height - content.height) / 2.0,
        ));
        if init_scale > 0.0 && init_scale.is_finite() {
            centered.then_scale_about(init_scale, center)
        } else {
            centered
        }
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation in view space.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns this transform followed by a scale of `factor` about `focal`.
    ///
    /// `focal` is a view‑space point; it maps to itself under the added
    /// scale, so content under it stays put. A non‑positive or non‑finite
    /// `factor` leaves the transform unchanged.
    #[must_use]
    pub fn then_scale_about(self, factor: f64, focal: Point) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return self;
        }
        let focal = focal.to_vec2();
        Self {
            scale: self.scale * factor,
            translation: (self.translation - focal) * factor + focal,
        }
    }

    /// Returns this transform rescaled to exactly `scale` about `focal`.
    ///
    /// Equivalent to [`Self::then_scale_about`] with `scale / self.scale()`,
    /// except that the resulting scale is `scale` itself rather than a
    /// rounded product. A non‑positive or non‑finite `scale` leaves the
    /// transform unchanged.
    #[must_use]
    pub fn then_scale_to_about(self, scale: f64, focal: Point) -> Self {
        if !(scale.is_finite() && scale > 0.0) {
            return self;
        }
        let factor = scale / self.scale;
        let focal = focal.to_vec2();
        Self {
            scale,
            translation: (self.translation - focal) * factor + focal,
        }
    }

    /// Returns this transform followed by a view‑space translation.
    #[must_use]
    pub fn then_translate(self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            translation: self.translation + delta,
        }
    }

    /// Scales in place about a view‑space point. See [`Self::then_scale_about`].
    pub fn scale_about(&mut self, factor: f64, focal: Point) {
        *self = self.then_scale_about(factor, focal);
    }

    /// Rescales in place about a view‑space point. See
    /// [`Self::then_scale_to_about`].
    pub fn scale_to_about(&mut self, scale: f64, focal: Point) {
        *self = self.then_scale_to_about(scale, focal);
    }

    /// Translates in place. See [`Self::then_translate`].
    pub fn translate(&mut self, delta: Vec2) {
        *self = self.then_translate(delta);
    }

    /// Maps the content rectangle `(0, 0, width, height)` into view space.
    #[must_use]
    pub fn map_content_rect(&self, content: Size) -> Rect {
        let origin = self.translation.to_point();
        Rect::from_origin_size(origin, content * self.scale)
    }

    /// Converts a content‑space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Converts a view‑space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translation) / self.scale).to_point()
    }

    /// Returns the equivalent [`Affine`] for handing to a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Applies the viewport bounds correction for `content` and returns the
    /// translation that was added.
    ///
    /// See [`bounds_correction`] for the per‑axis rules.
    pub fn clamp_to_viewport(&mut self, content: Size, viewport: Size, check: AxisCheck) -> Vec2 {
        let delta = bounds_correction(self.map_content_rect(content), viewport, check);
        if delta != Vec2::ZERO {
            self.translate(delta);
        }
        delta
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
