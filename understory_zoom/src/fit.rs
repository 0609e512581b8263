// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial fit scale and the zoom thresholds derived from it.

use kurbo::Size;

/// Multiplier from the fit scale to the double‑tap scale.
pub const DOUBLE_TAP_MULTIPLIER: f64 = 2.0;
/// Multiplier from the fit scale to the maximum scale.
pub const MAX_SCALE_MULTIPLIER: f64 = 4.0;

/// Computes the scale at which `content` fits inside `viewport`.
///
/// Cases, in order of precedence:
/// 1. Content wider and shorter than the viewport: fit the width.
/// 2. Content taller and narrower than the viewport: fit the height.
/// 3. Content larger on both axes, or smaller on both: the smaller of the
///    two axis ratios.
///
/// Anything else (content matching the viewport exactly on some axis)
/// returns `0.0`, as do non‑positive sizes.
#[must_use]
pub fn fit_scale(viewport: Size, content: Size) -> f64 {
    if !is_valid(viewport) || !is_valid(content) {
        return 0.0;
    }
    let (vw, vh) = (viewport.width, viewport.height);
    let (cw, ch) = (content.width, content.height);

    if cw > vw && ch < vh {
        vw / cw
    } else if ch > vh && cw < vw {
        vh / ch
    } else if (cw > vw && ch > vh) || (cw < vw && ch < vh) {
        (vw / cw).min(vh / ch)
    } else {
        0.0
    }
}

fn is_valid(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Zoom thresholds for one piece of loaded content.
///
/// All three values are derived from the fit scale and stay fixed until the
/// content changes. An `init_scale` of `0.0` marks the "unfit" state in which
/// no scale clamping is possible; see [`Thresholds::is_fitted`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Fit scale; the lower zoom bound.
    pub init_scale: f64,
    /// Scale targeted when double‑tapping from below it.
    pub double_tap_scale: f64,
    /// Upper zoom bound.
    pub max_scale: f64,
}

impl Thresholds {
    /// Derives thresholds from a fit scale.
    #[must_use]
    pub fn from_init_scale(init_scale: f64) -> Self {
        Self {
            init_scale,
            double_tap_scale: init_scale * DOUBLE_TAP_MULTIPLIER,
            max_scale: init_scale * MAX_SCALE_MULTIPLIER,
        }
    }

    /// Computes thresholds for `content` shown in `viewport`.
    ///
    /// Returns `None` when either size has a non‑positive (or non‑finite)
    /// dimension. Valid sizes that hit the uncovered fit case produce unfit
    /// thresholds rather than `None`.
    #[must_use]
    pub fn fit(viewport: Size, content: Size) -> Option<Self> {
        if !is_valid(viewport) || !is_valid(content) {
            return None;
        }
        Some(Self::from_init_scale(fit_scale(viewport, content)))
    }

    /// Returns `true` once a usable fit scale is known.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.init_scale > 0.0
    }

    /// Clamps `scale` into `[init_scale, max_scale]`.
    ///
    /// Unfit thresholds return `scale` unchanged.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if self.is_fitted() {
            scale.clamp(self.init_scale, self.max_scale)
        } else {
            scale
        }
    }
}
