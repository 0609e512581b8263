// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_zoom::{AxisCheck, ContentTransform, Thresholds};

use crate::config::ZoomConfig;
use crate::double_tap::{DoubleTapZoom, TickOutcome};
use crate::geometry::ZoomGeometry;
use crate::pan::{PanController, PointerPhase};
use crate::pinch::{PinchZoom, ScaleGesture};

/// What the host should do after feeding an input to a [`ZoomView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomEffects {
    /// The transform changed; re‑read [`ZoomView::transform`] and redraw.
    pub transform_changed: bool,
    /// Request for ancestors to stop (`Some(true)`) or resume
    /// (`Some(false)`) intercepting the current pointer sequence.
    pub disallow_intercept: Option<bool>,
    /// Call [`ZoomView::frame`] again after this delay.
    pub next_frame: Option<Duration>,
}

impl ZoomEffects {
    /// No effects.
    pub const NONE: Self = Self {
        transform_changed: false,
        disallow_intercept: None,
        next_frame: None,
    };

    fn changed(transform_changed: bool) -> Self {
        Self {
            transform_changed,
            ..Self::NONE
        }
    }

    /// Returns `true` when there is nothing for the host to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Zoomable content view: the transform plus every gesture that drives it.
///
/// A `ZoomView` owns the single [`ContentTransform`] for one piece of
/// content. The host forwards layout, content, pointer, scale‑gesture,
/// double‑tap, and frame notifications; every call returns [`ZoomEffects`]
/// telling the host whether to redraw, whether to block ancestor scrolling,
/// and whether to schedule another animation frame.
///
/// All calls are expected on one thread, in arrival order.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_zoom_gesture::ZoomView;
///
/// let mut view = ZoomView::default();
/// view.set_viewport(Size::new(400.0, 400.0));
/// let fx = view.set_content(Some(Size::new(200.0, 200.0)));
/// assert!(fx.transform_changed);
/// assert_eq!(view.thresholds().unwrap().init_scale, 2.0);
///
/// let mut fx = view.double_tap(Point::new(200.0, 200.0));
/// while fx.next_frame.is_some() {
///     fx = view.frame();
/// }
/// assert!((view.transform().scale() - 4.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct ZoomView {
    config: ZoomConfig,
    viewport: Option<Size>,
    content: Option<Size>,
    geometry: Option<ZoomGeometry>,
    transform: ContentTransform,
    pan: PanController,
    pinch: PinchZoom,
    double_tap: DoubleTapZoom,
}

impl ZoomView {
    /// Creates an empty view with the given configuration.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            viewport: None,
            content: None,
            geometry: None,
            transform: ContentTransform::IDENTITY,
            pan: PanController::new(config.touch_slop()),
            pinch: PinchZoom::default(),
            double_tap: DoubleTapZoom::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Sets the viewport size once layout is final.
    ///
    /// The first time both viewport and content are known the thresholds are
    /// computed and the content is fitted. Later viewport changes keep the
    /// thresholds and scale and only re‑apply the bounds correction; a
    /// non‑positive size at that point is ignored.
    pub fn set_viewport(&mut self, viewport: Size) -> ZoomEffects {
        if self.viewport == Some(viewport) {
            return ZoomEffects::NONE;
        }

        if let Some(geometry) = &mut self.geometry {
            if viewport.width <= 0.0 || viewport.height <= 0.0 {
                log::debug!("ignoring viewport {viewport:?} after layout settled");
                return ZoomEffects::NONE;
            }
            self.viewport = Some(viewport);
            geometry.viewport = viewport;
            let delta = geometry.correct(&mut self.transform, AxisCheck::BOTH);
            return ZoomEffects::changed(delta != Vec2::ZERO);
        }
        self.viewport = Some(viewport);
        ZoomEffects::changed(self.settle())
    }

    /// Sets (or clears) the intrinsic size of the displayed content.
    ///
    /// New content discards the thresholds, the transform, any pointer
    /// session, and any running animation, then fits again if the viewport
    /// is known.
    pub fn set_content(&mut self, content: Option<Size>) -> ZoomEffects {
        if self.content == content {
            return ZoomEffects::NONE;
        }
        let had_geometry = self.geometry.take().is_some();
        if had_geometry {
            log::debug!("content changed to {content:?}; resetting zoom state");
        }
        self.content = content;
        self.transform = ContentTransform::IDENTITY;
        self.pan.end();
        self.pinch.end();
        self.double_tap.cancel();

        let settled = self.settle();
        ZoomEffects::changed(had_geometry || settled)
    }

    fn settle(&mut self) -> bool {
        if self.geometry.is_some() {
            return false;
        }
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            return false;
        };
        let Some(geometry) = ZoomGeometry::settle(viewport, content) else {
            log::debug!("layout not settled: viewport {viewport:?}, content {content:?}");
            return false;
        };
        if !geometry.thresholds.is_fitted() {
            log::debug!("no fit scale for content {content:?} in viewport {viewport:?}");
        }
        log::debug!("layout settled with {:?}", geometry.thresholds);
        self.transform = geometry.initial_transform();
        self.geometry = Some(geometry);
        true
    }

    /// Feeds a pointer transition with the positions of all active pointers.
    pub fn pointer(&mut self, phase: PointerPhase, pointers: &[Point]) -> ZoomEffects {
        let Some(geometry) = &self.geometry else {
            self.pan.track(phase, pointers);
            return ZoomEffects::NONE;
        };
        let out = self.pan.pointer(phase, pointers, &mut self.transform, geometry);
        ZoomEffects {
            transform_changed: out.translated,
            disallow_intercept: out.disallow_intercept,
            next_frame: None,
        }
    }

    /// Notifies the start of a scale gesture. Always accepted.
    pub fn scale_begin(&mut self) -> bool {
        self.pinch.begin()
    }

    /// Feeds one scale‑gesture sample.
    pub fn scale(&mut self, gesture: ScaleGesture) -> ZoomEffects {
        let Some(geometry) = &self.geometry else {
            return ZoomEffects::NONE;
        };
        ZoomEffects::changed(self.pinch.update(gesture, &mut self.transform, geometry))
    }

    /// Notifies the end of a scale gesture.
    pub fn scale_end(&mut self) {
        self.pinch.end();
    }

    /// Handles a double tap at a view‑space point.
    ///
    /// Starts the zoom animation and asks for the first frame. Taps while an
    /// animation is running are ignored.
    pub fn double_tap(&mut self, at: Point) -> ZoomEffects {
        let Some(geometry) = &self.geometry else {
            return ZoomEffects::NONE;
        };
        if !self
            .double_tap
            .double_tap(at, self.transform.scale(), &geometry.thresholds)
        {
            return ZoomEffects::NONE;
        }
        ZoomEffects {
            next_frame: Some(self.config.frame_interval()),
            ..ZoomEffects::NONE
        }
    }

    /// Advances the double‑tap animation by one frame.
    pub fn frame(&mut self) -> ZoomEffects {
        let Some(geometry) = &self.geometry else {
            return ZoomEffects::NONE;
        };
        match self.double_tap.tick(&mut self.transform, geometry) {
            TickOutcome::Idle => ZoomEffects::NONE,
            TickOutcome::Continue => ZoomEffects {
                transform_changed: true,
                disallow_intercept: None,
                next_frame: Some(self.config.frame_interval()),
            },
            TickOutcome::Finished => ZoomEffects::changed(true),
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ContentTransform {
        self.transform
    }

    /// Returns the current transform as an [`Affine`] for rendering.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Returns the content rectangle in view space, once settled.
    #[must_use]
    pub fn content_rect(&self) -> Option<Rect> {
        self.geometry.map(|g| g.content_rect(&self.transform))
    }

    /// Returns the thresholds, once settled.
    #[must_use]
    pub fn thresholds(&self) -> Option<Thresholds> {
        self.geometry.map(|g| g.thresholds)
    }

    /// Returns the settled geometry, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&ZoomGeometry> {
        self.geometry.as_ref()
    }

    /// Returns the last viewport size set.
    #[must_use]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Returns the last content size set.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.content
    }

    /// Returns `true` while the double‑tap animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.double_tap.is_running()
    }

    /// Returns `true` while a pinch gesture is between begin and end.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomViewDebugInfo {
        ZoomViewDebugInfo {
            viewport: self.viewport,
            content: self.content,
            thresholds: self.thresholds(),
            transform: self.transform,
            content_rect: self.content_rect(),
            animating: self.is_animating(),
            pinching: self.is_pinching(),
            pointer_count: self.pan.session().map_or(0, |s| s.pointer_count),
            dragging: self.pan.is_dragging(),
        }
    }
}

impl Default for ZoomView {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

/// Debug snapshot of a [`ZoomView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomViewDebugInfo {
    /// Last viewport size set.
    pub viewport: Option<Size>,
    /// Last content size set.
    pub content: Option<Size>,
    /// Thresholds, once settled.
    pub thresholds: Option<Thresholds>,
    /// Current transform.
    pub transform: ContentTransform,
    /// Content rectangle in view space, once settled.
    pub content_rect: Option<Rect>,
    /// Double‑tap animation in progress.
    pub animating: bool,
    /// Pinch gesture in progress.
    pub pinching: bool,
    /// Pointers in the current session.
    pub pointer_count: usize,
    /// Drag armed in the current session.
    pub dragging: bool,
}
