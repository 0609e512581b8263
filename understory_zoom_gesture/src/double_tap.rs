// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double‑tap zoom: an animated toggle between the fit scale and the
//! double‑tap scale.
//!
//! The animator is a two‑state machine, `Idle -> Running -> Idle`. A double
//! tap while idle starts a run toward:
//! - the double‑tap scale, when the current scale is below it;
//! - the fit scale, otherwise.
//!
//! Each frame multiplies the scale by a fixed step ([`ZOOM_IN_STEP`] or
//! [`ZOOM_OUT_STEP`]) about the tap point. The frame on which the target is
//! reached or passed applies one corrective scale so the run ends exactly on
//! the target. A double tap while running is dropped.
//!
//! The animator never sleeps or schedules anything itself: the host calls
//! [`DoubleTapZoom::tick`] once per frame while it returns
//! [`TickOutcome::Continue`].

use kurbo::Point;
use understory_zoom::{AxisCheck, ContentTransform, Thresholds};

use crate::geometry::ZoomGeometry;

/// Per‑frame scale multiplier while zooming in.
pub const ZOOM_IN_STEP: f64 = 1.08;
/// Per‑frame scale multiplier while zooming out.
pub const ZOOM_OUT_STEP: f64 = 0.96;

/// An in‑flight double‑tap animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRun {
    /// View‑space point the animation scales about.
    pub focal: Point,
    /// Scale the run ends on.
    pub target_scale: f64,
    /// Multiplier applied each frame.
    pub step_factor: f64,
}

impl AnimationRun {
    /// Plans a run from `current_scale` for a tap at `focal`.
    ///
    /// Returns `None` for unfit thresholds. Below the double‑tap scale the
    /// run zooms in to it; anywhere else it zooms out to the fit scale.
    #[must_use]
    pub fn toward(current_scale: f64, focal: Point, thresholds: &Thresholds) -> Option<Self> {
        if !thresholds.is_fitted() {
            return None;
        }
        let (target_scale, step_factor) = if current_scale < thresholds.double_tap_scale {
            (thresholds.double_tap_scale, ZOOM_IN_STEP)
        } else {
            (thresholds.init_scale, ZOOM_OUT_STEP)
        };
        Some(Self {
            focal,
            target_scale,
            step_factor,
        })
    }

    /// Returns `true` when the run enlarges the content.
    #[must_use]
    pub fn is_enlarging(&self) -> bool {
        self.step_factor > 1.0
    }

    /// Advances `transform` by one frame.
    ///
    /// Returns the new transform and whether another frame is needed. When no
    /// further frame is needed the returned transform sits exactly on
    /// [`AnimationRun::target_scale`].
    #[must_use]
    pub fn step(
        &self,
        transform: ContentTransform,
        geometry: &ZoomGeometry,
    ) -> (ContentTransform, bool) {
        let mut next = transform.then_scale_about(self.step_factor, self.focal);
        geometry.correct(&mut next, AxisCheck::BOTH);

        let scale = next.scale();
        let more = if self.is_enlarging() {
            scale < self.target_scale
        } else {
            scale > self.target_scale
        };
        if more {
            return (next, true);
        }

        next.scale_to_about(self.target_scale, self.focal);
        geometry.correct(&mut next, AxisCheck::BOTH);
        (next, false)
    }
}

/// Animator state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// No animation in progress.
    #[default]
    Idle,
    /// An animation is in progress.
    Running(AnimationRun),
}

/// Result of one [`DoubleTapZoom::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was running; the transform is untouched.
    Idle,
    /// The transform moved one step; schedule another frame.
    Continue,
    /// The transform reached its target and the animator is idle again.
    Finished,
}

/// Single‑flight double‑tap zoom animator.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_zoom_gesture::ZoomGeometry;
/// use understory_zoom_gesture::double_tap::{DoubleTapZoom, TickOutcome};
///
/// let geometry = ZoomGeometry::settle(Size::new(400.0, 400.0), Size::new(200.0, 200.0)).unwrap();
/// let mut transform = geometry.initial_transform();
/// let mut zoom = DoubleTapZoom::default();
///
/// assert!(zoom.double_tap(Point::new(200.0, 200.0), transform.scale(), &geometry.thresholds));
/// while zoom.tick(&mut transform, &geometry) == TickOutcome::Continue {}
/// assert!((transform.scale() - geometry.thresholds.double_tap_scale).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTapZoom {
    state: AnimationState,
}

impl DoubleTapZoom {
    /// Handles a double tap at `focal`.
    ///
    /// Returns `true` if a run started. Taps while a run is active, and taps
    /// on unfit thresholds, are ignored.
    pub fn double_tap(
        &mut self,
        focal: Point,
        current_scale: f64,
        thresholds: &Thresholds,
    ) -> bool {
        if let AnimationState::Running(run) = self.state {
            log::debug!(
                "double tap at {focal:?} dropped; already animating to {}",
                run.target_scale
            );
            return false;
        }
        let Some(run) = AnimationRun::toward(current_scale, focal, thresholds) else {
            return false;
        };
        log::debug!(
            "double tap zoom from {current_scale} to {} about {focal:?}",
            run.target_scale
        );
        self.state = AnimationState::Running(run);
        true
    }

    /// Advances the running animation by one frame.
    pub fn tick(
        &mut self,
        transform: &mut ContentTransform,
        geometry: &ZoomGeometry,
    ) -> TickOutcome {
        let AnimationState::Running(run) = self.state else {
            return TickOutcome::Idle;
        };
        let (next, more) = run.step(*transform, geometry);
        *transform = next;
        log::trace!("double tap zoom frame at scale {}", next.scale());
        if more {
            TickOutcome::Continue
        } else {
            log::debug!("double tap zoom settled at {}", next.scale());
            self.state = AnimationState::Idle;
            TickOutcome::Finished
        }
    }

    /// Drops any running animation without touching the transform.
    pub fn cancel(&mut self) {
        self.state = AnimationState::Idle;
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns the active run, if any.
    #[must_use]
    pub fn run(&self) -> Option<&AnimationRun> {
        match &self.state {
            AnimationState::Running(run) => Some(run),
            AnimationState::Idle => None,
        }
    }

    /// Returns `true` while an animation is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running(_))
    }
}
