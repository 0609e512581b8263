// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi‑pointer pan: move content by the motion of the pointer centroid.
//!
//! ## Usage
//!
//! 1) Feed every pointer transition to [`PanController::pointer`] along with
//!    the positions of all pointers that are currently down.
//! 2) The centroid of those pointers is tracked across samples. Whenever the
//!    pointer count changes, dragging is disarmed and the centroid is re‑seeded
//!    so adding or lifting a finger never makes the content jump.
//! 3) Dragging arms once a single sample moves the centroid further than the
//!    touch slop; from that sample on, centroid motion translates the content.
//! 4) Axes on which the content does not cover the viewport are frozen.
//! 5) `Up`/`Cancel` ends the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_zoom_gesture::ZoomGeometry;
//! use understory_zoom_gesture::pan::{PanController, PointerPhase};
//!
//! let geometry = ZoomGeometry::settle(Size::new(100.0, 100.0), Size::new(50.0, 50.0)).unwrap();
//! let mut transform = geometry.initial_transform();
//! // Zoom in so the content covers the viewport.
//! transform.scale_about(2.0, Point::new(50.0, 50.0));
//!
//! let mut pan = PanController::new(4.0);
//! pan.pointer(PointerPhase::Down, &[Point::new(50.0, 50.0)], &mut transform, &geometry);
//! let out = pan.pointer(PointerPhase::Move, &[Point::new(60.0, 50.0)], &mut transform, &geometry);
//! assert!(out.translated);
//! assert_eq!(out.disallow_intercept, Some(true));
//! ```

use kurbo::{Point, Vec2};
use understory_zoom::{AxisCheck, ContentTransform};

use crate::geometry::ZoomGeometry;

/// Pointer transition kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// A pointer went down.
    Down,
    /// One or more pointers moved.
    Move,
    /// The last pointer went up.
    Up,
    /// The sequence was cancelled by the host.
    Cancel,
}

/// Arithmetic mean of `points`, or `None` when empty.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let count = points.len() as f64;
    Some((sum / count).to_point())
}

/// Transient state of one pointer sequence.
///
/// A new session starts whenever the number of active pointers changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Centroid at the previous sample.
    pub last_centroid: Point,
    /// Number of pointers at the previous sample.
    pub pointer_count: usize,
    /// Whether centroid motion currently translates content.
    pub drag_armed: bool,
    /// Axes that took part in the last drag correction.
    pub check: AxisCheck,
}

impl GestureSession {
    /// Starts a session at `centroid` with `pointer_count` pointers.
    #[must_use]
    pub fn new(centroid: Point, pointer_count: usize) -> Self {
        Self {
            last_centroid: centroid,
            pointer_count,
            drag_armed: false,
            check: AxisCheck::BOTH,
        }
    }
}

/// Result of feeding one pointer sample to a [`PanController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanOutcome {
    /// The content transform was modified.
    pub translated: bool,
    /// Whether ancestors should be asked not to intercept this sequence.
    ///
    /// `None` when the sample carried no information (for example an empty
    /// pointer list).
    pub disallow_intercept: Option<bool>,
}

/// Drag/pan controller with a touch‑slop activation threshold.
#[derive(Clone, Copy, Debug)]
pub struct PanController {
    touch_slop: f64,
    session: Option<GestureSession>,
}

impl PanController {
    /// Creates a controller that arms dragging once a sample moves the
    /// centroid strictly further than `touch_slop`.
    #[must_use]
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop,
            session: None,
        }
    }

    /// Returns the drag activation distance.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is armed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|s| s.drag_armed)
    }

    /// Session bookkeeping without touching any transform.
    ///
    /// Returns the centroid delta for a `Move` sample once dragging is armed
    /// (including the sample that arms it), and `None` otherwise.
    pub fn track(&mut self, phase: PointerPhase, pointers: &[Point]) -> Option<Vec2> {
        if matches!(phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.end();
            return None;
        }
        let center = centroid(pointers)?;

        if self
            .session
            .is_none_or(|s| s.pointer_count != pointers.len())
        {
            self.session = Some(GestureSession::new(center, pointers.len()));
        }
        let session = self.session.as_mut()?;

        if phase != PointerPhase::Move {
            return None;
        }

        let delta = center - session.last_centroid;
        session.last_centroid = center;
        if !session.drag_armed && delta.hypot() > self.touch_slop {
            log::trace!("drag armed after centroid moved {delta:?}");
            session.drag_armed = true;
        }
        session.drag_armed.then_some(delta)
    }

    /// Processes one pointer sample against `transform`.
    pub fn pointer(
        &mut self,
        phase: PointerPhase,
        pointers: &[Point],
        transform: &mut ContentTransform,
        geometry: &ZoomGeometry,
    ) -> PanOutcome {
        if matches!(phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.end();
            return PanOutcome {
                translated: false,
                disallow_intercept: Some(false),
            };
        }
        if pointers.is_empty() {
            return PanOutcome::default();
        }

        let disallow_intercept = Some(geometry.exceeds_viewport(transform));
        let Some(mut delta) = self.track(phase, pointers) else {
            return PanOutcome {
                translated: false,
                disallow_intercept,
            };
        };

        let check = AxisCheck::covering(geometry.content_rect(transform), geometry.viewport);
        if !check.x {
            delta.x = 0.0;
        }
        if !check.y {
            delta.y = 0.0;
        }
        if let Some(session) = &mut self.session {
            session.check = check;
        }

        let before = *transform;
        transform.translate(delta);
        geometry.correct(transform, check);
        PanOutcome {
            translated: *transform != before,
            disallow_intercept,
        }
    }

    /// Ends the current session; the next sample starts a fresh one.
    pub fn end(&mut self) {
        self.session = None;
    }
}
