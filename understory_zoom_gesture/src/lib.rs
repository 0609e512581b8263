// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_gesture --heading-base-level=0

//! Understory Zoom Gesture: gesture state machines for zoomable content views.
//!
//! This crate turns touch input into updates of the uniform scale + translate
//! transform from `understory_zoom`. Each module handles one interaction:
//!
//! - [`pinch`]: Apply scale‑gesture samples about their focal point, clamped
//!   to the zoom thresholds.
//! - [`pan`]: Move content with the centroid of all active pointers, behind a
//!   touch‑slop threshold, freezing axes the content does not cover.
//! - [`double_tap`]: Animate between the fit scale and the double‑tap scale,
//!   one fixed geometric step per frame, ending exactly on the target.
//!
//! [`ZoomView`] wires all three to a single transform and is what most hosts
//! use directly.
//!
//! ## Design Philosophy
//!
//! - **Headless**: no rendering, no timers, no event types from any UI
//!   framework. Hosts pass plain points, sizes, and phases.
//! - **Effects out, not callbacks in**: every input returns a
//!   [`ZoomEffects`] value telling the host to redraw, to block ancestor
//!   scrolling, or to schedule the next animation frame.
//! - **Absorb, don't fail**: degenerate input (missing content, bad sizes,
//!   out‑of‑range factors, taps during an animation) is clamped or ignored.
//!
//! Recognizing double taps and pinch gestures from raw events is left to the
//! host's gesture recognizers.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom_gesture::{PointerPhase, ScaleGesture, ZoomView};
//!
//! let mut view = ZoomView::default();
//! view.set_viewport(Size::new(400.0, 800.0));
//! view.set_content(Some(Size::new(800.0, 400.0)));
//!
//! // Pinch out around a point; the factor is clamped to the 4x ceiling.
//! view.scale_begin();
//! let fx = view.scale(ScaleGesture::new(8.0, Point::new(200.0, 400.0)));
//! view.scale_end();
//! assert!(fx.transform_changed);
//! assert_eq!(view.transform().scale(), 2.0);
//!
//! // Drag with one finger; the parent is asked not to steal the gesture.
//! view.pointer(PointerPhase::Down, &[Point::new(200.0, 400.0)]);
//! let fx = view.pointer(PointerPhase::Move, &[Point::new(160.0, 400.0)]);
//! assert_eq!(fx.disallow_intercept, Some(true));
//! view.pointer(PointerPhase::Up, &[]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod double_tap;
mod geometry;
pub mod pan;
pub mod pinch;
mod view;

pub use config::{DEFAULT_FRAME_INTERVAL, DEFAULT_TOUCH_SLOP, ZoomConfig};
pub use geometry::ZoomGeometry;
pub use pan::PointerPhase;
pub use pinch::ScaleGesture;
pub use view::{ZoomEffects, ZoomView, ZoomViewDebugInfo};
