// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: transform geometry for pannable, zoomable content.
//!
//! This crate provides the headless geometry behind an image‑style zoom view,
//! where some content of fixed intrinsic size is shown inside a viewport and
//! can be scaled and moved. It focuses on:
//! - A uniform scale + translation transform ([`ContentTransform`]) that is
//!   only ever updated incrementally (scale about a point, translate).
//! - The initial fit scale and the zoom thresholds derived from it
//!   ([`Thresholds`], [`fit_scale`]).
//! - Per‑axis bounds correction that keeps content either covering or
//!   centered in the viewport ([`bounds_correction`]).
//!
//! It does **not** interpret input. Gesture handling (pinch, pan, double‑tap
//! animation) lives in `understory_zoom_gesture`, which is built on top of
//! this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom::{AxisCheck, ContentTransform, Thresholds};
//!
//! let viewport = Size::new(400.0, 800.0);
//! let content = Size::new(800.0, 400.0);
//!
//! let thresholds = Thresholds::fit(viewport, content).unwrap();
//! assert_eq!(thresholds.init_scale, 0.5);
//!
//! let mut transform = ContentTransform::fitted(viewport, content, thresholds.init_scale);
//! transform.scale_about(2.0, Point::new(100.0, 400.0));
//! transform.clamp_to_viewport(content, viewport, AxisCheck::BOTH);
//!
//! let on_screen = transform.map_content_rect(content);
//! assert!(on_screen.x0 <= 0.0 && on_screen.x1 >= viewport.width);
//! ```
//!
//! ## Design notes
//!
//! - The viewport always spans `(0, 0)` to its size; all points handed to the
//!   transform are in that view space.
//! - Scale is uniform and strictly positive; there is no rotation.
//!
//! This crate is `no_std`.

#![no_std]

pub mod bounds;
pub mod fit;
mod transform;

pub use bounds::{AxisCheck, bounds_correction};
pub use fit::{Thresholds, fit_scale};
pub use transform::ContentTransform;
