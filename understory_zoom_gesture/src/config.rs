// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Default drag activation distance, in device pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default delay between animation frames (one frame at 60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tunables for a [`ZoomView`](crate::ZoomView).
///
/// ```rust
/// use core::time::Duration;
/// use understory_zoom_gesture::ZoomConfig;
///
/// let config = ZoomConfig::default()
///     .with_touch_slop(12.0)
///     .with_frame_interval(Duration::from_millis(8));
/// assert_eq!(config.touch_slop(), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    touch_slop: f64,
    frame_interval: Duration,
}

impl ZoomConfig {
    /// Creates a configuration with the default slop and frame interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }

    /// Sets the distance a pointer centroid must move in one sample before a
    /// drag starts panning.
    ///
    /// Negative or non‑finite values are treated as `0.0`.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = if touch_slop.is_finite() && touch_slop > 0.0 {
            touch_slop
        } else {
            0.0
        };
        self
    }

    /// Sets the delay requested between double‑tap animation frames.
    #[must_use]
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Returns the drag activation distance.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Returns the delay requested between animation frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}
