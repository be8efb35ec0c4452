// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Position calculation for timeline blocks.
//!
//! Maps a shift's absolute `[start, end)` interval onto a percentage
//! rectangle inside an anchored display window. Shifts that begin before or
//! end after the window are truncated, not dropped; shifts fully outside
//! collapse to the nearest boundary with the minimum-width floor so they
//! stay visible and clickable.
//!
//! ## Invariants
//!
//! - `offset_percent` and `width_percent` are always in `[0, 100]`, never NaN
//! - Rendered width never corresponds to less than [`MIN_BLOCK_MINUTES`]
//! - Pure: identical inputs always yield identical outputs, no errors

use crate::types::TimeRange;
use crate::window::AnchoredWindow;
use serde::{Deserialize, Serialize};

/// Floor on rendered block duration, in minutes.
///
/// Sub-readable blocks for very short shifts would be unclickable; the floor
/// trades minor positional precision for usability.
pub const MIN_BLOCK_MINUTES: i64 = 15;

/// A percentage rectangle within one day lane of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPosition {
    /// Left edge, percent of the lane width, in `[0, 100]`.
    pub offset_percent: f64,
    /// Width, percent of the lane width, in `[0, 100]`.
    pub width_percent: f64,
}

impl AnchoredWindow {
    /// Computes the percentage rectangle for a shift interval.
    ///
    /// The interval is clamped into the window; the clamped duration is
    /// floored to [`MIN_BLOCK_MINUTES`]. A degenerate interval
    /// (`end <= start`) yields a zero or negative raw duration that the
    /// floor corrects upward, so no input can produce an invalid rectangle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, range: &TimeRange) -> BlockPosition {
        let clamped_start = range.start.clamp(self.start, self.end);
        let clamped_end = range.end.clamp(self.start, self.end);

        let total_minutes = (self.end - self.start).num_minutes();
        let offset_minutes = (clamped_start - self.start).num_minutes();
        let duration_minutes = (clamped_end - clamped_start)
            .num_minutes()
            .max(MIN_BLOCK_MINUTES);

        // total_minutes > 0 is guaranteed by the TimeWindow invariant.
        let total = total_minutes as f64;
        BlockPosition {
            offset_percent: (offset_minutes as f64 / total * 100.0).clamp(0.0, 100.0),
            width_percent: (duration_minutes as f64 / total * 100.0).clamp(0.0, 100.0),
        }
    }
}
