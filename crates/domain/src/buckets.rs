// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partitioning of shift lists into the groupings the timeline layout needs.
//!
//! Inclusion uses the half-open overlap test of [`TimeRange::overlaps`]: a
//! shift ending exactly at a range start is excluded, one starting exactly
//! at a range end is excluded. A shift spanning a day boundary appears in
//! both adjacent day buckets so each day's lane can render the portion that
//! overlaps it.
//!
//! Input order is preserved within every bucket; no secondary sort is
//! imposed here. Rows iterate in site-id order because the maps are ordered.

use crate::types::{PlanningShift, TimeRange};
use crate::window::DayWindow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Groups shifts by site, keeping only those overlapping `range`.
#[must_use]
pub fn bucket_by_site<'a>(
    shifts: &'a [PlanningShift],
    range: &TimeRange,
) -> BTreeMap<i64, Vec<&'a PlanningShift>> {
    let mut buckets: BTreeMap<i64, Vec<&PlanningShift>> = BTreeMap::new();
    for shift in shifts {
        if shift.time_range().overlaps(range) {
            buckets.entry(shift.site_id).or_default().push(shift);
        }
    }
    buckets
}

/// Groups shifts by site and calendar day for the week view.
///
/// Every `(site, day)` bucket holds the shifts overlapping that day's
/// boundary range. Shifts overlapping none of the given days are dropped;
/// shifts overlapping several days are duplicated into each.
#[must_use]
pub fn bucket_by_site_and_day<'a>(
    shifts: &'a [PlanningShift],
    days: &[DayWindow],
) -> BTreeMap<i64, BTreeMap<NaiveDate, Vec<&'a PlanningShift>>> {
    let mut buckets: BTreeMap<i64, BTreeMap<NaiveDate, Vec<&PlanningShift>>> = BTreeMap::new();
    for shift in shifts {
        let shift_range = shift.time_range();
        for day_window in days {
            if shift_range.overlaps(&day_window.range) {
                buckets
                    .entry(shift.site_id)
                    .or_default()
                    .entry(day_window.day)
                    .or_default()
                    .push(shift);
            }
        }
    }
    buckets
}
