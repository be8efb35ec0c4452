// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derivation of the render model from a planning view.
//!
//! The pipeline is: filter the snapshot's shifts, resolve the visible days'
//! boundaries once, bucket by site and day, then position and classify each
//! shift. Every output is ephemeral and recomputed per pass; blocks carry
//! no state of their own.
//!
//! The only failure source is timezone day-boundary resolution. Geometry
//! and classification are total and never error, so the rendering layer can
//! never receive out-of-bounds values.

use crate::error::CoreError;
use crate::state::PlanningView;
use chrono::NaiveDate;
use planview_domain::{
    DayWindow, DisplayState, PlanningShift, bucket_by_site_and_day,
};
use serde::Serialize;

/// One positioned, classified block inside a day lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBlock {
    /// The shift instance this block renders.
    pub shift_id: i64,
    /// Left edge, percent of the lane width.
    pub offset_percent: f64,
    /// Width, percent of the lane width.
    pub width_percent: f64,
    /// The single visual state of the block.
    pub display_state: DisplayState,
}

/// One day's lane within a site row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLane {
    /// The calendar day this lane renders.
    pub day: NaiveDate,
    /// Blocks in input order.
    pub blocks: Vec<RenderBlock>,
}

/// One site's row of day lanes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRow {
    /// The site identifier.
    pub site_id: i64,
    /// The site display name, empty when the site is unknown to the
    /// snapshot (a shift referencing a missing site still renders).
    pub site_name: String,
    /// One lane per visible day, in display order.
    pub lanes: Vec<DayLane>,
}

/// The complete derived layout for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// The visible days, in display order.
    pub days: Vec<NaiveDate>,
    /// Site rows in site-id order.
    pub rows: Vec<SiteRow>,
}

impl RenderModel {
    /// Total number of blocks across all rows and lanes.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.lanes)
            .map(|lane| lane.blocks.len())
            .sum()
    }
}

/// Derives the render model for the view's current state.
///
/// # Errors
///
/// Returns [`CoreError::DomainViolation`] if a visible day boundary or
/// window anchor falls into a DST gap of the display timezone.
pub fn build_render_model(view: &PlanningView) -> Result<RenderModel, CoreError> {
    let days = view.visible_days();

    let day_windows = days
        .iter()
        .map(|day| DayWindow::resolve(*day, &view.calendar))
        .collect::<Result<Vec<_>, _>>()?;

    let filtered: Vec<PlanningShift> = view
        .filters
        .apply(&view.dataset.shifts)
        .into_iter()
        .cloned()
        .collect();

    let buckets = bucket_by_site_and_day(&filtered, &day_windows);

    let mut rows = Vec::with_capacity(buckets.len());
    for (site_id, day_buckets) in &buckets {
        let site_name = view
            .dataset
            .sites
            .iter()
            .find(|site| site.id == *site_id)
            .map(|site| site.name.clone())
            .unwrap_or_default();

        let mut lanes = Vec::with_capacity(day_windows.len());
        for day_window in &day_windows {
            let anchored = view.window.anchor(day_window.day, &view.calendar)?;
            let blocks = day_buckets
                .get(&day_window.day)
                .map(|shifts| {
                    shifts
                        .iter()
                        .map(|shift| {
                            let position = anchored.position(&shift.time_range());
                            RenderBlock {
                                shift_id: shift.id,
                                offset_percent: position.offset_percent,
                                width_percent: position.width_percent,
                                display_state: shift.display_state(),
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
            lanes.push(DayLane {
                day: day_window.day,
                blocks,
            });
        }

        rows.push(SiteRow {
            site_id: *site_id,
            site_name,
            lanes,
        });
    }

    Ok(RenderModel { days, rows })
}
