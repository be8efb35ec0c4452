// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Duration, NaiveDate};
use planview_domain::{
    Collaborator, LocalCalendar, PlanningFilters, PlanningShift, Site, TimeWindow, week_days,
};

/// Whether the timeline shows one day or a Monday-first week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// A single calendar day.
    #[default]
    Day,
    /// The 7 days of the week containing the anchor, Monday first.
    Week,
}

/// A materialized snapshot of everything the timeline renders from.
///
/// Snapshots arrive fully shaped from the external data layer and are
/// replaced wholesale on every refetch. Whichever fetch resolves last wins;
/// nothing in here is patched incrementally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanningDataset {
    /// Sites, one timeline row each.
    pub sites: Vec<Site>,
    /// Collaborators, for filter options and block labels.
    pub collaborators: Vec<Collaborator>,
    /// Shift instances with their assignments and conflicts.
    pub shifts: Vec<PlanningShift>,
}

/// The scheduler-facing state of the planning timeline.
///
/// Everything derived from this (buckets, block geometry, display states)
/// is a pure function of it and is recomputed on every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningView {
    /// The day the view is anchored to. In week mode, any day of the
    /// target week.
    pub anchor: NaiveDate,
    /// Day or week layout.
    pub mode: ViewMode,
    /// The visible time-of-day window.
    pub window: TimeWindow,
    /// Display timezone for day boundaries and window anchoring.
    pub calendar: LocalCalendar,
    /// Active post-fetch filters.
    pub filters: PlanningFilters,
    /// The current dataset snapshot.
    pub dataset: PlanningDataset,
}

impl PlanningView {
    /// Creates a view anchored to `anchor` with an empty dataset.
    #[must_use]
    pub fn new(anchor: NaiveDate, mode: ViewMode, window: TimeWindow, calendar: LocalCalendar) -> Self {
        Self {
            anchor,
            mode,
            window,
            calendar,
            filters: PlanningFilters::default(),
            dataset: PlanningDataset::default(),
        }
    }

    /// Replaces the dataset wholesale. Last write wins.
    pub fn replace_dataset(&mut self, dataset: PlanningDataset) {
        self.dataset = dataset;
    }

    /// Jumps the anchor to a specific day.
    pub fn go_to(&mut self, day: NaiveDate) {
        self.anchor = day;
    }

    /// Moves the anchor forward by one day or one week, per mode.
    pub fn step_forward(&mut self) {
        self.anchor += self.step();
    }

    /// Moves the anchor back by one day or one week, per mode.
    pub fn step_back(&mut self) {
        self.anchor -= self.step();
    }

    /// The calendar days the current mode makes visible, in display order.
    #[must_use]
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.mode {
            ViewMode::Day => vec![self.anchor],
            ViewMode::Week => week_days(self.anchor).to_vec(),
        }
    }

    fn step(&self) -> Duration {
        match self.mode {
            ViewMode::Day => Duration::days(1),
            ViewMode::Week => Duration::weeks(1),
        }
    }
}
