// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod buckets;
mod display;
mod error;
mod filters;
mod geometry;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use buckets::{bucket_by_site, bucket_by_site_and_day};
pub use display::DisplayState;
pub use error::DomainError;
pub use filters::PlanningFilters;
pub use geometry::{BlockPosition, MIN_BLOCK_MINUTES};
pub use window::{
    AnchoredWindow, DEFAULT_END_HOUR, DEFAULT_START_HOUR, DayWindow, LocalCalendar, TimeWindow,
    start_of_week, week_days,
};

// Re-export public types
pub use types::{
    Assignment, Collaborator, ConflictEntry, ConflictSeverity, LifecycleStatus, PlanningShift,
    Site, TimeRange,
};
