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

mod dto;
mod error;
mod jobs;
mod source;
mod translate;

#[cfg(test)]
mod tests;

pub use dto::{
    AssignmentDto, AutoAssignJobDto, AutoAssignStartRequest, CollaboratorDto, ConflictEntryDto,
    ListResponse, Paginated, PlanningShiftDto, ShiftInstanceDto, ShiftInstanceQuery, SiteDto,
};
pub use error::{ApiError, translate_domain_error};
pub use jobs::{AutoAssignJob, JobPhase};
pub use source::{FixtureDataSource, PlanningDataSource, PlanningFixture};
pub use translate::{
    collaborator_from_dto, conflict_from_dto, dataset_from_dtos, parse_timestamp,
    planning_shift_from_dto, site_from_dto,
};
