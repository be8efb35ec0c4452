// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The injectable data-source abstraction.
//!
//! The view core never hardcodes data and never performs I/O itself; it
//! consumes already-materialized snapshots from an implementation of
//! [`PlanningDataSource`]. Production uses the HTTP client crate; tests and
//! demos use [`FixtureDataSource`], which serves a JSON fixture through the
//! same contract.

use crate::dto::{
    AutoAssignJobDto, CollaboratorDto, PlanningShiftDto, ShiftInstanceQuery, SiteDto,
};
use crate::error::ApiError;
use crate::jobs::AutoAssignJob;
use crate::translate::{collaborator_from_dto, planning_shift_from_dto, site_from_dto};
use planview_domain::{Collaborator, PlanningShift, Site, TimeRange};
use serde::{Deserialize, Serialize};

/// The fetch contract the planning view consumes.
///
/// Implementations hand over fully translated domain values; translation
/// errors and transport failures both surface as [`ApiError`].
pub trait PlanningDataSource {
    /// Fetches all sites.
    fn fetch_sites(&self) -> impl Future<Output = Result<Vec<Site>, ApiError>> + Send;

    /// Fetches all collaborators.
    fn fetch_collaborators(&self)
    -> impl Future<Output = Result<Vec<Collaborator>, ApiError>> + Send;

    /// Fetches shift instances matching a query.
    fn fetch_shifts(
        &self,
        query: &ShiftInstanceQuery,
    ) -> impl Future<Output = Result<Vec<PlanningShift>, ApiError>> + Send;

    /// Starts an auto-assign run over the given shifts.
    fn start_auto_assign(
        &self,
        shift_ids: &[i64],
    ) -> impl Future<Output = Result<AutoAssignJob, ApiError>> + Send;

    /// Polls an auto-assign job's status.
    fn auto_assign_status(
        &self,
        job_id: &str,
    ) -> impl Future<Output = Result<AutoAssignJob, ApiError>> + Send;
}

/// The on-disk shape of a planning fixture file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanningFixture {
    /// Sites.
    #[serde(default)]
    pub sites: Vec<SiteDto>,
    /// Collaborators.
    #[serde(default)]
    pub collaborators: Vec<CollaboratorDto>,
    /// Composite shift payloads.
    #[serde(default)]
    pub shifts: Vec<PlanningShiftDto>,
}

/// A [`PlanningDataSource`] serving a static JSON fixture.
///
/// Query filtering mimics what the backend does server-side (range overlap,
/// site/person/status restriction), so fixture-backed tests exercise the
/// same query surface as production. Auto-assign runs complete immediately
/// with zero created assignments.
#[derive(Debug, Clone, Default)]
pub struct FixtureDataSource {
    fixture: PlanningFixture,
}

impl FixtureDataSource {
    /// Wraps an in-memory fixture.
    #[must_use]
    pub const fn new(fixture: PlanningFixture) -> Self {
        Self { fixture }
    }

    /// Parses a fixture from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if the JSON does not match the
    /// fixture shape.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let fixture: PlanningFixture =
            serde_json::from_str(json).map_err(|err| ApiError::InvalidInput {
                field: String::from("fixture"),
                message: err.to_string(),
            })?;
        Ok(Self::new(fixture))
    }

    fn matches_query(shift: &PlanningShift, query: &ShiftInstanceQuery) -> bool {
        if let (Some(start), Some(end)) = (query.start, query.end) {
            if !shift.time_range().overlaps(&TimeRange::new(start, end)) {
                return false;
            }
        }
        if !query.site_ids.is_empty() && !query.site_ids.contains(&shift.site_id) {
            return false;
        }
        if !query.collaborator_ids.is_empty()
            && !shift
                .assignments
                .iter()
                .any(|assignment| query.collaborator_ids.contains(&assignment.collaborator_id))
        {
            return false;
        }
        if !query.statuses.is_empty()
            && !query
                .statuses
                .iter()
                .any(|status| status == shift.status.as_str())
        {
            return false;
        }
        true
    }
}

impl PlanningDataSource for FixtureDataSource {
    async fn fetch_sites(&self) -> Result<Vec<Site>, ApiError> {
        Ok(self.fixture.sites.iter().map(site_from_dto).collect())
    }

    async fn fetch_collaborators(&self) -> Result<Vec<Collaborator>, ApiError> {
        Ok(self
            .fixture
            .collaborators
            .iter()
            .map(collaborator_from_dto)
            .collect())
    }

    async fn fetch_shifts(
        &self,
        query: &ShiftInstanceQuery,
    ) -> Result<Vec<PlanningShift>, ApiError> {
        let shifts = self
            .fixture
            .shifts
            .iter()
            .map(planning_shift_from_dto)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shifts
            .into_iter()
            .filter(|shift| Self::matches_query(shift, query))
            .collect())
    }

    async fn start_auto_assign(&self, _shift_ids: &[i64]) -> Result<AutoAssignJob, ApiError> {
        AutoAssignJob::from_dto(&AutoAssignJobDto {
            job_id: String::from("fixture-job"),
            status: String::from("completed"),
            started_at: None,
            completed_at: None,
            assignments_created: 0,
            conflicts: Vec::new(),
        })
    }

    async fn auto_assign_status(&self, job_id: &str) -> Result<AutoAssignJob, ApiError> {
        if job_id != "fixture-job" {
            return Err(ApiError::ResourceNotFound {
                resource_type: String::from("Auto-assign job"),
                message: format!("Job '{job_id}' does not exist in this fixture"),
            });
        }
        self.start_auto_assign(&[]).await
    }
}
