// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The auto-assign job polling contract.
//!
//! The scheduling algorithm itself runs server-side; this core only
//! consumes its polling surface: `job_id -> {status, assignments_created,
//! conflicts}`. Clients poll at a fixed interval and stop on a terminal
//! phase.

use crate::dto::AutoAssignJobDto;
use crate::error::ApiError;
use crate::translate::conflict_from_dto;
use planview_domain::ConflictEntry;

/// Coarse job phase derived from the status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobPhase {
    /// Queued, not yet started.
    Pending,
    /// In progress. Unrecognized transient statuses read as running so an
    /// unknown state keeps the poll alive instead of aborting it.
    Running,
    /// Finished successfully. Terminal.
    Completed,
    /// Finished with an error. Terminal.
    Failed,
}

impl JobPhase {
    /// Parses a status string from the polling endpoint.
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pending" | "queued" => Self::Pending,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Running,
        }
    }

    /// Whether polling should stop at this phase.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A translated auto-assign job status.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoAssignJob {
    /// Server-assigned job identifier.
    pub job_id: String,
    /// Coarse phase.
    pub phase: JobPhase,
    /// How many assignments the run created so far.
    pub assignments_created: u32,
    /// Conflicts the run produced.
    pub conflicts: Vec<ConflictEntry>,
}

impl AutoAssignJob {
    /// Translates a job status payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a reported conflict has an invalid severity.
    pub fn from_dto(dto: &AutoAssignJobDto) -> Result<Self, ApiError> {
        Ok(Self {
            job_id: dto.job_id.clone(),
            phase: JobPhase::from_api(&dto.status),
            assignments_created: dto.assignments_created,
            conflicts: dto
                .conflicts
                .iter()
                .map(conflict_from_dto)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// Whether polling should stop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_parse() {
        assert_eq!(JobPhase::from_api("pending"), JobPhase::Pending);
        assert_eq!(JobPhase::from_api("queued"), JobPhase::Pending);
        assert_eq!(JobPhase::from_api("running"), JobPhase::Running);
        assert_eq!(JobPhase::from_api("completed"), JobPhase::Completed);
        assert_eq!(JobPhase::from_api("FAILED"), JobPhase::Failed);
    }

    #[test]
    fn test_unknown_phase_keeps_polling() {
        let phase = JobPhase::from_api("rebalancing");
        assert_eq!(phase, JobPhase::Running);
        assert!(!phase.is_terminal());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(JobPhase::Completed.is_terminal());
        assert!(JobPhase::Failed.is_terminal());
        assert!(!JobPhase::Pending.is_terminal());
        assert!(!JobPhase::Running.is_terminal());
    }

    #[test]
    fn test_job_translation() {
        let dto = AutoAssignJobDto {
            job_id: String::from("job-7"),
            status: String::from("completed"),
            started_at: None,
            completed_at: None,
            assignments_created: 3,
            conflicts: Vec::new(),
        };
        let job = AutoAssignJob::from_dto(&dto).unwrap();
        assert_eq!(job.phase, JobPhase::Completed);
        assert_eq!(job.assignments_created, 3);
        assert!(job.is_terminal());
    }
}
