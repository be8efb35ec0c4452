// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-interval polling for auto-assign jobs.

use planview_api::{ApiError, AutoAssignJob, PlanningDataSource};
use std::time::Duration;

/// Polls an auto-assign job until it reaches a terminal phase.
///
/// Each attempt fetches the job status; non-terminal phases sleep for
/// `interval` and try again, up to `max_attempts` fetches in total. If the
/// job is still running when attempts run out, the last observed status is
/// returned; the caller decides whether to keep waiting.
///
/// # Errors
///
/// Returns the first fetch or translation error encountered.
pub async fn poll_auto_assign<S: PlanningDataSource + Sync>(
    source: &S,
    job_id: &str,
    interval: Duration,
    max_attempts: u32,
) -> Result<AutoAssignJob, ApiError> {
    let attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let job = source.auto_assign_status(job_id).await?;
        tracing::debug!(job_id, attempt, phase = ?job.phase, "Polled auto-assign job");
        if job.is_terminal() {
            return Ok(job);
        }
        if attempt >= attempts {
            tracing::warn!(job_id, attempts, "Auto-assign job still running after final poll");
            return Ok(job);
        }
        attempt += 1;
        tokio::time::sleep(interval).await;
    }
}
