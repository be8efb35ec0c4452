// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post-fetch filtering of planning shifts.
//!
//! Filtering is a pure predicate over an already-fetched shift list,
//! independent of the fetch itself, so it can be tested without any
//! network machinery. Empty selections pass everything.

use crate::types::{LifecycleStatus, PlanningShift};
use serde::{Deserialize, Serialize};

/// Scheduler-chosen filters for the planning view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanningFilters {
    /// Restrict to these sites. Empty means all sites.
    pub site_ids: Vec<i64>,
    /// Restrict to shifts with an assignment for one of these collaborators.
    /// Empty means no restriction.
    pub collaborator_ids: Vec<i64>,
    /// Restrict to these lifecycle statuses. Empty means all statuses.
    pub statuses: Vec<LifecycleStatus>,
    /// Free-text search over "shift {id} {status} {source}".
    pub search: String,
}

impl PlanningFilters {
    /// Whether a shift passes every active filter.
    #[must_use]
    pub fn matches(&self, shift: &PlanningShift) -> bool {
        if !self.site_ids.is_empty() && !self.site_ids.contains(&shift.site_id) {
            return false;
        }
        if !self.collaborator_ids.is_empty()
            && !shift
                .assignments
                .iter()
                .any(|assignment| self.collaborator_ids.contains(&assignment.collaborator_id))
        {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&shift.status) {
            return false;
        }
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let haystack =
                format!("shift {} {} {}", shift.id, shift.status, shift.source).to_lowercase();
            if !haystack.contains(&search) {
                return false;
            }
        }
        true
    }

    /// Applies the filters to a shift list, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, shifts: &'a [PlanningShift]) -> Vec<&'a PlanningShift> {
        shifts.iter().filter(|shift| self.matches(shift)).collect()
    }

    /// Whether no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.site_ids.is_empty()
            && self.collaborator_ids.is_empty()
            && self.statuses.is_empty()
            && self.search.trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Assignment;
    use chrono::{TimeZone, Utc};

    fn assignment(collaborator_id: i64) -> Assignment {
        Assignment {
            id: 1,
            collaborator_id,
            role_id: 1,
            status: String::from("confirmed"),
            source: String::from("manual"),
            note: None,
            is_locked: false,
        }
    }

    fn shift(id: i64, site_id: i64, status: LifecycleStatus, collaborators: &[i64]) -> PlanningShift {
        PlanningShift {
            id,
            site_id,
            role_id: 1,
            mission_id: 1,
            capacity: 1,
            source: String::from("template"),
            start_utc: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
            end_utc: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
            status,
            assignments: collaborators.iter().map(|id| assignment(*id)).collect(),
            conflicts: Vec::new(),
        }
    }

    #[test]
    fn test_empty_filters_pass_everything() {
        let filters = PlanningFilters::default();
        let shifts = vec![shift(1, 10, LifecycleStatus::Draft, &[])];
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&shifts).len(), 1);
    }

    #[test]
    fn test_site_filter() {
        let filters = PlanningFilters {
            site_ids: vec![10],
            ..PlanningFilters::default()
        };
        let shifts = vec![
            shift(1, 10, LifecycleStatus::Draft, &[]),
            shift(2, 20, LifecycleStatus::Draft, &[]),
        ];
        let kept = filters.apply(&shifts);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_collaborator_filter_looks_at_assignments() {
        let filters = PlanningFilters {
            collaborator_ids: vec![42],
            ..PlanningFilters::default()
        };
        let shifts = vec![
            shift(1, 10, LifecycleStatus::Draft, &[42, 7]),
            shift(2, 10, LifecycleStatus::Draft, &[7]),
            shift(3, 10, LifecycleStatus::Draft, &[]),
        ];
        let kept = filters.apply(&shifts);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_status_filter() {
        let filters = PlanningFilters {
            statuses: vec![LifecycleStatus::Published, LifecycleStatus::Cancelled],
            ..PlanningFilters::default()
        };
        let shifts = vec![
            shift(1, 10, LifecycleStatus::Draft, &[]),
            shift(2, 10, LifecycleStatus::Published, &[]),
            shift(3, 10, LifecycleStatus::Cancelled, &[]),
        ];
        assert_eq!(filters.apply(&shifts).len(), 2);
    }

    #[test]
    fn test_search_matches_id_status_and_source() {
        let shifts = vec![
            shift(501, 10, LifecycleStatus::Draft, &[]),
            shift(502, 10, LifecycleStatus::Published, &[]),
        ];

        let by_id = PlanningFilters {
            search: String::from("shift 501"),
            ..PlanningFilters::default()
        };
        assert_eq!(by_id.apply(&shifts).len(), 1);

        let by_status = PlanningFilters {
            search: String::from("PUBLISHED"),
            ..PlanningFilters::default()
        };
        assert_eq!(by_status.apply(&shifts).len(), 1);

        let by_source = PlanningFilters {
            search: String::from("template"),
            ..PlanningFilters::default()
        };
        assert_eq!(by_source.apply(&shifts).len(), 2);
    }

    #[test]
    fn test_filters_compose() {
        let filters = PlanningFilters {
            site_ids: vec![10],
            collaborator_ids: vec![42],
            statuses: vec![LifecycleStatus::Published],
            search: String::new(),
        };
        let shifts = vec![
            shift(1, 10, LifecycleStatus::Published, &[42]),
            shift(2, 10, LifecycleStatus::Published, &[7]),
            shift(3, 10, LifecycleStatus::Draft, &[42]),
            shift(4, 20, LifecycleStatus::Published, &[42]),
        ];
        let kept = filters.apply(&shifts);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }
}
