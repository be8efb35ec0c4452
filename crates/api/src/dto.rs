// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data transfer objects for the planning REST API.
//!
//! Field names and shapes mirror the backend wire format exactly
//! (snake_case, ISO 8601 timestamp strings, conflict severity under the
//! `type` key). Translation into domain types happens in `translate`;
//! nothing here validates beyond structural deserialization.

use serde::{Deserialize, Serialize};

/// A paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The page of items.
    pub items: Vec<T>,
    /// Total item count across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

/// A shift instance as the planning endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInstanceDto {
    /// Shift instance identifier.
    pub id: i64,
    /// The mission this instance belongs to.
    pub mission_id: i64,
    /// The template it was generated from, if any.
    #[serde(default)]
    pub template_id: Option<i64>,
    /// The site the shift happens at.
    pub site_id: i64,
    /// The role to staff.
    pub role_id: i64,
    /// Lifecycle status string (draft/published/cancelled).
    pub status: String,
    /// Where the instance came from (template, manual, ...).
    #[serde(default)]
    pub source: String,
    /// How many collaborators the shift needs.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Start instant, RFC 3339.
    pub start_utc: String,
    /// End instant, RFC 3339.
    pub end_utc: String,
}

const fn default_capacity() -> u32 {
    1
}

/// An assignment as the planning endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDto {
    /// Assignment identifier.
    pub id: i64,
    /// The shift instance the assignment binds to.
    pub shift_instance_id: i64,
    /// The assigned collaborator.
    pub collaborator_id: i64,
    /// The role the collaborator fills.
    pub role_id: i64,
    /// Assignment status (pending/confirmed/proposed).
    pub status: String,
    /// Where the assignment came from (manual, auto-assign, ...).
    #[serde(default)]
    pub source: String,
    /// Free-form scheduler note.
    #[serde(default)]
    pub note: Option<String>,
    /// Locked assignments are skipped by auto-assign runs.
    #[serde(default)]
    pub is_locked: bool,
}

/// One conflict entry from the rule evaluator.
///
/// The wire field for severity is `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEntryDto {
    /// "hard" or "soft".
    #[serde(rename = "type")]
    pub severity: String,
    /// The rule code that produced this conflict.
    pub rule: String,
    /// Rule-specific detail payload.
    #[serde(default)]
    pub details: serde_json::Value,
}

/// The composite planning payload: one shift with its assignments and
/// conflicts, as `/planning/shift-instances` returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningShiftDto {
    /// The shift instance.
    pub shift: ShiftInstanceDto,
    /// Current assignments.
    #[serde(default)]
    pub assignments: Vec<AssignmentDto>,
    /// Current conflicts.
    #[serde(default)]
    pub conflicts: Vec<ConflictEntryDto>,
}

/// A site record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDto {
    /// Site identifier.
    pub id: i64,
    /// Owning organization.
    pub organization_id: i64,
    /// Display name.
    pub name: String,
    /// IANA timezone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

fn default_timezone() -> String {
    String::from("UTC")
}

/// A collaborator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorDto {
    /// Collaborator identifier.
    pub id: i64,
    /// Owning organization.
    pub organization_id: i64,
    /// Full display name.
    pub full_name: String,
    /// Primary role, if set.
    #[serde(default)]
    pub primary_role_id: Option<i64>,
    /// Employment status.
    pub status: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Request payload to start an auto-assign run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignStartRequest {
    /// The shift instances to staff.
    pub shift_ids: Vec<i64>,
}

/// Status of an auto-assign job, as the polling endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoAssignJobDto {
    /// Server-assigned job identifier.
    pub job_id: String,
    /// Job status string (pending/running/completed/failed).
    pub status: String,
    /// When the job started, RFC 3339.
    #[serde(default)]
    pub started_at: Option<String>,
    /// When the job reached a terminal state, RFC 3339.
    #[serde(default)]
    pub completed_at: Option<String>,
    /// How many assignments the run created so far.
    #[serde(default)]
    pub assignments_created: u32,
    /// Conflicts the run produced.
    #[serde(default)]
    pub conflicts: Vec<ConflictEntryDto>,
}

/// Query parameters for the shift-instance list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftInstanceQuery {
    /// Only shifts overlapping `[start, end)`. RFC 3339 when present.
    pub start: Option<chrono::DateTime<chrono::Utc>>,
    /// See `start`.
    pub end: Option<chrono::DateTime<chrono::Utc>>,
    /// Restrict to these sites.
    pub site_ids: Vec<i64>,
    /// Restrict to shifts assigned to these collaborators.
    pub collaborator_ids: Vec<i64>,
    /// Restrict to these status strings.
    pub statuses: Vec<String>,
}

impl ShiftInstanceQuery {
    /// Builds the query-string pairs the backend expects.
    ///
    /// Omits empty parameters entirely; id lists are comma-joined.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.to_rfc3339()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.to_rfc3339()));
        }
        if !self.site_ids.is_empty() {
            pairs.push(("place_ids", join_ids(&self.site_ids)));
        }
        if !self.collaborator_ids.is_empty() {
            pairs.push(("person_ids", join_ids(&self.collaborator_ids)));
        }
        if !self.statuses.is_empty() {
            pairs.push(("status", self.statuses.join(",")));
        }
        pairs
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// List responses arrive either as a bare array or wrapped in an
/// `{"items": [...]}` envelope, depending on the endpoint. This accepts
/// both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// A bare JSON array.
    Bare(Vec<T>),
    /// An items envelope.
    Enveloped {
        /// The wrapped items.
        items: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    /// Unwraps into the item list.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Enveloped { items } => items,
        }
    }
}
