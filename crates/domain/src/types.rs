// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a shift instance, independent of its conflict state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Not yet published to collaborators. Editable.
    #[default]
    Draft,
    /// Published to collaborators.
    Published,
    /// Cancelled. Kept for display, excluded from staffing totals.
    Cancelled,
}

impl LifecycleStatus {
    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status string from the planning API.
    ///
    /// The parse is lenient: any unrecognized status maps to [`Self::Draft`],
    /// so downstream display classification stays total over arbitrary
    /// upstream payloads.
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "published" => Self::Published,
            "cancelled" => Self::Cancelled,
            _ => Self::Draft,
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a scheduling conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    /// Blocks publication (e.g. double-booking).
    Hard,
    /// Warns without blocking publication (e.g. partial availability).
    Soft,
}

impl FromStr for ConflictSeverity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            _ => Err(DomainError::InvalidConflictSeverity(s.to_string())),
        }
    }
}

impl ConflictSeverity {
    /// Converts this severity to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

impl std::fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One conflict reported by the external rule evaluator.
///
/// This core only classifies and orders conflicts, it never generates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEntry {
    /// Hard or soft.
    pub severity: ConflictSeverity,
    /// The rule code that produced this conflict (e.g. "double_booking").
    pub rule: String,
    /// Rule-specific detail payload, passed through opaquely.
    pub details: serde_json::Value,
}

impl ConflictEntry {
    /// Creates a conflict entry with an empty detail payload.
    #[must_use]
    pub fn new(severity: ConflictSeverity, rule: &str) -> Self {
        Self {
            severity,
            rule: rule.to_string(),
            details: serde_json::Value::Null,
        }
    }
}

/// A half-open interval of absolute UTC instants: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new range. Callers are responsible for `end > start`;
    /// degenerate ranges are a data-quality issue handled geometrically,
    /// never by panicking.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test.
    ///
    /// A range ending exactly at `other.start` does not overlap, nor does
    /// one starting exactly at `other.end`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether an instant falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// A binding of one collaborator to one shift instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment identifier.
    pub id: i64,
    /// The collaborator bound to the shift.
    pub collaborator_id: i64,
    /// The role the collaborator fills on this shift.
    pub role_id: i64,
    /// Assignment status (pending/confirmed/proposed).
    pub status: String,
    /// Where the assignment came from (manual, auto-assign, ...).
    pub source: String,
    /// Free-form scheduler note.
    pub note: Option<String>,
    /// Locked assignments are skipped by auto-assign runs.
    pub is_locked: bool,
}

/// A concrete, time-bound work slot at a site.
///
/// Instances are materialized by the external data-fetching layer and
/// replaced wholesale on every refetch. This core reads them, never
/// mutates or persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningShift {
    /// Shift instance identifier.
    pub id: i64,
    /// The site (grouping key for timeline rows).
    pub site_id: i64,
    /// The role to staff.
    pub role_id: i64,
    /// The mission this shift belongs to.
    pub mission_id: i64,
    /// How many collaborators the shift needs.
    pub capacity: u32,
    /// Where the instance came from (template, manual, ...).
    pub source: String,
    /// Absolute start instant.
    pub start_utc: DateTime<Utc>,
    /// Absolute end instant.
    pub end_utc: DateTime<Utc>,
    /// Lifecycle status.
    pub status: LifecycleStatus,
    /// Current assignments.
    pub assignments: Vec<Assignment>,
    /// Conflicts reported by the external rule evaluator.
    pub conflicts: Vec<ConflictEntry>,
}

impl PlanningShift {
    /// The shift's `[start, end)` interval.
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_utc, self.end_utc)
    }
}

/// A site: the parent grouping key for timeline rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Site identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// IANA timezone name of the site.
    pub timezone: String,
}

/// A collaborator who can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Collaborator identifier.
    pub id: i64,
    /// Full display name.
    pub full_name: String,
    /// Employment status (active, inactive, ...).
    pub status: String,
}
