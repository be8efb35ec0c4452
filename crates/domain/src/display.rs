// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display state resolution for timeline blocks.
//!
//! Reduces a shift's conflict list and lifecycle status to one visual state
//! with a strict precedence: hard conflicts over soft conflicts over
//! lifecycle status. The reduction is a total pure function; every
//! `(status, conflicts)` pair maps to exactly one state.

use crate::types::{ConflictEntry, ConflictSeverity, LifecycleStatus, PlanningShift};
use serde::{Deserialize, Serialize};

/// The single visual state of a timeline block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// At least one hard conflict. Overrides everything.
    HardConflict,
    /// Soft conflicts only.
    SoftConflict,
    /// No conflicts, published.
    Published,
    /// No conflicts, cancelled.
    Cancelled,
    /// No conflicts, draft (or unrecognized) lifecycle status.
    Draft,
}

impl DisplayState {
    /// Resolves the display state for a status and conflict list.
    ///
    /// Hard beats soft regardless of how many of each are present or their
    /// order in the list; any conflict beats the lifecycle status.
    #[must_use]
    pub fn resolve(status: LifecycleStatus, conflicts: &[ConflictEntry]) -> Self {
        if conflicts
            .iter()
            .any(|conflict| conflict.severity == ConflictSeverity::Hard)
        {
            return Self::HardConflict;
        }
        if conflicts
            .iter()
            .any(|conflict| conflict.severity == ConflictSeverity::Soft)
        {
            return Self::SoftConflict;
        }
        match status {
            LifecycleStatus::Published => Self::Published,
            LifecycleStatus::Cancelled => Self::Cancelled,
            LifecycleStatus::Draft => Self::Draft,
        }
    }

    /// Whether this state was produced by a conflict rather than lifecycle.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::HardConflict | Self::SoftConflict)
    }

    /// Converts this state to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HardConflict => "hard_conflict",
            Self::SoftConflict => "soft_conflict",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
        }
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlanningShift {
    /// The display state of this shift.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        DisplayState::resolve(self.status, &self.conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hard(rule: &str) -> ConflictEntry {
        ConflictEntry::new(ConflictSeverity::Hard, rule)
    }

    fn soft(rule: &str) -> ConflictEntry {
        ConflictEntry::new(ConflictSeverity::Soft, rule)
    }

    #[test]
    fn test_hard_conflict_overrides_everything() {
        let conflicts = vec![soft("partial_availability"), hard("double_booking")];
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Published, &conflicts),
            DisplayState::HardConflict
        );
    }

    #[test]
    fn test_hard_wins_regardless_of_order() {
        let hard_first = vec![hard("double_booking"), soft("partial_availability")];
        let soft_first = vec![soft("partial_availability"), hard("double_booking")];
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Draft, &hard_first),
            DisplayState::resolve(LifecycleStatus::Draft, &soft_first),
        );
    }

    #[test]
    fn test_soft_conflict_overrides_lifecycle() {
        let conflicts = vec![soft("partial_availability")];
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Cancelled, &conflicts),
            DisplayState::SoftConflict
        );
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Published, &conflicts),
            DisplayState::SoftConflict
        );
    }

    #[test]
    fn test_lifecycle_without_conflicts() {
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Published, &[]),
            DisplayState::Published
        );
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Cancelled, &[]),
            DisplayState::Cancelled
        );
        assert_eq!(
            DisplayState::resolve(LifecycleStatus::Draft, &[]),
            DisplayState::Draft
        );
    }

    #[test]
    fn test_unknown_upstream_status_resolves_to_draft() {
        // Lenient status parsing maps unknown strings to Draft, keeping
        // the resolution total over arbitrary payloads.
        let status = LifecycleStatus::from_api("pending-review");
        assert_eq!(DisplayState::resolve(status, &[]), DisplayState::Draft);
    }

    #[test]
    fn test_is_conflict() {
        assert!(DisplayState::HardConflict.is_conflict());
        assert!(DisplayState::SoftConflict.is_conflict());
        assert!(!DisplayState::Published.is_conflict());
        assert!(!DisplayState::Draft.is_conflict());
        assert!(!DisplayState::Cancelled.is_conflict());
    }
}
