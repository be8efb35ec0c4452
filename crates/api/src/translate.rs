// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation from wire DTOs into domain types.
//!
//! This is the layer responsible for rejecting malformed payloads:
//! timestamps must be RFC 3339 and conflict severities must be "hard" or
//! "soft". Everything downstream of a successful translation is total and
//! infallible. Lifecycle status strings, by contrast, parse leniently
//! (unknown reads as draft) because display classification must stay total
//! over whatever the backend sends.

use crate::dto::{
    AssignmentDto, CollaboratorDto, ConflictEntryDto, PlanningShiftDto, SiteDto,
};
use crate::error::{ApiError, translate_domain_error};
use chrono::{DateTime, Utc};
use planview::PlanningDataset;
use planview_domain::{
    Assignment, Collaborator, ConflictEntry, ConflictSeverity, LifecycleStatus, PlanningShift,
    Site,
};

/// Parses an RFC 3339 timestamp into a UTC instant.
///
/// # Errors
///
/// Returns [`ApiError::InvalidTimestamp`] naming the offending field.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ApiError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Translates a conflict entry, validating its severity.
///
/// # Errors
///
/// Returns an error for severities outside "hard"/"soft".
pub fn conflict_from_dto(dto: &ConflictEntryDto) -> Result<ConflictEntry, ApiError> {
    let severity: ConflictSeverity = dto.severity.parse().map_err(translate_domain_error)?;
    Ok(ConflictEntry {
        severity,
        rule: dto.rule.clone(),
        details: dto.details.clone(),
    })
}

fn assignment_from_dto(dto: &AssignmentDto) -> Assignment {
    Assignment {
        id: dto.id,
        collaborator_id: dto.collaborator_id,
        role_id: dto.role_id,
        status: dto.status.clone(),
        source: dto.source.clone(),
        note: dto.note.clone(),
        is_locked: dto.is_locked,
    }
}

/// Translates a composite planning shift payload.
///
/// # Errors
///
/// Returns an error for malformed timestamps or conflict severities.
pub fn planning_shift_from_dto(dto: &PlanningShiftDto) -> Result<PlanningShift, ApiError> {
    let conflicts = dto
        .conflicts
        .iter()
        .map(conflict_from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlanningShift {
        id: dto.shift.id,
        site_id: dto.shift.site_id,
        role_id: dto.shift.role_id,
        mission_id: dto.shift.mission_id,
        capacity: dto.shift.capacity,
        source: dto.shift.source.clone(),
        start_utc: parse_timestamp("start_utc", &dto.shift.start_utc)?,
        end_utc: parse_timestamp("end_utc", &dto.shift.end_utc)?,
        status: LifecycleStatus::from_api(&dto.shift.status),
        assignments: dto.assignments.iter().map(assignment_from_dto).collect(),
        conflicts,
    })
}

/// Translates a site record.
#[must_use]
pub fn site_from_dto(dto: &SiteDto) -> Site {
    Site {
        id: dto.id,
        name: dto.name.clone(),
        timezone: dto.timezone.clone(),
    }
}

/// Translates a collaborator record.
#[must_use]
pub fn collaborator_from_dto(dto: &CollaboratorDto) -> Collaborator {
    Collaborator {
        id: dto.id,
        full_name: dto.full_name.clone(),
        status: dto.status.clone(),
    }
}

/// Assembles a dataset snapshot from translated parts.
///
/// # Errors
///
/// Returns the first translation error encountered; a snapshot is all or
/// nothing, matching the wholesale-replacement contract.
pub fn dataset_from_dtos(
    sites: &[SiteDto],
    collaborators: &[CollaboratorDto],
    shifts: &[PlanningShiftDto],
) -> Result<PlanningDataset, ApiError> {
    Ok(PlanningDataset {
        sites: sites.iter().map(site_from_dto).collect(),
        collaborators: collaborators.iter().map(collaborator_from_dto).collect(),
        shifts: shifts
            .iter()
            .map(planning_shift_from_dto)
            .collect::<Result<Vec<_>, _>>()?,
    })
}
