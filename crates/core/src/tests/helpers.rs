// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use planview_domain::{
    Assignment, Collaborator, ConflictEntry, LifecycleStatus, PlanningShift, Site,
};

pub fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0)
        .unwrap()
}

pub fn site(id: i64, name: &str) -> Site {
    Site {
        id,
        name: String::from(name),
        timezone: String::from("UTC"),
    }
}

pub fn collaborator(id: i64, name: &str) -> Collaborator {
    Collaborator {
        id,
        full_name: String::from(name),
        status: String::from("active"),
    }
}

pub fn assignment(collaborator_id: i64) -> Assignment {
    Assignment {
        id: collaborator_id * 100,
        collaborator_id,
        role_id: 1,
        status: String::from("confirmed"),
        source: String::from("manual"),
        note: None,
        is_locked: false,
    }
}

pub fn shift(
    id: i64,
    site_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: LifecycleStatus,
    conflicts: Vec<ConflictEntry>,
) -> PlanningShift {
    PlanningShift {
        id,
        site_id,
        role_id: 1,
        mission_id: 1,
        capacity: 1,
        source: String::from("template"),
        start_utc: start,
        end_utc: end,
        status,
        assignments: Vec::new(),
        conflicts,
    }
}
