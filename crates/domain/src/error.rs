// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;

/// Errors that can occur while building planning calendars and windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A display window's hour bounds are inverted or out of range.
    InvalidTimeWindow {
        /// The window's start hour.
        start_hour: u32,
        /// The window's end hour.
        end_hour: u32,
    },
    /// A timezone name could not be parsed.
    InvalidTimezone(String),
    /// A wall-clock time does not exist in the display timezone (DST gap).
    UnresolvableLocalTime {
        /// The wall-clock datetime that could not be resolved.
        datetime: NaiveDateTime,
        /// The timezone in which resolution was attempted.
        timezone: String,
    },
    /// A conflict severity string is neither "hard" nor "soft".
    InvalidConflictSeverity(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeWindow {
                start_hour,
                end_hour,
            } => {
                write!(
                    f,
                    "Invalid time window: start hour {start_hour} must be below 24 and end hour {end_hour} must be above it (up to 48)"
                )
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: '{name}'"),
            Self::UnresolvableLocalTime { datetime, timezone } => {
                write!(
                    f,
                    "Wall-clock time {datetime} does not exist in timezone {timezone}"
                )
            }
            Self::InvalidConflictSeverity(value) => {
                write!(
                    f,
                    "Invalid conflict severity: '{value}'. Must be 'hard' or 'soft'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
