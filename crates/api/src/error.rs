// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary layer.

use planview_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the boundary
/// contract: payload validation failures and opaque upstream failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A timestamp field was not valid RFC 3339.
    InvalidTimestamp {
        /// The field that was invalid.
        field: String,
        /// The raw value received.
        value: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The upstream service failed. The message is surfaced verbatim and
    /// never interpreted by this layer.
    Upstream {
        /// The opaque upstream error message.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp { field, value } => {
                write!(f, "Invalid timestamp in field '{field}': '{value}'")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Upstream { message } => {
                write!(f, "Upstream error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly across the boundary.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTimeWindow {
            start_hour,
            end_hour,
        } => ApiError::InvalidInput {
            field: String::from("time_window"),
            message: format!(
                "Invalid time window: start hour {start_hour}, end hour {end_hour}"
            ),
        },
        DomainError::InvalidTimezone(name) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Unknown timezone '{name}'"),
        },
        DomainError::UnresolvableLocalTime { datetime, timezone } => ApiError::InvalidInput {
            field: String::from("datetime"),
            message: format!("Wall-clock time {datetime} does not exist in timezone {timezone}"),
        },
        DomainError::InvalidConflictSeverity(value) => ApiError::InvalidInput {
            field: String::from("severity"),
            message: format!("Invalid conflict severity '{value}'. Must be 'hard' or 'soft'"),
        },
    }
}
