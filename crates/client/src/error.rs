// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the HTTP client.

use planview_api::ApiError;

/// Errors the HTTP client can produce.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, body decoding).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {code}: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, surfaced verbatim.
        body: String,
    },

    /// The payload arrived but failed translation.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Collapses a client error into the boundary error type.
///
/// Translation failures pass through unchanged; transport and status
/// failures become opaque upstream errors.
pub(crate) fn into_api_error(err: ClientError) -> ApiError {
    match err {
        ClientError::Api(api) => api,
        other => ApiError::Upstream {
            message: other.to_string(),
        },
    }
}
