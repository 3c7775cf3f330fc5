// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Failure values reported by asynchronous operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An error reported by an asynchronous operation (usually an HTTP request).
///
/// The reducer never inspects this value: it is stored verbatim into the
/// `error` field of the affected entity so that the UI can display it.
///
/// On the wire it is accepted either as a bare string or as an object with
/// a `message` and an optional HTTP `status`.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::ApiError;
///
/// let plain: ApiError = serde_json::from_str(r#""Network Error""#).unwrap();
/// assert_eq!(plain.message(), "Network Error");
///
/// let detailed: ApiError =
///     serde_json::from_str(r#"{"message":"Not Found","status":404}"#).unwrap();
/// assert_eq!(detailed.status(), Some(404));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireApiError")]
pub struct ApiError {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl ApiError {
    /// Creates an error with a message and no status code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Creates an error carrying an HTTP status code.
    #[must_use]
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code, if the failure came with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {status})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireApiError {
    Message(String),
    Detailed {
        message: String,
        #[serde(default)]
        status: Option<u16>,
    },
}

impl From<WireApiError> for ApiError {
    fn from(wire: WireApiError) -> Self {
        match wire {
            WireApiError::Message(message) => Self::new(message),
            WireApiError::Detailed { message, status } => Self { message, status },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_when_present() {
        assert_eq!(ApiError::new("timeout").to_string(), "timeout");
        assert_eq!(
            ApiError::with_status("Not Found", 404).to_string(),
            "Not Found (HTTP 404)"
        );
    }

    #[test]
    fn deserializes_object_without_status() {
        let err: ApiError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(err, ApiError::new("boom"));
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_value(ApiError::with_status("denied", 403)).unwrap();
        assert_eq!(json, serde_json::json!({"message": "denied", "status": 403}));

        let json = serde_json::to_value(ApiError::new("denied")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "denied"}));
    }
}
