// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records tracking asynchronous operations.
//!
//! All records follow the same discipline: right after a transition either
//! `loading` is set, or the operation has settled with data or an error.
//!
//! | phase   | loading | error        | data / payload |
//! |---------|---------|--------------|----------------|
//! | started | `true`  | `None`       | empty          |
//! | success | `false` | `None`       | from action    |
//! | failure | `false` | `Some(err)`  | empty          |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ApiError, TemperatureReading};

/// Tracks one fetch-backed entity.
///
/// `T` is a `Vec<_>` for collections and an `Option<_>` for singular
/// entities; its [`Default`] is the "empty" value used while loading and
/// after a failure.
///
/// # Examples
///
/// ```
/// use smarthome_state::state::AsyncResource;
/// use smarthome_state::types::ApiError;
///
/// let started: AsyncResource<Vec<u32>> = AsyncResource::started();
/// assert!(started.is_loading());
///
/// let failed: AsyncResource<Vec<u32>> = AsyncResource::failed(ApiError::new("offline"));
/// assert!(!failed.is_loading());
/// assert_eq!(failed.error().map(ApiError::message), Some("offline"));
/// assert!(failed.data().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncResource<T> {
    loading: bool,
    error: Option<ApiError>,
    data: T,
}

impl<T: Default> AsyncResource<T> {
    /// A request is in flight; data and error are cleared.
    #[must_use]
    pub fn started() -> Self {
        Self {
            loading: true,
            error: None,
            data: T::default(),
        }
    }

    /// The request succeeded with `data`.
    #[must_use]
    pub fn succeeded(data: T) -> Self {
        Self {
            loading: false,
            error: None,
            data,
        }
    }

    /// The request failed; data is cleared.
    #[must_use]
    pub fn failed(error: ApiError) -> Self {
        Self {
            loading: false,
            error: Some(error),
            data: T::default(),
        }
    }
}

impl<T: Clone> AsyncResource<T> {
    /// A new request is in flight but the previous data stays visible.
    ///
    /// Used by entities that refresh in place, such as the current position.
    #[must_use]
    pub fn refreshing(&self) -> Self {
        Self {
            loading: true,
            error: None,
            data: self.data.clone(),
        }
    }
}

impl<T> AsyncResource<T> {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the last failed request.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Returns `true` if the last request failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the loaded data.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a copy of this record with `data` replaced and the other
    /// fields kept.
    #[must_use]
    pub fn with_data(&self, data: T) -> Self {
        Self {
            loading: self.loading,
            error: self.error.clone(),
            data,
        }
    }
}

impl<T: Default> Default for AsyncResource<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: T::default(),
        }
    }
}

/// Tracks the outdoor temperature fetch.
///
/// Same discipline as [`AsyncResource`], plus the time of the last
/// successful update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureResource {
    loading: bool,
    error: Option<ApiError>,
    data: Option<TemperatureReading>,
    last_updated: Option<DateTime<Utc>>,
}

impl TemperatureResource {
    /// A request is in flight.
    #[must_use]
    pub fn started() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// The request succeeded.
    #[must_use]
    pub fn succeeded(data: TemperatureReading, last_updated: DateTime<Utc>) -> Self {
        Self {
            loading: false,
            error: None,
            data: Some(data),
            last_updated: Some(last_updated),
        }
    }

    /// The request failed.
    #[must_use]
    pub fn failed(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the last failed request.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Returns the last reading.
    #[must_use]
    pub fn data(&self) -> Option<TemperatureReading> {
        self.data
    }

    /// Returns when the last reading was taken.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

/// Tracks a command sent to an actuator, such as setting a blind roller.
///
/// The backend answers with a confirmation message rather than data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStatus {
    loading: bool,
    error: Option<ApiError>,
    message: Option<String>,
}

impl CommandStatus {
    /// The command was sent.
    #[must_use]
    pub fn started() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// The command was accepted.
    #[must_use]
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: None,
            message: Some(message.into()),
        }
    }

    /// The command was rejected or could not be sent.
    #[must_use]
    pub fn failed(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Returns `true` while the command is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the last failed command.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Returns the confirmation message of the last accepted command.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Tracks the submission of a new sensor (generic, GPS or date sensor).
///
/// `status` is `true` while the submission is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSubmission {
    status: bool,
    error: Option<ApiError>,
}

impl SensorSubmission {
    /// The submission was sent.
    #[must_use]
    pub fn started() -> Self {
        Self {
            status: true,
            error: None,
        }
    }

    /// The sensor was created.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            status: false,
            error: None,
        }
    }

    /// The sensor could not be created.
    #[must_use]
    pub fn failed(error: ApiError) -> Self {
        Self {
            status: false,
            error: Some(error),
        }
    }

    /// Returns `true` while the submission is in flight.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.status
    }

    /// Returns the error of the last failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn default_resource_is_idle_and_empty() {
        let resource: AsyncResource<Option<String>> = AsyncResource::default();
        assert!(!resource.is_loading());
        assert!(!resource.has_error());
        assert!(resource.data().is_none());
    }

    #[test]
    fn started_clears_data_and_error() {
        let resource: AsyncResource<Vec<u8>> = AsyncResource::started();
        assert!(resource.is_loading());
        assert!(resource.error().is_none());
        assert!(resource.data().is_empty());
    }

    #[test]
    fn refreshing_keeps_data() {
        let loaded = AsyncResource::succeeded(Some(7));
        let refreshing = loaded.refreshing();
        assert!(refreshing.is_loading());
        assert_eq!(refreshing.data(), &Some(7));
    }

    #[test]
    fn refreshing_clears_previous_error() {
        let failed: AsyncResource<Option<u8>> = AsyncResource::failed(ApiError::new("x"));
        assert!(!failed.refreshing().has_error());
    }

    #[test]
    fn with_data_keeps_flags() {
        let failed: AsyncResource<Vec<u8>> = AsyncResource::failed(ApiError::new("x"));
        let patched = failed.with_data(vec![1, 2]);
        assert!(patched.has_error());
        assert_eq!(patched.data(), &vec![1, 2]);
    }

    #[test]
    fn temperature_lifecycle() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let started = TemperatureResource::started();
        assert!(started.is_loading());
        assert!(started.last_updated().is_none());

        let done = TemperatureResource::succeeded(TemperatureReading::celsius(18.0), at);
        assert!(!done.is_loading());
        assert_eq!(done.last_updated(), Some(at));

        let failed = TemperatureResource::failed(ApiError::new("no data"));
        assert!(failed.data().is_none());
        assert!(failed.last_updated().is_none());
    }

    #[test]
    fn command_status_lifecycle() {
        assert!(CommandStatus::started().is_loading());
        assert_eq!(CommandStatus::succeeded("ok").message(), Some("ok"));
        let failed = CommandStatus::failed(ApiError::new("jammed"));
        assert!(failed.message().is_none());
        assert_eq!(failed.error().map(ApiError::message), Some("jammed"));
    }

    #[test]
    fn sensor_submission_lifecycle() {
        assert!(SensorSubmission::started().in_progress());
        assert!(!SensorSubmission::succeeded().in_progress());
        assert!(SensorSubmission::failed(ApiError::new("dup")).error().is_some());
    }

    #[test]
    fn temperature_serializes_camel_case() {
        let json = serde_json::to_value(TemperatureResource::default()).unwrap();
        assert!(json.get("lastUpdated").is_some());
    }
}
