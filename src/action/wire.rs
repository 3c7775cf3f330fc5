// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Untyped wire form of actions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ActionError, Result};

use super::{Action, ActionKind};

/// An action as emitted by an action creator: a string tag and an
/// arbitrary JSON payload.
///
/// Convert it into a typed [`Action`] with [`Action::from_raw`] or
/// [`TryFrom`].
///
/// # Examples
///
/// ```
/// use smarthome_state::action::{Action, RawAction};
///
/// let raw = RawAction::new("FETCH_LOGS_STARTED");
/// assert_eq!(Action::from_raw(raw).unwrap(), Action::FetchLogsStarted);
///
/// let raw = RawAction::with_payload(
///     "UPDATE_LATITUDE_DATA",
///     serde_json::json!({"latitude": "41.15"}),
/// );
/// assert!(matches!(
///     Action::from_raw(raw).unwrap(),
///     Action::UpdateLatitudeData { .. }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// The action tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// The tag-specific payload.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl RawAction {
    /// Creates a raw action without payload.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    /// Creates a raw action with a payload.
    #[must_use]
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

impl From<&Action> for RawAction {
    fn from(action: &Action) -> Self {
        // Action's serialized form is always an object with a `type` tag.
        let mut value = serde_json::to_value(action).unwrap_or(Value::Null);
        let payload = value
            .get_mut("payload")
            .map(Value::take)
            .unwrap_or(Value::Null);
        Self {
            kind: action.kind().as_str().to_string(),
            payload,
        }
    }
}

impl Action {
    /// Converts a raw action into a typed one.
    ///
    /// Payloads of `*_STARTED` actions are ignored. A missing payload on any
    /// other action is treated as an empty object, so actions whose payload
    /// fields all have defaults still decode.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownKind`] if the tag is not recognised, or
    /// [`ActionError::InvalidPayload`] if the payload does not have the shape
    /// the action requires.
    pub fn from_raw(raw: RawAction) -> std::result::Result<Self, ActionError> {
        let kind: ActionKind = raw.kind.parse()?;

        let mut envelope = Map::with_capacity(2);
        envelope.insert("type".to_string(), Value::String(raw.kind));
        if kind.has_payload() {
            let payload = match raw.payload {
                Value::Null => Value::Object(Map::new()),
                other => other,
            };
            envelope.insert("payload".to_string(), payload);
        }

        serde_json::from_value(Value::Object(envelope))
            .map_err(|source| ActionError::InvalidPayload { kind, source })
    }

    /// Parses an action from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the input is not a JSON
    /// object with a `type` field, or [`Error::Action`](crate::Error::Action)
    /// if the action cannot be decoded.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawAction = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw)?)
    }
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> std::result::Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
