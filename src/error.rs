// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `smarthome_state` library.
//!
//! The reducer itself never fails. Errors only arise at the edges: when an
//! action arrives in its untyped wire form and cannot be turned into a typed
//! [`Action`](crate::action::Action), or when a domain value is out of range.

use thiserror::Error;

use crate::action::ActionKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An action could not be decoded from its wire form.
    #[error("action error: {0}")]
    Action(#[from] ActionError),

    /// A domain value was out of range.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while decoding a wire action into a typed one.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The `type` tag does not name any known action.
    #[error("unknown action type: {0}")]
    UnknownKind(String),

    /// The payload does not have the shape the action requires.
    #[error("invalid payload for {kind}: {source}")]
    InvalidPayload {
        /// The action whose payload was rejected.
        kind: ActionKind,
        /// The underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

impl ActionError {
    /// Returns `true` if the action type was not recognised.
    #[must_use]
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Self::UnknownKind(_))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A latitude is outside `[-90, 90]`.
    #[error("latitude {0} is out of range [-90, 90]")]
    InvalidLatitude(f64),

    /// A longitude is outside `[-180, 180]`.
    #[error("longitude {0} is out of range [-180, 180]")]
    InvalidLongitude(f64),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
