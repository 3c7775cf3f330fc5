// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backend identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a room, as assigned by the backend.
///
/// A distinct type so that room and device identifiers cannot be swapped
/// by accident when building actions.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::RoomId;
///
/// let id = RoomId::new("kitchen-01");
/// assert_eq!(id.as_str(), "kitchen-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a device, as assigned by the backend.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::DeviceId;
///
/// let id: DeviceId = "dev-42".into();
/// assert_eq!(id.to_string(), "dev-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a device identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let room = RoomId::new("r1");
        assert_eq!(serde_json::to_string(&room).unwrap(), "\"r1\"");

        let device: DeviceId = serde_json::from_str("\"d7\"").unwrap();
        assert_eq!(device.as_str(), "d7");
    }

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(RoomId::from("living").to_string(), "living");
        assert_eq!(DeviceId::from(String::from("abc")).to_string(), "abc");
    }
}
