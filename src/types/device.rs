// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records.

use serde::{Deserialize, Serialize};

use super::{DeviceId, RoomId};

/// A device installed in a room.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::Device;
///
/// let device = Device::new("d1", "r1", "Blind")
///     .with_device_type("BlindRoller");
/// assert!(device.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Backend identifier.
    #[serde(rename = "deviceID")]
    pub id: DeviceId,
    /// Room the device belongs to.
    #[serde(rename = "roomID")]
    pub room_id: RoomId,
    /// Display name.
    #[serde(rename = "deviceName")]
    pub name: String,
    /// Device type identifier.
    #[serde(rename = "deviceTypeID", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Whether the device is active. Deactivated devices stay listed.
    #[serde(rename = "deviceStatus", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Device {
    /// Creates an active device without a type.
    #[must_use]
    pub fn new(
        id: impl Into<DeviceId>,
        room_id: impl Into<RoomId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            room_id: room_id.into(),
            name: name.into(),
            device_type: None,
            active: true,
        }
    }

    /// Sets the device type identifier.
    #[must_use]
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Marks the device as deactivated.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// The device currently selected in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDevice {
    /// Identifier of the selected device.
    pub device_id: DeviceId,
}

impl CurrentDevice {
    /// Creates a device selection.
    #[must_use]
    pub fn new(device_id: impl Into<DeviceId>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_defaults_to_active() {
        let device: Device = serde_json::from_str(
            r#"{"deviceID":"d1","roomID":"r1","deviceName":"Lamp"}"#,
        )
        .unwrap();
        assert!(device.active);
        assert!(device.device_type.is_none());
    }

    #[test]
    fn decodes_deactivated_device() {
        let device: Device = serde_json::from_str(
            r#"{"deviceID":"d2","roomID":"r1","deviceName":"Heater","deviceTypeID":"Heater","deviceStatus":false}"#,
        )
        .unwrap();
        assert_eq!(
            device,
            Device::new("d2", "r1", "Heater")
                .with_device_type("Heater")
                .deactivated()
        );
    }
}
