// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The application state snapshot.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{
    Actuator, ApiError, CurrentDevice, CurrentRoom, Device, DeviceId, DeviceType, LogEntry,
    Position, Room, RoomId, SensorModel, SensorType,
};

use super::{AsyncResource, CommandStatus, SensorSubmission, TemperatureResource};

/// A complete snapshot of the dashboard state.
///
/// Entity records are held behind [`Arc`] so that cloning a snapshot is
/// cheap and a transition shares every entity it does not touch with its
/// predecessor. Form fields are plain values replaced wholesale.
///
/// [`AppState::default`] is the initial snapshot: nothing loaded, nothing
/// selected, every form field empty. The state serializes to camelCase JSON
/// so an application can persist and restore it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// All rooms of the house.
    pub rooms: Arc<AsyncResource<Vec<Room>>>,
    /// The room loaded by id.
    pub room: Arc<AsyncResource<Option<Room>>>,
    /// Devices of the current room.
    pub devices: Arc<AsyncResource<Vec<Device>>>,
    /// Outdoor temperature.
    pub temperature: Arc<TemperatureResource>,
    /// Available sensor models.
    pub sensor_models: Arc<AsyncResource<Vec<SensorModel>>>,
    /// Available sensor types.
    pub sensor_types: Arc<AsyncResource<Vec<SensorType>>>,
    /// Available device types.
    pub device_types: Arc<AsyncResource<Vec<DeviceType>>>,
    /// Actuators of the current device.
    pub actuators: Arc<AsyncResource<Vec<Actuator>>>,
    /// Sensor logs of the current device.
    pub logs: Arc<AsyncResource<Vec<LogEntry>>>,
    /// Result of the last device update.
    pub update_device: Arc<AsyncResource<Option<Device>>>,
    /// Current geographic position of the user.
    pub position: Arc<AsyncResource<Option<Position>>>,
    /// Last blind roller command.
    pub set_blind_roller_status: Arc<CommandStatus>,
    /// Whether a device is being added.
    pub adding_device: bool,
    /// Error of the last failed device addition.
    pub add_device_error: Option<ApiError>,
    /// Last sensor submission.
    pub adding_sensor: Arc<SensorSubmission>,
    /// Room selected in the UI.
    pub current_room: Option<CurrentRoom>,
    /// Device selected in the UI.
    pub current_device: Option<CurrentDevice>,
    /// Sensor type picked in the add-sensor form.
    pub selected_sensor_type_id: Option<String>,
    /// Sensor model picked in the add-sensor form.
    pub selected_sensor_model: Option<String>,
    /// Kind of sensor (generic, GPS, date) picked in the add-sensor form.
    pub selected_type_of_sensor: Option<String>,
    /// Kind of actuator picked in the add-actuator form.
    pub selected_type_of_actuator: Option<String>,
    /// Model path of the picked sensor model.
    pub selected_sensor_model_path: Option<String>,
    /// Name of the picked sensor model.
    pub selected_sensor_model_name: Option<String>,
    /// Sensor name typed in the add-sensor form.
    pub sensor_name: Option<String>,
    /// Latitude typed in the GPS sensor form.
    pub latitude: Option<String>,
    /// Longitude typed in the GPS sensor form.
    pub longitude: Option<String>,
    /// Start of the range typed in the date sensor form.
    pub start_date: Option<String>,
    /// End of the range typed in the date sensor form.
    pub end_date: Option<String>,
}

impl AppState {
    /// Creates the initial snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier of the room selected in the UI.
    #[must_use]
    pub fn selected_room_id(&self) -> Option<&RoomId> {
        self.current_room.as_ref().map(|room| &room.room_id)
    }

    /// Returns the identifier of the device selected in the UI.
    #[must_use]
    pub fn selected_device_id(&self) -> Option<&DeviceId> {
        self.current_device.as_ref().map(|device| &device.device_id)
    }

    /// Returns `true` if any asynchronous operation is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.rooms.is_loading()
            || self.room.is_loading()
            || self.devices.is_loading()
            || self.temperature.is_loading()
            || self.sensor_models.is_loading()
            || self.sensor_types.is_loading()
            || self.device_types.is_loading()
            || self.actuators.is_loading()
            || self.logs.is_loading()
            || self.update_device.is_loading()
            || self.position.is_loading()
            || self.set_blind_roller_status.is_loading()
            || self.adding_device
            || self.adding_sensor.in_progress()
    }

    /// Looks up a loaded device by identifier.
    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.data().iter().find(|device| &device.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle() {
        let state = AppState::new();
        assert!(!state.is_busy());
        assert!(state.selected_room_id().is_none());
        assert!(state.selected_device_id().is_none());
        assert!(state.devices.data().is_empty());
    }

    #[test]
    fn clone_shares_entities() {
        let state = AppState::new();
        let copy = state.clone();
        assert!(Arc::ptr_eq(&state.rooms, &copy.rooms));
        assert!(Arc::ptr_eq(&state.position, &copy.position));
    }

    #[test]
    fn busy_when_a_resource_is_loading() {
        let state = AppState {
            logs: Arc::new(AsyncResource::started()),
            ..AppState::default()
        };
        assert!(state.is_busy());

        let state = AppState {
            adding_device: true,
            ..AppState::default()
        };
        assert!(state.is_busy());
    }

    #[test]
    fn device_lookup() {
        let state = AppState {
            devices: Arc::new(AsyncResource::succeeded(vec![
                Device::new("d1", "r1", "Lamp"),
                Device::new("d2", "r1", "Blind"),
            ])),
            ..AppState::default()
        };
        assert_eq!(
            state.device(&DeviceId::new("d2")).map(|d| d.name.as_str()),
            Some("Blind")
        );
        assert!(state.device(&DeviceId::new("d3")).is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let state: AppState = serde_json::from_str(r#"{"sensorName":""}"#).unwrap();
        assert_eq!(state.sensor_name.as_deref(), Some(""));
        assert!(!state.adding_device);
        assert!(state.rooms.data().is_empty());
    }

    #[test]
    fn serializes_camel_case_keys() {
        let json = serde_json::to_value(AppState::new()).unwrap();
        assert!(json.get("setBlindRollerStatus").is_some());
        assert!(json.get("addDeviceError").is_some());
        assert!(json.get("selectedSensorModelPath").is_some());
    }
}
