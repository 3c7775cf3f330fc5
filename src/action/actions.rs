// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The action enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    Actuator, ApiError, Device, DeviceId, DeviceType, LogEntry, Position, Room, RoomId,
    SensorModel, SensorType, TemperatureReading,
};

use super::ActionKind;

/// A state-affecting event.
///
/// Serializes to the `{"type": "...", "payload": {...}}` wire form. Payload
/// field names are those used by the action creators, including a few
/// irregular ones:
///
/// - [`Action::FetchActuatorsSuccess`] carries `actuators` instead of `data`.
/// - [`Action::UpdateSelectedSensorTypeId`] carries `selectedSensorType`.
/// - [`Action::AddDeviceSuccess`] carries `device`.
///
/// # Examples
///
/// ```
/// use smarthome_state::action::Action;
/// use smarthome_state::types::ApiError;
///
/// let action = Action::FetchRoomsFailure { error: ApiError::new("offline") };
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json["type"], "FETCH_ROOMS_FAILURE");
/// assert_eq!(json["payload"]["error"]["message"], "offline");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    // ----- rooms -----
    /// Loading the room list began.
    FetchRoomsStarted,
    /// The room list was loaded.
    FetchRoomsSuccess {
        /// All rooms.
        data: Vec<Room>,
    },
    /// Loading the room list failed.
    FetchRoomsFailure {
        /// The failure.
        error: ApiError,
    },
    /// A room was selected in the UI.
    SetCurrentRoom {
        /// Selected room.
        room_id: RoomId,
        /// Its display name.
        room_name: String,
    },
    /// Loading a single room began.
    FetchRoomByIdStarted,
    /// A single room was loaded.
    FetchRoomByIdSuccess {
        /// The room, or `None` if the backend has none.
        #[serde(default)]
        data: Option<Room>,
    },
    /// Loading a single room failed.
    FetchRoomByIdFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- devices -----
    /// Loading the devices of a room began.
    FetchDevicesStarted,
    /// The devices of a room were loaded.
    FetchDevicesSuccess {
        /// Devices of the room.
        data: Vec<Device>,
    },
    /// Loading the devices of a room failed.
    FetchDevicesFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- temperature -----
    /// Loading the outdoor temperature began.
    FetchTemperatureStarted,
    /// The outdoor temperature was loaded.
    FetchTemperatureSuccess {
        /// The reading.
        data: TemperatureReading,
        /// When the reading was taken.
        last_updated: DateTime<Utc>,
    },
    /// Loading the outdoor temperature failed.
    FetchTemperatureFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- sensor models -----
    /// Loading sensor models began.
    FetchSensorModelsStarted,
    /// Sensor models were loaded.
    FetchSensorModelsSuccess {
        /// Available models.
        data: Vec<SensorModel>,
    },
    /// Loading sensor models failed.
    FetchSensorModelsFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- adding a device -----
    /// Adding a device began.
    AddDeviceStarted,
    /// A device was added; it is appended to the loaded devices.
    AddDeviceSuccess {
        /// The new device.
        device: Device,
    },
    /// Adding a device failed.
    AddDeviceFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- sensor types -----
    /// Loading sensor types began.
    FetchSensorTypesStarted,
    /// Sensor types were loaded.
    FetchSensorTypesSuccess {
        /// Available sensor types.
        data: Vec<SensorType>,
    },
    /// Loading sensor types failed.
    FetchSensorTypesFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- logs -----
    /// Loading sensor logs began.
    FetchLogsStarted,
    /// Sensor logs were loaded.
    FetchLogsSuccess {
        /// Log entries.
        data: Vec<LogEntry>,
    },
    /// Loading sensor logs failed.
    FetchLogsFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- updating a device -----
    /// Updating a device began.
    UpdateDeviceStarted,
    /// A device was updated.
    UpdateDeviceSuccess {
        /// The device as stored by the backend, if returned.
        #[serde(default)]
        data: Option<Device>,
    },
    /// Updating a device failed.
    UpdateDeviceFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- add-sensor form selections -----
    /// A sensor type was picked.
    UpdateSelectedSensorTypeId {
        /// The picked sensor type.
        #[serde(rename = "selectedSensorType")]
        selected_sensor_type: String,
    },
    /// A sensor model was picked.
    UpdateSelectedSensorModel {
        /// The picked model.
        selected_sensor_model: String,
    },
    /// A kind of sensor (generic, GPS, date) was picked.
    UpdateSelectedTypeOfSensor {
        /// The picked kind.
        selected_type_of_sensor: String,
    },

    // ----- position -----
    /// Locating the user began. The previous position stays visible.
    FetchCurrentPositionStarted,
    /// The user was located.
    FetchCurrentPositionSuccess {
        /// The position, or `None` if it is unknown.
        #[serde(default)]
        data: Option<Position>,
    },
    /// Locating the user failed.
    FetchCurrentPositionFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- blind roller -----
    /// A blind roller command was sent.
    SetBlindRollerValueStarted,
    /// A blind roller command was accepted.
    SetBlindRollerValueSuccess {
        /// Confirmation from the backend.
        message: String,
    },
    /// A blind roller command failed.
    SetBlindRollerValueFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- device types -----
    /// Loading device types began.
    FetchDeviceTypesStarted,
    /// Device types were loaded.
    FetchDeviceTypesSuccess {
        /// Available device types.
        data: Vec<DeviceType>,
    },
    /// Loading device types failed.
    FetchDeviceTypesFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- actuators -----
    /// Loading actuators began.
    FetchActuatorsStarted,
    /// Actuators were loaded.
    FetchActuatorsSuccess {
        /// Actuators of the device.
        actuators: Vec<Actuator>,
    },
    /// Loading actuators failed.
    FetchActuatorsFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- sensor form inputs -----
    /// The sensor name input changed.
    UpdateGenericSensorData {
        /// Typed name.
        sensor_name: String,
    },
    /// The latitude input changed.
    UpdateLatitudeData {
        /// Typed latitude.
        latitude: String,
    },
    /// The longitude input changed.
    UpdateLongitudeData {
        /// Typed longitude.
        longitude: String,
    },
    /// The start date input changed.
    UpdateStartDateData {
        /// Typed start date.
        start_date: String,
    },
    /// The end date input changed.
    UpdateEndDateData {
        /// Typed end date.
        end_date: String,
    },

    // ----- sensor submissions -----
    /// Submitting a generic sensor began.
    AddGenericSensorToDeviceStarted,
    /// A generic sensor was created.
    AddGenericSensorToDeviceSuccess {
        /// Confirmation from the backend, ignored by the reducer.
        #[serde(default)]
        data: Option<serde_json::Value>,
    },
    /// Submitting a generic sensor failed.
    AddGenericSensorToDeviceFailure {
        /// The failure.
        error: ApiError,
    },
    /// Submitting a GPS sensor began.
    AddGpsSensorToDeviceStarted,
    /// A GPS sensor was created.
    AddGpsSensorToDeviceSuccess {
        /// Confirmation from the backend, ignored by the reducer.
        #[serde(default)]
        data: Option<serde_json::Value>,
    },
    /// Submitting a GPS sensor failed.
    AddGpsSensorToDeviceFailure {
        /// The failure.
        error: ApiError,
    },
    /// Submitting a date sensor began.
    AddDateSensorToDeviceStarted,
    /// A date sensor was created.
    AddDateSensorToDeviceSuccess {
        /// Confirmation from the backend, ignored by the reducer.
        #[serde(default)]
        data: Option<serde_json::Value>,
    },
    /// Submitting a date sensor failed.
    AddDateSensorToDeviceFailure {
        /// The failure.
        error: ApiError,
    },

    // ----- selections -----
    /// A device was selected in the UI.
    SaveCurrentDevice {
        /// Selected device.
        device_id: DeviceId,
    },
    /// A kind of actuator was picked.
    UpdateSelectedTypeOfActuator {
        /// The picked kind.
        selected_type_of_actuator: String,
    },
    /// The model path of the picked sensor model changed.
    UpdateSelectedSensorModelPath {
        /// The model path.
        selected_sensor_model_path: String,
    },
    /// The name of the picked sensor model changed.
    UpdateSelectedSensorModelName {
        /// The model name.
        selected_sensor_model_name: String,
    },
}

impl Action {
    /// Returns the kind tag of this action.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::FetchRoomsStarted => ActionKind::FetchRoomsStarted,
            Self::FetchRoomsSuccess { .. } => ActionKind::FetchRoomsSuccess,
            Self::FetchRoomsFailure { .. } => ActionKind::FetchRoomsFailure,
            Self::SetCurrentRoom { .. } => ActionKind::SetCurrentRoom,
            Self::FetchRoomByIdStarted => ActionKind::FetchRoomByIdStarted,
            Self::FetchRoomByIdSuccess { .. } => ActionKind::FetchRoomByIdSuccess,
            Self::FetchRoomByIdFailure { .. } => ActionKind::FetchRoomByIdFailure,
            Self::FetchDevicesStarted => ActionKind::FetchDevicesStarted,
            Self::FetchDevicesSuccess { .. } => ActionKind::FetchDevicesSuccess,
            Self::FetchDevicesFailure { .. } => ActionKind::FetchDevicesFailure,
            Self::FetchTemperatureStarted => ActionKind::FetchTemperatureStarted,
            Self::FetchTemperatureSuccess { .. } => ActionKind::FetchTemperatureSuccess,
            Self::FetchTemperatureFailure { .. } => ActionKind::FetchTemperatureFailure,
            Self::FetchSensorModelsStarted => ActionKind::FetchSensorModelsStarted,
            Self::FetchSensorModelsSuccess { .. } => ActionKind::FetchSensorModelsSuccess,
            Self::FetchSensorModelsFailure { .. } => ActionKind::FetchSensorModelsFailure,
            Self::AddDeviceStarted => ActionKind::AddDeviceStarted,
            Self::AddDeviceSuccess { .. } => ActionKind::AddDeviceSuccess,
            Self::AddDeviceFailure { .. } => ActionKind::AddDeviceFailure,
            Self::FetchSensorTypesStarted => ActionKind::FetchSensorTypesStarted,
            Self::FetchSensorTypesSuccess { .. } => ActionKind::FetchSensorTypesSuccess,
            Self::FetchSensorTypesFailure { .. } => ActionKind::FetchSensorTypesFailure,
            Self::FetchLogsStarted => ActionKind::FetchLogsStarted,
            Self::FetchLogsSuccess { .. } => ActionKind::FetchLogsSuccess,
            Self::FetchLogsFailure { .. } => ActionKind::FetchLogsFailure,
            Self::UpdateDeviceStarted => ActionKind::UpdateDeviceStarted,
            Self::UpdateDeviceSuccess { .. } => ActionKind::UpdateDeviceSuccess,
            Self::UpdateDeviceFailure { .. } => ActionKind::UpdateDeviceFailure,
            Self::UpdateSelectedSensorTypeId { .. } => ActionKind::UpdateSelectedSensorTypeId,
            Self::UpdateSelectedSensorModel { .. } => ActionKind::UpdateSelectedSensorModel,
            Self::UpdateSelectedTypeOfSensor { .. } => ActionKind::UpdateSelectedTypeOfSensor,
            Self::FetchCurrentPositionStarted => ActionKind::FetchCurrentPositionStarted,
            Self::FetchCurrentPositionSuccess { .. } => ActionKind::FetchCurrentPositionSuccess,
            Self::FetchCurrentPositionFailure { .. } => ActionKind::FetchCurrentPositionFailure,
            Self::SetBlindRollerValueStarted => ActionKind::SetBlindRollerValueStarted,
            Self::SetBlindRollerValueSuccess { .. } => ActionKind::SetBlindRollerValueSuccess,
            Self::SetBlindRollerValueFailure { .. } => ActionKind::SetBlindRollerValueFailure,
            Self::FetchDeviceTypesStarted => ActionKind::FetchDeviceTypesStarted,
            Self::FetchDeviceTypesSuccess { .. } => ActionKind::FetchDeviceTypesSuccess,
            Self::FetchDeviceTypesFailure { .. } => ActionKind::FetchDeviceTypesFailure,
            Self::FetchActuatorsStarted => ActionKind::FetchActuatorsStarted,
            Self::FetchActuatorsSuccess { .. } => ActionKind::FetchActuatorsSuccess,
            Self::FetchActuatorsFailure { .. } => ActionKind::FetchActuatorsFailure,
            Self::UpdateGenericSensorData { .. } => ActionKind::UpdateGenericSensorData,
            Self::UpdateLatitudeData { .. } => ActionKind::UpdateLatitudeData,
            Self::UpdateLongitudeData { .. } => ActionKind::UpdateLongitudeData,
            Self::UpdateStartDateData { .. } => ActionKind::UpdateStartDateData,
            Self::UpdateEndDateData { .. } => ActionKind::UpdateEndDateData,
            Self::AddGenericSensorToDeviceStarted => ActionKind::AddGenericSensorToDeviceStarted,
            Self::AddGenericSensorToDeviceSuccess { .. } => {
                ActionKind::AddGenericSensorToDeviceSuccess
            }
            Self::AddGenericSensorToDeviceFailure { .. } => {
                ActionKind::AddGenericSensorToDeviceFailure
            }
            Self::AddGpsSensorToDeviceStarted => ActionKind::AddGpsSensorToDeviceStarted,
            Self::AddGpsSensorToDeviceSuccess { .. } => ActionKind::AddGpsSensorToDeviceSuccess,
            Self::AddGpsSensorToDeviceFailure { .. } => ActionKind::AddGpsSensorToDeviceFailure,
            Self::AddDateSensorToDeviceStarted => ActionKind::AddDateSensorToDeviceStarted,
            Self::AddDateSensorToDeviceSuccess { .. } => ActionKind::AddDateSensorToDeviceSuccess,
            Self::AddDateSensorToDeviceFailure { .. } => ActionKind::AddDateSensorToDeviceFailure,
            Self::SaveCurrentDevice { .. } => ActionKind::SaveCurrentDevice,
            Self::UpdateSelectedTypeOfActuator { .. } => ActionKind::UpdateSelectedTypeOfActuator,
            Self::UpdateSelectedSensorModelPath { .. } => {
                ActionKind::UpdateSelectedSensorModelPath
            }
            Self::UpdateSelectedSensorModelName { .. } => {
                ActionKind::UpdateSelectedSensorModelName
            }
        }
    }

    /// Returns the failure carried by a `*Failure` action.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::FetchRoomsFailure { error }
            | Self::FetchRoomByIdFailure { error }
            | Self::FetchDevicesFailure { error }
            | Self::FetchTemperatureFailure { error }
            | Self::FetchSensorModelsFailure { error }
            | Self::AddDeviceFailure { error }
            | Self::FetchSensorTypesFailure { error }
            | Self::FetchLogsFailure { error }
            | Self::UpdateDeviceFailure { error }
            | Self::FetchCurrentPositionFailure { error }
            | Self::SetBlindRollerValueFailure { error }
            | Self::FetchDeviceTypesFailure { error }
            | Self::FetchActuatorsFailure { error }
            | Self::AddGenericSensorToDeviceFailure { error }
            | Self::AddGpsSensorToDeviceFailure { error }
            | Self::AddDateSensorToDeviceFailure { error } => Some(error),
            _ => None,
        }
    }

    // ========== Constructors for form actions ==========

    /// Creates a [`Action::SetCurrentRoom`] action.
    #[must_use]
    pub fn set_current_room(room_id: impl Into<RoomId>, room_name: impl Into<String>) -> Self {
        Self::SetCurrentRoom {
            room_id: room_id.into(),
            room_name: room_name.into(),
        }
    }

    /// Creates a [`Action::SaveCurrentDevice`] action.
    #[must_use]
    pub fn save_current_device(device_id: impl Into<DeviceId>) -> Self {
        Self::SaveCurrentDevice {
            device_id: device_id.into(),
        }
    }

    /// Creates a [`Action::UpdateGenericSensorData`] action.
    #[must_use]
    pub fn update_sensor_name(sensor_name: impl Into<String>) -> Self {
        Self::UpdateGenericSensorData {
            sensor_name: sensor_name.into(),
        }
    }
}
