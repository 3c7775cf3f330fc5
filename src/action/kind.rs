// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action kind tags.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ActionError;

/// Lifecycle phase of an action, derived from its tag suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// An asynchronous operation began (`*_STARTED`).
    Started,
    /// An asynchronous operation succeeded (`*_SUCCESS`).
    Succeeded,
    /// An asynchronous operation failed (`*_FAILURE`).
    Failed,
    /// A plain field update from the UI.
    Update,
}

macro_rules! action_kinds {
    ($($variant:ident => $tag:literal,)+) => {
        /// The tag of an [`Action`](super::Action), without its payload.
        ///
        /// Each kind maps to the SCREAMING_SNAKE_CASE tag used on the wire.
        ///
        /// # Examples
        ///
        /// ```
        /// use smarthome_state::action::ActionKind;
        ///
        /// let kind: ActionKind = "FETCH_ROOMS_STARTED".parse().unwrap();
        /// assert_eq!(kind, ActionKind::FetchRoomsStarted);
        /// assert_eq!(kind.as_str(), "FETCH_ROOMS_STARTED");
        /// assert!("NOPE".parse::<ActionKind>().is_err());
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ActionKind {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant,
            )+
        }

        impl ActionKind {
            /// Every action kind, in declaration order.
            pub const ALL: &'static [ActionKind] = &[$(ActionKind::$variant,)+];

            /// Returns the wire tag.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ActionKind::$variant => $tag,)+
                }
            }
        }
    };
}

action_kinds! {
    FetchRoomsStarted => "FETCH_ROOMS_STARTED",
    FetchRoomsSuccess => "FETCH_ROOMS_SUCCESS",
    FetchRoomsFailure => "FETCH_ROOMS_FAILURE",
    SetCurrentRoom => "SET_CURRENT_ROOM",
    FetchRoomByIdStarted => "FETCH_ROOM_BY_ID_STARTED",
    FetchRoomByIdSuccess => "FETCH_ROOM_BY_ID_SUCCESS",
    FetchRoomByIdFailure => "FETCH_ROOM_BY_ID_FAILURE",
    FetchDevicesStarted => "FETCH_DEVICES_STARTED",
    FetchDevicesSuccess => "FETCH_DEVICES_SUCCESS",
    FetchDevicesFailure => "FETCH_DEVICES_FAILURE",
    FetchTemperatureStarted => "FETCH_TEMPERATURE_STARTED",
    FetchTemperatureSuccess => "FETCH_TEMPERATURE_SUCCESS",
    FetchTemperatureFailure => "FETCH_TEMPERATURE_FAILURE",
    FetchSensorModelsStarted => "FETCH_SENSOR_MODELS_STARTED",
    FetchSensorModelsSuccess => "FETCH_SENSOR_MODELS_SUCCESS",
    FetchSensorModelsFailure => "FETCH_SENSOR_MODELS_FAILURE",
    AddDeviceStarted => "ADD_DEVICE_STARTED",
    AddDeviceSuccess => "ADD_DEVICE_SUCCESS",
    AddDeviceFailure => "ADD_DEVICE_FAILURE",
    FetchSensorTypesStarted => "FETCH_SENSOR_TYPES_STARTED",
    FetchSensorTypesSuccess => "FETCH_SENSOR_TYPES_SUCCESS",
    FetchSensorTypesFailure => "FETCH_SENSOR_TYPES_FAILURE",
    FetchLogsStarted => "FETCH_LOGS_STARTED",
    FetchLogsSuccess => "FETCH_LOGS_SUCCESS",
    FetchLogsFailure => "FETCH_LOGS_FAILURE",
    UpdateDeviceStarted => "UPDATE_DEVICE_STARTED",
    UpdateDeviceSuccess => "UPDATE_DEVICE_SUCCESS",
    UpdateDeviceFailure => "UPDATE_DEVICE_FAILURE",
    UpdateSelectedSensorTypeId => "UPDATE_SELECTED_SENSOR_TYPE_ID",
    UpdateSelectedSensorModel => "UPDATE_SELECTED_SENSOR_MODEL",
    UpdateSelectedTypeOfSensor => "UPDATE_SELECTED_TYPE_OF_SENSOR",
    FetchCurrentPositionStarted => "FETCH_CURRENT_POSITION_STARTED",
    FetchCurrentPositionSuccess => "FETCH_CURRENT_POSITION_SUCCESS",
    FetchCurrentPositionFailure => "FETCH_CURRENT_POSITION_FAILURE",
    SetBlindRollerValueStarted => "SET_BLIND_ROLLER_VALUE_STARTED",
    SetBlindRollerValueSuccess => "SET_BLIND_ROLLER_VALUE_SUCCESS",
    SetBlindRollerValueFailure => "SET_BLIND_ROLLER_VALUE_FAILURE",
    FetchDeviceTypesStarted => "FETCH_DEVICE_TYPES_STARTED",
    FetchDeviceTypesSuccess => "FETCH_DEVICE_TYPES_SUCCESS",
    FetchDeviceTypesFailure => "FETCH_DEVICE_TYPES_FAILURE",
    FetchActuatorsStarted => "FETCH_ACTUATORS_STARTED",
    FetchActuatorsSuccess => "FETCH_ACTUATORS_SUCCESS",
    FetchActuatorsFailure => "FETCH_ACTUATORS_FAILURE",
    UpdateGenericSensorData => "UPDATE_GENERIC_SENSOR_DATA",
    UpdateLatitudeData => "UPDATE_LATITUDE_DATA",
    UpdateLongitudeData => "UPDATE_LONGITUDE_DATA",
    UpdateStartDateData => "UPDATE_START_DATE_DATA",
    UpdateEndDateData => "UPDATE_END_DATE_DATA",
    AddGenericSensorToDeviceStarted => "ADD_GENERIC_SENSOR_TO_DEVICE_STARTED",
    AddGenericSensorToDeviceSuccess => "ADD_GENERIC_SENSOR_TO_DEVICE_SUCCESS",
    AddGenericSensorToDeviceFailure => "ADD_GENERIC_SENSOR_TO_DEVICE_FAILURE",
    AddGpsSensorToDeviceStarted => "ADD_GPS_SENSOR_TO_DEVICE_STARTED",
    AddGpsSensorToDeviceSuccess => "ADD_GPS_SENSOR_TO_DEVICE_SUCCESS",
    AddGpsSensorToDeviceFailure => "ADD_GPS_SENSOR_TO_DEVICE_FAILURE",
    AddDateSensorToDeviceStarted => "ADD_DATE_SENSOR_TO_DEVICE_STARTED",
    AddDateSensorToDeviceSuccess => "ADD_DATE_SENSOR_TO_DEVICE_SUCCESS",
    AddDateSensorToDeviceFailure => "ADD_DATE_SENSOR_TO_DEVICE_FAILURE",
    SaveCurrentDevice => "SAVE_CURRENT_DEVICE",
    UpdateSelectedTypeOfActuator => "UPDATE_SELECTED_TYPE_OF_ACTUATOR",
    UpdateSelectedSensorModelPath => "UPDATE_SELECTED_SENSOR_MODEL_PATH",
    UpdateSelectedSensorModelName => "UPDATE_SELECTED_SENSOR_MODEL_NAME",
}

impl ActionKind {
    /// Returns the lifecycle phase of this kind.
    #[must_use]
    pub fn phase(self) -> Phase {
        let tag = self.as_str();
        if tag.ends_with("_STARTED") {
            Phase::Started
        } else if tag.ends_with("_SUCCESS") {
            Phase::Succeeded
        } else if tag.ends_with("_FAILURE") {
            Phase::Failed
        } else {
            Phase::Update
        }
    }

    /// Returns `true` for `*_STARTED` kinds.
    #[must_use]
    pub fn is_started(self) -> bool {
        self.phase() == Phase::Started
    }

    /// Returns `true` for `*_SUCCESS` kinds.
    #[must_use]
    pub fn is_success(self) -> bool {
        self.phase() == Phase::Succeeded
    }

    /// Returns `true` for `*_FAILURE` kinds.
    #[must_use]
    pub fn is_failure(self) -> bool {
        self.phase() == Phase::Failed
    }

    /// Returns `true` for plain field updates.
    #[must_use]
    pub fn is_form_update(self) -> bool {
        self.phase() == Phase::Update
    }

    /// Returns `true` if actions of this kind carry a payload.
    ///
    /// Only `*_STARTED` actions are bare.
    #[must_use]
    pub fn has_payload(self) -> bool {
        !self.is_started()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ActionError::UnknownKind(s.to_string()))
    }
}

impl Serialize for ActionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = ActionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags.len(), ActionKind::ALL.len());
    }

    #[test]
    fn every_tag_parses_back() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.as_str().parse::<ActionKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "NOPE".parse::<ActionKind>().unwrap_err();
        assert!(matches!(err, ActionError::UnknownKind(ref tag) if tag == "NOPE"));
    }

    #[test]
    fn phases() {
        assert_eq!(ActionKind::FetchLogsStarted.phase(), Phase::Started);
        assert_eq!(ActionKind::AddDeviceSuccess.phase(), Phase::Succeeded);
        assert_eq!(ActionKind::SetBlindRollerValueFailure.phase(), Phase::Failed);
        assert_eq!(ActionKind::SetCurrentRoom.phase(), Phase::Update);
        assert_eq!(ActionKind::SaveCurrentDevice.phase(), Phase::Update);
    }

    #[test]
    fn lifecycle_kinds_come_in_triples() {
        let started = ActionKind::ALL.iter().filter(|k| k.is_started()).count();
        let success = ActionKind::ALL.iter().filter(|k| k.is_success()).count();
        let failure = ActionKind::ALL.iter().filter(|k| k.is_failure()).count();
        assert_eq!(started, 16);
        assert_eq!(success, 16);
        assert_eq!(failure, 16);
        assert_eq!(
            ActionKind::ALL.iter().filter(|k| k.is_form_update()).count(),
            13
        );
    }

    #[test]
    fn only_started_kinds_are_bare() {
        assert!(!ActionKind::FetchRoomsStarted.has_payload());
        assert!(ActionKind::FetchRoomsFailure.has_payload());
        assert!(ActionKind::UpdateLatitudeData.has_payload());
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&ActionKind::FetchActuatorsSuccess).unwrap();
        assert_eq!(json, "\"FETCH_ACTUATORS_SUCCESS\"");
    }
}
