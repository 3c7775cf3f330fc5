// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The state transition function.
//!
//! [`reduce`] computes the next [`AppState`] from the previous one and an
//! [`Action`]. It is pure: it never fails, never performs I/O and never
//! mutates its input. Entities the action does not touch are shared with the
//! previous snapshot, so `Arc::ptr_eq` holds for them across a transition.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use smarthome_state::action::Action;
//! use smarthome_state::reducer::reduce;
//! use smarthome_state::state::AppState;
//!
//! let state = Arc::new(AppState::default());
//! let next = reduce(&state, Action::FetchRoomsStarted);
//!
//! assert!(next.rooms.is_loading());
//! assert!(!state.rooms.is_loading());
//! assert!(Arc::ptr_eq(&state.devices, &next.devices));
//! ```

use std::sync::Arc;

use crate::action::{Action, RawAction};
use crate::error::ActionError;
use crate::state::{AppState, AsyncResource, CommandStatus, SensorSubmission, TemperatureResource};
use crate::types::{CurrentDevice, CurrentRoom};

/// Computes the next state.
///
/// Every action produces a new snapshot in which one entity (two for
/// [`Action::AddDeviceSuccess`]) or one or two form fields are replaced:
///
/// - `*Started` actions set the entity to its loading record.
/// - `*Success` actions store the payload and clear the error.
/// - `*Failure` actions store the error and clear the data.
/// - `Update*`, [`Action::SetCurrentRoom`] and [`Action::SaveCurrentDevice`]
///   replace fields verbatim.
///
/// The current position refreshes in place: starting a new lookup keeps the
/// previous position visible until it settles.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn reduce(state: &Arc<AppState>, action: Action) -> Arc<AppState> {
    let mut next = AppState::clone(state);

    match action {
        Action::FetchRoomsStarted => next.rooms = Arc::new(AsyncResource::started()),
        Action::FetchRoomsSuccess { data } => next.rooms = Arc::new(AsyncResource::succeeded(data)),
        Action::FetchRoomsFailure { error } => next.rooms = Arc::new(AsyncResource::failed(error)),
        Action::SetCurrentRoom { room_id, room_name } => {
            next.current_room = Some(CurrentRoom { room_id, room_name });
        }

        Action::FetchRoomByIdStarted => next.room = Arc::new(AsyncResource::started()),
        Action::FetchRoomByIdSuccess { data } => {
            next.room = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchRoomByIdFailure { error } => next.room = Arc::new(AsyncResource::failed(error)),

        Action::FetchDevicesStarted => next.devices = Arc::new(AsyncResource::started()),
        Action::FetchDevicesSuccess { data } => {
            next.devices = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchDevicesFailure { error } => {
            next.devices = Arc::new(AsyncResource::failed(error));
        }

        Action::FetchTemperatureStarted => next.temperature = Arc::new(TemperatureResource::started()),
        Action::FetchTemperatureSuccess { data, last_updated } => {
            next.temperature = Arc::new(TemperatureResource::succeeded(data, last_updated));
        }
        Action::FetchTemperatureFailure { error } => {
            next.temperature = Arc::new(TemperatureResource::failed(error));
        }

        Action::FetchSensorModelsStarted => next.sensor_models = Arc::new(AsyncResource::started()),
        Action::FetchSensorModelsSuccess { data } => {
            next.sensor_models = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchSensorModelsFailure { error } => {
            next.sensor_models = Arc::new(AsyncResource::failed(error));
        }

        Action::AddDeviceStarted => {
            next.adding_device = true;
            next.add_device_error = None;
        }
        Action::AddDeviceSuccess { device } => {
            next.adding_device = false;
            next.add_device_error = None;
            let mut devices = state.devices.data().clone();
            devices.push(device);
            next.devices = Arc::new(state.devices.with_data(devices));
        }
        Action::AddDeviceFailure { error } => {
            next.adding_device = false;
            next.add_device_error = Some(error);
        }

        Action::FetchSensorTypesStarted => next.sensor_types = Arc::new(AsyncResource::started()),
        Action::FetchSensorTypesSuccess { data } => {
            next.sensor_types = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchSensorTypesFailure { error } => {
            next.sensor_types = Arc::new(AsyncResource::failed(error));
        }

        Action::FetchLogsStarted => next.logs = Arc::new(AsyncResource::started()),
        Action::FetchLogsSuccess { data } => next.logs = Arc::new(AsyncResource::succeeded(data)),
        Action::FetchLogsFailure { error } => next.logs = Arc::new(AsyncResource::failed(error)),

        Action::UpdateDeviceStarted => next.update_device = Arc::new(AsyncResource::started()),
        Action::UpdateDeviceSuccess { data } => {
            next.update_device = Arc::new(AsyncResource::succeeded(data));
        }
        Action::UpdateDeviceFailure { error } => {
            next.update_device = Arc::new(AsyncResource::failed(error));
        }

        Action::UpdateSelectedSensorTypeId {
            selected_sensor_type,
        } => next.selected_sensor_type_id = Some(selected_sensor_type),
        Action::UpdateSelectedSensorModel {
            selected_sensor_model,
        } => next.selected_sensor_model = Some(selected_sensor_model),
        Action::UpdateSelectedTypeOfSensor {
            selected_type_of_sensor,
        } => next.selected_type_of_sensor = Some(selected_type_of_sensor),

        Action::FetchCurrentPositionStarted => next.position = Arc::new(state.position.refreshing()),
        Action::FetchCurrentPositionSuccess { data } => {
            next.position = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchCurrentPositionFailure { error } => {
            next.position = Arc::new(AsyncResource::failed(error));
        }

        Action::SetBlindRollerValueStarted => {
            next.set_blind_roller_status = Arc::new(CommandStatus::started());
        }
        Action::SetBlindRollerValueSuccess { message } => {
            next.set_blind_roller_status = Arc::new(CommandStatus::succeeded(message));
        }
        Action::SetBlindRollerValueFailure { error } => {
            next.set_blind_roller_status = Arc::new(CommandStatus::failed(error));
        }

        Action::FetchDeviceTypesStarted => next.device_types = Arc::new(AsyncResource::started()),
        Action::FetchDeviceTypesSuccess { data } => {
            next.device_types = Arc::new(AsyncResource::succeeded(data));
        }
        Action::FetchDeviceTypesFailure { error } => {
            next.device_types = Arc::new(AsyncResource::failed(error));
        }

        Action::FetchActuatorsStarted => next.actuators = Arc::new(AsyncResource::started()),
        Action::FetchActuatorsSuccess { actuators } => {
            next.actuators = Arc::new(AsyncResource::succeeded(actuators));
        }
        Action::FetchActuatorsFailure { error } => {
            next.actuators = Arc::new(AsyncResource::failed(error));
        }

        Action::UpdateGenericSensorData { sensor_name } => next.sensor_name = Some(sensor_name),
        Action::UpdateLatitudeData { latitude } => next.latitude = Some(latitude),
        Action::UpdateLongitudeData { longitude } => next.longitude = Some(longitude),
        Action::UpdateStartDateData { start_date } => next.start_date = Some(start_date),
        Action::UpdateEndDateData { end_date } => next.end_date = Some(end_date),

        Action::AddGenericSensorToDeviceStarted
        | Action::AddGpsSensorToDeviceStarted
        | Action::AddDateSensorToDeviceStarted => {
            next.adding_sensor = Arc::new(SensorSubmission::started());
        }
        Action::AddGenericSensorToDeviceSuccess { .. }
        | Action::AddGpsSensorToDeviceSuccess { .. }
        | Action::AddDateSensorToDeviceSuccess { .. } => {
            next.adding_sensor = Arc::new(SensorSubmission::succeeded());
        }
        Action::AddGenericSensorToDeviceFailure { error }
        | Action::AddGpsSensorToDeviceFailure { error }
        | Action::AddDateSensorToDeviceFailure { error } => {
            next.adding_sensor = Arc::new(SensorSubmission::failed(error));
        }

        Action::SaveCurrentDevice { device_id } => {
            next.current_device = Some(CurrentDevice { device_id });
        }
        Action::UpdateSelectedTypeOfActuator {
            selected_type_of_actuator,
        } => next.selected_type_of_actuator = Some(selected_type_of_actuator),
        Action::UpdateSelectedSensorModelPath {
            selected_sensor_model_path,
        } => next.selected_sensor_model_path = Some(selected_sensor_model_path),
        Action::UpdateSelectedSensorModelName {
            selected_sensor_model_name,
        } => next.selected_sensor_model_name = Some(selected_sensor_model_name),
    }

    Arc::new(next)
}

/// Computes the next state from an action in its wire form.
///
/// Unrecognised tags leave the state untouched and the same [`Arc`] is
/// returned. Payloads that do not match their tag are dropped the same way
/// and logged as warnings.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use smarthome_state::action::RawAction;
/// use smarthome_state::reducer::reduce_wire;
/// use smarthome_state::state::AppState;
///
/// let state = Arc::new(AppState::default());
/// let next = reduce_wire(&state, RawAction::new("NOPE"));
/// assert!(Arc::ptr_eq(&state, &next));
/// ```
#[must_use]
pub fn reduce_wire(state: &Arc<AppState>, raw: RawAction) -> Arc<AppState> {
    match Action::from_raw(raw) {
        Ok(action) => reduce(state, action),
        Err(ActionError::UnknownKind(kind)) => {
            tracing::trace!(kind = %kind, "Ignoring unrecognised action");
            Arc::clone(state)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Dropping malformed action");
            Arc::clone(state)
        }
    }
}
