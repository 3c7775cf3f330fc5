// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain records carried by actions and stored in the application state.
//!
//! These types mirror the JSON documents returned by the smart-home backend.
//! Field names follow the backend's wire names (`roomID`, `deviceName`, ...)
//! so that action payloads can be decoded without translation.
//!
//! # Types
//!
//! - [`RoomId`], [`DeviceId`] - Backend identifiers
//! - [`Room`], [`CurrentRoom`] - Rooms and the room selected in the UI
//! - [`Device`], [`CurrentDevice`] - Devices and the device selected in the UI
//! - [`DeviceType`], [`SensorModel`], [`SensorType`], [`Actuator`] - Catalogue entries
//! - [`LogEntry`], [`TemperatureReading`] - Telemetry
//! - [`Position`] - Geographic coordinates (validated)
//! - [`ApiError`] - Failure reported by an asynchronous operation

mod api_error;
mod catalog;
mod device;
mod ids;
mod position;
mod room;
mod telemetry;

pub use api_error::ApiError;
pub use catalog::{Actuator, DeviceType, SensorModel, SensorType};
pub use device::{CurrentDevice, Device};
pub use ids::{DeviceId, RoomId};
pub use position::Position;
pub use room::{CurrentRoom, Room};
pub use telemetry::{LogEntry, TemperatureReading};
