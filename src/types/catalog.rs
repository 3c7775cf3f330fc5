// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalogue entries: device types, sensor models and types, actuators.

use serde::{Deserialize, Serialize};

use super::DeviceId;

/// A kind of device that can be added to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceType {
    /// Device type identifier.
    #[serde(rename = "deviceTypeID")]
    pub id: String,
    /// Human readable description.
    #[serde(rename = "description", default)]
    pub description: String,
}

impl DeviceType {
    /// Creates a device type.
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// A sensor implementation that can be attached to a device.
///
/// The model path is the fully qualified name the backend uses to build
/// the sensor, the name is what the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorModel {
    /// Model path, used as identifier.
    #[serde(rename = "sensorModelPath")]
    pub model_path: String,
    /// Display name.
    #[serde(rename = "sensorModelName")]
    pub name: String,
    /// Sensor type this model measures.
    #[serde(rename = "sensorTypeID", default, skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<String>,
}

impl SensorModel {
    /// Creates a sensor model.
    #[must_use]
    pub fn new(model_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
            name: name.into(),
            sensor_type: None,
        }
    }

    /// Sets the measured sensor type.
    #[must_use]
    pub fn with_sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }
}

/// A measured quantity, e.g. temperature in Celsius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorType {
    /// Sensor type identifier.
    #[serde(rename = "sensorTypeID")]
    pub id: String,
    /// Human readable description.
    #[serde(rename = "typeDescription")]
    pub description: String,
    /// Measurement unit.
    #[serde(rename = "unitID")]
    pub unit: String,
}

impl SensorType {
    /// Creates a sensor type.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            unit: unit.into(),
        }
    }
}

/// An actuator attached to a device.
///
/// Bounds are only present for set-point actuators and are kept as the
/// strings the backend sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actuator {
    /// Actuator identifier.
    #[serde(rename = "actuatorID")]
    pub id: String,
    /// Device the actuator belongs to.
    #[serde(rename = "deviceID")]
    pub device_id: DeviceId,
    /// Display name.
    #[serde(rename = "actuatorName")]
    pub name: String,
    /// Actuator type identifier.
    #[serde(rename = "actuatorTypeID")]
    pub actuator_type: String,
    /// Model path.
    #[serde(rename = "modelPath", default)]
    pub model_path: String,
    /// Lower bound for set-point actuators.
    #[serde(rename = "lowerBound", default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    /// Upper bound for set-point actuators.
    #[serde(rename = "upperBound", default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
}

impl Actuator {
    /// Creates an actuator without bounds.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        device_id: impl Into<DeviceId>,
        name: impl Into<String>,
        actuator_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            device_id: device_id.into(),
            name: name.into(),
            actuator_type: actuator_type.into(),
            model_path: String::new(),
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Sets the set-point bounds.
    #[must_use]
    pub fn with_bounds(mut self, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        self.lower_bound = Some(lower.into());
        self.upper_bound = Some(upper.into());
        self
    }
}
