// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Telemetry records: sensor logs and temperature readings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::DeviceId;

/// A single reading recorded by a sensor.
///
/// The backend stores local date-times without an offset, so the timestamp
/// is kept naive.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::LogEntry;
///
/// let entry: LogEntry = serde_json::from_str(r#"{
///     "logID": "l1",
///     "deviceID": "d1",
///     "sensorID": "s1",
///     "timestamp": "2024-03-01T10:15:00",
///     "reading": "21.5",
///     "sensorTypeID": "Temperature",
///     "unitID": "Celsius"
/// }"#).unwrap();
/// assert_eq!(entry.reading, "21.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log identifier.
    #[serde(rename = "logID")]
    pub id: String,
    /// Device the sensor is attached to.
    #[serde(rename = "deviceID")]
    pub device_id: DeviceId,
    /// Sensor that produced the reading.
    #[serde(rename = "sensorID")]
    pub sensor_id: String,
    /// When the reading was taken.
    pub timestamp: NaiveDateTime,
    /// Reading as reported by the sensor.
    pub reading: String,
    /// Sensor type of the reading.
    #[serde(rename = "sensorTypeID")]
    pub sensor_type: String,
    /// Measurement unit.
    #[serde(rename = "unitID")]
    pub unit: String,
}

/// An outdoor temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Temperature in degrees Celsius.
    pub value: f64,
}

impl TemperatureReading {
    /// Creates a reading in degrees Celsius.
    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn log_timestamp_is_parsed() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"logID":"l9","deviceID":"d3","sensorID":"s2","timestamp":"2024-03-01T10:15:30",
                "reading":"55","sensorTypeID":"Humidity","unitID":"Percent"}"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap();
        assert_eq!(entry.timestamp, expected);
        assert_eq!(entry.device_id.as_str(), "d3");
    }

    #[test]
    fn temperature_reading_round_trips_as_object() {
        let json = serde_json::to_value(TemperatureReading::celsius(12.5)).unwrap();
        assert_eq!(json, serde_json::json!({"value": 12.5}));
    }
}
