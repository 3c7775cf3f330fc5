// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geographic position type.
//!
//! Positions come from the browser geolocation service and are stored as
//! received. [`Position::new`] checks the coordinate ranges for positions
//! built in code; [`Position::is_valid`] answers the same question for a
//! received one.

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A WGS84 position in decimal degrees.
///
/// # Examples
///
/// ```
/// use smarthome_state::types::Position;
///
/// let porto = Position::new(41.1579, -8.6291).unwrap();
/// assert_eq!(porto.latitude(), 41.1579);
///
/// // Out-of-range coordinates are rejected
/// assert!(Position::new(91.0, 0.0).is_err());
/// assert!(Position::new(0.0, 181.0).is_err());
///
/// // Received positions are kept verbatim
/// let far: Position = serde_json::from_str(r#"{"latitude":95.0,"longitude":0.0}"#).unwrap();
/// assert!(!far.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    /// Creates a position.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidLatitude`] if the latitude is not within
    /// `[-90, 90]`, or [`ValueError::InvalidLongitude`] if the longitude is
    /// not within `[-180, 180]`. NaN is rejected for both.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValueError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValueError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValueError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::new(self.latitude, self.longitude).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(Position::new(90.0, 180.0).is_ok());
        assert!(Position::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            Position::new(f64::NAN, 0.0),
            Err(ValueError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn deserialization_keeps_coordinates_verbatim() {
        let ok: Position = serde_json::from_str(r#"{"latitude":38.7,"longitude":-9.1}"#).unwrap();
        assert_eq!(ok.longitude(), -9.1);
        assert!(ok.is_valid());

        let far: Position = serde_json::from_str(r#"{"latitude":120.0,"longitude":0.0}"#).unwrap();
        assert_eq!(far.latitude(), 120.0);
        assert!(!far.is_valid());
    }
}
