// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room records.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A room of the house as returned by the backend.
///
/// Dimensions are optional because the room listing endpoint only returns
/// identifiers and names; the by-id endpoint fills in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Backend identifier.
    #[serde(rename = "roomID")]
    pub id: RoomId,
    /// Display name.
    #[serde(rename = "roomName")]
    pub name: String,
    /// Floor number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    /// Width in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Length in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Height in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Room {
    /// Creates a room with only an identifier and a name.
    #[must_use]
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor: None,
            width: None,
            length: None,
            height: None,
        }
    }

    /// Sets the floor number.
    #[must_use]
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Sets the room dimensions (width, length, height) in metres.
    #[must_use]
    pub fn with_dimensions(mut self, width: f64, length: f64, height: f64) -> Self {
        self.width = Some(width);
        self.length = Some(length);
        self.height = Some(height);
        self
    }
}

/// The room currently selected in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRoom {
    /// Identifier of the selected room.
    pub room_id: RoomId,
    /// Name of the selected room, kept for display.
    pub room_name: String,
}

impl CurrentRoom {
    /// Creates a room selection.
    #[must_use]
    pub fn new(room_id: impl Into<RoomId>, room_name: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            room_name: room_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_listing_entry() {
        let room: Room =
            serde_json::from_str(r#"{"roomID":"r1","roomName":"Kitchen"}"#).unwrap();
        assert_eq!(room, Room::new("r1", "Kitchen"));
    }

    #[test]
    fn decodes_full_room() {
        let room: Room = serde_json::from_str(
            r#"{"roomID":"r2","roomName":"Attic","floor":2,"width":4.0,"length":5.5,"height":2.1}"#,
        )
        .unwrap();
        assert_eq!(room.floor, Some(2));
        assert_eq!(room.length, Some(5.5));
    }

    #[test]
    fn listing_entry_serializes_without_empty_dimensions() {
        let json = serde_json::to_value(Room::new("r1", "Hall")).unwrap();
        assert_eq!(json, serde_json::json!({"roomID": "r1", "roomName": "Hall"}));
    }
}
