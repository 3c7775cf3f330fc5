// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application state types.
//!
//! [`AppState`] is an immutable snapshot of everything the dashboard shows.
//! Every entity that is loaded asynchronously is tracked by an
//! [`AsyncResource`] record (`loading` / `error` / `data`); a few entities use
//! specialised records ([`TemperatureResource`], [`CommandStatus`],
//! [`SensorSubmission`]) that keep the same flag discipline.
//!
//! Snapshots are never mutated once published. New snapshots are produced by
//! [`reduce`](crate::reducer::reduce), which shares every untouched entity
//! with the previous snapshot through [`Arc`](std::sync::Arc).
//!
//! # Examples
//!
//! ```
//! use smarthome_state::state::{AppState, AsyncResource};
//! use smarthome_state::types::Room;
//!
//! let state = AppState::default();
//! assert!(!state.rooms.is_loading());
//! assert!(state.rooms.data().is_empty());
//!
//! let loaded = AsyncResource::succeeded(vec![Room::new("r1", "Kitchen")]);
//! assert_eq!(loaded.data().len(), 1);
//! ```

mod app_state;
mod resource;

pub use app_state::AppState;
pub use resource::{AsyncResource, CommandStatus, SensorSubmission, TemperatureResource};
