// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smarthome_state` - Application state for a smart-home dashboard client.
//!
//! This library holds the client-side state of a dashboard that manages
//! rooms, devices, sensors and actuators. State changes are described by a
//! closed set of typed [`Action`]s and computed by a pure [`reduce`]
//! function; a [`Store`] owns the current snapshot and notifies observers.
//!
//! # Features
//!
//! - **Typed actions**: one variant per action, with the payload it carries
//! - **Async lifecycle**: every backend fetch goes through `STARTED`,
//!   `SUCCESS` and `FAILURE` transitions with a uniform flag discipline
//! - **Immutable snapshots**: transitions never mutate a published state and
//!   share untouched entities with the previous snapshot
//! - **Wire compatibility**: actions decode from `{"type": ..., "payload": ...}`
//!   JSON; unknown types leave the state unchanged
//! - **Observers**: synchronous callbacks and an async broadcast bus
//!
//! # Quick Start
//!
//! ```
//! use smarthome_state::{Action, Store};
//! use smarthome_state::types::{ApiError, Device};
//!
//! let store = Store::default();
//!
//! store.dispatch(Action::FetchDevicesStarted);
//! assert!(store.state().devices.is_loading());
//!
//! store.dispatch(Action::FetchDevicesSuccess {
//!     data: vec![Device::new("d1", "r1", "Lamp")],
//! });
//! let state = store.state();
//! assert!(!state.devices.is_loading());
//! assert_eq!(state.devices.data().len(), 1);
//!
//! store.dispatch(Action::FetchDevicesFailure {
//!     error: ApiError::new("Network Error"),
//! });
//! assert!(store.state().devices.data().is_empty());
//! ```
//!
//! ## Wire actions
//!
//! ```
//! use smarthome_state::Store;
//!
//! let store = Store::default();
//!
//! store.dispatch_json(r#"{"type": "UPDATE_GENERIC_SENSOR_DATA", "payload": {"sensorName": "Temp1"}}"#)?;
//! assert_eq!(store.state().sensor_name.as_deref(), Some("Temp1"));
//!
//! // Unknown action types are ignored.
//! let before = store.state();
//! let after = store.dispatch_json(r#"{"type": "NOPE"}"#)?;
//! assert!(std::sync::Arc::ptr_eq(&before, &after));
//! # Ok::<(), smarthome_state::Error>(())
//! ```
//!
//! ## Pure reducer
//!
//! ```
//! use std::sync::Arc;
//!
//! use smarthome_state::{reduce, Action, AppState};
//!
//! let state = Arc::new(AppState::default());
//! let next = reduce(&state, Action::FetchRoomsStarted);
//!
//! assert!(next.rooms.is_loading());
//! assert!(!state.rooms.is_loading());
//! assert!(Arc::ptr_eq(&state.devices, &next.devices));
//! ```

pub mod action;
pub mod error;
pub mod event;
pub mod reducer;
pub mod state;
pub mod store;
pub mod subscription;
pub mod types;

pub use action::{Action, ActionKind, Phase, RawAction};
pub use error::{ActionError, Error, Result, ValueError};
pub use event::{EventBus, StateEvent};
pub use reducer::{reduce, reduce_wire};
pub use state::{AppState, AsyncResource, CommandStatus, SensorSubmission, TemperatureResource};
pub use store::{Store, StoreBuilder};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
