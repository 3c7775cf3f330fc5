// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for state transitions.
//!
//! Every committed transition of a [`Store`](crate::store::Store) is
//! published as a [`StateEvent`] on an [`EventBus`]. The bus uses tokio's
//! broadcast channel so that any number of async tasks can follow the state.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use smarthome_state::action::ActionKind;
//! use smarthome_state::event::{EventBus, StateEvent};
//! use smarthome_state::state::AppState;
//!
//! let bus = EventBus::new();
//! let _rx = bus.subscribe();
//!
//! bus.publish(StateEvent::new(
//!     ActionKind::FetchRoomsStarted,
//!     Arc::new(AppState::default()),
//! ));
//! ```

mod event_bus;
mod state_event;

pub(crate) use event_bus::DEFAULT_CHANNEL_CAPACITY;
pub use event_bus::EventBus;
pub use state_event::StateEvent;
