// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback subscriptions to state transitions.
//!
//! Synchronous observers (typically UI bindings) register callbacks on a
//! [`Store`](crate::store::Store) through the [`Subscribable`] trait. Async
//! observers should prefer the [`EventBus`](crate::event::EventBus).
//!
//! - [`SubscriptionId`] - Identifier returned on registration, used to unsubscribe
//! - [`CallbackRegistry`] - Stores callbacks and dispatches events to them
//! - [`Subscribable`] - Trait for types that accept subscriptions
//!
//! # Examples
//!
//! ```
//! use smarthome_state::Store;
//! use smarthome_state::action::{Action, ActionKind};
//! use smarthome_state::subscription::Subscribable;
//!
//! let store = Store::default();
//!
//! let sub = store.on_action(ActionKind::FetchRoomsStarted, |event| {
//!     assert!(event.state().rooms.is_loading());
//! });
//!
//! store.dispatch(Action::FetchRoomsStarted);
//! assert!(store.unsubscribe(sub));
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
