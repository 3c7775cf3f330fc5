// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The application state container.
//!
//! A [`Store`] owns the current [`AppState`](crate::state::AppState)
//! snapshot, runs dispatched actions through the
//! [`reducer`](crate::reducer) and notifies observers. The application
//! root creates one store and hands clones of it to whatever needs to read
//! state or dispatch actions; there is no global instance.
//!
//! # Examples
//!
//! ```
//! use smarthome_state::Store;
//! use smarthome_state::action::Action;
//!
//! let store = Store::builder().event_capacity(64).build();
//!
//! store.dispatch(Action::update_sensor_name("Temp1"));
//! assert_eq!(store.state().sensor_name.as_deref(), Some("Temp1"));
//! ```

mod builder;
mod container;

pub use builder::StoreBuilder;
pub use container::Store;
