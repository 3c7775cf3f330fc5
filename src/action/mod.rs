// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Actions describing state-affecting events.
//!
//! An [`Action`] is one variant of a closed enum; each variant owns its typed
//! payload. Action creators (the code that performs network requests) emit
//! one `*Started` action when a request begins and one `*Success` or
//! `*Failure` action when it settles. Form inputs emit `Update*` actions.
//!
//! Actions also have a JSON wire form, `{"type": "...", "payload": {...}}`,
//! handled by [`RawAction`] and [`Action::from_raw`].
//!
//! # Examples
//!
//! ```
//! use smarthome_state::action::{Action, ActionKind, Phase};
//!
//! let action = Action::from_json(
//!     r#"{"type":"UPDATE_GENERIC_SENSOR_DATA","payload":{"sensorName":"Temp1"}}"#,
//! ).unwrap();
//!
//! assert_eq!(action.kind(), ActionKind::UpdateGenericSensorData);
//! assert_eq!(action.kind().phase(), Phase::Update);
//! ```

mod actions;
mod kind;
mod wire;

pub use actions::Action;
pub use kind::{ActionKind, Phase};
pub use wire::RawAction;
