// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for [`Store`].

use crate::event::DEFAULT_CHANNEL_CAPACITY;
use crate::state::AppState;

use super::Store;

/// Builder for creating a [`Store`].
///
/// # Examples
///
/// ```
/// use smarthome_state::{AppState, Store};
///
/// let initial: AppState = serde_json::from_str(r#"{"sensorName": ""}"#).unwrap();
///
/// let store = Store::builder()
///     .initial_state(initial)
///     .event_capacity(32)
///     .build();
///
/// assert_eq!(store.state().sensor_name.as_deref(), Some(""));
/// ```
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    initial_state: AppState,
    event_capacity: usize,
}

impl StoreBuilder {
    /// Creates a builder with the default initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_state: AppState::default(),
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Sets the initial state snapshot.
    #[must_use]
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.initial_state = state;
        self
    }

    /// Sets the capacity of the event bus.
    ///
    /// Slow event subscribers lose events older than this many transitions.
    #[must_use]
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Builds the store.
    #[must_use]
    pub fn build(self) -> Store {
        tracing::debug!(
            event_capacity = self.event_capacity,
            "Creating state store"
        );
        Store::from_parts(self.initial_state, self.event_capacity)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = StoreBuilder::new();
        assert_eq!(builder.event_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(builder.initial_state, AppState::default());
    }

    #[test]
    fn initial_state_is_used() {
        let initial = AppState {
            latitude: Some("41.1".to_string()),
            ..AppState::default()
        };
        let store = StoreBuilder::new().initial_state(initial).build();
        assert_eq!(store.state().latitude.as_deref(), Some("41.1"));
    }
}
