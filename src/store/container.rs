// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Store implementation.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::action::{Action, ActionKind, RawAction};
use crate::error::{ActionError, Result};
use crate::event::{EventBus, StateEvent};
use crate::reducer::reduce;
use crate::state::AppState;
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};

use super::StoreBuilder;

struct Inner {
    state: RwLock<Arc<AppState>>,
    callbacks: CallbackRegistry,
    events: EventBus,
}

/// The application state container.
///
/// A `Store` is a cheap handle: clones share the same state, subscribers
/// and event bus. Dispatches are serialised, so every transition sees the
/// result of the previous one.
///
/// # Examples
///
/// ```
/// use smarthome_state::Store;
/// use smarthome_state::action::Action;
/// use smarthome_state::types::Room;
///
/// let store = Store::default();
///
/// store.dispatch(Action::FetchRoomsStarted);
/// assert!(store.state().rooms.is_loading());
///
/// store.dispatch(Action::FetchRoomsSuccess {
///     data: vec![Room::new("r1", "Kitchen")],
/// });
/// assert_eq!(store.state().rooms.data().len(), 1);
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        StoreBuilder::new().initial_state(initial).build()
    }

    /// Creates a builder for configuring a store.
    #[must_use]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(super) fn from_parts(initial: AppState, event_capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(Arc::new(initial)),
                callbacks: CallbackRegistry::new(),
                events: EventBus::with_capacity(event_capacity),
            }),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.state.read())
    }

    /// Applies an action and returns the resulting snapshot.
    ///
    /// The event is published on the bus before the next dispatch can
    /// commit, so bus subscribers see transitions in commit order.
    /// Callbacks run afterwards, outside the state lock, and may dispatch
    /// further actions; under concurrent dispatches they can observe
    /// transitions out of order.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let kind = action.kind();
        let event = {
            let mut current = self.inner.state.write();
            let next = reduce(&current, action);
            *current = Arc::clone(&next);
            let event = StateEvent::new(kind, next);
            self.inner.events.publish(event.clone());
            event
        };

        tracing::debug!(action = %kind, "Dispatched action");
        self.run_callbacks(&event);
        Arc::clone(event.state())
    }

    /// Applies an action given in its wire form.
    ///
    /// Unrecognised tags leave the state untouched: the current snapshot is
    /// returned and no subscriber is notified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Action`](crate::Error::Action) if the payload does not
    /// match the action's shape. The state is left untouched.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<Arc<AppState>> {
        match Action::from_raw(raw) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(ActionError::UnknownKind(kind)) => {
                tracing::trace!(kind = %kind, "Ignoring unrecognised action");
                Ok(self.state())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed action");
                Err(e.into())
            }
        }
    }

    /// Applies an action given as a JSON `{"type": ..., "payload": ...}`
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the document is not a
    /// JSON object with a `type` field, or the errors of
    /// [`dispatch_raw`](Self::dispatch_raw).
    pub fn dispatch_json(&self, json: &str) -> Result<Arc<AppState>> {
        let raw: RawAction = serde_json::from_str(json)?;
        self.dispatch_raw(raw)
    }

    /// Subscribes to state events on the broadcast bus.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<StateEvent> {
        self.inner.events.subscribe()
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.inner.callbacks.len()
    }

    fn run_callbacks(&self, event: &StateEvent) {
        let invoked = self.inner.callbacks.dispatch(event);
        if invoked > 0 {
            tracing::trace!(action = %event.kind(), callbacks = invoked, "Notified subscribers");
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("callbacks", &self.inner.callbacks)
            .field("event_subscribers", &self.inner.events.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl Subscribable for Store {
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_state_changed(callback)
    }

    fn on_action<F>(&self, kind: ActionKind, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_action(kind, callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.callbacks.unsubscribe(id)
    }
}
