// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for state subscriptions.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::action::ActionKind;
use crate::event::StateEvent;

/// Unique identifier for a subscription.
///
/// IDs are unique within a registry's lifetime and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type StateCallback = Arc<dyn Fn(&StateEvent) + Send + Sync>;

struct Registration {
    /// `None` means every action.
    filter: Option<ActionKind>,
    callback: StateCallback,
}

/// Registry of state transition callbacks.
///
/// Thread-safe through `parking_lot::RwLock`. Callbacks are cloned out of
/// the lock before being invoked, so a callback may subscribe or unsubscribe
/// without deadlocking.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    callbacks: RwLock<HashMap<SubscriptionId, Registration>>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn register(&self, filter: Option<ActionKind>, callback: StateCallback) -> SubscriptionId {
        let id = self.next_id();
        self.callbacks
            .write()
            .insert(id, Registration { filter, callback });
        id
    }

    /// Registers a callback invoked after every transition.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(callback))
    }

    /// Registers a callback invoked only after transitions caused by `kind`.
    pub fn on_action<F>(&self, kind: ActionKind, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        self.register(Some(kind), Arc::new(callback))
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.write().remove(&id).is_some()
    }

    /// Removes every subscription.
    pub fn clear(&self) {
        self.callbacks.write().clear();
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Returns `true` if no callback is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    /// Invokes every callback interested in `event`.
    ///
    /// Returns the number of callbacks invoked.
    pub fn dispatch(&self, event: &StateEvent) -> usize {
        let matching: Vec<StateCallback> = self
            .callbacks
            .read()
            .values()
            .filter(|reg| reg.filter.is_none_or(|kind| kind == event.kind()))
            .map(|reg| Arc::clone(&reg.callback))
            .collect();

        for callback in &matching {
            callback(event);
        }
        matching.len()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::state::AppState;

    fn event(kind: ActionKind) -> StateEvent {
        StateEvent::new(kind, Arc::new(AppState::default()))
    }

    #[test]
    fn ids_are_unique() {
        let registry = CallbackRegistry::new();
        let a = registry.on_state_changed(|_| {});
        let b = registry.on_state_changed(|_| {});
        assert_ne!(a, b);
        assert_eq!(a.to_string(), format!("Sub({})", a.value()));
    }

    #[test]
    fn unfiltered_callback_sees_every_event() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        registry.on_state_changed(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&event(ActionKind::FetchRoomsStarted));
        registry.dispatch(&event(ActionKind::SetCurrentRoom));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn filtered_callback_sees_only_its_kind() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        registry.on_action(ActionKind::AddDeviceSuccess, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(registry.dispatch(&event(ActionKind::AddDeviceStarted)), 0);
        assert_eq!(registry.dispatch(&event(ActionKind::AddDeviceSuccess)), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let id = registry.on_state_changed(|_| {});
        assert_eq!(registry.len(), 1);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();
        registry.on_state_changed(|_| {});
        registry.on_action(ActionKind::FetchLogsStarted, |_| {});
        registry.clear();
        assert_eq!(registry.dispatch(&event(ActionKind::FetchLogsStarted)), 0);
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let slot: Arc<RwLock<Option<SubscriptionId>>> = Arc::new(RwLock::new(None));

        let reg = Arc::clone(&registry);
        let own = Arc::clone(&slot);
        let id = registry.on_state_changed(move |_| {
            if let Some(id) = *own.read() {
                reg.unsubscribe(id);
            }
        });
        *slot.write() = Some(id);

        registry.dispatch(&event(ActionKind::FetchRoomsStarted));
        assert!(registry.is_empty());
    }
}
