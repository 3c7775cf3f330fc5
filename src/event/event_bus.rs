// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting state transitions.

use tokio::sync::broadcast;

use super::StateEvent;

/// Default channel capacity for the event bus.
pub(crate) const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus for broadcasting state transitions to multiple subscribers.
///
/// Each subscriber gets its own copy of each event. If a subscriber falls
/// more than the channel capacity behind, it loses the oldest events and
/// receives `RecvError::Lagged`.
///
/// Every event carries a full snapshot. When events are published in commit
/// order, as [`Store`](crate::store::Store) does, the latest event is enough
/// to catch up.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StateEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to state events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// If there are no subscribers, the event is silently discarded.
    pub fn publish(&self, event: StateEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    /// Publishes an event and returns the number of receivers that got it.
    #[must_use]
    pub fn publish_counted(&self, event: StateEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::ActionKind;
    use crate::state::AppState;

    fn event(kind: ActionKind) -> StateEvent {
        StateEvent::new(kind, Arc::new(AppState::default()))
    }

    #[test]
    fn new_bus_has_no_subscribers() {
        assert_eq!(EventBus::new().subscriber_count(), 0);
    }

    #[test]
    fn drop_subscriber_decrements_count() {
        let bus = EventBus::new();
        let rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(rx);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn publish_delivers_to_every_subscriber() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(event(ActionKind::FetchRoomsStarted));

        assert_eq!(rx1.recv().await.unwrap().kind(), ActionKind::FetchRoomsStarted);
        assert_eq!(rx2.recv().await.unwrap().kind(), ActionKind::FetchRoomsStarted);
    }

    #[test]
    fn publish_counted_without_subscribers() {
        let bus = EventBus::new();
        assert_eq!(bus.publish_counted(event(ActionKind::FetchLogsStarted)), 0);
    }

    #[test]
    fn clone_shares_channel() {
        let bus = EventBus::new();
        let other = bus.clone();
        let _rx = bus.subscribe();
        assert_eq!(other.subscriber_count(), 1);
    }

    #[test]
    fn zero_capacity_is_accepted() {
        let bus = EventBus::with_capacity(0);
        let _rx = bus.subscribe();
        assert_eq!(bus.publish_counted(event(ActionKind::FetchLogsStarted)), 1);
    }
}
