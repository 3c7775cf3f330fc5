// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for state containers.

use crate::action::ActionKind;
use crate::event::StateEvent;

use super::SubscriptionId;

/// Trait for types that notify callbacks of state transitions.
///
/// Callbacks run synchronously on the dispatching thread, after the new
/// state has been committed. They must not block.
pub trait Subscribable {
    /// Subscribes to every state transition.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static;

    /// Subscribes to transitions caused by actions of one kind.
    fn on_action<F>(&self, kind: ActionKind, callback: F) -> SubscriptionId
    where
        F: Fn(&StateEvent) + Send + Sync + 'static;

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
