// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State transition events.

use std::sync::Arc;

use crate::action::ActionKind;
use crate::state::AppState;

/// A committed state transition.
///
/// Carries the kind of the action that caused it and the resulting
/// snapshot. Cloning an event is cheap: the snapshot is shared.
#[derive(Debug, Clone)]
pub struct StateEvent {
    kind: ActionKind,
    state: Arc<AppState>,
}

impl StateEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(kind: ActionKind, state: Arc<AppState>) -> Self {
        Self { kind, state }
    }

    /// Returns the kind of the action that caused the transition.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns the state after the transition.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Returns `true` if the transition settled an operation with a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.kind.is_failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let state = Arc::new(AppState::default());
        let event = StateEvent::new(ActionKind::FetchLogsFailure, Arc::clone(&state));
        assert_eq!(event.kind(), ActionKind::FetchLogsFailure);
        assert!(Arc::ptr_eq(event.state(), &state));
        assert!(event.is_failure());
    }
}
