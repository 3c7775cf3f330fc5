// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the store, its subscribers and its event bus.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use smarthome_state::types::{ApiError, Device, Room};
use smarthome_state::{Action, ActionKind, AppState, Error, RawAction, Store, Subscribable};

// ============================================================================
// Dispatch
// ============================================================================

mod dispatch {
    use super::*;

    #[test]
    fn snapshots_form_a_history() {
        let store = Store::default();
        let initial = store.state();

        let loading = store.dispatch(Action::FetchRoomsStarted);
        let loaded = store.dispatch(Action::FetchRoomsSuccess {
            data: vec![Room::new("r1", "Kitchen").with_floor(0)],
        });

        assert!(!initial.rooms.is_loading());
        assert!(loading.rooms.is_loading());
        assert_eq!(loaded.rooms.data()[0].floor, Some(0));
        assert!(Arc::ptr_eq(&loaded, &store.state()));
    }

    #[test]
    fn json_dispatch_matches_typed_dispatch() {
        let typed = Store::default();
        let wire = Store::default();

        typed.dispatch(Action::FetchActuatorsFailure {
            error: ApiError::with_status("Not Found", 404),
        });
        wire.dispatch_json(
            r#"{"type":"FETCH_ACTUATORS_FAILURE","payload":{"error":{"message":"Not Found","status":404}}}"#,
        )
        .unwrap();

        assert_eq!(*typed.state(), *wire.state());
    }

    #[test]
    fn unknown_type_is_ignored() {
        let store = Store::new(AppState {
            sensor_name: Some("Temp1".to_string()),
            ..AppState::default()
        });
        let before = store.state();

        let after = store.dispatch_json(r#"{"type":"NOPE","payload":42}"#).unwrap();

        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let store = Store::default();
        let err = store
            .dispatch_raw(RawAction::with_payload(
                "FETCH_ROOMS_SUCCESS",
                serde_json::json!({"data": "not a list"}),
            ))
            .unwrap_err();

        assert!(matches!(err, Error::Action(_)));
        assert!(err.to_string().contains("FETCH_ROOMS_SUCCESS"));
        assert!(store.state().rooms.data().is_empty());
    }

    #[test]
    fn concurrent_dispatches_are_serialised() {
        let store = Store::default();
        let threads: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..50 {
                        store.dispatch(Action::update_sensor_name(format!("{i}-{j}")));
                    }
                })
            })
            .collect();
        for handle in threads {
            handle.join().unwrap();
        }

        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        store.on_state_changed(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        store.dispatch(Action::FetchLogsStarted);

        assert!(store.state().sensor_name.is_some());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}

// ============================================================================
// Callback subscriptions
// ============================================================================

mod subscriptions {
    use super::*;

    #[test]
    fn filtered_callback_sees_only_its_kind() {
        let store = Store::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.on_action(ActionKind::FetchDevicesFailure, move |event| {
            sink.lock().push(event.kind());
        });

        store.dispatch(Action::FetchDevicesStarted);
        store.dispatch(Action::FetchDevicesFailure {
            error: ApiError::new("Network Error"),
        });
        store.dispatch(Action::FetchRoomsStarted);

        assert_eq!(*seen.lock(), vec![ActionKind::FetchDevicesFailure]);
    }

    #[test]
    fn unfiltered_callback_sees_every_transition() {
        let store = Store::default();
        let kinds = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&kinds);
        let id = store.on_state_changed(move |event| {
            sink.lock().push(event.kind());
        });

        store.dispatch(Action::AddDeviceStarted);
        store.dispatch(Action::AddDeviceFailure {
            error: ApiError::new("Conflict"),
        });
        assert!(store.unsubscribe(id));
        store.dispatch(Action::AddDeviceStarted);

        assert_eq!(
            *kinds.lock(),
            vec![ActionKind::AddDeviceStarted, ActionKind::AddDeviceFailure]
        );
    }

    #[test]
    fn callback_can_dispatch_follow_up_action() {
        let store = Store::default();
        let follow_up = store.clone();
        store.on_action(ActionKind::FetchRoomsSuccess, move |event| {
            if let Some(room) = event.state().rooms.data().first() {
                follow_up.dispatch(Action::set_current_room(room.id.clone(), room.name.clone()));
            }
        });

        store.dispatch(Action::FetchRoomsSuccess {
            data: vec![Room::new("r7", "Office")],
        });

        assert_eq!(
            store.state().selected_room_id().map(|id| id.as_str()),
            Some("r7")
        );
    }
}

// ============================================================================
// Event bus
// ============================================================================

mod events {
    use super::*;

    #[tokio::test]
    async fn subscriber_task_follows_the_store() {
        let store = Store::default();
        let mut rx = store.events();

        let follower = tokio::spawn(async move {
            let mut kinds = Vec::new();
            while let Ok(event) = rx.recv().await {
                kinds.push(event.kind());
                if event.kind() == ActionKind::FetchLogsSuccess {
                    assert!(!event.state().logs.is_loading());
                    break;
                }
            }
            kinds
        });

        store.dispatch(Action::FetchLogsStarted);
        store.dispatch(Action::FetchLogsSuccess { data: Vec::new() });

        let kinds = tokio::time::timeout(Duration::from_secs(1), follower)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            kinds,
            vec![ActionKind::FetchLogsStarted, ActionKind::FetchLogsSuccess]
        );
    }

    #[tokio::test]
    async fn ignored_actions_publish_nothing() {
        let store = Store::default();
        let mut rx = store.events();

        store.dispatch_raw(RawAction::new("NOPE")).unwrap();
        store.dispatch(Action::FetchRoomByIdStarted);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind(), ActionKind::FetchRoomByIdStarted);
    }

    #[test]
    fn concurrent_transitions_are_published_in_commit_order() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 200;

        let store = Store::builder()
            .event_capacity(THREADS * PER_THREAD)
            .build();
        let mut rx = store.events();

        let threads: Vec<_> = (0..THREADS)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..PER_THREAD {
                        store.dispatch(Action::AddDeviceSuccess {
                            device: Device::new(format!("d{i}-{j}"), "r1", "Plug"),
                        });
                    }
                })
            })
            .collect();
        for handle in threads {
            handle.join().unwrap();
        }

        let mut lengths = Vec::new();
        let mut last = None;
        while let Ok(event) = rx.try_recv() {
            lengths.push(event.state().devices.data().len());
            last = Some(event);
        }

        let expected: Vec<usize> = (1..=THREADS * PER_THREAD).collect();
        assert_eq!(lengths, expected);
        assert!(Arc::ptr_eq(last.unwrap().state(), &store.state()));
    }

    #[tokio::test]
    async fn dispatch_without_listeners_does_not_fail() {
        let store = Store::builder().event_capacity(1).build();
        for _ in 0..4 {
            store.dispatch(Action::FetchDeviceTypesStarted);
        }
        assert!(store.state().device_types.is_loading());
    }
}
