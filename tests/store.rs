mod common;

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tickdown::error::{TimerError, TimerField};
use tickdown::store::TimerStore;
use tickdown::timer::{raw, RawAction, TimerIntent, TimerState};

#[test]
fn starts_from_defaults() {
    let store = TimerStore::default();
    assert_eq!(store.state(), TimerState::default());
}

#[test]
fn subscribers_see_every_new_state() {
    let store = TimerStore::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |state| sink.lock().push(*state));

    store.dispatch(TimerIntent::Start).unwrap();
    store.dispatch(TimerIntent::Tick).unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_running);
    assert_eq!(seen[0].current_time, 10);
    assert_eq!(seen[1].current_time, 9);
    assert_eq!(seen[1], store.state());
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = TimerStore::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(store.listener_count(), 1);

    store.dispatch(TimerIntent::Start).unwrap();
    subscription.unsubscribe();
    store.dispatch(TimerIntent::Stop).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = TimerStore::default();
    {
        let _subscription = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 1);
    }
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn subscription_may_outlive_store() {
    let store = TimerStore::default();
    let subscription = store.subscribe(|_| {});
    drop(store);
    subscription.unsubscribe();
}

#[test]
fn dispatch_from_listener_is_queued_after_current_round() {
    let store = TimerStore::new(common::running(10, 6));
    let order = Arc::new(Mutex::new(Vec::new()));

    // First listener stops the countdown once it reaches 5.
    let inner_store = store.clone();
    let first_log = Arc::clone(&order);
    let _first = store.subscribe(move |state| {
        first_log.lock().push(("first", state.current_time, state.is_running));
        if state.current_time == 5 && state.is_running {
            inner_store.dispatch(TimerIntent::Stop).unwrap();
        }
    });
    let second_log = Arc::clone(&order);
    let _second = store.subscribe(move |state| {
        second_log.lock().push(("second", state.current_time, state.is_running));
    });

    store.dispatch(TimerIntent::Tick).unwrap();

    // Both listeners see the tick before either sees the stop.
    assert_eq!(
        *order.lock(),
        vec![
            ("first", 5, true),
            ("second", 5, true),
            ("first", 5, false),
            ("second", 5, false),
        ]
    );
    assert!(!store.state().is_running);
}

#[test]
fn invalid_configuration_is_rejected_without_notifying() {
    let store = TimerStore::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let _subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = store
        .dispatch(TimerIntent::SetDuration { duration: 0 })
        .unwrap_err();
    assert_eq!(err, TimerError::invalid(TimerField::Duration, "0"));

    let err = store
        .dispatch(TimerIntent::SetStartTime { start_time: -4 })
        .unwrap_err();
    assert_eq!(err.field(), TimerField::StartTime);

    assert_eq!(store.state(), TimerState::default());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn raw_actions_reach_the_reducer() {
    let store = TimerStore::default();
    store.dispatch_raw(raw::set_start_time(5)).unwrap();
    store.dispatch_raw(raw::start()).unwrap();
    store.dispatch_raw(raw::tick_timer()).unwrap();

    let state = store.state();
    assert_eq!(state.start_time, 5);
    assert_eq!(state.current_time, 4);
    assert!(state.is_running);
}

#[test]
fn unknown_raw_action_is_a_silent_noop() {
    let store = TimerStore::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let _subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(store.dispatch_raw(RawAction::new("timer/rewind")).is_ok());
    assert_eq!(store.state(), TimerState::default());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn raw_invalid_configuration_is_still_rejected() {
    let store = TimerStore::default();
    assert!(store.dispatch_raw(raw::set_duration(0)).is_err());
    assert_eq!(store.state().duration, 1000);
}

#[test]
fn dispatches_from_many_threads_are_all_applied() {
    let store = TimerStore::new(TimerState::idle(1000, 1000));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    store.dispatch(TimerIntent::Tick).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.state().current_time, 800);
}
