use std::sync::Arc;

use serde_json::json;
use uniflow::counter::{CounterAction, CounterReducer, CounterState};
use uniflow::devtools::{DispatchRecorder, TraceEnhancer};
use uniflow::flow::{Enhancer, Store};

type CounterStore = Store<CounterReducer>;

#[test]
fn new_store_holds_default_state() {
    let store = CounterStore::new();
    assert_eq!(store.state(), CounterState { items: vec![] });
}

#[test]
fn with_state_seeds_the_store() {
    let store = CounterStore::with_state(CounterState::with_count(3));
    assert_eq!(store.state().items, vec![1, 2, 3]);
}

#[test]
fn dispatch_returns_the_action() {
    let store = CounterStore::new();
    let returned = store.dispatch(CounterAction::IncreaseCount);
    assert_eq!(returned, CounterAction::IncreaseCount);
}

#[test]
fn dispatches_apply_in_issue_order() {
    let store = CounterStore::new();
    store.dispatch(CounterAction::IncreaseCount);
    store.dispatch(CounterAction::IncreaseCount);
    store.dispatch(CounterAction::IncreaseCount);
    assert_eq!(store.state().items, vec![1, 2, 3]);
}

#[test]
fn unknown_action_leaves_state_unchanged() {
    let store = CounterStore::with_state(CounterState::with_count(2));
    store.dispatch(CounterAction::Unknown);
    assert_eq!(store.state().items, vec![1, 2]);
}

#[test]
fn snapshots_are_isolated_from_later_dispatches() {
    let store = CounterStore::new();
    store.dispatch(CounterAction::IncreaseCount);

    let snapshot = store.state();
    store.dispatch(CounterAction::IncreaseCount);

    assert_eq!(snapshot.items, vec![1]);
    assert_eq!(store.state().items, vec![1, 2]);
}

#[test]
fn recorder_observes_init_and_every_dispatch() {
    let recorder = Arc::new(DispatchRecorder::new(16));
    let store = CounterStore::with_enhancer(recorder.clone());

    store.dispatch(CounterAction::IncreaseCount);
    store.dispatch(CounterAction::Unknown);

    let entries = recorder.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].action["type"], "@@INIT");
    assert_eq!(entries[1].action["type"], "INCREASE_COUNT");
    assert_eq!(entries[1].state["items"], json!([1]));
    assert_eq!(entries[2].action["type"], "UNKNOWN");
    assert_eq!(entries[2].state["items"], json!([1]));
}

#[test]
fn recorder_state_matches_store_state() {
    let recorder = Arc::new(DispatchRecorder::new(16));
    let store = CounterStore::with_enhancer(recorder.clone());

    store.dispatch(CounterAction::IncreaseCount);

    let entries = recorder.entries();
    let observed = entries.last().unwrap();
    let current = serde_json::to_value(store.state()).unwrap();
    assert_eq!(observed.state, current);
}

#[test]
fn seeded_store_with_enhancer_reports_seed_as_init() {
    let recorder = Arc::new(DispatchRecorder::new(16));
    let store = CounterStore::with_state_and_enhancer(CounterState::with_count(2), recorder.clone());

    let entries = recorder.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state["items"], json!([1, 2]));
    assert_eq!(store.state().items, vec![1, 2]);
}

#[test]
fn trace_enhancer_does_not_affect_dispatch_results() {
    let enhancer: Arc<dyn Enhancer<CounterReducer>> = Arc::new(TraceEnhancer);
    let store = CounterStore::with_enhancer(enhancer);

    let returned = store.dispatch(CounterAction::IncreaseCount);
    assert_eq!(returned, CounterAction::IncreaseCount);
    assert_eq!(store.state().items, vec![1]);
}

#[test]
fn absent_enhancer_is_a_no_op_pass_through() {
    let store = CounterStore::new();
    for _ in 0..5 {
        store.dispatch(CounterAction::IncreaseCount);
    }
    let expected: Vec<u64> = (1..=5).collect();
    assert_eq!(store.state().items, expected);
}

#[test]
fn wire_actions_round_through_the_store() {
    let store = CounterStore::new();

    store.dispatch(CounterAction::from_json(&json!({ "type": "INCREASE_COUNT" })));
    store.dispatch(CounterAction::from_json(&json!({ "type": "RESET" })));
    store.dispatch(CounterAction::from_json(&json!({})));

    assert_eq!(store.state().items, vec![1]);
}
