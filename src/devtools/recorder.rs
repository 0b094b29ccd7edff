//! Bounded in-memory history of dispatches.

use std::collections::VecDeque;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;

use crate::flow::{Enhancer, Reducer};

/// One recorded store event: a sequence number, the action in wire form,
/// and the state it produced. Store creation is recorded as a synthetic
/// `@@INIT` entry.
#[derive(Debug, Clone)]
pub struct RecordedDispatch {
    pub seq: u64,
    pub action: serde_json::Value,
    pub state: serde_json::Value,
}

/// Enhancer keeping the most recent dispatches in memory.
///
/// History is bounded: once `capacity` entries exist, recording a new one
/// evicts the oldest. Readers get a snapshot; nothing is persisted.
pub struct DispatchRecorder {
    capacity: usize,
    inner: RwLock<RecorderInner>,
}

struct RecorderInner {
    next_seq: u64,
    entries: VecDeque<RecordedDispatch>,
}

impl DispatchRecorder {
    /// Create a recorder holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(RecorderInner {
                next_seq: 0,
                entries: VecDeque::new(),
            }),
        }
    }

    /// Snapshot of the recorded history, oldest first.
    pub fn entries(&self) -> Vec<RecordedDispatch> {
        self.inner.read().entries.iter().cloned().collect()
    }

    /// Total number of events seen, including evicted ones.
    pub fn events_seen(&self) -> u64 {
        self.inner.read().next_seq
    }

    fn record(&self, action: serde_json::Value, state: serde_json::Value) {
        let mut inner = self.inner.write();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        if inner.entries.len() == self.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(RecordedDispatch { seq, action, state });
    }
}

impl<R> Enhancer<R> for DispatchRecorder
where
    R: Reducer,
    R::Action: Serialize,
    R::State: Serialize,
{
    fn on_init(&self, state: &R::State) {
        let state = serde_json::to_value(state).unwrap_or_else(|_| json!(null));
        self.record(json!({ "type": "@@INIT" }), state);
    }

    fn on_dispatch(&self, action: &R::Action, state: &R::State) {
        let action = serde_json::to_value(action).unwrap_or_else(|_| json!(null));
        let state = serde_json::to_value(state).unwrap_or_else(|_| json!(null));
        self.record(action, state);
    }
}
