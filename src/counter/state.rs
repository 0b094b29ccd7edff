//! Counter state.

use serde::{Deserialize, Serialize};

use crate::flow::State;

/// State of the counter.
///
/// The count is encoded as the length of `items`: after N increments the
/// sequence reads `1..=N`. The list-length encoding is part of the
/// observable behavior and deliberately not collapsed into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub items: Vec<u64>,
}

impl CounterState {
    /// Build the well-formed state for a given count: items `1..=count`.
    pub fn with_count(count: u64) -> Self {
        Self {
            items: (1..=count).collect(),
        }
    }

    /// Current count, i.e. the length of `items`.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

impl State for CounterState {}
