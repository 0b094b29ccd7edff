//! Reducer for the counter.

use tracing::debug;

use crate::flow::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Pure function — the tracing calls describe the transition but never
/// influence the returned state.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::IncreaseCount => {
                let mut items = state.items;
                let before = items.len();
                items.push(before as u64 + 1);
                debug!(
                    action = "INCREASE_COUNT",
                    before,
                    after = items.len(),
                    "counter incremented"
                );
                CounterState { items }
            }
            CounterAction::Unknown => {
                debug!(action = "UNKNOWN", len = state.items.len(), "action ignored");
                state
            }
        }
    }
}
