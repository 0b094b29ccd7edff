//! Reducer trait.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Action) -> State.
/// Every action must produce a state; unrecognized actions return the
/// input state unchanged rather than failing.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects beyond
    /// diagnostics.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
