//! Store: the single owner of the current state slot.

use std::sync::Arc;

use parking_lot::RwLock;

use super::enhancer::Enhancer;
use super::reducer::Reducer;

/// Holds the current state and routes actions through the reducer.
///
/// The store is the single writer of its state slot. A dispatch runs the
/// reducer and replaces the slot atomically; `state()` returns a snapshot
/// and never observes a partially applied transition. The store is meant
/// to be passed explicitly to its consumers rather than living in a
/// global.
pub struct Store<R: Reducer> {
    state: RwLock<R::State>,
    enhancer: Option<Arc<dyn Enhancer<R>>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()` with no enhancer.
    pub fn new() -> Self {
        Self::build(R::State::default(), None)
    }

    /// Create a store seeded with a concrete initial state.
    pub fn with_state(state: R::State) -> Self {
        Self::build(state, None)
    }

    /// Create a store with an enhancer observing every dispatch.
    pub fn with_enhancer(enhancer: Arc<dyn Enhancer<R>>) -> Self {
        Self::build(R::State::default(), Some(enhancer))
    }

    /// Create a store with both a seeded state and an enhancer.
    pub fn with_state_and_enhancer(state: R::State, enhancer: Arc<dyn Enhancer<R>>) -> Self {
        Self::build(state, Some(enhancer))
    }

    fn build(state: R::State, enhancer: Option<Arc<dyn Enhancer<R>>>) -> Self {
        if let Some(enhancer) = &enhancer {
            enhancer.on_init(&state);
        }
        Self {
            state: RwLock::new(state),
            enhancer,
        }
    }

    /// Dispatch an action and return it to the caller.
    ///
    /// Runs the reducer against the current state, replaces the state
    /// slot with the result, then notifies the enhancer with the action
    /// and the new state. Reduce, replace, and notification happen under
    /// the write lock, so dispatches are applied strictly in lock
    /// acquisition order and the enhancer observes matching
    /// (action, state) pairs.
    pub fn dispatch(&self, action: R::Action) -> R::Action {
        let mut slot = self.state.write();
        *slot = R::reduce(std::mem::take(&mut *slot), action.clone());
        if let Some(enhancer) = &self.enhancer {
            enhancer.on_dispatch(&action, &*slot);
        }
        action
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.read().clone()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
