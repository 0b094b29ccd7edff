//! Enhancer hook for observing store activity.

use super::reducer::Reducer;

/// Observer attached at store creation.
///
/// An enhancer sees the initial state once and then every dispatch
/// together with the state it produced. It is observation-only: it
/// receives borrows and cannot change the action or the stored state.
pub trait Enhancer<R: Reducer>: Send + Sync {
    /// Called once when the store is created, with the initial state.
    fn on_init(&self, state: &R::State);

    /// Called after every dispatch, with the action and the new state.
    fn on_dispatch(&self, action: &R::Action, state: &R::State);
}
