//! Dispatch logging through `tracing`.

use serde::Serialize;
use tracing::debug;

use crate::flow::{Enhancer, Reducer};

/// Enhancer emitting every dispatch/state pair as JSON through `tracing`
/// (target `devtools`).
///
/// Pairs with the file-based setup in [`crate::logging`]: attach this and
/// set `UNIFLOW_LOG` to capture a dispatch log without touching the TUI.
pub struct TraceEnhancer;

impl<R> Enhancer<R> for TraceEnhancer
where
    R: Reducer,
    R::Action: Serialize,
    R::State: Serialize,
{
    fn on_init(&self, state: &R::State) {
        let state = serde_json::to_string(state).unwrap_or_default();
        debug!(target: "devtools", event = "init", state = %state);
    }

    fn on_dispatch(&self, action: &R::Action, state: &R::State) {
        let action = serde_json::to_string(action).unwrap_or_default();
        let state = serde_json::to_string(state).unwrap_or_default();
        debug!(target: "devtools", event = "dispatch", action = %action, state = %state);
    }
}
