//! Unidirectional state management with a typed store.
//!
//! The `flow` module holds the framework seam (state, action, reducer,
//! store, enhancer); `counter` is the application domain built on it;
//! `devtools` provides enhancers for inspecting dispatches; `ui` is a
//! terminal front end exercising the whole loop.

pub mod config;
pub mod counter;
pub mod devtools;
pub mod flow;
pub mod logging;
pub mod ui;
