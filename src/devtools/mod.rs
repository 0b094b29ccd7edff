//! Enhancers for inspecting store activity.
//!
//! `DispatchRecorder` keeps a bounded in-memory history of dispatches for
//! display; `TraceEnhancer` writes each dispatch/state pair through
//! `tracing` for offline inspection.

mod recorder;
mod trace;

pub use recorder::{DispatchRecorder, RecordedDispatch};
pub use trace::TraceEnhancer;
