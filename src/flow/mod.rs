//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store ──→ Reducer ──→ State ──→ View
//!    ↑                                        │
//!    └────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value held by the store
//! - **Action**: Description of an intended state transition
//! - **Reducer**: Pure function computing the next state from an action
//! - **Store**: Owns the current state, routes actions through the reducer
//! - **Enhancer**: Optional observer of every dispatch/state pair

mod action;
mod enhancer;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use enhancer::Enhancer;
pub use reducer::Reducer;
pub use state::State;
pub use store::Store;
