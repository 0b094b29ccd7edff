//! Terminal front end for the counter store.

mod app;
mod events;
mod render;
mod runtime;
mod terminal_guard;

pub use app::App;
pub use runtime::run;
