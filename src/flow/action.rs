//! Base trait for actions.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events
///
/// Actions are processed by reducers to produce new states. `Clone` is
/// required because dispatch hands the action to the enhancer and still
/// returns it to the caller.
pub trait Action: Clone + std::fmt::Debug + Send + 'static {}
