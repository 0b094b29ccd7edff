//! Base trait for state values.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` doubles as the initial state: a freshly created store holds
/// `State::default()` until the first dispatch.
pub trait State: Clone + PartialEq + Default + std::fmt::Debug + Send + 'static {}
