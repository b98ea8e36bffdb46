//! Marker trait for UI state.

/// Renderable state. `Default` is the state at startup; `PartialEq` lets
/// tests compare whole snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
