//! Marker trait for intents.

/// A requested state transition.
///
/// Produced by key handling and by settled network requests, which may
/// arrive from another thread, hence `Send`.
pub trait Intent: Send + 'static {}
