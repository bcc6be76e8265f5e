//! Marker trait for intents.

/// Something that happened: a user action, or a backend call that finished
/// and carries its [`Resource`](crate::repository::Resource).
pub trait Intent: Send + 'static {}
