//! Marker trait for screen state.

/// Screen state. Cloned out of the store for rendering, compared to skip
/// redundant redraws, and reset to `Default` on logout or clear.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
