//! Marker trait for chrome state.

/// Chrome state is a small value: cloned to produce the next state, compared
/// to detect changes, and defaulted when the host starts.
pub trait UiState: Clone + PartialEq + Default + 'static {}
