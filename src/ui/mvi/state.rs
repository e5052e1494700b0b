/// Marker trait for UI state.
///
/// `Default` is required so dispatch can `mem::take` the current state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
