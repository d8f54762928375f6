//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable (clone to derive a new one), self-contained,
/// and comparable so observers can detect changes. `Default` supplies
/// the one and only initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
