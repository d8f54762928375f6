//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents cover user actions (key presses, selection) as well as
/// internal transitions fed back by asynchronous work (a fetched page,
/// a failure). Reducers process them to produce new states.
pub trait Intent: Send + 'static {}
