//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view renders
//! - **Intent**: user actions or internal transitions
//! - **Reducer**: pure function turning state plus intent into new state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
