//! Model-View-Intent (MVI) primitives for the dashboard UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses become intents, reducers compute the next table or modal
//! state, and the renderer draws from state alone.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
