//! Add/edit form and delete confirmation overlays.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Overlay state enum
//! - `intent.rs` - User actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! Store mutations on submit/confirm are performed by the app, not here.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_modal;
pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::{FormState, ModalState};
