//! Model-View-Intent (MVI) primitives for the form screen.
//!
//! # Architecture
//!
//! ```text
//! key / paste / settled request
//!          │
//!          ▼
//!       Intent ──→ Reducer ──→ State ──→ View ──→ Frame
//!          ▲                                        │
//!          └────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything needed to draw the screen
//! - **Intent**: a single requested transition
//! - **Reducer**: the only place transitions happen

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
