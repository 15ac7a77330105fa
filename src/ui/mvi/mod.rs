//! Model-View-Intent (MVI) primitives for shell chrome.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Host
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value describing a piece of chrome (e.g. the drawer)
//! - **Intent**: a user gesture or a navigator request
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
