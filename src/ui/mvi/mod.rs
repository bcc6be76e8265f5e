//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything a screen renders
//! - **Intent**: user actions and completed backend calls
//! - **Reducer**: pure function producing the next state
//!
//! Side effects live in the view models; reducers never touch the network.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
