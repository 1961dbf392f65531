//! Model-View-Intent primitives for the screen state.
//!
//! ```text
//! preference change ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                 │
//!        └──────────── select_theme / select_layout ───────┘
//! ```
//!
//! - **State**: immutable snapshot consumed by the renderer
//! - **Intent**: an observed preference value
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
