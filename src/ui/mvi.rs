//! Model-View-Intent primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Screens keep their state as plain values. Key presses and finished
//! catalog operations become intents; a reducer turns the old state and an
//! intent into the next state without touching the catalog or the network.

/// Marker trait for screen state.
///
/// States are cloneable values with a neutral default so a reducer can take
/// ownership of the current one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user actions or operation results).
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state stored in `slot`.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
