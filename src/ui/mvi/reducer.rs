//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Applies intents to state: `(State, Intent) -> State`.
///
/// Implementations must not perform I/O; the caller runs side effects
/// around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
