use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reducers never touch the product store; the app applies store mutations
/// and then dispatches the resulting intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
