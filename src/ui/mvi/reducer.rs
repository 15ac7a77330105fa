//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a chrome state transition happens.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no host calls, no logging.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
