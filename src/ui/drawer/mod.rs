//! Navigation drawer state.

mod intent;
mod reducer;
mod state;

pub use intent::DrawerIntent;
pub use reducer::DrawerReducer;
pub use state::DrawerState;
