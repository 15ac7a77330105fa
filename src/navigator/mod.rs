//! Section navigation.
//!
//! Resolves requested view-model types to drawer sections, keeps at most one
//! section displayed, and round-trips view-model state across process restarts.

mod error;
mod screen;
mod section;
mod snapshot;
mod state;
mod traits;
mod view_model;

pub use error::{LoadError, NavigationError};
pub use screen::{MenuIndex, MenuItem, ScreenState};
pub use section::Section;
pub use snapshot::{SavedSession, SnapshotMap};
pub use state::{Navigator, DEFAULT_DRAWER_TITLE};
pub use traits::{ScreenHost, ViewModelLoader};
pub use view_model::{NavigationRequest, Snapshot, ViewModel, ViewModelType};
