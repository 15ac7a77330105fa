//! Capabilities the navigator needs from its host shell.

use super::error::LoadError;
use super::section::Section;
use super::view_model::{NavigationRequest, ViewModel};

/// Builds view-models for navigation requests.
///
/// Called only when the target section has no live view-model.
pub trait ViewModelLoader {
    /// Load the view-model named by `request`.
    ///
    /// # Arguments
    /// * `request` - Target type plus optional saved state to rehydrate from
    ///
    /// # Returns
    /// * `Ok(ViewModel)` - The view-model to bind to the screen
    /// * `Err(LoadError)` - If the view-model could not be built
    fn load_view_model(&mut self, request: &NavigationRequest) -> Result<ViewModel, LoadError>;
}

/// The surface that actually presents screens.
///
/// Only `display` and `close_menu` are required; the rest default to no-ops
/// for hosts without a menu list or title bar.
pub trait ScreenHost {
    /// Replace the content area with the screen for `section`.
    fn display(&mut self, section: Section, view_model: &ViewModel, title: &str);

    /// Check the menu row at `position`, or clear the check when the
    /// displayed section has no row.
    fn set_menu_checked(&mut self, _position: Option<usize>) {}

    /// Update the title bar.
    fn set_title(&mut self, _title: &str) {}

    /// Close the side menu. Invoked once at the end of every navigation attempt.
    fn close_menu(&mut self);
}
