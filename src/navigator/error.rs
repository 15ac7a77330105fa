//! Error types for navigation.

use thiserror::Error;

use super::section::Section;
use super::view_model::ViewModelType;

/// Failure reported by a [`ViewModelLoader`](super::ViewModelLoader).
#[derive(Debug, Clone, Error)]
#[error("failed to load view-model '{view_model_type}': {message}")]
pub struct LoadError {
    pub view_model_type: ViewModelType,
    pub message: String,
}

impl LoadError {
    pub fn new(view_model_type: ViewModelType, message: impl Into<String>) -> Self {
        Self {
            view_model_type,
            message: message.into(),
        }
    }
}

/// Errors that can occur while navigating. State is unchanged on error.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The requested view-model type is not hosted by any section.
    #[error("no section registered for view-model type '{view_model_type}'")]
    UnknownSection { view_model_type: ViewModelType },

    /// The loader could not produce the view-model for the target section.
    #[error("could not load view-model for section '{section}'")]
    ViewModelLoad {
        section: Section,
        #[source]
        source: LoadError,
    },

    /// A menu tap referred to a position past the end of the menu.
    #[error("menu has no item at position {position}")]
    UnknownMenuItem { position: usize },
}
