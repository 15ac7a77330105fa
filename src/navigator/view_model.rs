use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of a view-model type, e.g. `EnterTimeViewModel`.
///
/// Any name can be requested; only names in the section table resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewModelType(String);

impl ViewModelType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Live view-model bound to a screen.
///
/// The state is opaque to the navigator; it only needs to be serialisable.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    view_model_type: ViewModelType,
    state: Value,
}

impl ViewModel {
    pub fn new(view_model_type: ViewModelType, state: Value) -> Self {
        Self {
            view_model_type,
            state,
        }
    }

    /// Rebuild a view-model from its serialised form.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            view_model_type: snapshot.view_model_type.clone(),
            state: snapshot.state.clone(),
        }
    }

    pub fn view_model_type(&self) -> &ViewModelType {
        &self.view_model_type
    }

    pub fn state(&self) -> &Value {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut Value {
        &mut self.state
    }

    /// Serialise the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view_model_type: self.view_model_type.clone(),
            state: self.state.clone(),
        }
    }
}

/// Serialised view-model, persisted across process restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "view_model")]
    pub view_model_type: ViewModelType,
    #[serde(default)]
    pub state: Value,
}

/// Request to show the screen hosting a view-model type.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub view_model_type: ViewModelType,
    /// Saved state handed to the loader when a fresh view-model is built.
    pub saved_state: Option<Snapshot>,
}

impl NavigationRequest {
    pub fn new(view_model_type: impl Into<String>) -> Self {
        Self {
            view_model_type: ViewModelType::new(view_model_type),
            saved_state: None,
        }
    }

    pub fn with_saved_state(mut self, snapshot: Snapshot) -> Self {
        self.saved_state = Some(snapshot);
        self
    }
}

impl From<ViewModelType> for NavigationRequest {
    fn from(view_model_type: ViewModelType) -> Self {
        Self {
            view_model_type,
            saved_state: None,
        }
    }
}
