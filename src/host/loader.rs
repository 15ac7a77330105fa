use serde_json::{json, Value};

use crate::navigator::{LoadError, NavigationRequest, Section, ViewModel, ViewModelLoader};

/// Builds fresh view-models with an empty form for their section.
///
/// A saved state on the request is used as-is when its type matches.
#[derive(Debug, Default)]
pub struct BlankLoader {
    loads: usize,
}

impl BlankLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of view-models built so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    fn blank_state(section: Section) -> Value {
        match section {
            Section::EnterTime => json!({ "job": null, "hours": 0 }),
            Section::CreateNewJob => json!({ "name": "", "customer": "" }),
        }
    }
}

impl ViewModelLoader for BlankLoader {
    fn load_view_model(&mut self, request: &NavigationRequest) -> Result<ViewModel, LoadError> {
        let section = Section::for_view_model(&request.view_model_type).ok_or_else(|| {
            LoadError::new(request.view_model_type.clone(), "no blank form for this type")
        })?;

        let state = match &request.saved_state {
            Some(saved) if saved.view_model_type == request.view_model_type => saved.state.clone(),
            _ => Self::blank_state(section),
        };

        self.loads += 1;
        Ok(ViewModel::new(request.view_model_type.clone(), state))
    }
}
