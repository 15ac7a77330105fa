//! Shared test doubles for the navigator.

#![allow(dead_code, unused_imports)]

use std::collections::HashSet;

use flyout_nav::navigator::{
    LoadError, NavigationRequest, Navigator, ScreenHost, Section, ViewModel, ViewModelLoader,
};
use serde_json::{json, Value};

/// Everything the navigator asked the host to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Display {
        section: Section,
        state: Value,
        title: String,
    },
    MenuChecked(Option<usize>),
    Title(String),
    CloseMenu,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn close_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::CloseMenu))
            .count()
    }

    pub fn displays(&self) -> Vec<Section> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Display { section, .. } => Some(*section),
                _ => None,
            })
            .collect()
    }

    pub fn last_title(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }
}

impl ScreenHost for RecordingHost {
    fn display(&mut self, section: Section, view_model: &ViewModel, title: &str) {
        self.events.push(HostEvent::Display {
            section,
            state: view_model.state().clone(),
            title: title.to_string(),
        });
    }

    fn set_menu_checked(&mut self, position: Option<usize>) {
        self.events.push(HostEvent::MenuChecked(position));
    }

    fn set_title(&mut self, title: &str) {
        self.events.push(HostEvent::Title(title.to_string()));
    }

    fn close_menu(&mut self) {
        self.events.push(HostEvent::CloseMenu);
    }
}

/// Loader that numbers every view-model it builds and fails on request.
#[derive(Debug, Default)]
pub struct ScriptedLoader {
    pub requests: Vec<NavigationRequest>,
    pub failing: HashSet<String>,
}

impl ScriptedLoader {
    pub fn failing_on(view_model_type: &str) -> Self {
        let mut loader = Self::default();
        loader.failing.insert(view_model_type.to_string());
        loader
    }

    pub fn load_count(&self) -> usize {
        self.requests.len()
    }
}

impl ViewModelLoader for ScriptedLoader {
    fn load_view_model(&mut self, request: &NavigationRequest) -> Result<ViewModel, LoadError> {
        if self.failing.contains(request.view_model_type.as_str()) {
            return Err(LoadError::new(
                request.view_model_type.clone(),
                "scripted failure",
            ));
        }
        self.requests.push(request.clone());
        let state = match &request.saved_state {
            Some(saved) => saved.state.clone(),
            None => json!({ "load": self.requests.len() }),
        };
        Ok(ViewModel::new(request.view_model_type.clone(), state))
    }
}

pub type TestNavigator = Navigator<ScriptedLoader, RecordingHost>;

pub fn navigator() -> TestNavigator {
    Navigator::with_default_menu(ScriptedLoader::default(), RecordingHost::default())
}

pub fn navigator_with(loader: ScriptedLoader) -> TestNavigator {
    Navigator::with_default_menu(loader, RecordingHost::default())
}

pub fn enter_time() -> NavigationRequest {
    NavigationRequest::new("EnterTimeViewModel")
}

pub fn create_new_job() -> NavigationRequest {
    NavigationRequest::new("CreateNewJobViewModel")
}

pub fn displayed_count(nav: &TestNavigator) -> usize {
    nav.screens().filter(|s| s.is_displayed()).count()
}
