//! Per-section screen records and the drawer menu index.

use super::section::Section;
use super::view_model::{Snapshot, ViewModel};

/// Bookkeeping for one section's screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    section: Section,
    displayed: bool,
    view_model: Option<ViewModel>,
    /// Last state captured for this section.
    snapshot: Option<Snapshot>,
    title: String,
}

impl ScreenState {
    pub(crate) fn new(section: Section, title: String) -> Self {
        Self {
            section,
            displayed: false,
            view_model: None,
            snapshot: None,
            title,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn view_model_mut(&mut self) -> Option<&mut ViewModel> {
        self.view_model.as_mut()
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    pub(crate) fn bind(&mut self, view_model: ViewModel) {
        self.view_model = Some(view_model);
    }

    /// Serialise the live view-model and remember it as last-known.
    pub(crate) fn capture(&mut self) -> Option<Snapshot> {
        let snapshot = self.view_model.as_ref()?.snapshot();
        self.snapshot = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Rehydrate from `snapshot` unless a live view-model exists.
    ///
    /// Returns true if the view-model was repopulated.
    pub(crate) fn rehydrate(&mut self, snapshot: &Snapshot) -> bool {
        if self.view_model.is_some() {
            return false;
        }
        self.view_model = Some(ViewModel::from_snapshot(snapshot));
        self.snapshot = Some(snapshot.clone());
        true
    }
}

/// One row of the drawer menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub section: Section,
    pub title: String,
}

/// Ordered drawer menu with the currently checked row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuIndex {
    items: Vec<MenuItem>,
    selected: Option<usize>,
}

impl MenuIndex {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// Menu with every section in default order and default titles.
    pub fn with_all_sections() -> Self {
        Self::new(
            Section::all()
                .iter()
                .map(|s| MenuItem {
                    id: s.menu_id(),
                    section: *s,
                    title: s.default_title().to_string(),
                })
                .collect(),
        )
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&MenuItem> {
        self.items.get(position)
    }

    /// Position of the section's row.
    pub fn position_of(&self, section: Section) -> Option<usize> {
        self.items.iter().position(|m| m.section == section)
    }

    /// Title configured for the section, if it is in the menu.
    pub fn title_of(&self, section: Section) -> Option<&str> {
        self.items
            .iter()
            .find(|m| m.section == section)
            .map(|m| m.title.as_str())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.and_then(|p| self.items.get(p))
    }

    /// Check the row for `section`. Returns its position, or `None` (and
    /// clears the selection) if the section is not in the menu.
    pub(crate) fn select(&mut self, section: Section) -> Option<usize> {
        self.selected = self.position_of(section);
        self.selected
    }
}
