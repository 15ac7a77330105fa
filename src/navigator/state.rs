//! The section navigator.
//!
//! Owns every screen record, the drawer menu and the drawer itself. All
//! methods take `&mut self` and run to completion on the caller's thread.

use std::collections::BTreeMap;

use crate::ui::drawer::{DrawerIntent, DrawerReducer, DrawerState};
use crate::ui::mvi::Reducer;

use super::error::NavigationError;
use super::screen::{MenuIndex, ScreenState};
use super::section::Section;
use super::snapshot::{SavedSession, SnapshotMap};
use super::traits::{ScreenHost, ViewModelLoader};
use super::view_model::{NavigationRequest, ViewModel, ViewModelType};

/// Title shown while no section is displayed, and while the drawer is open.
pub const DEFAULT_DRAWER_TITLE: &str = "Home";

/// Maps view-model requests onto sections and keeps at most one screen live.
pub struct Navigator<L, H> {
    loader: L,
    host: H,
    menu: MenuIndex,
    screens: BTreeMap<Section, ScreenState>,
    /// The single source of truth for "already shown".
    active: Option<Section>,
    drawer: DrawerState,
    drawer_title: String,
    /// Title of the active screen.
    title: String,
}

impl<L: ViewModelLoader, H: ScreenHost> Navigator<L, H> {
    pub fn new(loader: L, host: H, menu: MenuIndex, drawer_title: impl Into<String>) -> Self {
        let drawer_title = drawer_title.into();
        Self {
            loader,
            host,
            menu,
            screens: BTreeMap::new(),
            active: None,
            drawer: DrawerState::default(),
            title: drawer_title.clone(),
            drawer_title,
        }
    }

    /// Navigator with every section in the menu and the default drawer title.
    pub fn with_default_menu(loader: L, host: H) -> Self {
        Self::new(loader, host, MenuIndex::with_all_sections(), DEFAULT_DRAWER_TITLE)
    }

    /// Map a view-model type to the section hosting it.
    pub fn resolve_section(
        &self,
        view_model_type: &ViewModelType,
    ) -> Result<Section, NavigationError> {
        Section::for_view_model(view_model_type).ok_or_else(|| NavigationError::UnknownSection {
            view_model_type: view_model_type.clone(),
        })
    }

    /// Show the screen hosting the requested view-model type.
    ///
    /// Returns `Ok(true)` when the section is displayed afterwards, including
    /// when it already was. The drawer is closed exactly once on every exit path.
    ///
    /// # Errors
    /// `UnknownSection` if the type is unmapped, `ViewModelLoad` if the loader
    /// fails. State is unchanged on error.
    pub fn show(&mut self, request: &NavigationRequest) -> Result<bool, NavigationError> {
        let mut nav = scopeguard::guard(self, |nav| nav.close_drawer());
        nav.show_inner(request)
    }

    fn show_inner(&mut self, request: &NavigationRequest) -> Result<bool, NavigationError> {
        let section = self.resolve_section(&request.view_model_type)?;

        if self.active == Some(section) {
            tracing::debug!(section = %section, "Section already displayed");
            return Ok(true);
        }

        let title = self
            .menu
            .title_of(section)
            .unwrap_or(section.default_title())
            .to_string();

        // Load before touching any state so a failure leaves everything as is.
        let loaded = match self.screens.get(&section).and_then(|s| s.view_model()) {
            Some(_) => None,
            None => {
                let view_model = self.loader.load_view_model(request).map_err(|source| {
                    tracing::warn!(section = %section, error = %source, "View-model load failed");
                    NavigationError::ViewModelLoad { section, source }
                })?;
                Some(view_model)
            }
        };

        let previous = self.active.take();
        if let Some(prev) = previous {
            if let Some(screen) = self.screens.get_mut(&prev) {
                screen.set_displayed(false);
            }
        }

        let screen = self
            .screens
            .entry(section)
            .or_insert_with(|| ScreenState::new(section, title.clone()));
        if let Some(view_model) = loaded {
            screen.bind(view_model);
        }
        screen.set_displayed(true);
        self.active = Some(section);

        if let Some(view_model) = screen.view_model() {
            self.host.display(section, view_model, &title);
        }
        let position = self.menu.select(section);
        self.host.set_menu_checked(position);
        self.title = title;
        self.host.set_title(&self.title);

        tracing::info!(
            from = ?previous.map(|s| s.as_str()),
            to = %section,
            "Section displayed"
        );

        Ok(true)
    }

    /// Handle a tap on the menu row at `position`.
    pub fn select_menu_item(&mut self, position: usize) -> Result<bool, NavigationError> {
        let Some(item) = self.menu.get(position) else {
            self.close_drawer();
            return Err(NavigationError::UnknownMenuItem { position });
        };
        let request = NavigationRequest::from(item.section.view_model_type());
        self.show(&request)
    }

    /// Serialise every live view-model.
    pub fn capture_snapshot(&mut self) -> SnapshotMap {
        let mut map = SnapshotMap::new();
        for (section, screen) in self.screens.iter_mut() {
            if let Some(snapshot) = screen.capture() {
                map.insert(*section, snapshot);
            }
        }
        tracing::debug!(screens = map.len(), "Captured snapshot");
        map
    }

    /// Repopulate missing view-models from `snapshot`. Live view-models are
    /// never overwritten; entries for the wrong view-model type are skipped.
    pub fn restore_snapshot(&mut self, snapshot: &SnapshotMap) {
        for (section, saved) in snapshot.iter() {
            if saved.view_model_type != section.view_model_type() {
                tracing::warn!(
                    section = %section,
                    view_model = %saved.view_model_type,
                    "Snapshot holds a foreign view-model type, skipping"
                );
                continue;
            }
            let title = self
                .menu
                .title_of(section)
                .unwrap_or(section.default_title())
                .to_string();
            let screen = self
                .screens
                .entry(section)
                .or_insert_with(|| ScreenState::new(section, title));
            if screen.rehydrate(saved) {
                tracing::debug!(section = %section, "Restored view-model");
            }
        }
    }

    /// Everything the host should persist before the process may die.
    pub fn save_session(&mut self) -> SavedSession {
        SavedSession {
            active: self.active,
            title: self.active.map(|_| self.title.clone()),
            screens: self.capture_snapshot(),
        }
    }

    /// Bring the navigator up after process start.
    ///
    /// A fresh start shows the first menu item. A restarted process restores
    /// its view-models and, if nothing is displayed yet, shows the section
    /// that was active when the session was saved. Its saved title is kept
    /// when the menu has no row for that section.
    pub fn launch(&mut self, saved: Option<SavedSession>) -> Result<(), NavigationError> {
        let (target, saved_title) = match saved {
            None => (None, None),
            Some(session) => {
                self.restore_snapshot(&session.screens);
                if self.active.is_some() {
                    return Ok(());
                }
                (session.active, session.title)
            }
        };

        match target {
            Some(section) => {
                self.show(&NavigationRequest::from(section.view_model_type()))?;
                if let (None, Some(title)) = (self.menu.title_of(section), saved_title) {
                    self.title = title;
                    let displayed = self.displayed_title().to_string();
                    self.host.set_title(&displayed);
                }
            }
            None if !self.menu.items().is_empty() => {
                self.select_menu_item(0)?;
            }
            None => {}
        }
        Ok(())
    }

    pub fn open_drawer(&mut self) {
        self.dispatch_drawer(DrawerIntent::Open);
    }

    /// Close the drawer and tell the host to do the same.
    pub fn close_drawer(&mut self) {
        self.dispatch_drawer(DrawerIntent::Close);
        self.host.close_menu();
    }

    pub fn toggle_drawer(&mut self) {
        self.dispatch_drawer(DrawerIntent::Toggle);
    }

    fn dispatch_drawer(&mut self, intent: DrawerIntent) {
        let before = self.drawer;
        self.drawer = DrawerReducer::reduce(before, intent);
        if before != self.drawer {
            let title = self.displayed_title().to_string();
            self.host.set_title(&title);
        }
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active
    }

    pub fn active_screen(&self) -> Option<&ScreenState> {
        self.active.and_then(|s| self.screens.get(&s))
    }

    pub fn screen(&self, section: Section) -> Option<&ScreenState> {
        self.screens.get(&section)
    }

    pub fn screens(&self) -> impl Iterator<Item = &ScreenState> {
        self.screens.values()
    }

    /// Live view-model for `section`, for the host to edit.
    pub fn view_model_mut(&mut self, section: Section) -> Option<&mut ViewModel> {
        self.screens.get_mut(&section)?.view_model_mut()
    }

    pub fn menu(&self) -> &MenuIndex {
        &self.menu
    }

    /// Title of the active screen.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// What the title bar shows right now.
    pub fn displayed_title(&self) -> &str {
        self.drawer.title(&self.title, &self.drawer_title)
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
