use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl UiState for DrawerState {}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Title bar text: the drawer's own title while open, otherwise the
    /// screen title.
    pub fn title<'a>(&self, screen_title: &'a str, drawer_title: &'a str) -> &'a str {
        match self {
            Self::Open => drawer_title,
            Self::Closed => screen_title,
        }
    }

    /// Options-menu items are hidden while the drawer covers the screen.
    pub fn options_menu_visible(&self) -> bool {
        !self.is_open()
    }
}
