use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerIntent {
    Open,
    Close,
    /// Drawer toggle in the title bar.
    Toggle,
}

impl Intent for DrawerIntent {}
