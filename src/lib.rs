//! Navigation-state core for a drawer ("flyout") application shell.
//!
//! The [`navigator::Navigator`] maps requested view-model types to drawer
//! sections, keeps at most one section displayed, and captures/restores
//! per-section view-model state across process restarts. Rendering and
//! view-model construction are supplied by the host through
//! [`navigator::ScreenHost`] and [`navigator::ViewModelLoader`].

pub mod config;
pub mod host;
pub mod logging;
pub mod navigator;
pub mod session;
pub mod ui;
