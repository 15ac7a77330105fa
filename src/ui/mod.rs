pub mod drawer;
pub mod mvi;
