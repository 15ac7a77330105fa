//! Stock host-side implementations used by the `flyout-nav` binary.

mod console;
mod loader;

pub use console::ConsoleHost;
pub use loader::BlankLoader;
