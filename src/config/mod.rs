//! Configuration: drawer menu layout, titles, session file and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, MenuConfig, SessionConfig};
