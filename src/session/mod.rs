//! On-disk persistence of the saved navigator session.

mod store;

pub use store::{SessionError, SessionStore};
