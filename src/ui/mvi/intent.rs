//! Marker trait for intents.

/// Something that asks a piece of chrome to change: a tap on the drawer
/// toggle, a swipe, or the navigator closing the drawer after navigation.
pub trait Intent: 'static {}
