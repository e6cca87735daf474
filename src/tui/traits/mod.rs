//! Capabilities that panels declare instead of App knowing their internals
//!
//! - [`Scrollable`] - panels that own a `ScrollState`
//! - [`Interactive`] - panels that take keyboard input when focused

mod interactive;
mod scrollable;

pub use interactive::{handle_scroll_keys, Handled, Interactive};
pub use scrollable::Scrollable;
