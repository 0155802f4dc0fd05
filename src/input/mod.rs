//! Input handling for keyboard chords and mouse events.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::InputEvent;
