//! Keyboard capture and terminal lifecycle

pub mod keyboard;
pub mod terminal;

pub use keyboard::{CaptureAction, Key, KeyboardCapture, SpacePolicy};
pub use terminal::TerminalSession;
