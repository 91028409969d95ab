//! Keyboard capture for guess text
//!
//! The only writer of the raw guess buffer. Printable characters are
//! appended while the buffer is below its maximum, Backspace removes the
//! last character, and everything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press as seen by the capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Char(c)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Self::Char(c)
            }
            _ => Self::Other,
        }
    }
}

/// Whether the space character counts as guess input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacePolicy {
    #[default]
    Reject,
    Accept,
}

/// Result of feeding one key to the capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAction {
    Appended(char),
    Removed(char),
    Ignored,
}

impl CaptureAction {
    /// Whether the buffer changed
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Bounded text buffer fed by key presses
#[derive(Debug, Clone)]
pub struct KeyboardCapture {
    buffer: String,
    len: usize,
    max_len: usize,
    space: SpacePolicy,
}

impl KeyboardCapture {
    #[must_use]
    pub const fn new(max_len: usize, space: SpacePolicy) -> Self {
        Self {
            buffer: String::new(),
            len: 0,
            max_len,
            space,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn handle(&mut self, key: Key) -> CaptureAction {
        match key {
            Key::Backspace => match self.buffer.pop() {
                Some(c) => {
                    self.len -= 1;
                    CaptureAction::Removed(c)
                }
                None => CaptureAction::Ignored,
            },
            Key::Char(c) if self.accepts(c) && self.len < self.max_len => {
                self.buffer.push(c);
                self.len += 1;
                CaptureAction::Appended(c)
            }
            Key::Char(_) | Key::Other => CaptureAction::Ignored,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.len = 0;
    }

    fn accepts(&self, c: char) -> bool {
        if c == ' ' {
            return self.space == SpacePolicy::Accept;
        }
        !c.is_control()
    }
}
