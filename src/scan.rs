//! Input capture for the scan field.
//!
//! Barcode scanners behave like keyboards: they type the code and finish
//! with Enter, which submits the scan form. The field must keep focus while
//! the scanner view is active, including after stray clicks some scanners
//! emit alongside the keystrokes; the page script does that part, driven by
//! the focus flag and the pulse settings below.

use crate::i18n::Message;
use crate::models::ScanCode;
use std::time::Duration;

/// Colour flash shown on every input event as scan feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub color: &'static str,
    pub rest_color: &'static str,
    pub revert_after: Duration,
}

pub const SCAN_PULSE: Pulse = Pulse {
    color: "var(--accent)",
    rest_color: "var(--accent-700)",
    revert_after: Duration::from_millis(200),
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanField {
    value: String,
    focused: bool,
}

impl ScanField {
    pub fn focused() -> Self {
        Self {
            value: String::new(),
            focused: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }
}

/// A submitted field value becomes a lookup code once trimmed; a blank
/// value blocks the submission with a message.
pub fn validate_submit(raw: &str) -> Result<ScanCode, Message> {
    ScanCode::parse(raw).ok_or(Message::EmptySubmit)
}
