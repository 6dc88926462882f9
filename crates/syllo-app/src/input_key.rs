//! Terminal-agnostic key representation
//!
//! Keeps the handler layer free of crossterm types; the TUI crate converts
//! raw key events into this enum.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (no modifiers)
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    /// Function key (F1 = 1)
    F(u8),
}
