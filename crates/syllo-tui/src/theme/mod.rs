//! Theme: palette and shared style builders

pub mod palette;
pub mod styles;

/// Braille spinner frames, advanced on UI ticks while a request is in flight
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner glyph for a frame counter
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
