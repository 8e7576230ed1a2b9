//! UI components for the TUI.
//!
//! - `chip_field` - selected chips followed by the query input
//! - `dropdown` - filtered candidate list under the input
//! - `hotkeys` - key hint bar

mod chip_field;
mod dropdown;
mod hotkeys;

pub use chip_field::{field_height, render_chip_field};
pub use dropdown::{DROPDOWN_WIDTH, render_dropdown};
pub use hotkeys::render_hotkeys;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten text to at most `max_width` terminal columns, ending in an ellipsis when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Keep the trailing part of `text` that fits in `max_width` columns, so the
/// end of a long query stays visible.
pub fn tail(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
