//! Key hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chip::{BackspaceMode, ChipView};
use crate::tui::theme::*;

/// Render the hotkey hints; the backspace hint follows the chip arm state.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, view: &ChipView, mode: BackspaceMode) {
    let backspace_hint = if view.chip_highlighted {
        " remove chip · "
    } else if mode == BackspaceMode::TwoStep {
        " mark last chip · "
    } else {
        " remove last chip · "
    };

    let mut spans = vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" navigate · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
    ];
    if view.query.is_empty() && !view.selected.is_empty() {
        spans.push(Span::styled("[Backspace]", Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(backspace_hint, Style::new().fg(TEXT_DIM)));
    }
    spans.push(Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)));
    spans.push(Span::styled(" done", Style::new().fg(TEXT_DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
