use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::app::App;
use super::components::{
    DROPDOWN_WIDTH, field_height, render_chip_field, render_dropdown, render_hotkeys,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt every frame
    app.interactions.clear();

    let view = app.controller.view();
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(2),                             // Title + spacing
        Constraint::Length(field_height(&view, area.width)), // Chips + input
        Constraint::Min(0),                                // Dropdown space
        Constraint::Length(1),                             // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0], &app.title);
    render_chip_field(frame, main_layout[1], app, &view);

    if view.shows_list() {
        let below = main_layout[2];
        let rows = app
            .max_visible_rows
            .min(view.filtered.len())
            .min(below.height.saturating_sub(2) as usize);

        if rows > 0 {
            app.sync_viewport(view.filtered.len(), rows);
            let dropdown_area = Rect::new(
                below.x,
                below.y,
                DROPDOWN_WIDTH.min(below.width),
                rows as u16 + 2,
            );
            render_dropdown(frame, dropdown_area, app, &view);
        }
    }

    render_hotkeys(frame, main_layout[3], &view, app.controller.backspace_mode());
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let line = Line::styled(title.to_string(), Style::new().fg(ACCENT_BLUE).bold());
    frame.render_widget(Paragraph::new(line), area);
}
