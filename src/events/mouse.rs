//! Mouse event handling.
//!
//! Clicks are dispatched through the interaction registry, which the chip
//! field and dropdown populate during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.interactions.handle_click(mouse.column, mouse.row)
        }
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => {
            app.interactions.handle_scroll_down(mouse.column, mouse.row)
        }
        _ => Action::None,
    }
}
