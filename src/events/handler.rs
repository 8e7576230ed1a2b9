//! Central event handler that coordinates keyboard, mouse and paste events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, paste) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            Event::Paste(text) => {
                // The input is a single line
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if text.is_empty() {
                    Action::None
                } else {
                    Action::InputText(text)
                }
            }
            Event::FocusGained => Action::FocusInput,
            _ => Action::None,
        }
    }
}
