use std::path::PathBuf;

use crate::chip::{self, CandidateItem, Direction, SelectionController};
use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::scroll::ListViewport;
use crate::tui::interaction::InteractionRegistry;

/// A rectangular clickable area on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

pub struct App {
    pub controller: SelectionController,
    pub interactions: InteractionRegistry,
    pub viewport: ListViewport,
    pub title: String,
    pub placeholder: String,
    pub max_visible_rows: usize,
    /// Source of the candidates, if they came from a file
    pub candidates_path: Option<PathBuf>,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: SelectionController, config: Config) -> Self {
        Self {
            controller,
            interactions: InteractionRegistry::new(),
            viewport: ListViewport::default(),
            title: config.title().to_string(),
            placeholder: config.placeholder().to_string(),
            max_visible_rows: config.max_visible_rows(),
            candidates_path: config.candidates_path(),
            should_quit: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.controller.state().query
    }

    pub fn selected(&self) -> &[CandidateItem] {
        &self.controller.state().selected
    }

    /// Apply an action to the selection controller.
    pub fn apply(&mut self, action: Action) {
        if action != Action::None {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ReloadCandidates => self.reload_candidates(),

            Action::InputChar(c) => {
                let mut query = self.query().to_string();
                query.push(c);
                self.controller.set_query(query);
            }
            Action::InputText(text) => {
                let query = format!("{}{}", self.query(), text);
                self.controller.set_query(query);
            }
            Action::InputBackspace => {
                let mut query = self.query().to_string();
                if query.pop().is_some() {
                    self.controller.set_query(query);
                }
            }
            Action::InputDeleteWordBack => {
                let query = delete_word_back(self.query());
                self.controller.set_query(query);
            }
            Action::ClearQuery => {
                self.controller.set_query(String::new());
            }

            Action::FocusInput => {
                self.controller.focus();
            }

            Action::HighlightUp => {
                self.controller.move_highlight(Direction::Up);
            }
            Action::HighlightDown => {
                self.controller.move_highlight(Direction::Down);
            }
            Action::ConfirmHighlighted => {
                self.controller.confirm_highlighted();
            }
            Action::SelectRow(index) => {
                let row = self.controller.view().filtered.get(index).cloned();
                if let Some(item) = row {
                    self.controller.select_candidate(&item);
                }
            }

            Action::BackspaceChip => {
                self.controller.backspace_at_empty_query();
            }
            Action::RemoveChip(index) => {
                if let Some(item) = self.selected().get(index).cloned() {
                    self.controller.remove_selected(&item);
                }
            }

            Action::None => {}
        }
    }

    /// Re-read the candidate file; a broken file keeps the current list.
    pub fn reload_candidates(&mut self) {
        let Some(path) = &self.candidates_path else {
            return;
        };
        match chip::load_candidates(path) {
            Ok(candidates) => {
                log::log(&format!("Reloaded {} candidates", candidates.len()));
                self.controller.set_candidates(candidates);
            }
            Err(e) => log::log(&format!("Failed to reload candidates: {}", e)),
        }
    }

    /// Consume a pending scroll request and keep the dropdown offset valid.
    pub fn sync_viewport(&mut self, list_len: usize, visible_rows: usize) {
        if let Some(index) = self.controller.take_scroll_request() {
            self.viewport.scroll_into_view(index, visible_rows);
        }
        self.viewport.clamp(list_len, visible_rows);
    }
}

/// Drop trailing whitespace, then the word before it.
fn delete_word_back(query: &str) -> String {
    let trimmed = query.trim_end();
    trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| trimmed[..i + c.len_utf8()].to_string())
        .unwrap_or_default()
}
