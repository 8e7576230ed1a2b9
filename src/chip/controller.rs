//! Selection controller: owns the candidate universe and selection state,
//! runs events through the reducer and applies its effects.

use crate::log;

use super::item::{CandidateItem, Candidates};
use super::reducer::{self, ChipEffect, ChipEvent};
use super::state::{BackspaceMode, ChipArm, Direction, SelectionState};
use super::view::ChipView;

type OnChange = Box<dyn FnMut(&[CandidateItem])>;

pub struct SelectionController {
    candidates: Candidates,
    state: SelectionState,
    backspace: BackspaceMode,
    scroll_request: Option<usize>,
    on_change: Option<OnChange>,
}

impl SelectionController {
    pub fn new(candidates: Candidates) -> Self {
        Self {
            candidates,
            state: SelectionState::new(),
            backspace: BackspaceMode::default(),
            scroll_request: None,
            on_change: None,
        }
    }

    pub fn with_backspace_mode(mut self, mode: BackspaceMode) -> Self {
        self.backspace = mode;
        self
    }

    /// Register a callback invoked with the new selection whenever it changes.
    pub fn with_on_change(mut self, on_change: impl FnMut(&[CandidateItem]) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Replace the candidate universe, keeping the current selection.
    ///
    /// Like every event other than a repeated backspace, this disarms the
    /// last chip.
    pub fn set_candidates(&mut self, candidates: Candidates) {
        self.candidates = candidates;
        self.state.chip = ChipArm::Idle;
        reducer::revalidate(&mut self.state, &self.candidates);
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn backspace_mode(&self) -> BackspaceMode {
        self.backspace
    }

    pub fn view(&self) -> ChipView {
        ChipView::from_state(&self.state, &self.candidates)
    }

    /// Hand the pending scroll-into-view request to the renderer, clearing it.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }

    /// Run one event through the reducer and apply its effects.
    pub fn dispatch(&mut self, event: ChipEvent) -> ChipView {
        let effects = reducer::update(&mut self.state, &self.candidates, self.backspace, event);
        for effect in effects {
            match effect {
                ChipEffect::ScrollIntoView(index) => self.scroll_request = Some(index),
                ChipEffect::SelectionChanged => {
                    let labels: Vec<&str> =
                        self.state.selected.iter().map(|s| s.label.as_str()).collect();
                    log::log_selection(&labels);
                    if let Some(on_change) = self.on_change.as_mut() {
                        on_change(&self.state.selected);
                    }
                }
            }
        }
        self.view()
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> ChipView {
        self.dispatch(ChipEvent::SetQuery(text.into()))
    }

    pub fn focus(&mut self) -> ChipView {
        self.dispatch(ChipEvent::Focus)
    }

    pub fn select_candidate(&mut self, item: &CandidateItem) -> ChipView {
        self.dispatch(ChipEvent::Select(item.clone()))
    }

    pub fn remove_selected(&mut self, item: &CandidateItem) -> ChipView {
        self.dispatch(ChipEvent::Remove(item.clone()))
    }

    pub fn move_highlight(&mut self, direction: Direction) -> ChipView {
        self.dispatch(ChipEvent::MoveHighlight(direction))
    }

    pub fn confirm_highlighted(&mut self) -> ChipView {
        self.dispatch(ChipEvent::ConfirmHighlighted)
    }

    pub fn backspace_at_empty_query(&mut self) -> ChipView {
        self.dispatch(ChipEvent::BackspaceAtEmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn people() -> Candidates {
        Candidates::new(vec![
            CandidateItem::new("Alice", "alice"),
            CandidateItem::new("Bob", "bob"),
            CandidateItem::new("Carol", "carol"),
        ])
        .unwrap()
    }

    fn labels(items: &[CandidateItem]) -> Vec<&str> {
        items.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_scenario_filter_then_select() {
        let mut controller = SelectionController::new(people());

        let view = controller.set_query("a");
        assert_eq!(labels(&view.filtered), vec!["Alice", "Carol"]);
        assert!(view.shows_list());

        let alice = view.filtered[0].clone();
        let view = controller.select_candidate(&alice);
        assert_eq!(labels(&view.selected), vec!["Alice"]);
        assert_eq!(view.query, "");
        assert!(!view.list_visible);
    }

    #[test]
    fn test_scenario_removed_item_reappears() {
        let mut controller = SelectionController::new(people());
        controller.select_candidate(&CandidateItem::new("Alice", "alice"));
        controller.select_candidate(&CandidateItem::new("Bob", "bob"));

        let view = controller.remove_selected(&CandidateItem::new("Alice", "alice"));
        assert_eq!(labels(&view.selected), vec!["Bob"]);

        let view = controller.set_query("ali");
        assert_eq!(labels(&view.filtered), vec!["Alice"]);
    }

    #[test]
    fn test_scenario_unmatched_query_hides_list() {
        let mut controller = SelectionController::new(people());
        controller.set_query("a");
        assert!(controller.view().list_visible);

        let view = controller.set_query("zzz");
        assert!(view.filtered.is_empty());
        assert!(!view.list_visible);

        let view = controller.focus();
        assert!(!view.list_visible);
    }

    #[test]
    fn test_scenario_backspace_removes_last_first() {
        let mut controller = SelectionController::new(people());
        controller.select_candidate(&CandidateItem::new("Alice", "alice"));
        controller.select_candidate(&CandidateItem::new("Bob", "bob"));

        let mut history = vec![controller.view().selected.len()];
        let mut removed = vec![];
        while !controller.view().selected.is_empty() {
            let before = controller.view().selected;
            let after = controller.backspace_at_empty_query().selected;
            assert!(before.len() - after.len() <= 1);
            if after.len() < before.len() {
                removed.push(before[before.len() - 1].label.clone());
            }
            history.push(after.len());
        }

        assert_eq!(removed, vec!["Bob", "Alice"]);
        assert_eq!(history, vec![2, 2, 1, 1, 0]);
    }

    #[test]
    fn test_empty_query_view_is_universe_minus_selected() {
        let mut controller = SelectionController::new(people());
        controller.select_candidate(&CandidateItem::new("Bob", "bob"));

        let view = controller.set_query("");
        assert_eq!(labels(&view.filtered), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_on_change_receives_selection() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        let mut controller = SelectionController::new(people()).with_on_change(move |selected| {
            sink.borrow_mut()
                .push(selected.iter().map(|s| s.label.clone()).collect());
        });

        controller.set_query("c");
        controller.confirm_highlighted();
        controller.select_candidate(&CandidateItem::new("Bob", "bob"));
        controller.remove_selected(&CandidateItem::new("Alice", "alice"));
        controller.remove_selected(&CandidateItem::new("Carol", "carol"));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["Alice".to_string()],
                vec!["Alice".to_string(), "Bob".to_string()],
                vec!["Bob".to_string()],
            ]
        );
    }

    #[test]
    fn test_scroll_request_taken_once() {
        let mut controller = SelectionController::new(people());
        controller.move_highlight(Direction::Up);

        assert_eq!(controller.take_scroll_request(), Some(2));
        assert_eq!(controller.take_scroll_request(), None);
    }

    #[test]
    fn test_set_candidates_revalidates_highlight() {
        let mut controller = SelectionController::new(people());
        controller.move_highlight(Direction::Up);
        assert_eq!(controller.state().highlighted, Some(2));

        controller.set_candidates(
            Candidates::new(vec![CandidateItem::new("Dave", "dave")]).unwrap(),
        );

        assert_eq!(controller.state().highlighted, Some(0));
    }

    #[test]
    fn test_immediate_mode() {
        let mut controller =
            SelectionController::new(people()).with_backspace_mode(BackspaceMode::Immediate);
        controller.select_candidate(&CandidateItem::new("Carol", "carol"));

        let view = controller.backspace_at_empty_query();
        assert!(view.selected.is_empty());
        assert!(!view.chip_highlighted);
    }

    #[test]
    fn test_set_candidates_disarms_chip() {
        let mut controller = SelectionController::new(people());
        controller.select_candidate(&CandidateItem::new("Alice", "alice"));
        assert!(controller.backspace_at_empty_query().chip_highlighted);

        controller.set_candidates(people());
        assert!(!controller.view().chip_highlighted);

        // The next backspace arms again instead of removing
        let view = controller.backspace_at_empty_query();
        assert!(view.chip_highlighted);
        assert_eq!(view.selected.len(), 1);
    }
}
