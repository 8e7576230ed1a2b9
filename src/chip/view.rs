//! Read-only snapshot handed to the renderer.

use super::filter::filtered_view;
use super::item::{CandidateItem, Candidates};
use super::state::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub query: String,
    pub filtered: Vec<CandidateItem>,
    pub highlighted: Option<usize>,
    pub list_visible: bool,
    pub chip_highlighted: bool,
    pub selected: Vec<CandidateItem>,
}

impl ChipView {
    pub fn from_state(state: &SelectionState, candidates: &Candidates) -> Self {
        Self {
            query: state.query.clone(),
            filtered: filtered_view(candidates, &state.query, &state.selected)
                .into_iter()
                .cloned()
                .collect(),
            highlighted: state.highlighted,
            list_visible: state.list_visible,
            chip_highlighted: state.chip_highlighted(),
            selected: state.selected.clone(),
        }
    }

    /// Whether the dropdown should be drawn at all.
    pub fn shows_list(&self) -> bool {
        self.list_visible && !self.filtered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::state::ChipArm;

    fn universe() -> Candidates {
        Candidates::new(vec![
            CandidateItem::new("Alice", "alice"),
            CandidateItem::new("Bob", "bob"),
            CandidateItem::new("Carol", "carol"),
        ])
        .unwrap()
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = SelectionState {
            query: "a".into(),
            selected: vec![CandidateItem::new("Alice", "alice")],
            highlighted: Some(0),
            list_visible: true,
            chip: ChipArm::Idle,
        };

        let view = ChipView::from_state(&state, &universe());
        assert_eq!(view.filtered, vec![CandidateItem::new("Carol", "carol")]);
        assert_eq!(view.highlighted, Some(0));
        assert!(view.shows_list());
        assert!(!view.chip_highlighted);
    }

    #[test]
    fn test_hidden_or_empty_list_not_shown() {
        let mut state = SelectionState::new();
        let view = ChipView::from_state(&state, &universe());
        assert!(!view.shows_list());

        state.query = "zzz".into();
        state.list_visible = true;
        let view = ChipView::from_state(&state, &universe());
        assert!(view.filtered.is_empty());
        assert!(!view.shows_list());
    }
}
