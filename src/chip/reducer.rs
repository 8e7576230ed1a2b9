//! Selection reducer (update function).
//!
//! All selection state mutations happen here. The controller calls
//! `update(state, candidates, mode, event)` and applies the returned effects.
//! Every transition ends with `revalidate`, which restores the invariants
//! against the freshly derived filtered view.

use crate::picker::Picker;

use super::filter::{FilteredList, filtered_view, is_selected};
use super::item::{CandidateItem, Candidates};
use super::state::{BackspaceMode, ChipArm, Direction, SelectionState};

/// Input events the selection state machine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipEvent {
    SetQuery(String),
    Focus,
    Select(CandidateItem),
    Remove(CandidateItem),
    MoveHighlight(Direction),
    ConfirmHighlighted,
    BackspaceAtEmptyQuery,
}

/// Effects returned by the reducer for the controller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipEffect {
    /// The highlight moved to this row; the renderer should bring it into view.
    ScrollIntoView(usize),
    /// `selected` changed; observers should be told.
    SelectionChanged,
}

/// The main reducer function.
pub fn update(
    state: &mut SelectionState,
    candidates: &Candidates,
    mode: BackspaceMode,
    event: ChipEvent,
) -> Vec<ChipEffect> {
    let highlight_before = state.highlighted;

    if event != ChipEvent::BackspaceAtEmptyQuery {
        state.chip = ChipArm::Idle;
    }

    let selection_changed = match event {
        ChipEvent::SetQuery(text) => {
            set_query(state, candidates, text);
            false
        }
        ChipEvent::Focus => {
            state.list_visible = !state.query.is_empty();
            false
        }
        ChipEvent::Select(item) => select_candidate(state, candidates, &item),
        ChipEvent::Remove(item) => remove_selected(state, &item.label),
        ChipEvent::MoveHighlight(direction) => {
            move_highlight(state, candidates, direction);
            false
        }
        ChipEvent::ConfirmHighlighted => confirm_highlighted(state, candidates),
        ChipEvent::BackspaceAtEmptyQuery => backspace_at_empty_query(state, mode),
    };

    revalidate(state, candidates);

    let mut effects = vec![];
    if selection_changed {
        effects.push(ChipEffect::SelectionChanged);
    }
    if state.highlighted != highlight_before {
        if let Some(index) = state.highlighted {
            effects.push(ChipEffect::ScrollIntoView(index));
        }
    }
    effects
}

/// Restore the invariants after any change to query, selection or universe.
pub fn revalidate(state: &mut SelectionState, candidates: &Candidates) {
    let mut list = FilteredList::new(
        filtered_view(candidates, &state.query, &state.selected),
        state.highlighted,
    );
    list.clamp_highlight();
    state.highlighted = list.highlighted();

    if list.is_empty() {
        state.list_visible = false;
    }
    if !state.query.is_empty() || state.selected.is_empty() {
        state.chip = ChipArm::Idle;
    }
}

fn set_query(state: &mut SelectionState, candidates: &Candidates, text: String) {
    state.query = text;
    // An empty query leaves highlight and visibility where they were.
    if state.query.is_empty() {
        return;
    }
    let has_matches = !filtered_view(candidates, &state.query, &state.selected).is_empty();
    state.highlighted = has_matches.then_some(0);
    state.list_visible = has_matches;
}

fn select_candidate(
    state: &mut SelectionState,
    candidates: &Candidates,
    item: &CandidateItem,
) -> bool {
    if is_selected(&state.selected, &item.label) {
        return false;
    }
    let Some(found) = filtered_view(candidates, &state.query, &state.selected)
        .into_iter()
        .find(|c| c.label == item.label)
        .cloned()
    else {
        return false;
    };

    state.selected.push(found);
    state.query.clear();
    state.list_visible = false;
    state.highlighted = None;
    true
}

fn remove_selected(state: &mut SelectionState, label: &str) -> bool {
    match state.selected.iter().position(|s| s.label == label) {
        Some(pos) => {
            state.selected.remove(pos);
            true
        }
        None => false,
    }
}

fn move_highlight(state: &mut SelectionState, candidates: &Candidates, direction: Direction) {
    let mut list = FilteredList::new(
        filtered_view(candidates, &state.query, &state.selected),
        state.highlighted,
    );
    match direction {
        Direction::Up => list.select_prev(),
        Direction::Down => list.select_next(),
    }
    state.highlighted = list.highlighted();
}

fn confirm_highlighted(state: &mut SelectionState, candidates: &Candidates) -> bool {
    let target = {
        let list = FilteredList::new(
            filtered_view(candidates, &state.query, &state.selected),
            state.highlighted,
        );
        list.highlighted_item().map(|item| (*item).clone())
    };
    match target {
        Some(item) => select_candidate(state, candidates, &item),
        None => false,
    }
}

fn backspace_at_empty_query(state: &mut SelectionState, mode: BackspaceMode) -> bool {
    if !state.query.is_empty() || state.selected.is_empty() {
        return false;
    }
    match (mode, state.chip) {
        (BackspaceMode::TwoStep, ChipArm::Idle) => {
            state.chip = ChipArm::Armed;
            false
        }
        (BackspaceMode::TwoStep, ChipArm::Armed) | (BackspaceMode::Immediate, _) => {
            state.selected.pop();
            state.chip = ChipArm::Idle;
            true
        }
    }
}
