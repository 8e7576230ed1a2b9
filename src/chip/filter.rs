//! Derived filtered view over the candidate universe.
//!
//! The view is never stored: it is recomputed from `(candidates, query,
//! selected)` whenever it is needed, so a highlight can never outlive the list
//! it indexes into.

use crate::picker::Picker;

use super::item::{CandidateItem, Candidates};

/// Case-insensitive substring match on the label.
pub fn label_matches(item: &CandidateItem, query: &str) -> bool {
    item.label.to_lowercase().contains(&query.to_lowercase())
}

/// Whether an item with this label is already selected.
pub fn is_selected(selected: &[CandidateItem], label: &str) -> bool {
    selected.iter().any(|s| s.label == label)
}

/// Candidates matching `query` that are not yet selected, in universe order.
pub fn filtered_view<'a>(
    candidates: &'a Candidates,
    query: &str,
    selected: &[CandidateItem],
) -> Vec<&'a CandidateItem> {
    candidates
        .items()
        .iter()
        .filter(|item| !is_selected(selected, &item.label))
        .filter(|item| label_matches(item, query))
        .collect()
}

/// A filtered view paired with a highlight, for wrap-around navigation.
#[derive(Debug)]
pub struct FilteredList<'a> {
    items: Vec<&'a CandidateItem>,
    highlighted: Option<usize>,
}

impl<'a> FilteredList<'a> {
    pub fn new(items: Vec<&'a CandidateItem>, highlighted: Option<usize>) -> Self {
        let mut list = Self { items, highlighted };
        list.clamp_highlight();
        list
    }
}

impl<'a> Picker for FilteredList<'a> {
    type Item = &'a CandidateItem;

    fn items(&self) -> &[Self::Item] {
        &self.items
    }

    fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }
}
