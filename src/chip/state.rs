//! Selection state owned by the controller.

use serde::Deserialize;

use super::item::CandidateItem;

/// Backspace pre-arm state of the last chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipArm {
    #[default]
    Idle,
    /// The last chip is marked; the next backspace removes it.
    Armed,
}

/// How backspace at an empty query removes chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackspaceMode {
    /// First backspace arms the last chip, the second removes it.
    #[default]
    TwoStep,
    /// Every backspace removes the last chip.
    Immediate,
}

/// Highlight movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub query: String,
    /// In selection order; labels are unique.
    pub selected: Vec<CandidateItem>,
    /// Index into the current filtered view, not the candidate universe.
    pub highlighted: Option<usize>,
    pub list_visible: bool,
    pub chip: ChipArm,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chip_highlighted(&self) -> bool {
        self.chip == ChipArm::Armed
    }
}
