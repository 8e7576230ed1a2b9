//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; `App::apply` turns them into selection
//! controller operations.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Re-read the candidate file
    ReloadCandidates,

    // === Query editing ===
    /// Append a character to the query
    InputChar(char),
    /// Append pasted text to the query
    InputText(String),
    /// Delete the last character of a non-empty query
    InputBackspace,
    /// Delete the last word of the query
    InputDeleteWordBack,
    /// Clear the query (Ctrl+U)
    ClearQuery,

    // === Input field ===
    /// The input field gained focus
    FocusInput,

    // === Dropdown ===
    /// Move the highlight up
    HighlightUp,
    /// Move the highlight down
    HighlightDown,
    /// Select the highlighted row
    ConfirmHighlighted,
    /// Select a dropdown row by its index in the filtered view
    SelectRow(usize),

    // === Chips ===
    /// Backspace at an empty query: arm or remove the last chip
    BackspaceChip,
    /// Remove a chip by its position in the selection
    RemoveChip(usize),

    // === No-op ===
    /// No action to take
    None,
}
