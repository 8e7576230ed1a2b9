//! Dropdown viewport that follows the highlighted row.
//!
//! The selection controller only requests that a row be brought into view;
//! this is where the request is honoured. Scrolling uses "nearest" semantics:
//! the offset moves just far enough for the row to become visible.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut viewport = ListViewport::default();
//!
//! // Before rendering the dropdown:
//! if let Some(index) = controller.take_scroll_request() {
//!     viewport.scroll_into_view(index, visible_rows);
//! }
//! ```

/// Scroll offset of a fixed-height list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    offset: usize,
}

impl ListViewport {
    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the offset the minimum distance needed to show `index`.
    pub fn scroll_into_view(&mut self, index: usize, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + visible_rows {
            self.offset = index + 1 - visible_rows;
        }
    }

    /// Keep the offset valid after the list length changed.
    pub fn clamp(&mut self, len: usize, visible_rows: usize) {
        let max_offset = len.saturating_sub(visible_rows);
        self.offset = self.offset.min(max_offset);
    }

    /// Range of rows to draw for a list of `len` items.
    pub fn visible_range(&self, len: usize, visible_rows: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = (start + visible_rows).min(len);
        start..end
    }
}
