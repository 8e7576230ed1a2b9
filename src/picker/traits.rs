//! Picker trait definition
//!
//! A generic trait for list-based selection components whose highlight may be
//! absent.

/// A generic picker trait for list selection
///
/// The highlight is `None` until navigation starts. Once it starts there is
/// no rest state: moving past either end wraps around.
///
/// # Example
///
/// ```ignore
/// struct MyPicker {
///     items: Vec<String>,
///     highlighted: Option<usize>,
/// }
///
/// impl Picker for MyPicker {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn highlighted(&self) -> Option<usize> {
///         self.highlighted
///     }
///
///     fn set_highlighted(&mut self, index: Option<usize>) {
///         self.highlighted = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current highlighted index
    fn highlighted(&self) -> Option<usize>;

    /// Set the highlighted index
    fn set_highlighted(&mut self, index: Option<usize>);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Highlight the next item (wraps around, starts at 0 from no highlight)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = match self.highlighted() {
                Some(i) => (i + 1) % self.len(),
                None => 0,
            };
            self.set_highlighted(Some(next));
        }
    }

    /// Highlight the previous item (wraps around, starts at the end from no highlight)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .highlighted()
                .and_then(|i| i.checked_sub(1))
                .unwrap_or(self.len() - 1);
            self.set_highlighted(Some(prev));
        }
    }

    /// Get the currently highlighted item
    fn highlighted_item(&self) -> Option<&Self::Item> {
        self.highlighted().and_then(|i| self.items().get(i))
    }

    /// Pull an out-of-range highlight back onto the list (or clear it)
    fn clamp_highlight(&mut self) {
        if let Some(i) = self.highlighted() {
            if self.is_empty() {
                self.set_highlighted(None);
            } else if i >= self.len() {
                self.set_highlighted(Some(self.len() - 1));
            }
        }
    }
}
