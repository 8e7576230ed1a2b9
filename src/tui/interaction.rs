//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region.
//!
//! # Example
//!
//! ```ignore
//! // While rendering the dropdown:
//! registry.register(InteractiveRegion::clickable(
//!     "dropdown_row",
//!     ClickRegion::new(x, y, width, 1),
//!     Action::SelectRow(index),
//! ));
//! ```

use crate::app::ClickRegion;
use crate::events::Action;
use crate::log;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point
    /// and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.best_match(x, y, |r| r.on_click.as_ref()) {
            Some(region) => {
                log::log_event(&format!("click on {} at ({}, {})", region.id, x, y));
                region.on_click.clone().unwrap_or(Action::None)
            }
            None => Action::None,
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_up.as_ref())
            .and_then(|r| r.on_scroll_up.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_down.as_ref())
            .and_then(|r| r.on_scroll_down.clone())
            .unwrap_or(Action::None)
    }

    /// Highest-priority region at (x, y) with a handler for the event.
    fn best_match<F>(&self, x: u16, y: u16, handler: F) -> Option<&InteractiveRegion>
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && handler(r).is_some())
            .collect();

        // Stable sort: among equal priorities the last registered wins
        candidates.reverse();
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "input",
                ClickRegion::new(0, 0, 100, 10),
                Action::FocusInput,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "dropdown_row",
                ClickRegion::new(0, 5, 40, 1),
                Action::SelectRow(2),
            )
            .with_priority(10),
        );

        // Dropdown overlays the input area
        assert_eq!(registry.handle_click(5, 5), Action::SelectRow(2));
        assert_eq!(registry.handle_click(5, 1), Action::FocusInput);
    }

    #[test]
    fn test_later_region_wins_on_tie() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("field", ClickRegion::new(0, 0, 50, 3), Action::FocusInput);
        registry.register_click("chip_remove", ClickRegion::new(8, 1, 1, 1), Action::RemoveChip(0));

        assert_eq!(registry.handle_click(8, 1), Action::RemoveChip(0));
        assert_eq!(registry.handle_click(9, 1), Action::FocusInput);
    }

    #[test]
    fn test_scroll_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "dropdown",
            ClickRegion::new(0, 4, 30, 6),
            Action::HighlightUp,
            Action::HighlightDown,
        ));

        assert_eq!(registry.handle_scroll_up(3, 5), Action::HighlightUp);
        assert_eq!(registry.handle_scroll_down(3, 5), Action::HighlightDown);
        assert_eq!(registry.handle_scroll_down(3, 0), Action::None);
        assert_eq!(registry.handle_click(3, 5), Action::None);
    }

    #[test]
    fn test_clear() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("field", ClickRegion::new(0, 0, 10, 1), Action::FocusInput);
        registry.clear();
        assert_eq!(registry.handle_click(1, 0), Action::None);
    }
}
