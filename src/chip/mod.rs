//! Multi-select chip input: the selection state machine.
//!
//! - `item` - candidate items and the validated candidate universe
//! - `filter` - the derived filtered view
//! - `state` - selection state and the backspace arm machine
//! - `reducer` - pure state transitions returning effects
//! - `controller` - owns state, applies effects, notifies observers
//! - `view` - read-only snapshot for rendering

pub mod controller;
pub mod filter;
pub mod item;
pub mod reducer;
pub mod state;
pub mod view;

pub use controller::SelectionController;
pub use item::{CandidateItem, demo_candidates, load_candidates};
pub use state::{BackspaceMode, Direction};
pub use view::ChipView;
