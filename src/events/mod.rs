//! Event handling module for keyboard, mouse, and paste events.
//!
//! Terminal events are mapped to `Action`s, which `App::apply` turns into
//! selection controller operations.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
