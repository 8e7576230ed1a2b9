//! Generic picker module
//!
//! Provides the wrap-around highlight navigation shared by list-based
//! selection components.

mod traits;

pub use traits::Picker;
