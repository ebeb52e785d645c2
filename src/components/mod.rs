//! UI Components
//!
//! Reusable Leptos components.

mod element_row;
mod create_element_input;

pub use element_row::ElementRow;
pub use create_element_input::CreateElementInput;
