//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the list store.

mod list_cmd;

pub use list_cmd::*;
