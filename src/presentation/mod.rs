//! Presentation layer handling console text and user input.
//!
//! This module owns the blocking line-oriented console, the prompt
//! strings, and the rendering of menus and receipts to plain text.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
