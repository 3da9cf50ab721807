//! Output formatting for address ranges.
//!
//! - [`format`] - plain text rendering of ranges
//! - [`terminal`] - colored console output

pub mod format;
pub mod terminal;

pub use format::{format, format_all, OutputMode};
pub use terminal::print_message;
