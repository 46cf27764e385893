//! User interface module - printing command outcomes.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing a finished command outcome to the terminal

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, format_components, format_ordering,
};

use crate::cli::orchestration::{CommandOutcome, Line};

/// Enable or disable ANSI styling for everything printed through this module.
pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print every line of a command outcome with its matching style.
///
/// Plain lines go to stdout unstyled so the output stays scriptable.
pub fn display_outcome(outcome: &CommandOutcome) {
    for line in &outcome.lines {
        match line {
            Line::Plain(text) => println!("{}", text),
            Line::Success(text) => display_success(text),
            Line::Status(text) => display_status(text),
            Line::Error(text) => display_error(text),
        }
    }
}
