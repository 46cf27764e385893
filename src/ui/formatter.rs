//! Pure formatting functions for UI output.
//!
//! Everything that turns library values into text lives here so it can be tested
//! without a terminal. Styling goes through `console`, which honours the color
//! setting chosen at startup.

use std::cmp::Ordering;

use console::style;

use crate::domain::{Identifier, Version};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render a comparison result the way `compare` reports it: -1, 0 or 1.
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "-1",
        Ordering::Equal => "0",
        Ordering::Greater => "1",
    }
}

fn format_identifier(identifier: &Identifier<'_>) -> String {
    if identifier.is_numeric() {
        format!("{} (numeric)", identifier)
    } else {
        identifier.to_string()
    }
}

/// Break a version into labelled lines, one per component.
///
/// Absent pre-release or build metadata render as `-`.
pub fn format_components(version: &Version) -> Vec<String> {
    let pre_release = if version.pre_release().is_empty() {
        "-".to_string()
    } else {
        version
            .pre_release()
            .identifiers()
            .map(|identifier| format_identifier(&identifier))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let build_meta_data = if version.build_meta_data().is_empty() {
        "-".to_string()
    } else {
        version
            .build_meta_data()
            .identifiers()
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        format!("version:     {}", version),
        format!("major:       {}", version.major()),
        format!("minor:       {}", version.minor()),
        format!("patch:       {}", version.patch()),
        format!("pre-release: {}", pre_release),
        format!("build:       {}", build_meta_data),
    ]
}
