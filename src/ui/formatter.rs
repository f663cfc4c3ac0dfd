//! Pure formatting functions for UI output.
//!
//! Status lines go to stdout and problems to stderr. `console` drops the
//! styling when the stream is not a terminal, which keeps CI logs clean.

use console::style;

use crate::boundary::ReleaseWarning;
use crate::domain::ReleaseDecision;

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

/// Display a non-fatal release warning.
pub fn display_boundary_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Render the release decision as an indented block.
///
/// Shows the previous version when one was tagged, the current version, the
/// candidate tag, and whether a release will be created.
pub fn format_decision(decision: &ReleaseDecision) -> String {
    let mut lines = Vec::new();

    match decision.latest_version.as_deref() {
        Some(latest) => lines.push(format!("  Previous: {}", latest)),
        None => lines.push("  Previous: (no release tags)".to_string()),
    }
    lines.push(format!("  Current:  {}", decision.current_version));
    lines.push(format!("  Tag:      {}", decision.new_tag_name));

    let verdict = if decision.should_create_release {
        "create release"
    } else if decision.version_changed {
        "skip (tag exists)"
    } else {
        "skip (version unchanged)"
    };
    lines.push(format!("  Action:   {}", verdict));

    lines.join("\n")
}

/// Print the release decision.
pub fn display_decision(decision: &ReleaseDecision) {
    println!("\n{}", style("Release decision:").bold());
    println!("{}", format_decision(decision));
}

/// Print release notes between rules so they stand out in logs.
pub fn display_release_notes(notes: &str) {
    println!("{}", style("--- release notes ---").dim());
    println!("{}", notes);
    println!("{}", style("---------------------").dim());
}
