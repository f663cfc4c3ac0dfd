//! Changelog section extraction.
//!
//! A section starts at the first level-2 heading (`## `) that mentions the
//! requested version and ends right before the next level-2 heading. The
//! heading match is deliberately loose so that all of these are accepted:
//!
//! ```text
//! ## [1.2.3] - 2025-01-01
//! ## 1.2.3 - 2025-01-01
//! ## [1.2.3]
//! ## 1.2.3
//! ```
//!
//! The version may appear anywhere after the marker, so a heading whose
//! description merely mentions the version also matches.

use regex::Regex;

const HEADING_MARKER: &str = "## ";
const TAB_REPLACEMENT: &str = "    ";

/// Build the heading pattern for one version.
///
/// A single leading `v` is dropped so `"v1.0.0"` and `"1.0.0"` find the
/// same section.
fn heading_pattern(version: &str) -> Option<Regex> {
    let normalized = version.strip_prefix('v').unwrap_or(version);
    let escaped = regex::escape(normalized);

    Regex::new(&format!(r"^## .*\[?{}\]?", escaped)).ok()
}

/// Extract the body of the changelog section for `version`.
///
/// Leading and trailing blank lines are dropped, inner blank lines are kept,
/// and every tab becomes four spaces. Returns `""` when no heading matches.
pub fn extract_section(changelog: &str, version: &str) -> String {
    let Some(pattern) = heading_pattern(version) else {
        return String::new();
    };

    let lines: Vec<&str> = changelog.split('\n').collect();

    let Some(heading) = lines.iter().position(|line| pattern.is_match(line)) else {
        return String::new();
    };

    let start = heading + 1;
    let end = lines[start..]
        .iter()
        .position(|line| line.starts_with(HEADING_MARKER))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());

    let body = trim_blank_lines(&lines[start..end]);

    body.iter()
        .map(|line| line.replace('\t', TAB_REPLACEMENT))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn trim_blank_lines<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return &[];
    };
    // A non-blank line exists, so rposition cannot miss.
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);

    &lines[first..=last]
}

/// Release body to publish: the extracted section, or `"Release <version>"`
/// when the section is exactly empty.
///
/// Only `""` triggers the fallback; whitespace-only content is kept as-is.
pub fn release_body_or_fallback(section: &str, version: &str) -> String {
    if section.is_empty() {
        format!("Release {}", version)
    } else {
        section.to_string()
    }
}
