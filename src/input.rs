//! Parsing helpers for textual front-end inputs.
//!
//! Front ends collect key actions one per line and funnel stages as a
//! comma-separated list; both drop blank entries before reaching the
//! builder.

/// Split multi-line input into trimmed, non-empty entries.
pub fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated list into trimmed, non-empty entries.
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
