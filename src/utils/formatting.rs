//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Horizontal rule made of the configured separator character.
pub fn rule(separator: &str, width: usize) -> String {
    let ch = separator.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}

/// Placeholder for empty cells in tables and reports.
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
