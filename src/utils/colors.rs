/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Entry times green, exit times red; empty values become a grey
/// `placeholder`.
pub fn colorize_in_out(value: &str, placeholder: &str, is_in: bool) -> String {
    if value.trim().is_empty() {
        return format!("{GREY}{placeholder}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
