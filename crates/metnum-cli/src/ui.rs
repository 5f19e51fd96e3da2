//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Tag in brackets, colored unless `NO_COLOR` is set.
fn tag(text: &str, paint: fn(console::StyledObject<String>) -> console::StyledObject<String>) -> String {
    let plain = format!("[{text}]");
    if is_color_disabled() {
        plain
    } else {
        paint(style(plain).bold()).to_string()
    }
}

/// A styled header line.
#[must_use]
pub fn header_line(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text));
}

/// Print a success message to stderr.
pub fn print_success(text: &str) {
    eprintln!("{} {text}", tag("OK", console::StyledObject::green));
}

/// Print an informational message to stderr.
pub fn print_info(text: &str) {
    eprintln!("{} {text}", tag("INFO", console::StyledObject::blue));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{} {text}", tag("AVISO", console::StyledObject::yellow));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", console::StyledObject::red));
}
