//! Colored terminal output.

use colored::{ColoredString, Colorize};

/// Green text for a successful result.
pub fn success_text(message: &str) -> ColoredString {
    message.green()
}

/// Red text for a failure or a negative range check.
pub fn failure_text(message: &str) -> ColoredString {
    message.red()
}

/// Print a result: success to stdout in green, failure to stderr in red.
pub fn print_message(message: &str, success: bool) {
    if success {
        println!("{}", success_text(message));
    } else {
        eprintln!("{}", failure_text(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_text_keeps_message() {
        colored::control::set_override(false);
        assert_eq!(success_text("IP in range").to_string(), "IP in range");
        assert_eq!(failure_text("IP not in range").to_string(), "IP not in range");
    }
}
