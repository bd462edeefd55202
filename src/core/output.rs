//! Status messages printed around the sequence listings.
//!
//! Errors, confirmations, notices and section headers all go through here so
//! every command frames its output the same way: a blank line before, and a
//! blank line after anything that is not followed by more output.

use colored::*;

/// `✕ Error: <message>`, the line printed before exiting with status 1
pub fn format_error(message: &str) -> String {
    format!("{} {}", "✕ Error:".red(), message.white())
}

/// `✓ <message>`
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green(), message.white())
}

pub fn print_error(message: &str) {
    println!("\n{}\n", format_error(message));
}

pub fn print_success(message: &str) {
    println!("\n{}", format_success(message));
}

/// Notice such as "No image sequences found" or the watch banner
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_format_error() {
        let line = strip_ansi_codes(&format_error("Not a directory: /renders"));
        assert_eq!(line, "✕ Error: Not a directory: /renders");
    }

    #[test]
    fn test_format_success() {
        let line = strip_ansi_codes(&format_success("Created config.json"));
        assert_eq!(line, "✓ Created config.json");
    }

    #[test]
    fn test_printing_does_not_panic() {
        print_error("Invalid poll interval: 1ms");
        print_success("Created config.json");
        print_info("No image sequences found");
        print_section_header("Configuration");
    }
}
