//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the message helpers shared by all swapi-navigator
//! commands. Catalog content itself goes through the
//! [`TerminalView`](crate::core::view::TerminalView); these functions cover
//! everything around it: errors and usage hints.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for commands, bright_black for examples
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Same error shape as the view**: `✕ Error:` prefix everywhere

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error with structured usage information
///
/// # Format
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   <usage_pattern1>
///   ...
///
/// Options:
///   <option1>  <description1>
///   ...
///
/// ```
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }

    println!();
}

/// Usage shown when a category argument cannot be parsed
pub fn print_unknown_category(input: &str) {
    print_error_with_structured_usage(
        &format!("Unknown category '{input}'"),
        &[
            "swapi-navigator list <category> [--page N]",
            "swapi-navigator search <category> <term>",
            "swapi-navigator show <category> <index> [--page N]",
        ],
        &[
            ("characters, c", "People of the saga"),
            ("planets, p", "Planets"),
            ("starships, s", "Starships"),
        ],
    );
}
