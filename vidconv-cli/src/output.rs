// vidconv-cli/src/output.rs
//
// Colored terminal output helpers.

use colored::*;
use std::fmt::Display;

/// Print a section heading with colored styling
pub fn print_section(text: &str) {
    let section = format!(" {} ", text).bold().white();
    let line = "-".repeat(40).blue();

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".bright_green().bold(), message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}
