//! Terminal output helpers

use colored::Colorize;

/// Informational line
pub fn info(msg: &str) {
    println!("{} {}", "→".blue(), msg);
}

/// Success line
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Warning line
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Error line (stderr)
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Section header
pub fn header(msg: &str) {
    println!("{}", msg.bold());
}
