//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, commands, keys, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ signing properties ok`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ keystore not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ keytool not found on PATH`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run keyfob check`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  key alias  upload`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value.to_string()).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Format a path string in cyan for inline use.
pub fn path(p: &str) -> String {
    style(p).cyan().to_string()
}

/// Format a key or alias name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Signing
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
