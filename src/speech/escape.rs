//! Quoting helpers for embedding text in shell and PowerShell commands

/// Escape text for a double-quoted POSIX shell argument
///
/// Replaces `"` with `\"`, then `$` with `\$`.
pub fn escape_text(text: &str) -> String {
    text.replace('"', "\\\"").replace('$', "\\$")
}

/// Escape text for a PowerShell single-quoted string literal
pub fn powershell_literal(text: &str) -> String {
    text.replace('\'', "''")
}
