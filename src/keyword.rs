//! Rendering of keyword rules as ABNF hex strings.

use itertools::Itertools;

/// Encode `label` as `%x` followed by dot-separated two-digit hex bytes,
/// one per character. Code points above `0xFF` are truncated to their low
/// byte.
pub fn hex_string(label: &str) -> String {
    format!("%x{}", label.chars().map(|c| format!("{:02X}", c as u32 as u8)).join("."))
}

/// Build the definition line for a keyword rule.
///
/// `separator` is the assignment text exactly as it appeared in the source.
/// The trailing `; "label"` comment is pushed right by
/// `keyword_indent - 3 * len(label)` spaces, clamped at zero. Each encoded
/// character is roughly three columns wide.
pub fn render(name: &str, separator: &str, label: &str, keyword_indent: usize) -> String {
    let padding = keyword_indent.saturating_sub(3 * label.chars().count());
    format!(
        "{}{}{}{} ; \"{}\"",
        name,
        separator,
        hex_string(label),
        " ".repeat(padding),
        label
    )
}
