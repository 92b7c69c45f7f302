//! Diagnostic rendering helpers.

use std::fmt::Display;

/// Joins `lines` with `\n`, prefixing each with its 1-based number.
///
/// Numbers are right-aligned to at least three columns and followed by `". "`.
/// A single trailing line break on each element is dropped.
///
/// ```rust
/// use kiln_kernel::format::with_line_numbers;
///
/// assert_eq!(with_line_numbers(["fn main", "end\n"]), "  1. fn main\n  2. end");
/// ```
pub fn with_line_numbers<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let rendered = line.to_string();
        out.push_str(&format!("{:>3}. {}", index + 1, chomp(&rendered)));
    }
    out
}

fn chomp(line: &str) -> &str {
    line.strip_suffix("\r\n").or_else(|| line.strip_suffix(['\n', '\r'])).unwrap_or(line)
}
