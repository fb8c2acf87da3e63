//! Script text construction for the mirror page's call surface.
//!
//! Interpolated text goes through one of two quoting helpers so the emitted
//! script stays syntactically valid whatever the content: `quote` for short
//! identifiers, `template_literal` for CSS/HTML bodies. Content is trusted;
//! the escaping here guards against syntax breakage, not adversarial input.

/// Render `s` as a JS template literal, escaping backslashes, backticks
/// and `${` interpolation starts.
pub fn template_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('`');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out.push('`');
    out
}

/// Render `s` as a double-quoted JS string literal.
pub fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
