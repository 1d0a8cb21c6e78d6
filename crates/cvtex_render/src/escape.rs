//! LaTeX escaping for configuration text.

/// Replacement table for LaTeX-sensitive characters, applied in order.
///
/// The backslash entry must stay first: every other replacement inserts
/// backslashes, so running it later would corrupt the escape sequences
/// produced by earlier passes.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\\", "\\textbackslash{}"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("^", "\\textasciicircum{}"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
];

/// Escape LaTeX-sensitive characters in prose text.
///
/// A single fixed pass; re-escaping already escaped output is not
/// supported and will double-escape.
pub fn escape(text: &str) -> String {
    let mut escaped = text.to_string();
    for (pattern, replacement) in REPLACEMENTS {
        escaped = escaped.replace(pattern, replacement);
    }
    escaped
}

/// Escape an optional field. Absent values contribute an empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    match text {
        Some(text) => escape(text),
        None => String::new(),
    }
}
