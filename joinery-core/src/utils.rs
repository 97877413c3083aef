//! Naming helpers for generated code.

/// Capitalize the first character of a name, ASCII-only.
///
/// Generated setter calls must match the naive convention hand-written
/// setters follow (`year` -> `setYear`), so only the first character is
/// touched and no locale-aware casing is applied.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Setter name a field's generated method delegates to.
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize_first(field))
}
