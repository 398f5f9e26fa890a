//! Shared text formatting helpers used by help and progress rendering.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `s` with spaces to at least `width` visible characters.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(visible_width(s));
    let mut out = String::with_capacity(s.len() + missing);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(missing));
    out
}

/// Two-column row: `name` padded to `width`, then `description`.
///
/// Names at or beyond the column width still get one separating space.
pub fn two_column_row(indent: &str, name: &str, width: usize, description: &str) -> String {
    if description.is_empty() {
        return format!("{indent}{name}");
    }
    let padded = pad_to_width(name, width);
    let separator = if visible_width(name) >= width { " " } else { "" };
    format!("{indent}{padded}{separator} {description}")
}

/// Repeat `symbol` `count` times.
pub fn repeat_char(symbol: char, count: usize) -> String {
    std::iter::repeat(symbol).take(count).collect()
}
