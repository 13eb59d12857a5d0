//! Greedy fixed-column word wrapping for slide text.
//!
//! Layout rules express wrap widths in character columns, not pixels; the
//! measured-width centering happens later, per wrapped line.

/// Wrap `text` at `width` columns, returning one string per output line.
///
/// Whitespace runs collapse to single spaces. Words longer than `width` are
/// hard-split at the column boundary so no output line ever exceeds it.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    assert!(width > 0, "wrap width must be non-zero");

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, width) {
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 1 + piece.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` at `width` columns into a single newline-joined string.
pub fn fill(text: &str, width: usize) -> String {
    wrap(text, width).join("\n")
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    if word.chars().count() <= width {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/wrap.rs"]
mod tests;
