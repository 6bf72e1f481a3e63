//! Character-level text helpers.
//!
//! Entity spans and tokens address text in `char` units while Rust strings are
//! indexed by byte, so the pipeline converts between the two here.

/// Whether `c` counts as a word character (`\w`): alphanumeric or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether the first character of `s` is uppercase.
pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Title-case `s`: every letter that follows a non-letter is uppercased, every
/// other letter is lowercased.
///
/// `"kupu-kupu"` becomes `"Kupu-Kupu"`.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }

    result
}

/// Uppercase the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Byte offset of every character boundary in `text`.
///
/// The returned vector has `text.chars().count() + 1` entries, so
/// `offsets[i]` is the byte position of char `i` and the last entry is
/// `text.len()`.
pub fn char_boundaries(text: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    offsets
}

/// Slice `text` by char offsets, clamping out-of-range offsets to the text.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let boundaries = char_boundaries(text);
    let last = boundaries.len() - 1;
    let start = start.min(last);
    let end = end.clamp(start, last);
    &text[boundaries[start]..boundaries[end]]
}
