//! Accent-string repair.
//!
//! Accent strings in the source export drop leading zeros, so a headword of
//! four chars may come with an accent of "111". Padding restores the
//! alignment before segmentation.

/// Left-pad `accent` with '0' to `word_len` chars. Longer strings are
/// returned unchanged so the mismatch is still caught by segmentation.
pub fn pad_accent(accent: &str, word_len: usize) -> String {
    let len = accent.chars().count();
    if len >= word_len {
        return accent.to_string();
    }
    let mut padded = "0".repeat(word_len - len);
    padded.push_str(accent);
    padded
}

/// Whether the accent string needed padding to match `word`.
pub fn needs_padding(word: &str, accent: &str) -> bool {
    accent.chars().count() < word.chars().count()
}
