//! Character-level classification for katakana headwords.

/// Word delimiter joining the parts of a compound headword (U+30FB).
pub const DELIMITER: char = '・';

/// Prolonged sound mark (U+30FC).
pub const LONG_VOWEL_MARK: char = 'ー';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the delimiter
/// and the prolonged sound mark.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Small kana that combine with the preceding character into one mora.
///
/// Small ッ is deliberately absent: the geminate marker is a mora of its own.
#[must_use]
#[rustfmt::skip]
pub const fn is_digraph_tail(c: char) -> bool {
    matches!(
        c,
        'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' |
        'ャ' | 'ュ' | 'ョ'
    )
}

/// Hiragana letters and iteration marks that have a katakana counterpart
/// exactly 0x60 code points up (ぁ..ゖ, ゝ, ゞ).
fn has_katakana_pair(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}')
}

/// Convert a hiragana string to katakana.
/// Everything else (ー, ASCII, voicing marks ゛゜, etc.) is passed through
/// unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_katakana_pair(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is a non-empty katakana headword.
pub fn is_katakana_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana)
}
