//! Mora segmentation of katakana headwords.
//!
//! A single greedy left-to-right pass: at each position, peek at the next
//! character; if it is a small combining kana the two characters form one
//! digraph mora, otherwise the current character is a mora on its own. The
//! decision depends only on the following character, so every position is
//! consumed exactly once and the pass never backtracks.

use std::iter;

use tracing::{debug, debug_span};

use crate::mora::{AccentDigit, Mora};
use crate::unicode::is_digraph_tail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("word has {word_len} chars but accent has {accent_len}")]
    LengthMismatch { word_len: usize, accent_len: usize },

    #[error("invalid accent digit {ch:?} at position {position}")]
    InvalidAccentDigit { ch: char, position: usize },
}

/// A mora phoneme borrowed from the source word, with the char index of its
/// last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoraSpan<'a> {
    pub text: &'a str,
    pub last: usize,
}

/// Iterate over the mora of `word` without accent information.
pub fn mora_spans(word: &str) -> impl Iterator<Item = MoraSpan<'_>> {
    let mut chars = word.char_indices().enumerate().peekable();
    iter::from_fn(move || {
        let (pos, (byte_index, c)) = chars.next()?;
        if let Some(&(next_pos, (next_byte_index, next_c))) = chars.peek() {
            if is_digraph_tail(next_c) {
                chars.next();
                let end = next_byte_index + next_c.len_utf8();
                return Some(MoraSpan {
                    text: &word[byte_index..end],
                    last: next_pos,
                });
            }
        }
        Some(MoraSpan {
            text: &word[byte_index..byte_index + c.len_utf8()],
            last: pos,
        })
    })
}

/// Iterate over the mora phonemes of `word`.
pub fn morae(word: &str) -> impl Iterator<Item = &str> {
    mora_spans(word).map(|span| span.text)
}

/// Split `word` into mora, each tagged with the accent digit aligned to its
/// last character.
///
/// For a digraph spanning positions `i` and `i + 1`, the accent is taken from
/// `accent[i + 1]`. `word` and `accent` must have the same number of chars;
/// a mismatch would silently shift accents onto the wrong mora, so it is
/// rejected up front. An empty word with an empty accent yields no mora.
pub fn split_mora(word: &str, accent: &str) -> Result<Vec<Mora>, SegmentError> {
    let digits = parse_accent(accent)?;
    let word_len = word.chars().count();
    if word_len != digits.len() {
        return Err(SegmentError::LengthMismatch {
            word_len,
            accent_len: digits.len(),
        });
    }

    let morae = mora_spans(word)
        .map(|span| Mora::from_span(span.text, digits[span.last]))
        .collect();
    Ok(morae)
}

/// Segment many `(word, accent)` pairs. Output order matches input order.
pub fn segment_batch<'a, I>(pairs: I) -> Vec<Result<Vec<Mora>, SegmentError>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let _span = debug_span!("segment_batch").entered();
    let results: Vec<_> = pairs
        .into_iter()
        .map(|(word, accent)| split_mora(word, accent))
        .collect();
    debug!(
        words = results.len(),
        failed = results.iter().filter(|r| r.is_err()).count()
    );
    results
}

fn parse_accent(accent: &str) -> Result<Vec<AccentDigit>, SegmentError> {
    accent
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            AccentDigit::try_from(ch)
                .map_err(|ch| SegmentError::InvalidAccentDigit { ch, position })
        })
        .collect()
}
