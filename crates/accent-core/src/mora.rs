//! Mora and pitch-accent value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unicode::DELIMITER;

/// Per-mora pitch annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AccentDigit {
    /// 0: low pitch
    Low,
    /// 1: high pitch
    High,
    /// 2: pitch drops after this mora
    Drop,
}

impl AccentDigit {
    pub fn value(self) -> u8 {
        match self {
            AccentDigit::Low => 0,
            AccentDigit::High => 1,
            AccentDigit::Drop => 2,
        }
    }

    pub fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl From<AccentDigit> for u8 {
    fn from(d: AccentDigit) -> u8 {
        d.value()
    }
}

impl TryFrom<u8> for AccentDigit {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(AccentDigit::Low),
            1 => Ok(AccentDigit::High),
            2 => Ok(AccentDigit::Drop),
            other => Err(other),
        }
    }
}

impl TryFrom<char> for AccentDigit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '0' => Ok(AccentDigit::Low),
            '1' => Ok(AccentDigit::High),
            '2' => Ok(AccentDigit::Drop),
            other => Err(other),
        }
    }
}

impl fmt::Display for AccentDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One phonological timing unit: a unigraph or a base kana plus a small
/// combining kana, with the accent of its final character.
///
/// Digraph validity is not checked; any 1- or 2-char phoneme is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMora")]
pub struct Mora {
    phoneme: String,
    accent: AccentDigit,
}

#[derive(Deserialize)]
struct RawMora {
    phoneme: String,
    accent: AccentDigit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mora must be 1 or 2 chars, got {phoneme:?}")]
pub struct MoraLengthError {
    pub phoneme: String,
}

impl TryFrom<RawMora> for Mora {
    type Error = MoraLengthError;

    fn try_from(raw: RawMora) -> Result<Self, MoraLengthError> {
        Mora::new(&raw.phoneme, raw.accent)
    }
}

impl Mora {
    pub fn new(phoneme: &str, accent: AccentDigit) -> Result<Self, MoraLengthError> {
        let len = phoneme.chars().count();
        if !(1..=2).contains(&len) {
            return Err(MoraLengthError {
                phoneme: phoneme.to_string(),
            });
        }
        Ok(Self::from_span(phoneme, accent))
    }

    /// Build from a segmenter span, which is always 1 or 2 chars.
    pub(crate) fn from_span(phoneme: &str, accent: AccentDigit) -> Self {
        debug_assert!((1..=2).contains(&phoneme.chars().count()));
        Self {
            phoneme: phoneme.to_string(),
            accent,
        }
    }

    pub fn phoneme(&self) -> &str {
        &self.phoneme
    }

    pub fn accent(&self) -> AccentDigit {
        self.accent
    }

    pub fn pair(&self) -> (&str, u8) {
        (&self.phoneme, self.accent.value())
    }

    pub fn char_len(&self) -> usize {
        self.phoneme.chars().count()
    }

    pub fn is_digraph(&self) -> bool {
        self.char_len() == 2
    }

    pub fn is_delimiter(&self) -> bool {
        let mut chars = self.phoneme.chars();
        chars.next() == Some(DELIMITER) && chars.next().is_none()
    }

    /// First character; carries the onset.
    pub fn first_char(&self) -> char {
        self.phoneme.chars().next().unwrap_or(DELIMITER)
    }

    /// Last character; carries the vowel.
    pub fn last_char(&self) -> char {
        self.phoneme.chars().next_back().unwrap_or(DELIMITER)
    }
}

impl fmt::Display for Mora {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M('{}', {})", self.phoneme, self.accent)
    }
}

/// Split a compound mora sequence at delimiter mora.
///
/// Delimiters are dropped. A sequence with `n` delimiters always yields
/// `n + 1` pieces, some of which may be empty.
pub fn split_words(morae: &[Mora]) -> Vec<&[Mora]> {
    morae.split(|m| m.is_delimiter()).collect()
}
