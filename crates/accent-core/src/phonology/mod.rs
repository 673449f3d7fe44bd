//! Onset and vowel-ending classification of katakana.
//!
//! Tables are built by inverting hand-authored category → characters
//! groupings (see `default_phonology.toml`). They are constructed once,
//! never mutated, and shared by reference between callers.

mod class;
mod config;
mod table;

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, debug_span};

pub use class::{Consonant, Onset, Vowel, VowelEnd, NONE_LABEL};
pub use config::{parse_phonology_toml, transpose, Groupings};
pub use table::DEFAULT_TOML;

use crate::mora::Mora;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhonologyError {
    #[error("unknown character {ch:?}{}", fmt_position(.position))]
    UnknownCharacter { ch: char, position: Option<usize> },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("[{table}] table is empty")]
    Empty { table: &'static str },

    #[error("[{table}] unknown category label: {label}")]
    UnknownClass { table: &'static str, label: String },

    #[error("[{table}] {ch:?} listed under both {first} and {second}")]
    Collision {
        table: &'static str,
        ch: char,
        first: String,
        second: String,
    },
}

fn fmt_position(position: &Option<usize>) -> String {
    position
        .map(|p| format!(" at position {p}"))
        .unwrap_or_default()
}

impl PhonologyError {
    /// Attach the char index within the source word to an `UnknownCharacter`.
    fn at(self, pos: usize) -> Self {
        match self {
            PhonologyError::UnknownCharacter { ch, .. } => PhonologyError::UnknownCharacter {
                ch,
                position: Some(pos),
            },
            other => other,
        }
    }
}

/// Both classifications of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub onset: Onset,
    pub vowel_end: VowelEnd,
}

impl Classification {
    pub fn is_vowel_onset(&self) -> bool {
        self.onset.is_vowel()
    }
}

/// Word-final phonological features.
///
/// The onset comes from the first character of the last mora, the vowel
/// ending from its last character, so a digraph like シャ yields `s` / `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalFeatures {
    pub onset: Onset,
    pub is_vowel: bool,
    pub end_vowel: VowelEnd,
}

#[derive(Debug, Clone)]
pub struct PhonologyTables {
    onset: HashMap<char, Onset>,
    vowel_end: HashMap<char, VowelEnd>,
}

impl PhonologyTables {
    /// Build the tables from the embedded default groupings.
    pub fn new() -> Result<Self, PhonologyError> {
        Self::from_toml(DEFAULT_TOML)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PhonologyError> {
        let groupings = parse_phonology_toml(toml_str)?;
        Self::from_groupings(&groupings)
    }

    pub fn from_groupings(groupings: &Groupings) -> Result<Self, PhonologyError> {
        let _span = debug_span!("build_phonology_tables").entered();
        let onset = transpose("onset", &groupings.onset)?;
        let vowel_end = transpose("vowel_end", &groupings.vowel_end)?;
        debug!(onset = onset.len(), vowel_end = vowel_end.len());
        Ok(Self { onset, vowel_end })
    }

    pub fn onset_of(&self, ch: char) -> Result<Onset, PhonologyError> {
        self.onset
            .get(&ch)
            .copied()
            .ok_or(PhonologyError::UnknownCharacter { ch, position: None })
    }

    pub fn vowel_end_of(&self, ch: char) -> Result<VowelEnd, PhonologyError> {
        self.vowel_end
            .get(&ch)
            .copied()
            .ok_or(PhonologyError::UnknownCharacter { ch, position: None })
    }

    pub fn classify(&self, ch: char) -> Result<Classification, PhonologyError> {
        Ok(Classification {
            onset: self.onset_of(ch)?,
            vowel_end: self.vowel_end_of(ch)?,
        })
    }

    /// Every character either table knows about.
    pub fn characters(&self) -> BTreeSet<char> {
        self.onset
            .keys()
            .chain(self.vowel_end.keys())
            .copied()
            .collect()
    }

    /// Features of the last mora of a word; `None` for an empty word.
    ///
    /// Unknown characters are reported with their char index in the word
    /// the mora were split from.
    pub fn final_features(&self, morae: &[Mora]) -> Result<Option<FinalFeatures>, PhonologyError> {
        let Some(last) = morae.last() else {
            return Ok(None);
        };
        let start: usize = morae[..morae.len() - 1]
            .iter()
            .map(|m| m.char_len())
            .sum();
        let end = start + last.char_len() - 1;

        let onset = self
            .onset_of(last.first_char())
            .map_err(|e| e.at(start))?;
        let end_vowel = self
            .vowel_end_of(last.last_char())
            .map_err(|e| e.at(end))?;
        Ok(Some(FinalFeatures {
            onset,
            is_vowel: onset.is_vowel(),
            end_vowel,
        }))
    }
}

#[cfg(test)]
mod tests;
