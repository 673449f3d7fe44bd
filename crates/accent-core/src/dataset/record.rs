use serde::Serialize;

use super::RowError;
use crate::mora::Mora;
use crate::phonology::FinalFeatures;

/// One row of the accent export, restricted to the columns we use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentRecord {
    /// Unique per word and accent pattern.
    pub word_id: String,
    /// Shared by every accent pattern of the same word.
    pub sem_word_id: String,
    pub headword: String,
    pub word: String,
    pub kanji: String,
    pub char_count: Option<u32>,
    /// Headword including delimiters; the accent string aligns with this.
    pub headword_alt: String,
    pub n_accents: Option<u32>,
    pub accent: String,
}

impl AccentRecord {
    /// Build from fields ordered as `DatasetSettings::columns`.
    pub fn from_fields(fields: Vec<String>) -> Result<Self, RowError> {
        let found = fields.len();
        let Ok([word_id, sem_word_id, headword, word, kanji, char_count, headword_alt, n_accents, accent]) =
            <[String; 9]>::try_from(fields)
        else {
            return Err(RowError::FieldCount { expected: 9, found });
        };
        Ok(Self {
            word_id,
            sem_word_id,
            headword,
            word,
            kanji,
            char_count: parse_count("char_count", &char_count)?,
            headword_alt,
            n_accents: parse_count("n_accents", &n_accents)?,
            accent,
        })
    }

    /// Deduplication key.
    pub fn key(&self) -> (&str, &str) {
        (&self.word_id, &self.headword_alt)
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<Option<u32>, RowError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| RowError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// A record with its mora sequence and word-final features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentEntry {
    #[serde(flatten)]
    pub record: AccentRecord,
    pub mora: Vec<Mora>,
    #[serde(flatten)]
    pub features: Option<FinalFeatures>,
}

impl AccentEntry {
    pub fn is_single_mora(&self) -> bool {
        self.mora.len() == 1
    }
}

/// The projection written for single-mora words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleMoraWord<'a> {
    pub word_id: &'a str,
    pub sem_word_id: &'a str,
    pub word: &'a str,
    pub kanji: &'a str,
    pub n_accents: Option<u32>,
    pub mora: &'a [Mora],
}

impl<'a> From<&'a AccentEntry> for SingleMoraWord<'a> {
    fn from(e: &'a AccentEntry) -> Self {
        Self {
            word_id: &e.record.word_id,
            sem_word_id: &e.record.sem_word_id,
            word: &e.record.word,
            kanji: &e.record.kanji,
            n_accents: e.record.n_accents,
            mora: &e.mora,
        }
    }
}

/// Keep only entries whose headword is a single mora.
pub fn single_mora_words(entries: &[AccentEntry]) -> Vec<SingleMoraWord<'_>> {
    entries
        .iter()
        .filter(|e| e.is_single_mora())
        .map(SingleMoraWord::from)
        .collect()
}
