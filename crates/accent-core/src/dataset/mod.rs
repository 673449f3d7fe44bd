//! Accent export processing.
//!
//! Reads a delimited export with a header row, keeps the configured columns,
//! repairs accent strings, drops duplicate `(word_id, headword_alt)` rows and
//! annotates each remaining row with its mora and word-final features.

mod csv;
mod record;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, debug_span, warn};

pub use csv::{records, split_record, ColumnIndex};
pub use record::{single_mora_words, AccentEntry, AccentRecord, SingleMoraWord};

use crate::accent::{needs_padding, pad_accent};
use crate::phonology::{PhonologyError, PhonologyTables};
use crate::segment::{split_mora, SegmentError};
use crate::settings::{RowErrorPolicy, Settings};
use crate::unicode::is_katakana_word;

/// A failure confined to a single row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("expected at most {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("expected at least {needed} fields, found {found}")]
    MissingFields { needed: usize, found: usize },

    #[error("unterminated quoted field")]
    UnterminatedQuote,

    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error(transparent)]
    Phonology(#[from] PhonologyError),
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("input has no header row")]
    MissingHeader,

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("line {line}: {source}")]
    Row { line: usize, source: RowError },
}

/// A row left out under [`RowErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line the row starts on (the header is line 1).
    pub line: usize,
    pub error: RowError,
}

#[derive(Debug, Default)]
pub struct DatasetReport {
    pub entries: Vec<AccentEntry>,
    /// Data rows read, excluding the header and blank lines.
    pub rows: usize,
    pub padded: usize,
    pub duplicates: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Read and process an export file.
pub fn process_accent_file(
    path: &Path,
    settings: &Settings,
    tables: &PhonologyTables,
) -> Result<DatasetReport, DatasetError> {
    let content = fs::read_to_string(path)?;
    process_accent_str(&content, settings, tables)
}

/// Process export text already in memory.
pub fn process_accent_str(
    content: &str,
    settings: &Settings,
    tables: &PhonologyTables,
) -> Result<DatasetReport, DatasetError> {
    let _span = debug_span!("process_accent", bytes = content.len()).entered();
    let ds = &settings.dataset;
    let mut lines = records(content, ds.separator).filter(|(_, text)| !text.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(DatasetError::MissingHeader)?;
    let header = split_record(header.trim_start_matches('\u{feff}'), ds.separator).map_err(
        |source| DatasetError::Row {
            line: header_line,
            source,
        },
    )?;
    let columns = ColumnIndex::resolve(&header, ds.columns().map(|(_, column)| column))
        .map_err(DatasetError::MissingColumn)?;

    let mut report = DatasetReport::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for (line, text) in lines {
        report.rows += 1;
        let result = parse_row(text, ds.separator, &columns).and_then(|mut record| {
            let (id, alt) = record.key();
            if !seen.insert((id.to_string(), alt.to_string())) {
                report.duplicates += 1;
                return Ok(None);
            }
            if settings.accent.pad_leading_zeros
                && needs_padding(&record.headword_alt, &record.accent)
            {
                record.accent =
                    pad_accent(&record.accent, record.headword_alt.chars().count());
                report.padded += 1;
            }
            if !is_katakana_word(&record.headword_alt) {
                debug!(line, headword = %record.headword_alt, "non-katakana headword");
            }
            annotate(record, tables).map(Some)
        });

        match result {
            Ok(Some(entry)) => report.entries.push(entry),
            Ok(None) => {}
            Err(error) => match ds.on_error {
                RowErrorPolicy::Strict => {
                    return Err(DatasetError::Row {
                        line,
                        source: error,
                    })
                }
                RowErrorPolicy::Skip => {
                    warn!(line, %error, "skipping row");
                    report.skipped.push(SkippedRow { line, error });
                }
            },
        }
    }

    debug!(
        rows = report.rows,
        entries = report.entries.len(),
        padded = report.padded,
        duplicates = report.duplicates,
        skipped = report.skipped.len()
    );
    Ok(report)
}

fn parse_row(text: &str, separator: char, columns: &ColumnIndex) -> Result<AccentRecord, RowError> {
    let fields = split_record(text, separator)?;
    AccentRecord::from_fields(columns.select(fields)?)
}

/// Segment a record and derive its word-final features.
pub fn annotate(record: AccentRecord, tables: &PhonologyTables) -> Result<AccentEntry, RowError> {
    let mora = split_mora(&record.headword_alt, &record.accent)?;
    let features = tables.final_features(&mora)?;
    Ok(AccentEntry {
        record,
        mora,
        features,
    })
}
