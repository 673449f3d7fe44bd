//! Minimal delimited-record reader for the accent export.
//!
//! Fields may be wrapped in double quotes, with `""` standing for a literal
//! quote. A quote only opens a quoted field at the start of a field, and a
//! quoted field may run across line breaks.

use std::iter;

use super::RowError;

/// Split `content` into records, each paired with the 1-based line number it
/// starts on. Line breaks inside quoted fields do not end a record. A trailing
/// `\r` is stripped from each record.
pub fn records(content: &str, separator: char) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = content;
    let mut line = 1;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let start_line = line;
        let mut in_quotes = false;
        let mut field_start = true;
        let mut end = rest.len();
        let mut next = rest.len();
        let mut chars = rest.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '\n' => {
                    line += 1;
                    if !in_quotes {
                        end = i;
                        next = i + 1;
                        break;
                    }
                }
                '"' if in_quotes => {
                    if chars.peek().map(|&(_, c)| c) == Some('"') {
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '"' if field_start => in_quotes = true,
                c if c == separator && !in_quotes => {
                    field_start = true;
                    continue;
                }
                _ => {}
            }
            field_start = false;
        }

        let record = &rest[..end];
        rest = &rest[next..];
        Some((start_line, record.strip_suffix('\r').unwrap_or(record)))
    })
}

/// Split one record into fields.
pub fn split_record(record: &str, separator: char) -> Result<Vec<String>, RowError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = record.chars().peekable();
    let mut in_quotes = false;
    let mut field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field_start {
            in_quotes = true;
        } else if c == separator {
            fields.push(std::mem::take(&mut field));
            field_start = true;
            continue;
        } else {
            field.push(c);
        }
        field_start = false;
    }

    if in_quotes {
        return Err(RowError::UnterminatedQuote);
    }
    fields.push(field);
    Ok(fields)
}

/// Positions of the wanted columns within a header row.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: Vec<usize>,
    width: usize,
}

impl ColumnIndex {
    /// Resolve each of `wanted` against `header`. Returns the first missing
    /// column name on failure.
    pub fn resolve<'a>(
        header: &[String],
        wanted: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, String> {
        let positions = wanted
            .into_iter()
            .map(|name| {
                header
                    .iter()
                    .position(|h| h.trim() == name)
                    .ok_or_else(|| name.to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            positions,
            width: header.len(),
        })
    }

    /// Fields a row needs to reach every wanted column.
    pub fn needed(&self) -> usize {
        self.positions.iter().max().map_or(0, |&i| i + 1)
    }

    /// Pick the wanted fields, in the order they were requested.
    ///
    /// Rows may stop short of the header width as long as every wanted
    /// column is present; rows wider than the header are rejected.
    pub fn select(&self, mut fields: Vec<String>) -> Result<Vec<String>, RowError> {
        if fields.len() > self.width {
            return Err(RowError::FieldCount {
                expected: self.width,
                found: fields.len(),
            });
        }
        if fields.len() < self.needed() {
            return Err(RowError::MissingFields {
                needed: self.needed(),
                found: fields.len(),
            });
        }
        Ok(self
            .positions
            .iter()
            .map(|&i| std::mem::take(&mut fields[i]))
            .collect())
    }
}
