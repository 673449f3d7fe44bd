pub mod config_ops;
pub mod dataset_ops;
pub mod mora_ops;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// A command failure that has already been reported on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failed;

pub type CmdResult = Result<(), Failed>;

/// Unwrap `$result`, or print the error and return [`Failed`] from the
/// enclosing command. `main` maps that to the exit status once the trace
/// writer has been flushed.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        match $result {
            Ok(v) => v,
            Err(e) => {
                eprintln!($($arg)*, e);
                return Err($crate::commands::Failed);
            }
        }
    };
}
pub(crate) use die;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` as JSON to `writer`, followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    pretty: bool,
) -> Result<(), OutputError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json_to<T: Serialize + ?Sized>(
    path: Option<&Path>,
    value: &T,
    pretty: bool,
) -> Result<(), OutputError> {
    match path {
        Some(p) => write_json(BufWriter::new(File::create(p)?), value, pretty),
        None => write_json(io::stdout().lock(), value, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_compact_and_pretty() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[1, 2], false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1,2]\n");

        let mut buf = Vec::new();
        write_json(&mut buf, &[1], true).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[\n  1\n]\n");
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json_to(Some(&path), &["ア"], false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\"ア\"]\n");
    }
}
