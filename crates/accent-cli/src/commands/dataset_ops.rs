use std::path::Path;

use accent_core::dataset::{process_accent_file, single_mora_words, DatasetReport};
use accent_core::phonology::PhonologyTables;
use accent_core::settings::{load_settings, RowErrorPolicy, Settings};
use tracing::info;

use super::{die, write_json_to, CmdResult, Failed};

pub struct DatasetOptions<'a> {
    pub settings: Option<&'a str>,
    pub strict: bool,
    pub pretty: bool,
}

fn settings_for(opts: &DatasetOptions) -> Result<Settings, Failed> {
    let mut settings = die!(
        load_settings(opts.settings.map(Path::new)),
        "Error loading settings: {}"
    );
    if opts.strict {
        settings.dataset.on_error = RowErrorPolicy::Strict;
    }
    if opts.pretty {
        settings.output.pretty = true;
    }
    Ok(settings)
}

fn run(input: &str, settings: &Settings) -> Result<DatasetReport, Failed> {
    let tables = die!(PhonologyTables::new(), "Error building tables: {}");
    let report = die!(
        process_accent_file(Path::new(input), settings, &tables),
        "Error processing {input}: {}"
    );
    info!(
        rows = report.rows,
        entries = report.entries.len(),
        padded = report.padded,
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        "processed {input}"
    );
    Ok(report)
}

pub fn parse_cmd(input: &str, output: Option<&str>, opts: &DatasetOptions) -> CmdResult {
    let settings = settings_for(opts)?;
    let report = run(input, &settings)?;
    die!(
        write_json_to(output.map(Path::new), &report.entries, settings.output.pretty),
        "Error writing output: {}"
    );
    Ok(())
}

pub fn single_mora_cmd(input: &str, output: Option<&str>, opts: &DatasetOptions) -> CmdResult {
    let settings = settings_for(opts)?;
    let report = run(input, &settings)?;
    let words = single_mora_words(&report.entries);
    info!(count = words.len(), "single-mora words");
    die!(
        write_json_to(output.map(Path::new), &words, settings.output.pretty),
        "Error writing output: {}"
    );
    Ok(())
}
