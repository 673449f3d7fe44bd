use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use accent_cli::commands::dataset_ops::DatasetOptions;
use accent_cli::commands::{config_ops, dataset_ops, mora_ops};
use accent_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "accentool", about = "Pitch-accent dictionary mora tool")]
struct Cli {
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DatasetArgs {
    /// Accent export (CSV with header row)
    input: String,
    /// Output JSON file (default: stdout)
    #[arg(short, long)]
    output: Option<String>,
    /// Settings TOML (default: embedded)
    #[arg(long)]
    settings: Option<String>,
    /// Abort on the first bad row instead of skipping it
    #[arg(long)]
    strict: bool,
    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

impl DatasetArgs {
    fn options(&self) -> DatasetOptions<'_> {
        DatasetOptions {
            settings: self.settings.as_deref(),
            strict: self.strict,
            pretty: self.pretty,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Split a word into mora with accent digits
    Split {
        /// Word (katakana; hiragana is converted)
        word: String,
        /// Accent digits (0/1/2), one per character
        accent: String,
        /// Left-pad the accent with zeros to the word length
        #[arg(long)]
        pad: bool,
        /// Print the mora as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show onset and vowel-ending classes of each character
    Classify {
        /// Characters to classify
        chars: String,
    },
    /// Process an accent export into annotated JSON entries
    Parse(DatasetArgs),
    /// Process an accent export and keep only single-mora words
    SingleMora(DatasetArgs),
    /// Export default phonology tables as TOML
    PhonologyExport,
    /// Validate a custom phonology TOML file
    PhonologyValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let guard = init_tracing(cli.log_dir.as_deref());

    let result = match cli.command {
        Command::Split {
            word,
            accent,
            pad,
            json,
        } => mora_ops::split_cmd(&word, &accent, pad, json),
        Command::Classify { chars } => mora_ops::classify_cmd(&chars),
        Command::Parse(args) => {
            dataset_ops::parse_cmd(&args.input, args.output.as_deref(), &args.options())
        }
        Command::SingleMora(args) => {
            dataset_ops::single_mora_cmd(&args.input, args.output.as_deref(), &args.options())
        }
        Command::PhonologyExport => config_ops::phonology_export(),
        Command::PhonologyValidate { file } => config_ops::phonology_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    };

    // flush buffered trace output before exiting
    drop(guard);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
