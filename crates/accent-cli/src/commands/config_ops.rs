use std::fs;

use accent_core::phonology::{self, PhonologyTables};
use accent_core::settings;

use super::{die, CmdResult};

pub fn phonology_export() -> CmdResult {
    print!("{}", phonology::DEFAULT_TOML);
    Ok(())
}

pub fn phonology_validate(file: &str) -> CmdResult {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(PhonologyTables::from_toml(&content), "Error: {}");
    println!("OK: {} characters", tables.characters().len());
    Ok(())
}

pub fn settings_export() -> CmdResult {
    print!("{}", settings::default_toml());
    Ok(())
}

pub fn settings_validate(file: &str) -> CmdResult {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: headword_alt={:?}, accent={:?}, on_error={:?}",
        s.dataset.headword_alt, s.dataset.accent, s.dataset.on_error
    );
    Ok(())
}
