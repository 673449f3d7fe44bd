use accent_core::accent::pad_accent;
use accent_core::phonology::{Classification, PhonologyTables};
use accent_core::unicode::hiragana_to_katakana;
use accent_core::{split_mora, split_words, Mora};

use super::{die, write_json_to, CmdResult, Failed};

/// `ア(0) イ(1) | ...` with compound parts separated by `|`.
pub fn format_morae(morae: &[Mora]) -> String {
    split_words(morae)
        .iter()
        .map(|part| {
            part.iter()
                .map(|m| format!("{}({})", m.phoneme(), m.accent()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn format_classification(ch: char, c: &Classification) -> String {
    format!(
        "{ch}\tonset={}\tvowel_end={}\tvowel_onset={}",
        c.onset,
        c.vowel_end,
        c.is_vowel_onset()
    )
}

pub fn split_cmd(word: &str, accent: &str, pad: bool, json: bool) -> CmdResult {
    let word = hiragana_to_katakana(word);
    let accent = if pad {
        pad_accent(accent, word.chars().count())
    } else {
        accent.to_string()
    };
    let morae = die!(split_mora(&word, &accent), "Error: {}");

    if json {
        die!(write_json_to(None, &morae, false), "Error writing output: {}");
        return Ok(());
    }
    println!("{}", format_morae(&morae));

    let tables = die!(PhonologyTables::new(), "Error building tables: {}");
    match tables.final_features(&morae) {
        Ok(Some(f)) => println!(
            "final: onset={} vowel_onset={} end_vowel={}",
            f.onset, f.is_vowel, f.end_vowel
        ),
        Ok(None) => {}
        Err(e) => eprintln!("final: {e}"),
    }
    Ok(())
}

pub fn classify_cmd(chars: &str) -> CmdResult {
    let tables = die!(PhonologyTables::new(), "Error building tables: {}");
    let mut failed = false;
    for ch in hiragana_to_katakana(chars).chars() {
        match tables.classify(ch) {
            Ok(c) => println!("{}", format_classification(ch, &c)),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }
    if failed {
        return Err(Failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_compound() {
        let morae = split_mora("アイ・イレナイ", "2000111").unwrap();
        assert_eq!(format_morae(&morae), "ア(2) イ(0) | イ(0) レ(1) ナ(1) イ(1)");
    }

    #[test]
    fn format_digraph() {
        let morae = split_mora("アイコーシャ", "012000").unwrap();
        assert_eq!(format_morae(&morae), "ア(0) イ(1) コ(2) ー(0) シャ(0)");
    }

    #[test]
    fn format_classify_line() {
        let tables = PhonologyTables::new().unwrap();
        let c = tables.classify('ガ').unwrap();
        assert_eq!(
            format_classification('ガ', &c),
            "ガ\tonset=g\tvowel_end=a\tvowel_onset=false"
        );
        let c = tables.classify('ン').unwrap();
        assert_eq!(
            format_classification('ン', &c),
            "ン\tonset=none\tvowel_end=none\tvowel_onset=false"
        );
    }

    #[test]
    fn failures_return_to_caller() {
        assert_eq!(split_cmd("アイ", "0", false, false), Err(Failed));
        assert_eq!(split_cmd("アイ", "9", true, false), Err(Failed));
        assert_eq!(classify_cmd("アx"), Err(Failed));
        assert_eq!(classify_cmd("アイ"), Ok(()));
    }
}
