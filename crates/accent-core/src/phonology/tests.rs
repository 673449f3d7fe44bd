use super::*;
use crate::segment::split_mora;
use crate::unicode::{DELIMITER, LONG_VOWEL_MARK};

fn tables() -> PhonologyTables {
    PhonologyTables::new().unwrap()
}

#[test]
fn test_classify_voiced_consonant() {
    let c = tables().classify('ガ').unwrap();
    assert_eq!(c.onset, Onset::Consonant(Consonant::G));
    assert_eq!(c.vowel_end, VowelEnd::Vowel(Vowel::A));
    assert!(!c.is_vowel_onset());
}

#[test]
fn test_classify_nasal() {
    let c = tables().classify('ン').unwrap();
    assert_eq!(c.onset, Onset::NoOnset);
    assert_eq!(c.vowel_end, VowelEnd::NoVowel);
}

#[test]
fn test_classify_bare_vowel() {
    let c = tables().classify('オ').unwrap();
    assert_eq!(c.onset, Onset::Vowel(Vowel::O));
    assert_eq!(c.vowel_end, VowelEnd::Vowel(Vowel::O));
    assert!(c.is_vowel_onset());
}

#[test]
fn test_classify_small_kana() {
    let t = tables();
    let c = t.classify('ャ').unwrap();
    assert_eq!(c.onset, Onset::NoOnset);
    assert_eq!(c.vowel_end, VowelEnd::Vowel(Vowel::A));
    assert_eq!(t.onset_of('ッ').unwrap(), Onset::NoOnset);
    assert_eq!(t.vowel_end_of('ッ').unwrap(), VowelEnd::NoVowel);
}

#[test]
fn test_mo_ends_on_o() {
    assert_eq!(
        tables().vowel_end_of('モ').unwrap(),
        VowelEnd::Vowel(Vowel::O)
    );
}

#[test]
fn test_long_vowel_mark_carries_no_vowel() {
    // ー does not inherit the vowel of the preceding mora.
    let c = tables().classify(LONG_VOWEL_MARK).unwrap();
    assert_eq!(c.onset, Onset::NoOnset);
    assert_eq!(c.vowel_end, VowelEnd::NoVowel);
}

#[test]
fn test_delimiter_is_classifiable() {
    let c = tables().classify(DELIMITER).unwrap();
    assert_eq!(c.onset, Onset::NoOnset);
    assert_eq!(c.vowel_end, VowelEnd::NoVowel);
}

#[test]
fn test_unknown_character() {
    let t = tables();
    assert_eq!(
        t.classify('A').unwrap_err(),
        PhonologyError::UnknownCharacter {
            ch: 'A',
            position: None
        }
    );
    assert!(t.onset_of('か').is_err());
    assert!(t.vowel_end_of('ヴ').is_err());
}

#[test]
fn test_classify_is_total_over_authored_set() {
    let t = tables();
    let groupings = parse_phonology_toml(DEFAULT_TOML).unwrap();
    let authored: BTreeSet<char> = groupings
        .onset
        .iter()
        .map(|(_, s)| s.as_str())
        .chain(groupings.vowel_end.iter().map(|(_, s)| s.as_str()))
        .flat_map(str::chars)
        .collect();
    assert_eq!(authored, t.characters());
    for ch in &authored {
        assert!(t.classify(*ch).is_ok(), "{ch} should classify");
    }
}

#[test]
fn test_every_plain_kana_has_consonant_or_vowel_onset() {
    let t = tables();
    for ch in "アカサタナハマヤラワガザダバパ".chars() {
        assert_ne!(t.onset_of(ch).unwrap(), Onset::NoOnset, "{ch}");
    }
}

#[test]
fn test_collision_is_startup_error() {
    let toml = r#"
[vowel_end]
i = "ミモ"
o = "モ"

[onset]
m = "ミモ"
"#;
    let err = PhonologyTables::from_toml(toml).unwrap_err();
    assert!(matches!(
        err,
        PhonologyError::Collision {
            table: "vowel_end",
            ch: 'モ',
            ..
        }
    ));
}

#[test]
fn test_error_messages() {
    let err = PhonologyError::UnknownCharacter {
        ch: 'x',
        position: Some(3),
    };
    assert_eq!(err.to_string(), "unknown character 'x' at position 3");
    let err = PhonologyError::UnknownCharacter {
        ch: 'x',
        position: None,
    };
    assert_eq!(err.to_string(), "unknown character 'x'");
}

// --- final_features ---

#[test]
fn test_final_features_digraph() {
    let morae = split_mora("アイコーシャ", "012000").unwrap();
    let f = tables().final_features(&morae).unwrap().unwrap();
    assert_eq!(f.onset, Onset::Consonant(Consonant::S));
    assert!(!f.is_vowel);
    assert_eq!(f.end_vowel, VowelEnd::Vowel(Vowel::A));
}

#[test]
fn test_final_features_vowel_word() {
    let morae = split_mora("アイ・イレナイ", "2000111").unwrap();
    let f = tables().final_features(&morae).unwrap().unwrap();
    assert_eq!(f.onset, Onset::Vowel(Vowel::I));
    assert!(f.is_vowel);
    assert_eq!(f.end_vowel, VowelEnd::Vowel(Vowel::I));
}

#[test]
fn test_final_features_long_vowel() {
    let morae = split_mora("アイゾー", "0111").unwrap();
    let f = tables().final_features(&morae).unwrap().unwrap();
    assert_eq!(f.onset, Onset::NoOnset);
    assert_eq!(f.end_vowel, VowelEnd::NoVowel);
}

#[test]
fn test_final_features_empty() {
    assert_eq!(tables().final_features(&[]).unwrap(), None);
}

#[test]
fn test_final_features_reports_position() {
    let morae = split_mora("アイxャ", "0000").unwrap();
    let err = tables().final_features(&morae).unwrap_err();
    assert_eq!(
        err,
        PhonologyError::UnknownCharacter {
            ch: 'x',
            position: Some(2)
        }
    );

    let morae = split_mora("アカq", "000").unwrap();
    let err = tables().final_features(&morae).unwrap_err();
    assert_eq!(
        err,
        PhonologyError::UnknownCharacter {
            ch: 'q',
            position: Some(2)
        }
    );
}

#[test]
fn test_tables_are_shareable_across_threads() {
    let t = std::sync::Arc::new(tables());
    let handles: Vec<_> = ["ガ", "ン", "シャ"]
        .into_iter()
        .map(|word| {
            let t = std::sync::Arc::clone(&t);
            std::thread::spawn(move || {
                let ch = word.chars().next().unwrap();
                t.classify(ch).unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0].onset, Onset::Consonant(Consonant::G));
    assert_eq!(results[1].onset, Onset::NoOnset);
    assert_eq!(results[2].onset, Onset::Consonant(Consonant::S));
}
