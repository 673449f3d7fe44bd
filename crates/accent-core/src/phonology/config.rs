use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use serde::Deserialize;

use super::class::{Onset, VowelEnd};
use super::PhonologyError;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PhonologyConfig {
    vowel_end: BTreeMap<String, String>,
    onset: BTreeMap<String, String>,
}

/// Authored groupings, still in category → characters form.
#[derive(Debug, Clone)]
pub struct Groupings {
    pub vowel_end: Vec<(VowelEnd, String)>,
    pub onset: Vec<(Onset, String)>,
}

/// Parse TOML text into groupings, checking every label against the closed
/// set of categories.
pub fn parse_phonology_toml(toml_str: &str) -> Result<Groupings, PhonologyError> {
    let config: PhonologyConfig =
        toml::from_str(toml_str).map_err(|e| PhonologyError::Parse(e.to_string()))?;

    let vowel_end = resolve_labels("vowel_end", config.vowel_end, VowelEnd::from_label)?;
    let onset = resolve_labels("onset", config.onset, Onset::from_label)?;
    Ok(Groupings { vowel_end, onset })
}

fn resolve_labels<K>(
    table: &'static str,
    raw: BTreeMap<String, String>,
    from_label: impl Fn(&str) -> Option<K>,
) -> Result<Vec<(K, String)>, PhonologyError> {
    if raw.is_empty() {
        return Err(PhonologyError::Empty { table });
    }
    raw.into_iter()
        .map(|(label, chars)| match from_label(&label) {
            Some(class) => Ok((class, chars)),
            None => Err(PhonologyError::UnknownClass { table, label }),
        })
        .collect()
}

/// Invert category → characters into character → category.
///
/// Every character must appear in at most one list. A repeat is reported as
/// a `Collision` rather than letting the later category overwrite the
/// earlier one.
pub fn transpose<K, S>(
    table: &'static str,
    groups: &[(K, S)],
) -> Result<HashMap<char, K>, PhonologyError>
where
    K: Copy + Display,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for (class, chars) in groups {
        for ch in chars.as_ref().chars() {
            if let Some(prev) = map.insert(ch, *class) {
                return Err(PhonologyError::Collision {
                    table,
                    ch,
                    first: prev.to_string(),
                    second: class.to_string(),
                });
            }
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::class::{Consonant, Vowel};
    use crate::phonology::table::DEFAULT_TOML;

    #[test]
    fn transpose_inverts_groups() {
        let groups = [
            (VowelEnd::Vowel(Vowel::A), "123"),
            (VowelEnd::Vowel(Vowel::I), "456"),
        ];
        let map = transpose("test", &groups).unwrap();
        assert_eq!(map.len(), 6);
        for c in "123".chars() {
            assert_eq!(map[&c], VowelEnd::Vowel(Vowel::A));
        }
        for c in "456".chars() {
            assert_eq!(map[&c], VowelEnd::Vowel(Vowel::I));
        }
    }

    #[test]
    fn transpose_rejects_collision() {
        let groups = [
            (Onset::Consonant(Consonant::M), "マミ"),
            (Onset::Consonant(Consonant::N), "ナミ"),
        ];
        let err = transpose("onset", &groups).unwrap_err();
        match err {
            PhonologyError::Collision {
                table,
                ch,
                first,
                second,
            } => {
                assert_eq!(table, "onset");
                assert_eq!(ch, 'ミ');
                assert_eq!(first, "m");
                assert_eq!(second, "n");
            }
            other => panic!("expected Collision, got {other:?}"),
        }
    }

    #[test]
    fn transpose_rejects_repeat_within_group() {
        let groups = [(Onset::NoOnset, "ンン")];
        assert!(matches!(
            transpose("onset", &groups),
            Err(PhonologyError::Collision { .. })
        ));
    }

    #[test]
    fn parse_default_toml() {
        let g = parse_phonology_toml(DEFAULT_TOML).unwrap();
        assert_eq!(g.vowel_end.len(), 6);
        assert_eq!(g.onset.len(), 20);
    }

    #[test]
    fn default_groups_are_pairwise_disjoint() {
        let g = parse_phonology_toml(DEFAULT_TOML).unwrap();
        fn assert_disjoint<K: Display>(groups: &[(K, String)]) {
            for (i, (a, a_chars)) in groups.iter().enumerate() {
                for (b, b_chars) in &groups[i + 1..] {
                    for c in a_chars.chars() {
                        assert!(
                            !b_chars.contains(c),
                            "{c} appears under both {a} and {b}"
                        );
                    }
                }
            }
        }
        assert_disjoint(&g.vowel_end);
        assert_disjoint(&g.onset);
    }

    #[test]
    fn error_unknown_label() {
        let toml = r#"
[vowel_end]
a = "ア"
x = "イ"

[onset]
a = "ア"
"#;
        let err = parse_phonology_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            PhonologyError::UnknownClass { table: "vowel_end", ref label } if label == "x"
        ));
    }

    #[test]
    fn error_consonant_label_in_vowel_table() {
        let toml = "[vowel_end]\nk = \"カ\"\n\n[onset]\nk = \"カ\"\n";
        assert!(matches!(
            parse_phonology_toml(toml),
            Err(PhonologyError::UnknownClass { .. })
        ));
    }

    #[test]
    fn error_empty_table() {
        let toml = "[vowel_end]\n\n[onset]\na = \"ア\"\n";
        assert!(matches!(
            parse_phonology_toml(toml),
            Err(PhonologyError::Empty { table: "vowel_end" })
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_phonology_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, PhonologyError::Parse(_)));
    }
}
