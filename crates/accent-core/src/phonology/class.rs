use std::fmt;

use serde::{Serialize, Serializer};

/// Label used for the "no onset" / "no vowel" marker in authored tables and
/// serialized output.
pub const NONE_LABEL: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O];

    pub fn label(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::I => "i",
            Vowel::U => "u",
            Vowel::E => "e",
            Vowel::O => "o",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    K,
    S,
    T,
    N,
    H,
    M,
    Y,
    R,
    W,
    G,
    Z,
    D,
    B,
    P,
}

impl Consonant {
    pub const ALL: [Consonant; 14] = [
        Consonant::K,
        Consonant::S,
        Consonant::T,
        Consonant::N,
        Consonant::H,
        Consonant::M,
        Consonant::Y,
        Consonant::R,
        Consonant::W,
        Consonant::G,
        Consonant::Z,
        Consonant::D,
        Consonant::B,
        Consonant::P,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Consonant::K => "k",
            Consonant::S => "s",
            Consonant::T => "t",
            Consonant::N => "n",
            Consonant::H => "h",
            Consonant::M => "m",
            Consonant::Y => "y",
            Consonant::R => "r",
            Consonant::W => "w",
            Consonant::G => "g",
            Consonant::Z => "z",
            Consonant::D => "d",
            Consonant::B => "b",
            Consonant::P => "p",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// What a mora starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    /// A bare vowel mora.
    Vowel(Vowel),
    Consonant(Consonant),
    /// Characters that never carry an onset: ン, ッ, small kana, ー and the
    /// word delimiter.
    NoOnset,
}

impl Onset {
    pub fn label(self) -> &'static str {
        match self {
            Onset::Vowel(v) => v.label(),
            Onset::Consonant(c) => c.label(),
            Onset::NoOnset => NONE_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == NONE_LABEL {
            return Some(Onset::NoOnset);
        }
        Vowel::from_label(label)
            .map(Onset::Vowel)
            .or_else(|| Consonant::from_label(label).map(Onset::Consonant))
    }

    /// True iff the mora is itself a vowel with no leading consonant.
    pub fn is_vowel(self) -> bool {
        matches!(self, Onset::Vowel(_))
    }
}

/// The vowel quality a mora ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelEnd {
    Vowel(Vowel),
    /// ン, ッ and the non-phonetic marks carry no vowel quality.
    NoVowel,
}

impl VowelEnd {
    pub fn label(self) -> &'static str {
        match self {
            VowelEnd::Vowel(v) => v.label(),
            VowelEnd::NoVowel => NONE_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == NONE_LABEL {
            return Some(VowelEnd::NoVowel);
        }
        Vowel::from_label(label).map(VowelEnd::Vowel)
    }
}

macro_rules! label_impls {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }
        )*
    };
}

label_impls!(Vowel, Consonant, Onset, VowelEnd);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onset_labels_round_trip() {
        for v in Vowel::ALL {
            assert_eq!(Onset::from_label(v.label()), Some(Onset::Vowel(v)));
        }
        for c in Consonant::ALL {
            assert_eq!(Onset::from_label(c.label()), Some(Onset::Consonant(c)));
        }
        assert_eq!(Onset::from_label("none"), Some(Onset::NoOnset));
        assert_eq!(Onset::from_label("x"), None);
        assert_eq!(Onset::from_label(""), None);
    }

    #[test]
    fn test_vowel_end_labels() {
        assert_eq!(VowelEnd::from_label("o"), Some(VowelEnd::Vowel(Vowel::O)));
        assert_eq!(VowelEnd::from_label("none"), Some(VowelEnd::NoVowel));
        assert_eq!(VowelEnd::from_label("k"), None);
    }

    #[test]
    fn test_is_vowel() {
        assert!(Onset::Vowel(Vowel::A).is_vowel());
        assert!(!Onset::Consonant(Consonant::G).is_vowel());
        assert!(!Onset::NoOnset.is_vowel());
    }

    #[test]
    fn test_serialize_as_label() {
        assert_eq!(
            serde_json::to_string(&Onset::Consonant(Consonant::G)).unwrap(),
            "\"g\""
        );
        assert_eq!(serde_json::to_string(&VowelEnd::NoVowel).unwrap(), "\"none\"");
    }
}
