//! Mora segmentation and phonological classification for Japanese
//! pitch-accent dictionary data.

pub mod accent;
pub mod dataset;
pub mod mora;
pub mod phonology;
pub mod segment;
pub mod settings;
pub mod unicode;

pub use mora::{split_words, AccentDigit, Mora, MoraLengthError};
pub use phonology::{Classification, FinalFeatures, PhonologyError, PhonologyTables};
pub use segment::{morae, split_mora, SegmentError};
