//! Arabic Orthographic Normalization
//!
//! Canonicalizes Arabic-script text for search and NLP pipelines:
//! - Tatweel (kashida) removal
//! - Diacritics (tashkeel) stripping, preserving hamza marks
//! - Hamza-seat composition for decomposed input
//! - Alef, hamza, alef-maksura and teh-marbuta folding
//! - Parallel batch normalization for corpora
//!
//! All passes are pure, total functions: any Unicode input is accepted and
//! non-targeted code points pass through untouched, so mixed-script text is
//! always safe to feed in.

pub mod chars;

mod batch;
mod normalizer;

pub use batch::{BatchConfig, BatchNormalizer};
pub use chars::{is_diacritic, is_standard_letter, validate_tables, TableError};
pub use normalizer::{
    compose_hamza_seats, fold_nonstandard_alef, mask_non_arabic, remove_diacritics,
    remove_tatweel, Normalizer, NormalizerConfig, TehMarbutaStyle,
};
