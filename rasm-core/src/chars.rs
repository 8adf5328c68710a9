//! Arabic Character Classes
//!
//! Code-point constants, range predicates, and the substitution tables
//! used by the normalization passes.

/// Standalone hamza (ء).
pub const HAMZA: char = '\u{0621}';
/// Alef with madda above (آ).
pub const ALEF_MADDA: char = '\u{0622}';
/// Alef with hamza above (أ).
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
/// Waw with hamza above (ؤ).
pub const WAW_HAMZA: char = '\u{0624}';
/// Alef with hamza below (إ).
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
/// Yeh with hamza above (ئ).
pub const YEH_HAMZA: char = '\u{0626}';
/// Bare alef (ا).
pub const ALEF: char = '\u{0627}';
/// Teh marbuta (ة).
pub const TEH_MARBUTA: char = '\u{0629}';
/// Tatweel, the decorative elongation character (ـ).
pub const TATWEEL: char = '\u{0640}';
/// Heh (ه).
pub const HEH: char = '\u{0647}';
/// Alef maksura (ى).
pub const ALEF_MAKSURA: char = '\u{0649}';
/// Yeh (ي).
pub const YEH: char = '\u{064A}';
/// Combining hamza above, the decomposed form of a hamza seat.
pub const HAMZA_ABOVE: char = '\u{0654}';
/// Combining hamza below.
pub const HAMZA_BELOW: char = '\u{0655}';
/// Alef wasla (ٱ), Qur'anic orthography.
pub const ALEF_WASLA: char = '\u{0671}';

/// Alef variants folded to bare alef.
pub const ALEF_VARIANTS: &[char] = &[
    ALEF_MADDA,
    ALEF_HAMZA_ABOVE,
    ALEF_HAMZA_BELOW,
    ALEF_WASLA,
];

/// Hamza-carrying seat letters folded to the standalone hamza.
pub const HAMZA_VARIANTS: &[char] = &[WAW_HAMZA, YEH_HAMZA];

/// Check if a character is a standard Arabic letter (U+0621..=U+064A).
///
/// The range includes tatweel (U+0640), which sits in the middle of the
/// letter block and has always been part of the reference letter table.
#[inline]
pub fn is_standard_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{064A}')
}

/// Check if a character is a strippable vocalization mark (tashkeel).
///
/// Covers the combining-mark block U+064B..=U+065F, except the two hamza
/// marks U+0654/U+0655: those carry consonant information and are composed
/// onto their seat letter instead of being stripped. Marks outside the
/// block, such as superscript alef (U+0670), are left unhandled.
#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}') && c != HAMZA_ABOVE && c != HAMZA_BELOW
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("code point U+{0:04X} is classified both as a diacritic and as letter-substitution material")]
    DiacriticOverlap(u32),

    #[error("code point U+{0:04X} appears on the input side of more than one substitution table")]
    SubstitutionOverlap(u32),
}

/// Validate the character tables against each other.
///
/// No code point may be both a strippable diacritic and substitution
/// material (either side), the substitution tables must be pairwise
/// disjoint on their input sides, and the combining hamza marks consumed
/// by seat composition must not be strippable. The tables are constants,
/// so one passing run (the test suite) validates every build.
pub fn validate_tables() -> Result<(), TableError> {
    let input_tables: [&[char]; 4] = [
        ALEF_VARIANTS,
        HAMZA_VARIANTS,
        &[ALEF_MAKSURA],
        &[TEH_MARBUTA, HEH],
    ];
    let outputs = [ALEF, HAMZA, YEH, HEH, TEH_MARBUTA];

    let mut seen: Vec<char> = Vec::new();
    for table in input_tables {
        for &c in table {
            if is_diacritic(c) {
                return Err(TableError::DiacriticOverlap(c as u32));
            }
            if seen.contains(&c) {
                return Err(TableError::SubstitutionOverlap(c as u32));
            }
            seen.push(c);
        }
    }

    for c in outputs {
        if is_diacritic(c) {
            return Err(TableError::DiacriticOverlap(c as u32));
        }
    }

    for c in [HAMZA_ABOVE, HAMZA_BELOW] {
        if is_diacritic(c) {
            return Err(TableError::DiacriticOverlap(c as u32));
        }
    }

    Ok(())
}
