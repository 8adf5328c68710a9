//! Arabic Orthographic Normalization
//!
//! Provides the individual normalization passes and the composite
//! [`Normalizer`] pipeline:
//! - Tatweel (kashida) removal
//! - Diacritics (tashkeel) stripping
//! - Hamza-seat composition for decomposed input
//! - Letter folding (alef, hamza, alef maksura, teh marbuta)
//!
//! Every pass is a total function over arbitrary Unicode text: code points
//! a pass does not target flow through unchanged, in order.

use serde::{Deserialize, Serialize};

use crate::chars::{
    is_diacritic, is_standard_letter, ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MAKSURA,
    ALEF_VARIANTS, ALEF_WASLA, HAMZA, HAMZA_ABOVE, HAMZA_BELOW, HAMZA_VARIANTS, HEH, TATWEEL,
    TEH_MARBUTA, YEH,
};

/// Remove every tatweel (elongation) character.
///
/// The tatweel stretches words for justification or emphasis and carries no
/// meaning, e.g. `جـــمـــيـــل` for `جميل`, so it is simply deleted.
/// Absent input stays distinct from empty input at the call site:
/// `opt.map(remove_tatweel)` maps `None` to `None`.
pub fn remove_tatweel(text: &str) -> String {
    text.chars().filter(|&c| c != TATWEEL).collect()
}

/// Strip vocalization marks (tashkeel).
///
/// The combining hamza marks U+0654/U+0655 are letter material, not
/// vocalization, and survive this pass. Run [`compose_hamza_seats`] first
/// when the input may contain decomposed hamza seats, so the marks end up
/// inside precomposed letters rather than floating after a bare alef.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Collapse a bare alef followed by a combining hamza mark into the
/// precomposed seat letter: `ا` + U+0654 becomes `أ`, `ا` + U+0655
/// becomes `إ`.
///
/// A mark left decomposed would survive stripping here (the hamza marks
/// are exempt) but would still be invisible to the letter-folding tables,
/// which only know the precomposed seats. Composition must therefore run
/// before any other pass. A hamza mark with no preceding bare alef passes
/// through unchanged.
pub fn compose_hamza_seats(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ALEF {
            match chars.peek() {
                Some(&HAMZA_ABOVE) => {
                    chars.next();
                    result.push(ALEF_HAMZA_ABOVE);
                    continue;
                }
                Some(&HAMZA_BELOW) => {
                    chars.next();
                    result.push(ALEF_HAMZA_BELOW);
                    continue;
                }
                _ => {}
            }
        }
        result.push(c);
    }

    result
}

/// Replace alef wasla (U+0671), found in Qur'anic and classical
/// orthography, with bare alef.
pub fn fold_nonstandard_alef(text: &str) -> String {
    text.chars()
        .map(|c| if c == ALEF_WASLA { ALEF } else { c })
        .collect()
}

/// Replace every code point outside the standard letter range with a
/// single ASCII space.
///
/// Pre-cleaning step for raw corpora. One space per replaced code point;
/// runs are not collapsed.
pub fn mask_non_arabic(text: &str) -> String {
    text.chars()
        .map(|c| if is_standard_letter(c) { c } else { ' ' })
        .collect()
}

/// Direction of the teh-marbuta / heh folding.
///
/// The two letters are conflated in informal writing and the folding is
/// lossy either way, so exactly one direction applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TehMarbutaStyle {
    /// Fold `ة` to `ه` everywhere, dropping the feminine marker.
    TehMarbutaToHeh,
    /// Fold `ه` to `ة`, but only in word-final position.
    FinalHehToTehMarbuta,
}

impl Default for TehMarbutaStyle {
    fn default() -> Self {
        TehMarbutaStyle::TehMarbutaToHeh
    }
}

/// Configuration for the composite [`Normalizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Remove tatweel (kashida)
    pub remove_tatweel: bool,
    /// Strip vocalization marks (tashkeel)
    pub remove_diacritics: bool,
    /// Fold alef variants to bare alef
    pub normalize_alef: bool,
    /// Fold hamza seats to the standalone hamza
    pub normalize_hamza: bool,
    /// Fold alef maksura to yeh
    pub normalize_alef_maksura: bool,
    /// Fold teh marbuta / heh
    pub normalize_teh_marbuta: bool,
    /// Folding direction used when `normalize_teh_marbuta` is on
    pub teh_marbuta_style: TehMarbutaStyle,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            remove_tatweel: true,
            remove_diacritics: true,
            normalize_alef: true,
            normalize_hamza: true,
            normalize_alef_maksura: true,
            normalize_teh_marbuta: true,
            teh_marbuta_style: TehMarbutaStyle::default(),
        }
    }
}

impl NormalizerConfig {
    /// Removal passes only: tatweel and diacritics, no letter folding.
    pub fn strip_only() -> Self {
        Self {
            remove_tatweel: true,
            remove_diacritics: true,
            normalize_alef: false,
            normalize_hamza: false,
            normalize_alef_maksura: false,
            normalize_teh_marbuta: false,
            teh_marbuta_style: TehMarbutaStyle::default(),
        }
    }

    /// Letter folding only, keeping tatweel and diacritics in place.
    pub fn fold_only() -> Self {
        Self {
            remove_tatweel: false,
            remove_diacritics: false,
            normalize_alef: true,
            normalize_hamza: true,
            normalize_alef_maksura: true,
            normalize_teh_marbuta: true,
            teh_marbuta_style: TehMarbutaStyle::default(),
        }
    }
}

/// Composite Arabic normalizer.
///
/// Applies, in a fixed order: hamza-seat composition, alef-wasla folding,
/// then per configuration tatweel removal, diacritic stripping, and the
/// letter substitutions. Only composition-before-stripping is semantically
/// required; the enabled letter passes target disjoint code-point sets, so
/// their relative order cannot change the result. The full order is fixed
/// anyway so identical inputs always produce identical outputs.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Get the normalizer configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        let text = compose_hamza_seats(text);
        let mut result = String::with_capacity(text.len());

        for c in text.chars() {
            // Wasla folding is unconditional: the letter is nonstandard
            // orthography, not a variant a caller would opt to keep.
            if c == ALEF_WASLA {
                result.push(ALEF);
                continue;
            }

            if self.config.remove_tatweel && c == TATWEEL {
                continue;
            }

            if self.config.remove_diacritics && is_diacritic(c) {
                continue;
            }

            if self.config.normalize_alef && ALEF_VARIANTS.contains(&c) {
                result.push(ALEF);
                continue;
            }

            if self.config.normalize_hamza && HAMZA_VARIANTS.contains(&c) {
                result.push(HAMZA);
                continue;
            }

            if self.config.normalize_alef_maksura && c == ALEF_MAKSURA {
                result.push(YEH);
                continue;
            }

            if self.config.normalize_teh_marbuta
                && self.config.teh_marbuta_style == TehMarbutaStyle::TehMarbutaToHeh
                && c == TEH_MARBUTA
            {
                result.push(HEH);
                continue;
            }

            result.push(c);
        }

        // The reverse teh-marbuta direction needs lookahead over the text as
        // the other passes left it, so it runs as its own trailing pass.
        if self.config.normalize_teh_marbuta
            && self.config.teh_marbuta_style == TehMarbutaStyle::FinalHehToTehMarbuta
        {
            fold_final_heh(&result)
        } else {
            result
        }
    }
}

/// Fold `ه` to `ة` in word-final position only. A heh is word-final when
/// the next code point is absent or is not a word character.
fn fold_final_heh(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == HEH && chars.peek().map_or(true, |&next| !is_word_char(next)) {
            result.push(TEH_MARBUTA);
        } else {
            result.push(c);
        }
    }

    result
}

fn is_word_char(c: char) -> bool {
    is_standard_letter(c) || c.is_alphanumeric()
}
