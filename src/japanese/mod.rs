//! Japanese syllable decomposition.
//!
//! A kana syllable is romanized to kunrei-shiki, lightly normalized, and
//! matched against a fixed syllable grammar (see [`romaji`]). Unlike the
//! Vietnamese engine this is one-directional: there is no emission step.
//!
//! ```rust
//! use cjkvo::japanese::parse_japanese;
//!
//! let syllable = parse_japanese("きょう").unwrap();
//! assert_eq!(syllable.as_tuple(), (Some("k"), Some("y"), "o", Some("u")));
//! ```

pub mod kana;
pub mod romaji;

pub use kana::{KunreiRomanizer, Romanizer};
pub use romaji::parse_romaji;

use tracing::debug;

use crate::error::Result;

/// A Japanese syllable split into initial, medial glide, vowel and final.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct JapaneseSyllable {
    /// Onset consonant
    pub initial: Option<String>,
    /// Medial glide: `w`, `y` or `wy`
    pub glide: Option<String>,
    /// Vowel nucleus
    pub nucleus: String,
    /// Syllable final: a vowel offglide, `n`, or a historical `ki ku ti tu hu mu`
    pub coda: Option<String>,
}

impl JapaneseSyllable {
    /// Returns the slots as `(initial, glide, nucleus, final)`.
    pub fn as_tuple(&self) -> (Option<&str>, Option<&str>, &str, Option<&str>) {
        (
            self.initial.as_deref(),
            self.glide.as_deref(),
            &self.nucleus,
            self.coda.as_deref(),
        )
    }
}

/// Parses a kana (or already romanized) syllable with [`KunreiRomanizer`].
///
/// # Errors
///
/// Returns [`SyllableError::UnparsableRomaji`](crate::SyllableError::UnparsableRomaji)
/// if the romanized text does not match the syllable grammar.
pub fn parse_japanese(text: &str) -> Result<JapaneseSyllable> {
    parse_japanese_with(&KunreiRomanizer, text)
}

/// Parses a syllable using a caller-supplied romanizer.
///
/// # Errors
///
/// Returns [`SyllableError::UnparsableRomaji`](crate::SyllableError::UnparsableRomaji)
/// if the romanized text does not match the syllable grammar.
pub fn parse_japanese_with<R: Romanizer + ?Sized>(romanizer: &R, text: &str) -> Result<JapaneseSyllable> {
    let romaji = romanizer.romanize(text);
    let normalized = normalize_glides(&normalize_romaji(&romaji));
    let syllable = parse_romaji(&normalized)?;
    debug!(input = text, romaji = %normalized, ?syllable, "parse_japanese");
    Ok(syllable)
}

/// Evens out spellings some kunrei romanizers emit for `ディ` and `フ`.
fn normalize_romaji(romaji: &str) -> String {
    romaji.replace("dyi", "di").replace("fu", "hu")
}

/// Contracts full-size glide spellings (`クワ` → `kuwa`, `キヤ` → `kiya`).
fn normalize_glides(romaji: &str) -> String {
    romaji.replace("uw", "w").replace("iy", "y")
}
