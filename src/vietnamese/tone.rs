//! Tone mark extraction and insertion.
//!
//! Vietnamese marks five of its six tones with a combining diacritic placed
//! on one vowel letter of the syllable. This module converts between that
//! surface mark and the [`Tone`] value carried in the tone slot of a
//! [`Syllable`](super::Syllable).
//!
//! Both directions work on Unicode canonical equivalence: characters are
//! decomposed (NFD) to find or drop the mark, and recomposed (NFC) so the
//! output always uses precomposed letters such as `ố` or `ự`.
//!
//! ```rust
//! use cjkvo::vietnamese::tone::{add_tone, extract_tone, Tone};
//!
//! let (tone, rest) = extract_tone("ướ");
//! assert_eq!(tone, Some(Tone::Sac));
//! assert_eq!(rest, "ươ");
//! assert_eq!(add_tone(tone, &rest, false), "ướ");
//! ```

use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use crate::error::SyllableError;

/// A marked Vietnamese tone.
///
/// The unmarked level tone (ngang) is represented by the absence of a tone,
/// i.e. `None` in an `Option<Tone>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Tone {
    /// sắc, acute accent (U+0301), tag `s`
    Sac,
    /// huyền, grave accent (U+0300), tag `f`
    Huyen,
    /// hỏi, hook above (U+0309), tag `r`
    Hoi,
    /// ngã, tilde (U+0303), tag `x`
    Nga,
    /// nặng, dot below (U+0323), tag `j`
    Nang,
}

impl Tone {
    /// All marked tones in tag order `s f r x j`.
    pub const ALL: [Tone; 5] = [Tone::Sac, Tone::Huyen, Tone::Hoi, Tone::Nga, Tone::Nang];

    /// The one-letter tag used in the tone slot.
    pub fn tag(self) -> &'static str {
        match self {
            Tone::Sac => "s",
            Tone::Huyen => "f",
            Tone::Hoi => "r",
            Tone::Nga => "x",
            Tone::Nang => "j",
        }
    }

    /// Parses a one-letter tag.
    pub fn from_tag(tag: &str) -> Option<Tone> {
        match tag {
            "s" => Some(Tone::Sac),
            "f" => Some(Tone::Huyen),
            "r" => Some(Tone::Hoi),
            "x" => Some(Tone::Nga),
            "j" => Some(Tone::Nang),
            _ => None,
        }
    }

    /// The combining diacritic for this tone.
    pub fn mark(self) -> char {
        match self {
            Tone::Sac => '\u{0301}',
            Tone::Huyen => '\u{0300}',
            Tone::Hoi => '\u{0309}',
            Tone::Nga => '\u{0303}',
            Tone::Nang => '\u{0323}',
        }
    }

    /// Maps a combining diacritic back to its tone, if it is a tone mark.
    ///
    /// Other combining marks (circumflex, breve, horn) are vowel quality
    /// marks and return `None`.
    pub fn from_mark(mark: char) -> Option<Tone> {
        match mark {
            '\u{0301}' => Some(Tone::Sac),
            '\u{0300}' => Some(Tone::Huyen),
            '\u{0309}' => Some(Tone::Hoi),
            '\u{0303}' => Some(Tone::Nga),
            '\u{0323}' => Some(Tone::Nang),
            _ => None,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Tone {
    type Err = SyllableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_tag(s).ok_or_else(|| SyllableError::UnknownTone(s.to_string()))
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> String {
        tone.tag().to_string()
    }
}

impl TryFrom<String> for Tone {
    type Error = SyllableError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// Strips the tone mark from `s`.
///
/// Returns the tone found (if any) and the tone-less text in precomposed
/// form. Only one mark is expected per syllable; when several appear the
/// last one wins.
pub fn extract_tone(s: &str) -> (Option<Tone>, String) {
    let mut tone = None;
    let toneless: String = s
        .nfd()
        .filter(|&c| match Tone::from_mark(c) {
            Some(found) => {
                tone = Some(found);
                false
            }
            None => true,
        })
        .collect();

    (tone, toneless.nfc().collect())
}

/// Adds the mark for `tone` to `rest`.
///
/// The mark goes on the first character when `at_beginning` is set and on
/// the last character otherwise. Returns `rest` unchanged when there is no
/// tone.
pub fn add_tone(tone: Option<Tone>, rest: &str, at_beginning: bool) -> String {
    let Some(tone) = tone else {
        return rest.to_string();
    };

    let mut marked = String::with_capacity(rest.len() + 3);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if at_beginning => {
            marked.push(first);
            marked.push(tone.mark());
            marked.extend(chars);
        }
        _ => {
            marked.push_str(rest);
            marked.push(tone.mark());
        }
    }

    marked.nfc().collect()
}
