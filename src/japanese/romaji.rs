//! Matching a romanized Japanese syllable against the syllable grammar.
//!
//! The grammar is regular:
//!
//! ```text
//! syllable := initial? medial? nucleus final?
//! initial  := k | g | s | z | t | d | n | h | b | m | r
//! medial   := wy | w | y
//! nucleus  := a | i | u | e | o
//! final    := i | u | ki | ku | ti | tu | hu | mu | n
//! ```
//!
//! No two alternatives of a slot can start the same way as a different slot,
//! so a single left-to-right pass with longest-first lists is enough.

use tracing::debug;

use super::JapaneseSyllable;
use crate::error::{Result, SyllableError};

const INITIALS: &[&str] = &["k", "g", "s", "z", "t", "d", "n", "h", "b", "m", "r"];
const MEDIALS: &[&str] = &["wy", "w", "y"];
const NUCLEI: &[&str] = &["a", "i", "u", "e", "o"];
const FINALS: &[&str] = &["i", "u", "ki", "ku", "ti", "tu", "hu", "mu", "n"];

/// Splits kunrei romaji into initial, medial glide, nucleus and final.
///
/// # Errors
///
/// Returns [`SyllableError::UnparsableRomaji`] if `romaji` is not exactly
/// one syllable of the grammar.
pub fn parse_romaji(romaji: &str) -> Result<JapaneseSyllable> {
    let unparsable = || {
        debug!(romaji, "romaji does not match the syllable grammar");
        SyllableError::UnparsableRomaji(romaji.to_string())
    };

    let (initial, rest) = take_prefix(INITIALS, romaji);
    let (glide, rest) = take_prefix(MEDIALS, rest);
    let (nucleus, rest) = take_prefix(NUCLEI, rest);
    let nucleus = nucleus.ok_or_else(unparsable)?;
    let coda = match rest {
        "" => None,
        _ => Some(FINALS.iter().copied().find(|f| *f == rest).ok_or_else(unparsable)?),
    };

    Ok(JapaneseSyllable {
        initial: initial.map(str::to_string),
        glide: glide.map(str::to_string),
        nucleus: nucleus.to_string(),
        coda: coda.map(str::to_string),
    })
}

fn take_prefix<'a>(options: &[&'static str], s: &'a str) -> (Option<&'static str>, &'a str) {
    options
        .iter()
        .find_map(|option| s.strip_prefix(option).map(|rest| (Some(*option), rest)))
        .unwrap_or((None, s))
}
