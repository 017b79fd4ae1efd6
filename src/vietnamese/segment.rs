//! Splitting a written syllable into slots.
//!
//! Segmentation is non-destructive: every letter of the input ends up in
//! exactly one slot, still spelled the way it was written. Tone marks stay
//! where they were typed (usually on the nucleus, sometimes on the glide or
//! on a `gi` initial) and are moved into the tone slot later by
//! [`normalize`](super::normalize::normalize).

use tracing::{debug, trace};

use super::tables::{CODAS, GLIDE_DIGRAPHS, INITIALS, SEMIVOWELS};
use super::tone::extract_tone;
use super::types::Syllable;
use crate::error::{Result, SyllableError};

/// Segments a lowercased syllable into initial, glide, nucleus and coda.
///
/// The tone slot is left unset; any tone mark remains embedded in the slot
/// whose letter carries it.
///
/// # Errors
///
/// Returns [`SyllableError::Segmentation`] if `s` is not a single isolated
/// syllable (it contains whitespace or control characters).
pub fn segment(s: &str) -> Result<Syllable> {
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        debug!(syllable = s, "refusing to segment");
        return Err(SyllableError::Segmentation(s.to_string()));
    }

    let (initial, rest) = match_initial(s);
    let (mut rime, mut coda) = match_coda(rest);
    let mut glide = None;

    if !rime.is_empty() {
        let (_, toneless) = extract_tone(rime);
        if toneless.starts_with("uy") {
            let (first, remainder) = split_first(rime);
            glide = Some(first);
            rime = remainder;
        }
        if coda.is_none() {
            let (semivowel, remainder) = extract_semivowel(rime);
            coda = semivowel;
            rime = remainder;
        }
        if glide.is_none() {
            let (digraph_glide, remainder) = extract_glide(rime);
            glide = digraph_glide;
            rime = remainder;
        }
    }

    let syllable = Syllable::new(initial, glide, Some(rime), coda, None);
    trace!(input = s, segmented = %syllable, "segment");
    Ok(syllable)
}

/// Longest initial cluster that prefixes `s`, and the remaining text.
fn match_initial(s: &str) -> (Option<&str>, &str) {
    INITIALS
        .iter()
        .find_map(|initial| s.strip_prefix(initial).map(|rest| (Some(*initial), rest)))
        .unwrap_or((None, s))
}

/// Longest coda cluster that suffixes `s`, and the text before it.
fn match_coda(s: &str) -> (&str, Option<&str>) {
    CODAS
        .iter()
        .find_map(|coda| s.strip_suffix(coda).map(|rest| (rest, Some(*coda))))
        .unwrap_or((s, None))
}

/// Splits a trailing `i o u y` offglide off a rime of two or more letters.
fn extract_semivowel(s: &str) -> (Option<&str>, &str) {
    match s.char_indices().last() {
        Some((idx, last)) if idx > 0 && SEMIVOWELS.contains(&last) => (Some(&s[idx..]), &s[..idx]),
        _ => (None, s),
    }
}

/// Splits the glide off a two-letter glide digraph such as `oa` or `uê`.
fn extract_glide(s: &str) -> (Option<&str>, &str) {
    let (_, toneless) = extract_tone(s);
    if GLIDE_DIGRAPHS.contains(&toneless.as_str()) {
        let (first, rest) = split_first(s);
        (Some(first), rest)
    } else {
        (None, s)
    }
}

/// Splits a non-empty string after its first character.
fn split_first(s: &str) -> (&str, &str) {
    let idx = s.chars().next().map_or(0, char::len_utf8);
    s.split_at(idx)
}
