//! Spelling-variant to canonical form.
//!
//! [`normalize`] applies a fixed sequence of rewrite rules to a segmented
//! [`Syllable`]. The order matters: later rules read slots that earlier rules
//! have already rewritten (e.g. `add_short_a` must see the coda as written,
//! before `norm_coda` folds `y` into `i`).
//!
//! Every rule is guarded by a membership test on the current slot values, so
//! running the pipeline over an already canonical syllable changes nothing,
//! with one exception: canonical `a` + `u` (spelled `ao`) looks exactly like
//! the spelled rime `au`, and a second pass turns it into `aw` + `u`.

use tracing::{debug, trace};

use super::tables::{CODA_CANONICAL, INITIAL_CANONICAL, NUCLEUS_TELEX};
use super::tone::extract_tone;
use super::types::Syllable;
use crate::error::{Result, SyllableError};

/// Rewrites a segmented syllable into canonical form, in place.
///
/// # Errors
///
/// Returns [`SyllableError::MissingNucleus`] if no nucleus can be located
/// once tone marks have been extracted.
pub fn normalize(s: &mut Syllable) -> Result<()> {
    norm_tone(s);
    duplicate_i(s);
    if s.nucleus.is_none() {
        debug!(syllable = %s, "no nucleus after segmentation");
        return Err(SyllableError::MissingNucleus(s.to_string()));
    }
    norm_q(s);
    add_short_a(s);
    norm_initial(s);
    norm_glide(s);
    norm_nucleus(s);
    norm_coda(s);
    trace!(normalized = %s, "normalize");
    Ok(())
}

/// Moves the tone mark into the tone slot.
///
/// The mark is normally on the nucleus. Some spellings (`hỏa`, `túy`) put it
/// on the glide instead; the glide is only consulted when the nucleus is
/// unmarked.
pub fn norm_tone(s: &mut Syllable) {
    if let Some(nucleus) = s.nucleus.take() {
        let (tone, rest) = extract_tone(&nucleus);
        if tone.is_some() {
            s.tone = tone;
        }
        s.nucleus = Some(rest).filter(|n| !n.is_empty());
    }
    if s.tone.is_none() {
        if let Some(glide) = s.glide.as_mut() {
            let (tone, rest) = extract_tone(glide);
            if tone.is_some() {
                s.tone = tone;
                *glide = rest;
            }
        }
    }
}

/// Gives a bare `gi` syllable (`gì`, `gin`) an explicit `i` nucleus.
///
/// Any tone written on the `gi` initial moves to the tone slot.
pub fn duplicate_i(s: &mut Syllable) {
    if s.nucleus.is_some() {
        return;
    }
    if let Some(initial) = s.initial.as_deref() {
        let (tone, toneless) = extract_tone(initial);
        if toneless == "gi" {
            s.initial = Some(toneless);
            s.nucleus = Some("i".to_string());
            if tone.is_some() {
                s.tone = tone;
            }
        }
    }
}

/// Splits the `qu` initial into initial `q` and glide `w`.
pub fn norm_q(s: &mut Syllable) {
    if s.initial.as_deref() == Some("qu") {
        s.initial = Some("q".to_string());
        s.glide = Some("w".to_string());
    }
}

/// Marks the short `a` that is only visible through a `y` or `u` coda.
pub fn add_short_a(s: &mut Syllable) {
    if s.nucleus.as_deref() == Some("a") && matches!(s.coda.as_deref(), Some("y" | "u")) {
        s.nucleus = Some("ă".to_string());
    }
}

/// Folds initial spelling variants (`ngh`, `c`, `q`, `gh`, `đ`).
pub fn norm_initial(s: &mut Syllable) {
    rewrite(&mut s.initial, |initial| INITIAL_CANONICAL.get(initial).copied());
}

/// Replaces any glide letter with the canonical marker `w`.
pub fn norm_glide(s: &mut Syllable) {
    if s.glide.is_some() {
        s.glide = Some("w".to_string());
    }
}

/// Rewrites the nucleus into its ASCII code.
pub fn norm_nucleus(s: &mut Syllable) {
    rewrite(&mut s.nucleus, |nucleus| NUCLEUS_TELEX.get(nucleus).copied());
}

/// Folds the `y`/`o` offglides into `i`/`u`.
pub fn norm_coda(s: &mut Syllable) {
    rewrite(&mut s.coda, |coda| CODA_CANONICAL.get(coda).copied());
}

pub(super) fn rewrite(slot: &mut Option<String>, lookup: impl FnOnce(&str) -> Option<&'static str>) {
    if let Some(replacement) = slot.as_deref().and_then(lookup) {
        *slot = Some(replacement.to_string());
    }
}
