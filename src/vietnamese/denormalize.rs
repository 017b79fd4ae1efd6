//! Canonical form back to standard quốc ngữ spelling.
//!
//! The rules here undo [`normalize`](super::normalize::normalize) in reverse
//! order. Where several spellings share one canonical code (`iê`, `yê` and
//! `ya` all become `ia`), the rule picks the standard spelling from the other
//! slots, so emission is single-valued even though parsing accepts variants.

use tracing::{debug, trace};

use super::normalize::rewrite;
use super::tables::TELEX_VOWEL;
use super::tone::add_tone;
use super::types::Syllable;
use crate::error::{Result, SyllableError};

/// Rewrites a canonical syllable into display spelling, in place.
///
/// After this call the tone has been written into the nucleus (or into a
/// bare `gi` initial) and the tone slot is cleared.
///
/// # Errors
///
/// Returns [`SyllableError::MissingNucleus`] if the syllable has no nucleus.
pub fn denormalize(s: &mut Syllable) -> Result<()> {
    if s.nucleus.is_none() {
        debug!(syllable = %s, "cannot denormalize without a nucleus");
        return Err(SyllableError::MissingNucleus(s.to_string()));
    }
    denorm_coda(s);
    denorm_nucleus(s);
    denorm_glide(s);
    denorm_initial(s);
    remove_short_a(s);
    denorm_q(s);
    deduplicate_i(s);
    denorm_tone(s);
    trace!(denormalized = %s, "denormalize");
    Ok(())
}

/// Spells the offglide `i` as `y` after `ă`/`â`, and `u` as `o` after `e`/`a`.
pub fn denorm_coda(s: &mut Syllable) {
    let nucleus = s.nucleus.as_deref();
    let coda = match (s.coda.as_deref(), nucleus) {
        (Some("i"), Some("aw" | "aa")) => "y",
        (Some("u"), Some("e" | "a")) => "o",
        _ => return,
    };
    s.coda = Some(coda.to_string());
}

/// Spells the nucleus, choosing among diphthong variants by context.
pub fn denorm_nucleus(s: &mut Syllable) {
    let has_initial = s.initial.is_some();
    let has_glide = s.glide.is_some();
    let has_coda = s.coda.is_some();

    rewrite(&mut s.nucleus, |code| match code {
        "ia" if (has_glide && has_coda) || !has_initial => Some("yê"),
        "ia" if has_glide => Some("ya"),
        "ia" if has_coda => Some("iê"),
        "uwa" if has_coda => Some("ươ"),
        "uwa" => Some("ưa"),
        "ua" if has_coda => Some("uô"),
        // `y` spells a whole-syllable `i` and the `uy` rime; elsewhere the
        // standard spelling is `i` (kí, lí, hi).
        "i" if !(has_initial || has_coda) || has_glide => Some("y"),
        _ => TELEX_VOWEL.get(code).copied(),
    });
}

/// Spells the glide `o` before open vowels and `u` before the others.
pub fn denorm_glide(s: &mut Syllable) {
    if s.glide.is_none() {
        return;
    }
    match s.nucleus.as_deref().and_then(|n| n.chars().next()) {
        Some('a' | 'ă' | 'e') => s.glide = Some("o".to_string()),
        Some('y' | 'ê' | 'ơ' | 'â') => s.glide = Some("u".to_string()),
        _ => {}
    }
}

/// Chooses `gh`/`ngh`, `q`/`c`/`k` and `đ` by the following letters.
pub fn denorm_initial(s: &mut Syllable) {
    let first = s.nucleus.as_deref().and_then(|n| n.chars().next());
    let has_glide = s.glide.is_some();
    let front = matches!(first, Some('i' | 'e' | 'ê'));

    rewrite(&mut s.initial, |initial| match initial {
        "g" if front => Some("gh"),
        "ng" if front => Some("ngh"),
        "k" if has_glide => Some("q"),
        "k" if !matches!(first, Some('y' | 'i' | 'e' | 'ê')) => Some("c"),
        "dd" => Some("đ"),
        _ => None,
    });
}

/// Drops the short-a mark where the `y`/`u` coda already implies it.
pub fn remove_short_a(s: &mut Syllable) {
    if s.nucleus.as_deref() == Some("ă") && matches!(s.coda.as_deref(), Some("y" | "u")) {
        s.nucleus = Some("a".to_string());
    }
}

/// Merges initial `q` and its glide back into `qu`.
pub fn denorm_q(s: &mut Syllable) {
    if s.initial.as_deref() == Some("q") && s.glide.is_some() {
        s.initial = Some("qu".to_string());
        s.glide = None;
    }
}

/// Collapses `gi` + `i` into a bare `gi` that carries the tone itself.
pub fn deduplicate_i(s: &mut Syllable) {
    if s.initial.as_deref() == Some("gi") && s.nucleus.as_deref() == Some("i") {
        s.initial = Some(add_tone(s.tone.take(), "gi", false));
        s.nucleus = None;
    }
}

/// Writes the tone mark onto the nucleus.
///
/// Open syllables take the mark on the first nucleus letter (`mùa`, `hoà`);
/// closed syllables on the last (`muốn`, `quyển`).
pub fn denorm_tone(s: &mut Syllable) {
    let at_beginning = s.coda.is_none();
    if let Some(nucleus) = s.nucleus.as_mut() {
        if let Some(tone) = s.tone.take() {
            *nucleus = add_tone(Some(tone), nucleus, at_beginning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vietnamese::tone::Tone;

    fn nucleus_of(initial: Option<&str>, glide: Option<&str>, nucleus: &str, coda: Option<&str>) -> String {
        let mut s = Syllable::new(initial, glide, Some(nucleus), coda, None);
        denorm_nucleus(&mut s);
        s.nucleus.unwrap()
    }

    #[test]
    fn test_denorm_coda() {
        let mut s = Syllable::new(Some("t"), None, Some("aw"), Some("i"), None);
        denorm_coda(&mut s);
        assert_eq!(s.coda.as_deref(), Some("y"));

        let mut s = Syllable::new(Some("h"), None, Some("e"), Some("u"), None);
        denorm_coda(&mut s);
        assert_eq!(s.coda.as_deref(), Some("o"));

        let mut s = Syllable::new(None, None, Some("a"), Some("i"), None);
        denorm_coda(&mut s);
        assert_eq!(s.coda.as_deref(), Some("i"));
    }

    #[test]
    fn test_denorm_ia_variants() {
        assert_eq!(nucleus_of(Some("k"), Some("w"), "ia", Some("n")), "yê");
        assert_eq!(nucleus_of(None, None, "ia", Some("u")), "yê");
        assert_eq!(nucleus_of(Some("kh"), Some("w"), "ia", None), "ya");
        assert_eq!(nucleus_of(Some("th"), None, "ia", Some("n")), "iê");
        assert_eq!(nucleus_of(Some("k"), None, "ia", None), "ia");
    }

    #[test]
    fn test_denorm_back_diphthongs() {
        assert_eq!(nucleus_of(Some("n"), None, "uwa", Some("c")), "ươ");
        assert_eq!(nucleus_of(Some("b"), None, "uwa", None), "ưa");
        assert_eq!(nucleus_of(Some("m"), None, "ua", Some("n")), "uô");
        assert_eq!(nucleus_of(Some("m"), None, "ua", None), "ua");
    }

    #[test]
    fn test_denorm_i() {
        assert_eq!(nucleus_of(None, None, "i", None), "y");
        assert_eq!(nucleus_of(Some("h"), Some("w"), "i", None), "y");
        assert_eq!(nucleus_of(Some("k"), None, "i", None), "i");
        assert_eq!(nucleus_of(None, None, "i", Some("n")), "i");
    }

    #[test]
    fn test_denorm_vowels() {
        assert_eq!(nucleus_of(None, None, "aw", Some("n")), "ă");
        assert_eq!(nucleus_of(None, None, "oo", Some("n")), "ô");
    }

    #[test]
    fn test_denorm_glide() {
        let mut s = Syllable::new(Some("h"), Some("w"), Some("ă"), Some("ng"), None);
        denorm_glide(&mut s);
        assert_eq!(s.glide.as_deref(), Some("o"));

        let mut s = Syllable::new(Some("th"), Some("w"), Some("ê"), None, None);
        denorm_glide(&mut s);
        assert_eq!(s.glide.as_deref(), Some("u"));
    }

    #[test]
    fn test_denorm_initial() {
        let cases = [
            ("g", None, "e", "gh"),
            ("ng", None, "iê", "ngh"),
            ("k", Some("o"), "a", "q"),
            ("k", None, "a", "c"),
            ("k", None, "i", "k"),
            ("dd", None, "â", "đ"),
        ];
        for (initial, glide, nucleus, expected) in cases {
            let mut s = Syllable::new(Some(initial), glide, Some(nucleus), None, None);
            denorm_initial(&mut s);
            assert_eq!(s.initial.as_deref(), Some(expected), "{initial} before {nucleus}");
        }
    }

    #[test]
    fn test_deduplicate_i() {
        let mut s = Syllable::new(Some("gi"), None, Some("i"), None, Some(Tone::Huyen));
        deduplicate_i(&mut s);
        assert_eq!(s.as_tuple(), (Some("gì"), None, None, None, None));
    }

    #[test]
    fn test_denorm_tone_position() {
        let mut s = Syllable::new(Some("m"), None, Some("ua"), None, Some(Tone::Huyen));
        denorm_tone(&mut s);
        assert_eq!(s.nucleus.as_deref(), Some("ùa"));

        let mut s = Syllable::new(Some("m"), None, Some("uô"), Some("n"), Some(Tone::Sac));
        denorm_tone(&mut s);
        assert_eq!(s.nucleus.as_deref(), Some("uố"));
        assert_eq!(s.tone, None);
    }

    #[test]
    fn test_missing_nucleus() {
        let mut s = Syllable::new(Some("k"), None, None, None, None);
        assert!(matches!(denormalize(&mut s), Err(SyllableError::MissingNucleus(_))));
    }
}
