//! Static spelling tables for the Vietnamese engine.
//!
//! Cluster lists are ordered longest first so that a linear scan returns the
//! longest match (`ngh` before `ng` before `n`). Lookup tables that the
//! denormalizer needs in the reverse direction are inverted once, on first
//! use.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Initial consonant clusters, longest first.
///
/// `gi` is listed with every tone mark because it is the only initial that
/// can absorb the tone of a syllable whose vowel it also spells (`gì`).
pub const INITIALS: &[&str] = &[
    "ngh", "ch", "gh", "gi", "gí", "gì", "gỉ", "gĩ", "gị", "kh", "ng", "nh", "ph", "qu", "th",
    "tr", "b", "c", "d", "đ", "g", "h", "k", "l", "m", "n", "r", "s", "t", "v", "x",
];

/// Final consonant clusters, longest first.
pub const CODAS: &[&str] = &["ch", "ng", "nh", "c", "m", "n", "p", "t"];

/// Letters that can close an open rime as an offglide.
pub const SEMIVOWELS: &[char] = &['i', 'o', 'u', 'y'];

/// Tone-less rimes whose first letter is a labial glide.
pub const GLIDE_DIGRAPHS: &[&str] = &["oa", "oă", "oe", "uy", "uê", "uơ", "uâ"];

/// Diphthong spellings and their canonical codes.
pub const DIPHTHONG_TELEX: &[(&str, &str)] = &[
    ("iê", "ia"),
    ("yê", "ia"),
    ("ya", "ia"),
    ("ưa", "uwa"),
    ("ươ", "uwa"),
    ("uô", "ua"),
];

/// Single vowels with quality marks and their canonical codes.
pub const VOWEL_TELEX: &[(&str, &str)] = &[
    ("ă", "aw"),
    ("â", "aa"),
    ("ơ", "ow"),
    ("ư", "uw"),
    ("ê", "ee"),
    ("ô", "oo"),
];

/// Spelling variants of initials and their canonical forms.
pub const INITIAL_ALTERNATES: &[(&str, &str)] = &[
    ("ngh", "ng"),
    ("c", "k"),
    ("q", "k"),
    ("gh", "g"),
    ("đ", "dd"),
];

/// Spelling variants of offglide codas and their canonical forms.
pub const CODA_ALTERNATES: &[(&str, &str)] = &[("y", "i"), ("o", "u")];

lazy_static! {
    /// Every nucleus spelling that normalizes to a different code.
    pub static ref NUCLEUS_TELEX: FxHashMap<&'static str, &'static str> = {
        let mut map = FxHashMap::default();
        map.insert("y", "i");
        map.extend(DIPHTHONG_TELEX.iter().copied());
        map.extend(VOWEL_TELEX.iter().copied());
        map
    };

    /// Canonical single-vowel codes back to their marked letters.
    pub static ref TELEX_VOWEL: FxHashMap<&'static str, &'static str> =
        VOWEL_TELEX.iter().map(|&(vowel, code)| (code, vowel)).collect();

    /// Initial spelling variants, keyed by spelling.
    pub static ref INITIAL_CANONICAL: FxHashMap<&'static str, &'static str> =
        INITIAL_ALTERNATES.iter().copied().collect();

    /// Coda spelling variants, keyed by spelling.
    pub static ref CODA_CANONICAL: FxHashMap<&'static str, &'static str> =
        CODA_ALTERNATES.iter().copied().collect();
}
