//! Vietnamese syllable segmentation, normalization and emission.
//!
//! A written quốc ngữ syllable goes through three stages:
//!
//! 1. [`segment()`] splits it into initial, glide, nucleus and coda exactly as
//!    spelled.
//! 2. [`normalize()`] rewrites the slots into one canonical form: ASCII
//!    telex-like vowel codes (`ươ` → `uwa`, `ê` → `ee`), canonical initials
//!    (`c`/`q` → `k`, `đ` → `dd`), the glide marker `w`, and an explicit
//!    [`Tone`].
//! 3. [`denormalize()`] reverses the rewrite, picking the standard spelling
//!    for each slot from its neighbours and putting the tone mark back on
//!    the right vowel.
//!
//! [`parse_vietnamese`] runs stages 1 and 2; [`emit_vietnamese`] runs
//! stage 3. The pair canonicalizes: nonstandard spellings such as `hỏa`
//! parse to the same syllable as `hoả` and are emitted as `hoả`.
//!
//! # Example
//!
//! ```rust
//! use cjkvo::vietnamese::{emit_vietnamese, parse_vietnamese};
//!
//! let syllable = parse_vietnamese("Nghiêm").unwrap();
//! assert_eq!(syllable.as_tuple(), (Some("ng"), None, Some("ia"), Some("m"), None));
//! assert_eq!(emit_vietnamese(&syllable).unwrap(), "nghiêm");
//! ```
//!
//! The engine is a mechanical transform. It does not check that a
//! combination of slots is a real Vietnamese syllable.

pub mod denormalize;
pub mod normalize;
pub mod segment;
pub mod tables;
pub mod tone;
pub mod types;

pub use denormalize::denormalize;
pub use normalize::normalize;
pub use segment::segment;
pub use tone::{add_tone, extract_tone, Tone};
pub use types::{Syllable, SyllableTuple};

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Parses a written syllable into its canonical slots.
///
/// The input is composed to NFC and lowercased first, so `Ý`, `ý` and
/// `y\u{301}` all parse the same way.
///
/// # Errors
///
/// - [`SyllableError::Segmentation`](crate::SyllableError::Segmentation) if
///   the text is not a single syllable
/// - [`SyllableError::MissingNucleus`](crate::SyllableError::MissingNucleus)
///   if no vowel nucleus can be found
pub fn parse_vietnamese(text: &str) -> Result<Syllable> {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    let mut syllable = segment(&lowered)?;
    normalize(&mut syllable)?;
    debug!(input = text, parsed = %syllable, "parse_vietnamese");
    Ok(syllable)
}

/// Spells a canonical syllable in standard quốc ngữ.
///
/// # Errors
///
/// Returns [`SyllableError::MissingNucleus`](crate::SyllableError::MissingNucleus)
/// if the syllable has no nucleus.
pub fn emit_vietnamese(syllable: &Syllable) -> Result<String> {
    let mut spelled = syllable.clone();
    denormalize(&mut spelled)?;
    let text = spelled.concat();
    debug!(syllable = %syllable, emitted = %text, "emit_vietnamese");
    Ok(text)
}
