//! # cjkvo
//!
//! Syllable decomposition for Vietnamese and Japanese.
//!
//! Each call takes one written syllable and splits it into phonological
//! slots: initial consonant, glide, vowel nucleus, coda and (for
//! Vietnamese) tone.
//!
//! - [`vietnamese`] parses quốc ngữ into a canonical, telex-like form and
//!   spells that form back in standard orthography. Parsing accepts spelling
//!   variants (`hỏa`/`hoả`, `ký`/`kí`); emission always produces one.
//! - [`japanese`] romanizes kana to kunrei-shiki and matches the result
//!   against a fixed syllable grammar.
//!
//! ## Example
//!
//! ```rust
//! use cjkvo::prelude::*;
//!
//! let syllable = parse_vietnamese("muốn").unwrap();
//! assert_eq!(syllable.as_tuple(), (Some("m"), None, Some("ua"), Some("n"), Some("s")));
//! assert_eq!(emit_vietnamese(&syllable).unwrap(), "muốn");
//!
//! let hoa = parse_vietnamese("hỏa").unwrap();
//! assert_eq!(emit_vietnamese(&hoa).unwrap(), "hoả");
//! ```
//!
//! All functions are pure and allocate a fresh record per call, so they can
//! be used from any number of threads without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod vietnamese;

/// Kana romanization and Japanese syllable matching
#[cfg(feature = "japanese")]
pub mod japanese;

pub use error::{Result, SyllableError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{Result, SyllableError};
    pub use crate::vietnamese::{emit_vietnamese, parse_vietnamese, Syllable, Tone};

    #[cfg(feature = "japanese")]
    pub use crate::japanese::{
        parse_japanese, parse_japanese_with, JapaneseSyllable, KunreiRomanizer, Romanizer,
    };
}
