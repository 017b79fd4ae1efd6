//! Error types for syllable parsing and emission.

use thiserror::Error;

/// Errors that can occur while decomposing or reconstructing a syllable.
///
/// Every variant is terminal for the call that produced it: no partial
/// syllable is returned alongside the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyllableError {
    /// The input cannot be split into initial, rime and coda.
    ///
    /// This happens when the text is not a single isolated syllable, for
    /// example when it contains whitespace or control characters.
    #[error("Error segmenting Vietnamese syllable {0:?}")]
    Segmentation(String),

    /// A nucleus is required but absent.
    ///
    /// Raised by normalization when no vowel nucleus could be located, and
    /// by denormalization when the record handed in has no nucleus.
    #[error("No nucleus in Vietnamese syllable {0}")]
    MissingNucleus(String),

    /// The romanized Japanese syllable does not match the syllable grammar.
    #[error("Unable to parse romaji: {0}")]
    UnparsableRomaji(String),

    /// A tone tag outside the `s f r x j` alphabet.
    #[error("Unknown tone tag {0:?}")]
    UnknownTone(String),
}

/// A specialized `Result` type for syllable operations.
pub type Result<T> = std::result::Result<T, SyllableError>;
