//! The five-slot syllable record.

use std::fmt;

use super::tone::Tone;
use crate::error::{Result, SyllableError};

/// Borrowed tuple view of a [`Syllable`]: `(initial, glide, nucleus, coda, tone)`.
///
/// The tone is rendered as its one-letter tag.
pub type SyllableTuple<'a> = (
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
);

/// A Vietnamese syllable split into phonological slots.
///
/// The same record carries both the segmented spelling (straight out of
/// [`segment`](super::segment::segment)) and the canonical form produced by
/// [`normalize`](super::normalize::normalize). In canonical form:
///
/// - `initial` uses `k` for c/k/q and `dd` for đ
/// - `glide` is always `w`
/// - `nucleus` is an ASCII code such as `a`, `ia`, `uwa`, `aw` or `ee`
/// - `coda` uses `i`/`u` for the y/o offglides
///
/// Empty strings are never stored; an empty slot is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Syllable {
    /// Onset consonant cluster
    pub initial: Option<String>,
    /// Labial on-glide
    pub glide: Option<String>,
    /// Vowel nucleus
    pub nucleus: Option<String>,
    /// Final consonant or offglide
    pub coda: Option<String>,
    /// Marked tone; `None` is the level tone
    pub tone: Option<Tone>,
}

impl Syllable {
    /// Creates a syllable from borrowed slots.
    ///
    /// Empty strings are stored as `None`.
    pub fn new(
        initial: Option<&str>,
        glide: Option<&str>,
        nucleus: Option<&str>,
        coda: Option<&str>,
        tone: Option<Tone>,
    ) -> Self {
        Self {
            initial: slot(initial),
            glide: slot(glide),
            nucleus: slot(nucleus),
            coda: slot(coda),
            tone,
        }
    }

    /// Returns the slots as a tuple of borrowed strings.
    pub fn as_tuple(&self) -> SyllableTuple<'_> {
        (
            self.initial.as_deref(),
            self.glide.as_deref(),
            self.nucleus.as_deref(),
            self.coda.as_deref(),
            self.tone.map(Tone::tag),
        )
    }

    /// Concatenates the text slots in order.
    pub(crate) fn concat(&self) -> String {
        [&self.initial, &self.glide, &self.nucleus, &self.coda]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn slot(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

impl<'a> TryFrom<SyllableTuple<'a>> for Syllable {
    type Error = SyllableError;

    fn try_from(
        (initial, glide, nucleus, coda, tone): SyllableTuple<'a>,
    ) -> Result<Self> {
        let tone = match tone.filter(|tag| !tag.is_empty()) {
            Some(tag) => Some(tag.parse::<Tone>()?),
            None => None,
        };
        Ok(Syllable::new(initial, glide, nucleus, coda, tone))
    }
}

impl fmt::Display for Syllable {
    /// Formats the slots joined by `_`, e.g. `k_w_a__s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (initial, glide, nucleus, coda, tone) = self.as_tuple();
        write!(
            f,
            "{}_{}_{}_{}_{}",
            initial.unwrap_or_default(),
            glide.unwrap_or_default(),
            nucleus.unwrap_or_default(),
            coda.unwrap_or_default(),
            tone.unwrap_or_default()
        )
    }
}
