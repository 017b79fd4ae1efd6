//! Property-based tests for the Vietnamese engine using proptest
//!
//! The corpus strategies draw from syllables in standard spelling, so that
//! the round-trip properties can be checked exactly.

use cjkvo::vietnamese::{
    add_tone, emit_vietnamese, extract_tone, normalize, parse_vietnamese, segment, Tone,
};
use proptest::prelude::*;

const STANDARD: &[&str] = &[
    "qua", "hoa", "hoay", "khoẻ", "nhoà", "nguy", "thuê", "thuở", "khuấy", "khuya", "quyển",
    "hoằng", "huỷ", "ý", "khỉ", "ca", "kia", "kem", "cơm", "nga", "nghe", "nghiêm", "ga", "ghét",
    "đâu", "đường", "thiên", "muốn", "mùa", "nước", "bữa", "tay", "ai", "heo", "táo", "sau",
    "tuổi", "ăn", "yêu", "gì", "gìn", "giường", "giữ", "việt", "nam", "tiếng", "người", "chữ",
    "quốc", "ngữ", "phở", "trăng", "xanh", "lửa", "mẹ", "cười", "khoai", "uống", "oán",
];

const NONSTANDARD: &[(&str, &str)] = &[("hỏa", "hoả"), ("túy", "tuý"), ("ký", "kí")];

const VOWELS: &[&str] = &["a", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư", "y"];

fn standard_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STANDARD)
}

fn tone_strategy() -> impl Strategy<Value = Tone> {
    prop::sample::select(Tone::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: standard spellings survive parse then emit unchanged
    #[test]
    fn prop_standard_round_trip(word in standard_strategy()) {
        let parsed = parse_vietnamese(word).unwrap();
        prop_assert_eq!(emit_vietnamese(&parsed).unwrap(), word);
    }

    /// Property: uppercase input parses like lowercase input
    #[test]
    fn prop_case_insensitive(word in standard_strategy()) {
        prop_assert_eq!(
            parse_vietnamese(&word.to_uppercase()).unwrap(),
            parse_vietnamese(word).unwrap()
        );
    }

    /// Property: emission canonicalizes, so reparsing its output is stable
    #[test]
    fn prop_emit_is_canonical(index in 0..NONSTANDARD.len()) {
        let (variant, standard) = NONSTANDARD[index];
        let parsed = parse_vietnamese(variant).unwrap();
        let emitted = emit_vietnamese(&parsed).unwrap();
        prop_assert_eq!(&emitted, standard);
        prop_assert_eq!(parse_vietnamese(&emitted).unwrap(), parsed);
    }

    /// Property: normalizing a canonical syllable again changes nothing
    ///
    /// Canonical `a` + `u` (spelled `ao`) is excluded: it coincides with the
    /// spelled rime `au`.
    #[test]
    fn prop_normalize_idempotent(word in standard_strategy()) {
        let once = parse_vietnamese(word).unwrap();
        prop_assume!(!(once.nucleus.as_deref() == Some("a") && once.coda.as_deref() == Some("u")));

        let mut twice = once.clone();
        normalize(&mut twice).unwrap();
        prop_assert_eq!(twice, once);
    }

    /// Property: a tone mark on the last letter is restored exactly
    #[test]
    fn prop_tone_inverse(
        prefix in "[bcdđghklmnpqrstvx]{0,3}",
        vowel in prop::sample::select(VOWELS),
        tone in tone_strategy(),
    ) {
        let marked = format!("{}{}", prefix, add_tone(Some(tone), vowel, false));
        let (extracted, rest) = extract_tone(&marked);
        prop_assert_eq!(extracted, Some(tone));
        prop_assert_eq!(&rest, &format!("{}{}", prefix, vowel));
        prop_assert_eq!(add_tone(extracted, &rest, false), marked);
    }

    /// Property: parsing arbitrary text never panics, and every success has a nucleus
    #[test]
    fn prop_parse_total(text in "\\PC{0,6}") {
        if let Ok(parsed) = parse_vietnamese(&text) {
            prop_assert!(parsed.nucleus.is_some());
            prop_assert!(emit_vietnamese(&parsed).is_ok());
        }
    }

    /// Property: segmentation keeps every letter of a standard syllable
    #[test]
    fn prop_segment_is_lossless(word in standard_strategy()) {
        let segmented = segment(word).unwrap();
        let rebuilt: String = [
            &segmented.initial,
            &segmented.glide,
            &segmented.nucleus,
            &segmented.coda,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
        prop_assert_eq!(rebuilt, word);
    }
}
