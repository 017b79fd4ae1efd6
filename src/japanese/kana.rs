//! Kana to kunrei-shiki romanization.
//!
//! [`KunreiRomanizer`] is the romanizer used by
//! [`parse_japanese`](super::parse_japanese). It reads hiragana and katakana
//! (hiragana is folded to katakana first) and writes kunrei-shiki romaji:
//! `シ` → `si`, `チ` → `ti`, `ツ` → `tu`, `フ` → `hu`, `ジ` → `zi`.
//!
//! Historical spellings found in on'yomi readings are kept distinct:
//! `クヮ` → `kwa`, `ヰ` → `wi`, `ヱ` → `we`, `ヲ` → `wo`.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Converts text to kunrei-style romaji.
///
/// Implement this to plug a different romanization routine into
/// [`parse_japanese_with`](super::parse_japanese_with). The output is
/// expected to be lowercase ASCII in kunrei-shiki conventions.
pub trait Romanizer {
    /// Romanizes `text`. Characters the romanizer does not know are passed
    /// through.
    fn romanize(&self, text: &str) -> String;
}

/// Table-driven kana romanizer producing kunrei-shiki.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KunreiRomanizer;

impl Romanizer for KunreiRomanizer {
    fn romanize(&self, text: &str) -> String {
        let kana: Vec<char> = text.chars().map(hiragana_to_katakana).collect();
        let mut out = String::with_capacity(text.len() * 2);
        let mut geminate = false;
        let mut i = 0;

        while i < kana.len() {
            let c = kana[i];

            if c == SOKUON {
                geminate = true;
                i += 1;
                continue;
            }

            let (romaji, consumed) = match lookup_kana(&kana[i..]) {
                Some(found) => found,
                None if c == CHOONPU => {
                    let vowel = out.chars().last().filter(|v| VOWELS.contains(v));
                    out.extend(vowel);
                    i += 1;
                    continue;
                }
                None => {
                    flush_sokuon(&mut out, &mut geminate);
                    out.extend(c.to_lowercase());
                    i += 1;
                    continue;
                }
            };

            if geminate {
                match romaji.chars().next() {
                    Some(first) if !VOWELS.contains(&first) && first != 'n' => out.push(first),
                    _ => out.push_str(SOKUON_ALONE),
                }
                geminate = false;
            }
            out.push_str(romaji);
            i += consumed;
        }

        flush_sokuon(&mut out, &mut geminate);
        out
    }
}

const SOKUON: char = 'ッ';
const CHOONPU: char = 'ー';
const VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o'];

/// A small tsu that cannot double a following consonant is read as `ツ`.
const SOKUON_ALONE: &str = "tu";

fn flush_sokuon(out: &mut String, geminate: &mut bool) {
    if *geminate {
        out.push_str(SOKUON_ALONE);
        *geminate = false;
    }
}

/// Folds hiragana onto the katakana block.
fn hiragana_to_katakana(c: char) -> char {
    match c {
        'ぁ'..='ゖ' | 'ゝ' | 'ゞ' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Longest kana sequence at the start of `kana` with a romanization.
fn lookup_kana(kana: &[char]) -> Option<(&'static str, usize)> {
    if let [first, second, ..] = kana {
        let pair: String = [*first, *second].iter().collect();
        if let Some(romaji) = DIGRAPHS.get(pair.as_str()) {
            return Some((*romaji, 2));
        }
    }
    let first = kana.first()?;
    MONOGRAPHS.get(first).map(|romaji| (*romaji, 1))
}

/// Two-kana sequences: yōon, historical `クヮ`, and loanword combinations.
#[rustfmt::skip]
const DIGRAPH_TABLE: &[(&str, &str)] = &[
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("シャ", "sya"), ("シュ", "syu"), ("ショ", "syo"),
    ("チャ", "tya"), ("チュ", "tyu"), ("チョ", "tyo"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("ジャ", "zya"), ("ジュ", "zyu"), ("ジョ", "zyo"),
    ("ヂャ", "dya"), ("ヂュ", "dyu"), ("ヂョ", "dyo"),
    ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
    ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
    ("クヮ", "kwa"), ("グヮ", "gwa"),
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"),
    ("ティ", "ti"), ("ディ", "dyi"), ("トゥ", "tu"), ("ドゥ", "du"),
    ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"),
];

/// Single kana. Small kana outside a digraph read as their full-size form.
#[rustfmt::skip]
const MONOGRAPH_TABLE: &[(char, &str)] = &[
    ('ア', "a"), ('イ', "i"), ('ウ', "u"), ('エ', "e"), ('オ', "o"),
    ('カ', "ka"), ('キ', "ki"), ('ク', "ku"), ('ケ', "ke"), ('コ', "ko"),
    ('サ', "sa"), ('シ', "si"), ('ス', "su"), ('セ', "se"), ('ソ', "so"),
    ('タ', "ta"), ('チ', "ti"), ('ツ', "tu"), ('テ', "te"), ('ト', "to"),
    ('ナ', "na"), ('ニ', "ni"), ('ヌ', "nu"), ('ネ', "ne"), ('ノ', "no"),
    ('ハ', "ha"), ('ヒ', "hi"), ('フ', "hu"), ('ヘ', "he"), ('ホ', "ho"),
    ('マ', "ma"), ('ミ', "mi"), ('ム', "mu"), ('メ', "me"), ('モ', "mo"),
    ('ヤ', "ya"), ('ユ', "yu"), ('ヨ', "yo"),
    ('ラ', "ra"), ('リ', "ri"), ('ル', "ru"), ('レ', "re"), ('ロ', "ro"),
    ('ワ', "wa"), ('ヰ', "wi"), ('ヱ', "we"), ('ヲ', "wo"), ('ン', "n"),
    ('ガ', "ga"), ('ギ', "gi"), ('グ', "gu"), ('ゲ', "ge"), ('ゴ', "go"),
    ('ザ', "za"), ('ジ', "zi"), ('ズ', "zu"), ('ゼ', "ze"), ('ゾ', "zo"),
    ('ダ', "da"), ('ヂ', "di"), ('ヅ', "du"), ('デ', "de"), ('ド', "do"),
    ('バ', "ba"), ('ビ', "bi"), ('ブ', "bu"), ('ベ', "be"), ('ボ', "bo"),
    ('パ', "pa"), ('ピ', "pi"), ('プ', "pu"), ('ペ', "pe"), ('ポ', "po"),
    ('ヴ', "vu"),
    ('ァ', "a"), ('ィ', "i"), ('ゥ', "u"), ('ェ', "e"), ('ォ', "o"),
    ('ャ', "ya"), ('ュ', "yu"), ('ョ', "yo"), ('ヮ', "wa"),
    ('ヵ', "ka"), ('ヶ', "ke"),
];

lazy_static! {
    static ref DIGRAPHS: FxHashMap<&'static str, &'static str> =
        DIGRAPH_TABLE.iter().copied().collect();
    static ref MONOGRAPHS: FxHashMap<char, &'static str> =
        MONOGRAPH_TABLE.iter().copied().collect();
}
