//! The five-tone calculator and combining-diacritic placement.
//!
//! Thai tone is a joint function of the initial consonant's class, the
//! liveness of the syllable, the vowel length and any explicit tone mark.
//! The romanized output carries the tone as a combining diacritic on the
//! first vowel grapheme of the syllable.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::thai::orthography::{is_roman_vowel, ToneClass};

/// One of the five Thai tones. Mid is unmarked in Paiboon; the other four
/// carry a combining diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Mid,
    Low,
    High,
    Falling,
    Rising,
}

impl Tone {
    /// The combining mark for this tone, or `None` for mid.
    pub fn combining_mark(self) -> Option<char> {
        match self {
            Tone::Mid => None,
            Tone::Low => Some('\u{0300}'),     // grave
            Tone::High => Some('\u{0301}'),    // acute
            Tone::Falling => Some('\u{0302}'), // circumflex
            Tone::Rising => Some('\u{030C}'),  // caron
        }
    }
}

/// Vowel sounds written with a doubled letter are long; ัว (ua) is long
/// despite its single-letter spelling.
pub fn vowel_is_long(vowel: &str) -> bool {
    const LONG: [&str; 9] = ["aa", "ii", "uu", "ʉʉ", "ee", "ɛɛ", "oo", "ɔɔ", "əə"];
    LONG.iter().any(|lv| vowel.contains(lv)) || vowel == "ua"
}

/// Liveness of an open syllable. Long vowels and true diphthongs are live;
/// a bare short vowel is dead. "ai" and "ao" count short for length but
/// live here.
fn open_syllable_live(vowel: &str) -> bool {
    if vowel_is_long(vowel) || matches!(vowel, "ai" | "ao" | "ua") {
        return true;
    }
    let n = vowel.chars().count();
    match vowel.chars().last() {
        Some('i') | Some('o') => n > 1,
        Some('m') | Some('n') => true,
        _ => false,
    }
}

/// Liveness of a full syllable given its romanized final and vowel.
/// Stops are dead, sonorants and off-glides are live, and with no final
/// the vowel decides.
pub fn is_live(final_sound: &str, vowel: &str) -> bool {
    match final_sound {
        "p" | "t" | "k" => false,
        "m" | "n" | "ng" | "i" | "o" => true,
        _ => open_syllable_live(vowel),
    }
}

/// The tone of a syllable.
///
/// Without an explicit mark the inherent rules apply; with a mark the
/// mark's table applies, except that mai tri and mai jattawa are only
/// honored on mid-class syllables and otherwise fall back to the inherent
/// tone.
pub fn tone_of(
    class: ToneClass,
    live: bool,
    long_vowel: bool,
    tone_mark: Option<char>,
) -> Tone {
    let inherent = match (class, live) {
        (ToneClass::Mid, true) => Tone::Mid,
        (ToneClass::Mid, false) => Tone::Low,
        (ToneClass::High, true) => Tone::Rising,
        (ToneClass::High, false) => Tone::Low,
        (ToneClass::Low, true) => Tone::Mid,
        (ToneClass::Low, false) => {
            if long_vowel {
                Tone::Falling
            } else {
                Tone::High
            }
        }
    };

    match tone_mark {
        None => inherent,
        Some('่') => match class {
            ToneClass::Low => Tone::Falling,
            _ => Tone::Low,
        },
        Some('้') => match class {
            ToneClass::Low => Tone::High,
            _ => Tone::Falling,
        },
        Some('๊') => match class {
            ToneClass::Mid => Tone::High,
            _ => inherent,
        },
        Some('๋') => match class {
            ToneClass::Mid => Tone::Rising,
            _ => inherent,
        },
        Some(_) => inherent,
    }
}

/// Attach the tone's combining mark to a romanized syllable and return the
/// NFC form.
///
/// The mark lands immediately after the first grapheme cluster whose base
/// character is a vowel, so an existing combining sequence on that base is
/// preserved. Iteration is over grapheme clusters, not code points.
pub fn apply_tone(roman: &str, tone: Tone) -> String {
    let mark = match tone.combining_mark() {
        Some(m) => m,
        None => return roman.nfc().collect(),
    };

    let mut out = String::with_capacity(roman.len() + 2);
    let mut placed = false;
    for g in roman.graphemes(true) {
        out.push_str(g);
        if !placed && g.chars().next().map(is_roman_vowel).unwrap_or(false) {
            out.push(mark);
            placed = true;
        }
    }
    out.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherent_tones() {
        // mid class
        assert_eq!(tone_of(ToneClass::Mid, true, true, None), Tone::Mid);
        assert_eq!(tone_of(ToneClass::Mid, false, false, None), Tone::Low);
        // high class
        assert_eq!(tone_of(ToneClass::High, true, true, None), Tone::Rising);
        assert_eq!(tone_of(ToneClass::High, false, false, None), Tone::Low);
        // low class: dead splits on vowel length
        assert_eq!(tone_of(ToneClass::Low, true, true, None), Tone::Mid);
        assert_eq!(tone_of(ToneClass::Low, false, false, None), Tone::High);
        assert_eq!(tone_of(ToneClass::Low, false, true, None), Tone::Falling);
    }

    #[test]
    fn test_mai_ek() {
        assert_eq!(tone_of(ToneClass::Low, true, true, Some('่')), Tone::Falling);
        assert_eq!(tone_of(ToneClass::Mid, true, true, Some('่')), Tone::Low);
        assert_eq!(tone_of(ToneClass::High, true, true, Some('่')), Tone::Low);
    }

    #[test]
    fn test_mai_tho() {
        assert_eq!(tone_of(ToneClass::Low, true, true, Some('้')), Tone::High);
        assert_eq!(tone_of(ToneClass::Mid, true, true, Some('้')), Tone::Falling);
        assert_eq!(tone_of(ToneClass::High, true, true, Some('้')), Tone::Falling);
    }

    #[test]
    fn test_mai_tri_and_jattawa_only_bind_mid_class() {
        assert_eq!(tone_of(ToneClass::Mid, false, false, Some('๊')), Tone::High);
        assert_eq!(tone_of(ToneClass::Mid, true, true, Some('๋')), Tone::Rising);
        // ignored elsewhere: inherent tone applies
        assert_eq!(tone_of(ToneClass::Low, true, true, Some('๊')), Tone::Mid);
        assert_eq!(tone_of(ToneClass::High, true, true, Some('๋')), Tone::Rising);
    }

    #[test]
    fn test_liveness() {
        assert!(!is_live("t", "e"));
        assert!(!is_live("k", "o"));
        assert!(is_live("ng", "ɛɛ"));
        assert!(is_live("m", "a"));
        assert!(is_live("i", "ɔɔ"));
        // open syllables
        assert!(is_live("", "aa"));
        assert!(is_live("", "ai"));
        assert!(is_live("", "ao"));
        assert!(is_live("", "iao"));
        assert!(is_live("", "am"));
        assert!(!is_live("", "a"));
        assert!(!is_live("", "ɛ"));
        assert!(!is_live("", "i"));
    }

    #[test]
    fn test_vowel_length() {
        assert!(vowel_is_long("aa"));
        assert!(vowel_is_long("ʉʉa"));
        assert!(vowel_is_long("ɔɔ"));
        assert!(vowel_is_long("ua"));
        assert!(!vowel_is_long("ai"));
        assert!(!vowel_is_long("ao"));
        assert!(!vowel_is_long("a"));
        assert!(!vowel_is_long("iao"));
    }

    #[test]
    fn test_apply_tone_on_first_vowel() {
        assert_eq!(apply_tone("dɛɛng", Tone::Mid), "dɛɛng");
        let low = apply_tone("het", Tone::Low);
        assert_eq!(low, "hèt".nfc().collect::<String>());
        // the mark follows the first vowel grapheme, not the last
        let falling = apply_tone("pɔɔ", Tone::Falling);
        assert_eq!(falling, "pɔ\u{0302}ɔ");
        let rising = apply_tone("kiao", Tone::Rising);
        assert_eq!(rising, "kǐao".nfc().collect::<String>());
    }

    #[test]
    fn test_apply_tone_output_is_nfc() {
        for tone in [Tone::Low, Tone::High, Tone::Falling, Tone::Rising] {
            let r = apply_tone("maa", tone);
            assert_eq!(r, r.nfc().collect::<String>());
        }
    }
}
