//! Input text normalization.
//!
//! Real-world Thai text arrives with subtitle artifacts and sequence
//! irregularities that would otherwise derail the syllable parser: byte
//! order marks, Aegisub line breaks, zero-width segmentation hints, two
//! sara e spelled instead of sara ae, decomposed sara am, and tone marks
//! typed before the vowel they follow. The pipeline runs this once per
//! input before tokenization.

use unicode_normalization::UnicodeNormalization;

use crate::thai::orthography::{is_medial_vowel, is_tone_mark, NIKHAHIT};

const BOM: char = '\u{FEFF}';
const ZERO_WIDTH_SPACE: char = '\u{200B}';
const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const WORD_JOINER: char = '\u{2060}';

/// Sara am as written: the nikhahit + sara aa pair collapses to it.
const SARA_AM: char = '\u{0E33}';
const SARA_AA: char = '\u{0E32}';
const SARA_E: char = '\u{0E40}';
const SARA_AE: char = '\u{0E41}';

/// Normalize a whole input line for the pipeline.
///
/// Subtitle `\N` breaks become spaces, invisible segmentation characters
/// are dropped, Thai mark sequences are repaired and the result is NFC.
pub fn normalize_text(text: &str) -> String {
    let text = text.replace("\\N", " ");
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(*c, BOM | ZERO_WIDTH_SPACE | ZERO_WIDTH_NON_JOINER | WORD_JOINER))
        .collect();
    normalize_thai_marks(&cleaned).nfc().collect()
}

/// Repair Thai mark sequences without touching anything else:
/// เ + เ → แ, nikhahit + า → ำ, tone mark typed before its medial vowel,
/// and doubled tone marks or medials.
pub fn normalize_thai_marks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        // two sara e in a row spell sara ae
        if c == SARA_E && next == Some(SARA_E) {
            out.push(SARA_AE);
            i += 2;
            continue;
        }
        // decomposed sara am, with or without a tone mark typed between
        // the nikhahit and the aa
        if c == NIKHAHIT {
            if next == Some(SARA_AA) {
                out.push(SARA_AM);
                i += 2;
                continue;
            }
            if let (Some(t), Some(a)) = (next, chars.get(i + 2).copied()) {
                if is_tone_mark(t) && a == SARA_AA {
                    out.push(t);
                    out.push(SARA_AM);
                    i += 3;
                    continue;
                }
            }
        }
        // tone mark typed before an above/below vowel: swap into canon
        // order. Following vowels (า ะ ำ) legitimately come after the
        // tone mark, as in น่า or น้ำ.
        if is_tone_mark(c) {
            if let Some(n) = next {
                if matches!(n, 'ั' | 'ิ' | 'ี' | 'ึ' | 'ื' | 'ุ' | 'ู') {
                    out.push(n);
                    out.push(c);
                    i += 2;
                    continue;
                }
            }
            // doubled tone mark
            if out.last().copied().map(is_tone_mark).unwrap_or(false) {
                i += 1;
                continue;
            }
        }
        // doubled medial vowel (ีี and friends, a common typo); า is
        // legitimate twice only across syllables, never adjacent
        if is_medial_vowel(c) && c != SARA_AA && out.last() == Some(&c) {
            i += 1;
            continue;
        }

        out.push(c);
        i += 1;
    }

    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_invisible_characters() {
        assert_eq!(normalize_text("\u{FEFF}แดง\u{200B}นอน"), "แดงนอน");
    }

    #[test]
    fn test_subtitle_breaks_become_spaces() {
        assert_eq!(normalize_text("แดง\\Nนอน"), "แดง นอน");
    }

    #[test]
    fn test_two_sara_e_become_sara_ae() {
        assert_eq!(normalize_thai_marks("เเดง"), "แดง");
    }

    #[test]
    fn test_decomposed_sara_am() {
        assert_eq!(normalize_thai_marks("นํ้า"), "น้ำ");
    }

    #[test]
    fn test_tone_mark_reordered_after_vowel() {
        // typed ่ + ี instead of ี + ่
        assert_eq!(normalize_thai_marks("น่ี"), "นี่");
    }

    #[test]
    fn test_tone_before_following_vowel_is_left_alone() {
        for s in ["น่า", "เก่า", "น้ำ", "ก่อน"] {
            assert_eq!(normalize_thai_marks(s), s);
        }
    }

    #[test]
    fn test_doubled_marks_collapse() {
        assert_eq!(normalize_thai_marks("นี้้"), "นี้");
        assert_eq!(normalize_thai_marks("ชีีวิต"), "ชีวิต");
    }

    #[test]
    fn test_plain_text_unchanged() {
        for s in ["สวัสดี", "แดง นอน", "hello", ""] {
            assert_eq!(normalize_text(s), s);
        }
    }
}
