//! Static orthography tables for Thai script.
//!
//! Everything in here is immutable reference data: consonant romanizations
//! for initial and final position, the three tone classes, the closed list
//! of accepted two-consonant onset clusters, and the code-point sets that
//! classify leading vowels, medial vowels, tone marks and special marks.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Thanthakhat, the silent-consonant marker.
pub const THANTHAKHAT: char = '\u{0E4C}';
/// Mai taikhu, the vowel shortener.
pub const MAI_TAIKHU: char = '\u{0E47}';
/// Mai yamok, the repetition mark.
pub const MAI_YAMOK: char = '\u{0E46}';
/// Nikhahit, the circle above (part of decomposed sara am).
pub const NIKHAHIT: char = '\u{0E4D}';

lazy_static! {
    /// Consonant romanization in syllable-initial position.
    pub static ref INITIAL_CONSONANTS: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('ก', "g");
        m.insert('ข', "k");
        m.insert('ฃ', "k");
        m.insert('ค', "k");
        m.insert('ฅ', "k");
        m.insert('ฆ', "k");
        m.insert('ง', "ng");
        m.insert('จ', "j");
        m.insert('ฉ', "ch");
        m.insert('ช', "ch");
        m.insert('ซ', "s");
        m.insert('ฌ', "ch");
        m.insert('ญ', "y");
        m.insert('ฎ', "d");
        m.insert('ฏ', "dt");
        m.insert('ฐ', "t");
        m.insert('ฑ', "t");
        m.insert('ฒ', "t");
        m.insert('ณ', "n");
        m.insert('ด', "d");
        m.insert('ต', "dt");
        m.insert('ถ', "t");
        m.insert('ท', "t");
        m.insert('ธ', "t");
        m.insert('น', "n");
        m.insert('บ', "b");
        m.insert('ป', "bp");
        m.insert('ผ', "p");
        m.insert('ฝ', "f");
        m.insert('พ', "p");
        m.insert('ฟ', "f");
        m.insert('ภ', "p");
        m.insert('ม', "m");
        m.insert('ย', "y");
        m.insert('ร', "r");
        m.insert('ฤ', "rʉ");
        m.insert('ล', "l");
        m.insert('ฦ', "lʉ");
        m.insert('ว', "w");
        m.insert('ศ', "s");
        m.insert('ษ', "s");
        m.insert('ส', "s");
        m.insert('ห', "h");
        m.insert('ฬ', "l");
        m.insert('อ', "");
        m.insert('ฮ', "h");
        m
    };

    /// Consonant romanization in syllable-final position. Stops collapse to
    /// p/t/k, sonorants keep their place of articulation, ย and ว become
    /// off-glides. ฤ and ฦ never occur as finals and have no entry.
    pub static ref FINAL_CONSONANTS: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('ก', "k");
        m.insert('ข', "k");
        m.insert('ฃ', "k");
        m.insert('ค', "k");
        m.insert('ฅ', "k");
        m.insert('ฆ', "k");
        m.insert('ง', "ng");
        m.insert('จ', "t");
        m.insert('ฉ', "t");
        m.insert('ช', "t");
        m.insert('ซ', "t");
        m.insert('ฌ', "t");
        m.insert('ญ', "n");
        m.insert('ฎ', "t");
        m.insert('ฏ', "t");
        m.insert('ฐ', "t");
        m.insert('ฑ', "t");
        m.insert('ฒ', "t");
        m.insert('ณ', "n");
        m.insert('ด', "t");
        m.insert('ต', "t");
        m.insert('ถ', "t");
        m.insert('ท', "t");
        m.insert('ธ', "t");
        m.insert('น', "n");
        m.insert('บ', "p");
        m.insert('ป', "p");
        m.insert('ผ', "p");
        m.insert('ฝ', "p");
        m.insert('พ', "p");
        m.insert('ฟ', "p");
        m.insert('ภ', "p");
        m.insert('ม', "m");
        m.insert('ย', "i");
        m.insert('ร', "n");
        m.insert('ล', "n");
        m.insert('ว', "o");
        m.insert('ศ', "t");
        m.insert('ษ', "t");
        m.insert('ส', "t");
        m.insert('ห', "");
        m.insert('ฬ', "n");
        m.insert('อ', "");
        m.insert('ฮ', "");
        m
    };

    /// High-class consonants.
    pub static ref HIGH_CLASS: HashSet<char> =
        "ขฃฉฐถผฝศษสห".chars().collect();

    /// Mid-class consonants. Every consonant in neither set is low class.
    pub static ref MID_CLASS: HashSet<char> =
        "กจฎฏดตบปอ".chars().collect();

    /// Accepted two-consonant onset clusters and their romanizations.
    /// ทร, สร, ศร and ซร are the Sanskrit-derived clusters that collapse
    /// to a plain /s/.
    pub static ref CLUSTERS: HashMap<(char, char), &'static str> = {
        let mut m = HashMap::new();
        m.insert(('ก', 'ร'), "gr");
        m.insert(('ก', 'ล'), "gl");
        m.insert(('ก', 'ว'), "gw");
        m.insert(('ข', 'ร'), "kr");
        m.insert(('ข', 'ล'), "kl");
        m.insert(('ข', 'ว'), "kw");
        m.insert(('ค', 'ร'), "kr");
        m.insert(('ค', 'ล'), "kl");
        m.insert(('ค', 'ว'), "kw");
        m.insert(('ป', 'ร'), "bpr");
        m.insert(('ป', 'ล'), "bpl");
        m.insert(('พ', 'ร'), "pr");
        m.insert(('พ', 'ล'), "pl");
        m.insert(('ผ', 'ล'), "pl");
        m.insert(('ฟ', 'ร'), "fr");
        m.insert(('ฟ', 'ล'), "fl");
        m.insert(('ต', 'ร'), "dtr");
        m.insert(('ท', 'ร'), "s");
        m.insert(('ด', 'ร'), "dr");
        m.insert(('บ', 'ร'), "br");
        m.insert(('บ', 'ล'), "bl");
        m.insert(('ส', 'ร'), "s");
        m.insert(('ศ', 'ร'), "s");
        m.insert(('ซ', 'ร'), "s");
        m.insert(('ส', 'ว'), "sw");
        m.insert(('ซ', 'ว'), "sw");
        m
    };

    /// Consonants that pair with a silent leading ห. The ห contributes
    /// nothing to the sound but forces the syllable into the high class.
    pub static ref H_CLUSTER_SECONDS: HashSet<char> =
        "รลมนวยง".chars().collect();

    /// Vowels written before the consonant they belong to.
    pub static ref LEADING_VOWELS: HashSet<char> = "เแโไใ".chars().collect();

    /// Vowels written after, above or below the initial consonant.
    pub static ref MEDIAL_VOWELS: HashSet<char> = "ะัาิีึืุูๅำ".chars().collect();

    /// The four explicit tone marks.
    pub static ref TONE_MARKS: HashSet<char> = "่้๊๋".chars().collect();

    /// Mai taikhu, thanthakhat, nikhahit and mai yamok.
    pub static ref SPECIAL_MARKS: HashSet<char> = "็์ํๆ".chars().collect();

    static ref CONSONANTS: HashSet<char> =
        "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรฤลฦวศษสหฬอฮ".chars().collect();
}

/// Tone class of an initial consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneClass {
    High,
    Mid,
    Low,
}

/// Tone class of a single consonant. Consonants outside the high and mid
/// sets are low class; non-consonants default to mid.
pub fn tone_class(c: char) -> ToneClass {
    if HIGH_CLASS.contains(&c) {
        ToneClass::High
    } else if MID_CLASS.contains(&c) || !is_consonant(c) {
        ToneClass::Mid
    } else {
        ToneClass::Low
    }
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

pub fn is_leading_vowel(c: char) -> bool {
    LEADING_VOWELS.contains(&c)
}

pub fn is_medial_vowel(c: char) -> bool {
    MEDIAL_VOWELS.contains(&c)
}

pub fn is_tone_mark(c: char) -> bool {
    TONE_MARKS.contains(&c)
}

pub fn is_special_mark(c: char) -> bool {
    SPECIAL_MARKS.contains(&c)
}

/// Whether the code point lies in the Thai block (U+0E00..=U+0E7F).
pub fn is_thai(c: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

/// Whether a string contains at least one Thai code point.
pub fn contains_thai(s: &str) -> bool {
    s.chars().any(is_thai)
}

/// Romanized vowel bases that can carry a combining tone mark.
pub fn is_roman_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ə' | 'ɛ' | 'ɔ' | 'ʉ')
}

/// Romanization of a two-consonant onset, if the pair forms one.
///
/// A plain cluster uses its table entry; a ห-prefixed pair sounds as the
/// second consonant alone. Returns `None` for anything else.
pub fn cluster_romanization(c1: char, c2: char) -> Option<&'static str> {
    if let Some(rom) = CLUSTERS.get(&(c1, c2)) {
        return Some(rom);
    }
    if c1 == 'ห' && H_CLUSTER_SECONDS.contains(&c2) {
        return INITIAL_CONSONANTS.get(&c2).copied();
    }
    None
}

/// Tone class of a two-consonant onset: forced high for ห-prefixed pairs,
/// otherwise the class of the first consonant.
pub fn cluster_tone_class(c1: char, c2: char) -> ToneClass {
    if c1 == 'ห' && H_CLUSTER_SECONDS.contains(&c2) {
        ToneClass::High
    } else {
        tone_class(c1)
    }
}
