//! End-to-end pipeline tests with stub tokenizers, plus the coverage
//! grids: every tone cell, every cluster, every leading vowel.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use paiboonizer::{Engine, ThaiTokenizer, TokenizerError};

fn nfc(s: &str) -> String {
    s.nfc().collect()
}

fn engine() -> Engine {
    Engine::new().expect("embedded dictionary must load")
}

/// Canned tokenizer: word lists keyed by input text, syllable lists keyed
/// by word.
struct StubTokenizer {
    words: HashMap<String, Vec<String>>,
    syllables: HashMap<String, Vec<String>>,
}

impl StubTokenizer {
    fn new() -> Self {
        StubTokenizer { words: HashMap::new(), syllables: HashMap::new() }
    }

    fn with_words(mut self, text: &str, tokens: &[&str]) -> Self {
        self.words
            .insert(text.to_string(), tokens.iter().map(|t| t.to_string()).collect());
        self
    }

    fn with_syllables(mut self, word: &str, syllables: &[&str]) -> Self {
        self.syllables
            .insert(word.to_string(), syllables.iter().map(|t| t.to_string()).collect());
        self
    }
}

impl ThaiTokenizer for StubTokenizer {
    fn word_tokenize(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        self.words
            .get(text)
            .cloned()
            .ok_or_else(|| TokenizerError::Unavailable("no canned tokens".into()))
    }

    fn syllable_tokenize(&self, word: &str) -> Result<Vec<String>, TokenizerError> {
        self.syllables.get(word).cloned().ok_or(TokenizerError::Empty)
    }
}

/// Tokenizer that always fails, for the downgrade path.
struct BrokenTokenizer;

impl ThaiTokenizer for BrokenTokenizer {
    fn word_tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizerError> {
        Err(TokenizerError::DeadlineExpired)
    }

    fn syllable_tokenize(&self, _word: &str) -> Result<Vec<String>, TokenizerError> {
        Err(TokenizerError::DeadlineExpired)
    }
}

#[test]
fn end_to_end_scenarios() {
    let e = engine();
    let cases = [
        ("แดง", "dɛɛng"),
        ("นอน", "nɔɔn"),
        ("พ่อ", "pɔ̂ɔ"),
        ("เห็ด", "hèt"),
        ("เรียน", "riian"),
        ("ธรรม", "tam"),
        ("สวัสดี", "sà~wàt-dii"),
        ("ไม่", "mâi"),
        ("เขียว", "kǐao"),
        ("ทำ", "tam"),
    ];
    for (thai, expected) in cases {
        assert_eq!(e.transliterate_word(thai), nfc(expected), "for {}", thai);
    }
}

#[test]
fn pipeline_joins_spaced_tokens_with_spaces() {
    let e = engine();
    let tok = StubTokenizer::new().with_words("ผม กิน ข้าว", &["ผม", "กิน", "ข้าว"]);
    assert_eq!(e.romanize("ผม กิน ข้าว", &tok), nfc("pǒm gin kâao"));
}

#[test]
fn pipeline_joins_compound_tokens_with_hyphens() {
    let e = engine();
    let tok = StubTokenizer::new().with_words("รถไฟไทย", &["รถไฟ", "ไทย"]);
    assert_eq!(e.romanize("รถไฟไทย", &tok), nfc("rót-fai-tai"));
}

#[test]
fn pipeline_passes_non_thai_through() {
    let e = engine();
    let tok = StubTokenizer::new().with_words("กิน pizza", &["กิน", "pizza"]);
    assert_eq!(e.romanize("กิน pizza", &tok), "gin pizza");
}

#[test]
fn pipeline_romanizes_numerals() {
    let e = engine();
    let tok = StubTokenizer::new().with_words("มี 21 วัน", &["มี", "21", "วัน"]);
    assert_eq!(e.romanize("มี 21 วัน", &tok), nfc("mii yîi-sìp-èt wan"));

    let tok = StubTokenizer::new().with_words("๕๕ บาท", &["๕๕", "บาท"]);
    assert_eq!(e.romanize("๕๕ บาท", &tok), nfc("hâa-sìp-hâa bàat"));
}

#[test]
fn pipeline_duplicates_mai_yamok() {
    let e = engine();
    let tok = StubTokenizer::new().with_words("ช้าๆ", &["ช้า", "ๆ"]);
    assert_eq!(e.romanize("ช้าๆ", &tok), nfc("cháa-cháa"));

    // mai yamok glued onto the word token itself
    let tok = StubTokenizer::new().with_words("เร็วๆ", &["เร็วๆ"]);
    assert_eq!(e.romanize("เร็วๆ", &tok), "reo-reo");
}

#[test]
fn pipeline_falls_back_to_rules_when_tokenizer_dies() {
    let e = engine();
    assert_eq!(e.romanize("แดง นอน", &BrokenTokenizer), "dɛɛng nɔɔn");
    assert_eq!(e.romanize_with_syllables("แดง นอน", &BrokenTokenizer), "dɛɛng nɔɔn");
    assert_eq!(e.romanize("", &BrokenTokenizer), "");
}

#[test]
fn pipeline_uses_external_syllable_segmentation() {
    let e = engine();
    let tok = StubTokenizer::new()
        .with_words("นอนนาน", &["นอนนาน"])
        .with_syllables("นอนนาน", &["นอน", "นาน"]);
    assert_eq!(e.romanize_with_syllables("นอนนาน", &tok), "nɔɔn-naan");
}

#[test]
fn pipeline_strips_silent_artifacts_from_syllables() {
    let e = engine();
    let tok = StubTokenizer::new()
        .with_words("วันเสาร์", &["วันเสาร์"])
        .with_syllables("วันเสาร์", &["วัน", "เสาร์"]);
    // the stub's second syllable still carries its silenced ร
    assert_eq!(e.romanize_with_syllables("วันเสาร์", &tok), nfc("wan-sǎo"));
}

#[test]
fn every_tone_cell_has_a_witness() {
    let e = engine();
    let cases = [
        // class, liveness, mark -> representative
        ("กา", "gaa"),    // mid live, none -> mid
        ("กะ", "gà"),     // mid dead, none -> low
        ("ขา", "kǎa"),    // high live, none -> rising
        ("ขัด", "kàt"),   // high dead, none -> low
        ("คา", "kaa"),    // low live, none -> mid
        ("คัด", "kát"),   // low dead short, none -> high
        ("คาด", "kâat"),  // low dead long, none -> falling
        ("ก่า", "gàa"),   // mid + mai ek -> low
        ("ข่า", "kàa"),   // high + mai ek -> low
        ("ค่า", "kâa"),   // low + mai ek -> falling
        ("ก้า", "gâa"),   // mid + mai tho -> falling
        ("ข้า", "kâa"),   // high + mai tho -> falling
        ("ค้า", "káa"),   // low + mai tho -> high
        ("ก๊า", "gáa"),   // mid + mai tri -> high
        ("ค๊า", "kaa"),   // mai tri ignored off mid class -> inherent mid
        ("ก๋า", "gǎa"),   // mid + mai jattawa -> rising
        ("ค๋า", "kaa"),   // mai jattawa ignored off mid class
    ];
    for (thai, expected) in cases {
        assert_eq!(e.transliterate_word(thai), nfc(expected), "for {}", thai);
    }
}

#[test]
fn every_leading_vowel_has_a_witness() {
    let e = engine();
    let cases = [
        ("เกง", "geeng"),
        ("แกง", "gɛɛng"),
        ("โกง", "goong"),
        ("ไก", "gai"),
        ("ใก", "gai"),
    ];
    for (thai, expected) in cases {
        assert_eq!(e.transliterate_word(thai), nfc(expected), "for {}", thai);
    }
}

#[test]
fn stripper_properties_hold_through_the_engine() {
    let e = engine();
    // C + thanthakhat and C + vowel + thanthakhat
    assert_eq!(paiboonizer::remove_silent_consonants("สัตว์"), "สัต");
    assert_eq!(paiboonizer::remove_silent_consonants("สิทธิ์"), "สิท");
    for w in ["สัตว์", "สิทธิ์", "อาทิตย์"] {
        let once = paiboonizer::remove_silent_consonants(w);
        assert_eq!(once, paiboonizer::remove_silent_consonants(&once));
    }
    // the engine strips before running rules
    assert_eq!(e.transliterate_word("สิทธิ์"), nfc("sìt"));
}

#[test]
fn dictionary_precedence_properties() {
    let e = engine();
    // special cases beat word entries beat rules
    assert_eq!(e.transliterate_word("อยาก"), nfc("yàak"));
    assert_eq!(e.lookup_special("ธรรม"), Some("tam"));
    assert_eq!(e.lookup_word("สวัสดี"), Some(nfc("sà~wàt-dii").as_str()));
    assert_eq!(e.lookup_syllable("ดี"), Some("dii"));
}

#[test]
fn tone_marks_land_on_the_first_vowel_grapheme() {
    let e = engine();
    for w in ["พ่อ", "เขียว", "ไม้", "ข้าว", "หาย"] {
        let r = e.transliterate_word(w);
        let decomposed: Vec<char> = r.nfd().collect();
        let marks: Vec<usize> = decomposed
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, '\u{0300}' | '\u{0301}' | '\u{0302}' | '\u{030C}'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marks.len(), 1, "exactly one tone mark in {}", r);
        // the mark follows the first vowel base
        let first_vowel = decomposed
            .iter()
            .position(|c| "aeiouəɛɔʉ".contains(*c))
            .expect("a vowel");
        assert_eq!(marks[0], first_vowel + 1, "mark placement in {}", r);
    }
}

#[test]
fn extract_syllables_is_ordered_and_total() {
    assert_eq!(paiboonizer::extract_syllables("สวัสดี"), vec!["สวัส", "ดี"]);
    assert_eq!(paiboonizer::extract_syllables("แดง"), vec!["แดง"]);
    assert!(paiboonizer::extract_syllables("").is_empty());
}
