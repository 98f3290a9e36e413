//! The three keyed stores behind the transliterator: the whole-word
//! dictionary, the single-syllable dictionary and the irregular special
//! cases.
//!
//! Everything is loaded once from the embedded vocabulary records and is
//! read-only afterwards. Records have the shape `prefix,thai,romanization`
//! where the prefix column is ignored; HTML entities are decoded and both
//! columns are NFC-normalized so lookups and output compare cleanly.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::thai::orthography::contains_thai;
use crate::thai::syllable::extract_syllables;
use crate::Error;

static CORE_VOCAB: &str = include_str!("../data/vocab/core.csv");
static PHRASE_VOCAB: &str = include_str!("../data/vocab/phrases.csv");

/// Irregular and loanword spellings that the rules cannot derive: the
/// อ-led ย words, Sanskrit ธรรม/กรรม, the ทย patterns, and a few words
/// whose written vowels are simply not the spoken ones.
static SPECIAL_CASES: &[(&str, &str)] = &[
    ("ก็", "gɔ\u{0302}"),
    ("กรรม", "gam"),
    ("จริง", "jing"),
    ("ญาติ", "yâat"),
    ("ณ", "ná"),
    ("ธรรม", "tam"),
    ("ธรรมะ", "tam-má"),
    ("ธรรมดา", "tam-má~daa"),
    ("พระ", "prá"),
    ("วิทยา", "wít-tá~yaa"),
    ("วิทยุ", "wít-tá~yú"),
    ("สัตว์", "sàt"),
    ("สามารถ", "sǎa-mâat"),
    ("อยาก", "yàak"),
    ("อย่า", "yàa"),
    ("อย่าง", "yàang"),
    ("อยู่", "yùu"),
    ("อาทิตย์", "aa-tít"),
    ("เกียรติ", "gìiat"),
];

lazy_static! {
    /// A record line: anything, a comma, then a field run that contains at
    /// least one Thai code point. The greedy first group pushes the Thai
    /// column and everything after it into the second group.
    static ref RECORD: Regex = Regex::new(r"(.*),(.*\p{Thai}.*)").unwrap();
}

fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// The word, syllable and special-case stores.
pub struct DictionaryLayer {
    words: HashMap<String, String>,
    syllables: HashMap<String, String>,
    special: HashMap<String, String>,
}

impl DictionaryLayer {
    /// Build the stores from the vocabulary embedded at compile time.
    pub fn from_embedded() -> Result<Self, Error> {
        Self::from_records(&[CORE_VOCAB, PHRASE_VOCAB])
    }

    /// Build the stores from raw record files. Blank and non-matching
    /// lines are skipped; an input that yields no words at all is fatal.
    pub fn from_records(files: &[&str]) -> Result<Self, Error> {
        let mut words: HashMap<String, String> = HashMap::new();
        let mut syllables: HashMap<String, String> = HashMap::new();

        for content in files {
            for line in content.lines() {
                let caps = match RECORD.captures(line.trim()) {
                    Some(c) => c,
                    None => continue,
                };
                let mut cols = caps[2].split(',');
                let thai = match cols.next() {
                    Some(c) => nfc(html_escape::decode_html_entities(c.trim()).as_ref()),
                    None => continue,
                };
                let roman = match cols.next() {
                    Some(c) => nfc(html_escape::decode_html_entities(c.trim()).as_ref()),
                    None => continue,
                };
                if thai.is_empty() || roman.is_empty() || !contains_thai(&thai) {
                    continue;
                }

                let cp = thai.chars().count();
                if !thai.contains(' ') && ((cp <= 5 && !roman.contains('-')) || cp <= 3) {
                    syllables.insert(thai.clone(), roman.clone());
                }
                words.insert(thai, roman);
            }
        }

        if words.is_empty() {
            return Err(Error::DictionaryInit(
                "no vocabulary records could be parsed".to_string(),
            ));
        }

        // Harvest syllables from hyphenated multi-syllable entries. Keys
        // are visited in sorted order so that two words sharing a written
        // syllable always resolve to the same romanization.
        let mut keys: Vec<&String> = words.keys().collect();
        keys.sort();
        let mut harvested: Vec<(String, String)> = Vec::new();
        for key in keys {
            let roman = &words[key];
            if key.contains(' ') || !roman.contains('-') {
                continue;
            }
            let thai_sylls = extract_syllables(key);
            let roman_sylls: Vec<&str> = roman.split('-').collect();
            if thai_sylls.len() != roman_sylls.len() {
                continue;
            }
            for (ts, rs) in thai_sylls.iter().zip(roman_sylls.iter()) {
                let cp = ts.chars().count();
                if (2..=6).contains(&cp) && !syllables.contains_key(ts) {
                    harvested.push((ts.clone(), (*rs).to_string()));
                }
            }
        }
        for (ts, rs) in harvested {
            syllables.entry(ts).or_insert(rs);
        }

        let special: HashMap<String, String> = SPECIAL_CASES
            .iter()
            .map(|(th, rom)| (nfc(th), nfc(rom)))
            .collect();

        // Short unhyphenated special cases double as syllable entries for
        // the longest-match scan.
        for (th, rom) in special.iter() {
            if !rom.contains('-') && th.chars().count() <= 5 {
                syllables.insert(th.clone(), rom.clone());
            }
        }

        debug!(
            words = words.len(),
            syllables = syllables.len(),
            special = special.len(),
            "dictionary layer built"
        );

        Ok(DictionaryLayer { words, syllables, special })
    }

    pub fn lookup_word(&self, s: &str) -> Option<&str> {
        self.words.get(s).map(String::as_str)
    }

    pub fn lookup_syllable(&self, s: &str) -> Option<&str> {
        self.syllables.get(s).map(String::as_str)
    }

    pub fn lookup_special(&self, s: &str) -> Option<&str> {
        self.special.get(s).map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parsing_ignores_prefix_and_noise() {
        let dict = DictionaryLayer::from_records(&[
            "1,แดง,dɛɛng\n\ngarbage line\n2,ง่าย,ngâai\n",
        ])
        .unwrap();
        assert_eq!(dict.lookup_word("แดง"), Some("dɛɛng"));
        assert_eq!(dict.lookup_word("ง่าย"), Some("ngâai".nfc().collect::<String>().as_str()));
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_html_entities_are_decoded() {
        let dict =
            DictionaryLayer::from_records(&["7,แม่&amp;พ่อ,mɛ̂ɛ bird&#39;s"]).unwrap();
        assert!(dict.lookup_word("แม่&พ่อ").is_some());
    }

    #[test]
    fn test_syllable_seeding_rules() {
        let dict = DictionaryLayer::from_records(&[
            // 3 code points: seeded unconditionally
            "1,ดี,dii\n\
             2,แดง,dɛɛng\n\
             3,สวัสดี,sà~wàt-dii\n\
             4,ประเทศ,bprà~têet",
        ])
        .unwrap();
        assert_eq!(dict.lookup_syllable("ดี"), Some("dii"));
        assert!(dict.lookup_syllable("แดง").is_some());
        // 6 code points with a hyphen: word store only
        assert!(dict.lookup_syllable("สวัสดี").is_none());
        assert!(dict.lookup_word("สวัสดี").is_some());
        assert!(dict.lookup_syllable("ประเทศ").is_none());
    }

    #[test]
    fn test_harvest_from_hyphenated_entries() {
        let dict = DictionaryLayer::from_records(&["1,ขอบคุณ,kɔ̀ɔp-kun"]).unwrap();
        let kun = dict.lookup_syllable("คุณ");
        assert_eq!(kun, Some("kun"));
        assert_eq!(
            dict.lookup_syllable("ขอบ"),
            Some("kɔ̀ɔp".nfc().collect::<String>().as_str())
        );
    }

    #[test]
    fn test_harvest_is_deterministic() {
        let records = "1,ขอบคุณ,kɔ̀ɔp-kun\n2,ความสุข,kwaam-sùk\n3,ทำงาน,tam-ngaan";
        let a = DictionaryLayer::from_records(&[records]).unwrap();
        let b = DictionaryLayer::from_records(&[records]).unwrap();
        assert_eq!(a.syllables, b.syllables);
    }

    #[test]
    fn test_special_cases_present() {
        let dict = DictionaryLayer::from_embedded().unwrap();
        assert_eq!(dict.lookup_special("ธรรม"), Some("tam"));
        assert_eq!(dict.lookup_special("อยู่"), Some("yùu".nfc().collect::<String>().as_str()));
        // merged into the syllable store as well
        assert_eq!(dict.lookup_syllable("ธรรม"), Some("tam"));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(DictionaryLayer::from_records(&["no thai here"]).is_err());
        assert!(DictionaryLayer::from_records(&[""]).is_err());
    }
}
