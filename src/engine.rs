//! The transliteration engine.
//!
//! An [`Engine`] owns the dictionary layer built once at construction and
//! is read-only afterwards, so concurrent callers can share it freely. The
//! word-level algorithm is dictionary lookup, then a bounded longest-match
//! scan over the syllable stores, then rule-based syllable extraction with
//! the template matcher and the fallback builder. The whole-text pipeline
//! consumes an external tokenizer's word sequence and handles mai-yamok
//! repetition, numerals and non-Thai passthrough.

use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::dict::DictionaryLayer;
use crate::normalize;
use crate::thai::orthography::{contains_thai, is_consonant};
use crate::thai::syllable::{extract_syllables, find_syllable_end};
use crate::thai::{self, numbers, remove_silent_consonants};
use crate::tokenizer::ThaiTokenizer;
use crate::Error;

/// Window for the longest-match scan, in code points.
const MATCH_WINDOW: usize = 8;

/// The Thai→Paiboon+ transliterator.
pub struct Engine {
    dict: DictionaryLayer,
}

impl Engine {
    /// Build an engine from the vocabulary embedded at compile time.
    /// Failure to parse any records at all refuses to start.
    pub fn new() -> Result<Self, Error> {
        Ok(Engine { dict: DictionaryLayer::from_embedded()? })
    }

    /// Build an engine from caller-supplied vocabulary record files.
    pub fn with_vocabulary(files: &[&str]) -> Result<Self, Error> {
        Ok(Engine { dict: DictionaryLayer::from_records(files)? })
    }

    pub fn lookup_word(&self, s: &str) -> Option<&str> {
        self.dict.lookup_word(s)
    }

    pub fn lookup_syllable(&self, s: &str) -> Option<&str> {
        self.dict.lookup_syllable(s)
    }

    pub fn lookup_special(&self, s: &str) -> Option<&str> {
        self.dict.lookup_special(s)
    }

    /// Romanize one Thai word with dictionaries and rules alone, no
    /// tokenizer involved. Output is NFC; syllable chunks are concatenated
    /// directly, dictionary entries carrying their own hyphens.
    pub fn transliterate_word(&self, word: &str) -> String {
        let word: String = normalize::normalize_thai_marks(word.trim()).nfc().collect();
        if word.is_empty() {
            return String::new();
        }
        if let Some(r) = self.word_level_lookup(&word) {
            return r.to_string();
        }

        let cleaned = remove_silent_consonants(&word);
        if cleaned.is_empty() {
            return String::new();
        }
        if cleaned != word {
            if let Some(r) = self.word_level_lookup(&cleaned) {
                return r.to_string();
            }
        }

        let chars: Vec<char> = cleaned.chars().collect();
        let mut out = String::new();
        let mut i = 0;
        while i < chars.len() {
            if let Some((rom, len)) = self.longest_match(&chars, i) {
                out.push_str(rom);
                i += len;
                continue;
            }
            let mut end = find_syllable_end(&chars, i);
            if end <= i {
                end = i + 1;
            }
            let syl: String = chars[i..end].iter().collect();
            out.push_str(&thai::romanize_syllable(&syl));
            i = end;
        }

        let out = out.trim_end_matches('~');
        out.nfc().collect()
    }

    /// Romanize one word by rules alone, bypassing every dictionary
    /// store. This is the path accuracy harnesses measure.
    pub fn transliterate_word_rules_only(&self, word: &str) -> String {
        let word: String = normalize::normalize_thai_marks(word.trim()).nfc().collect();
        let cleaned = remove_silent_consonants(&word);
        if cleaned.is_empty() {
            return String::new();
        }
        let out: String = extract_syllables(&cleaned)
            .iter()
            .map(|syl| thai::romanize_syllable(syl))
            .collect();
        let out = out.trim_end_matches('~');
        out.nfc().collect()
    }

    /// Romanize a word whose syllable segmentation was provided
    /// externally. Syllables are cleaned of silent-consonant artifacts, ๆ
    /// repeats the previous syllable, and the pieces are joined with "-"
    /// (the "~" of a reduced syllable glues instead).
    pub fn transliterate_word_with_syllables(&self, word: &str, syllables: &[String]) -> String {
        let word: String = word.trim().nfc().collect();
        if let Some(r) = self.word_level_lookup(&word) {
            return r.to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        for syl in syllables {
            let syl: String = syl.trim().nfc().collect();
            if syl.is_empty() {
                continue;
            }
            if syl == "ๆ" {
                if let Some(last) = parts.last().cloned() {
                    parts.push(last);
                }
                continue;
            }
            let cleaned = remove_silent_consonants(&syl);
            if cleaned.is_empty() {
                continue;
            }
            let rom = self
                .dict
                .lookup_special(&cleaned)
                .or_else(|| self.dict.lookup_syllable(&cleaned))
                .map(str::to_string)
                .unwrap_or_else(|| thai::romanize_syllable(&cleaned));
            parts.push(rom);
        }

        if parts.is_empty() {
            return self.transliterate_word(&word);
        }

        let mut out = String::new();
        for part in parts {
            if !out.is_empty() && !out.ends_with('~') {
                out.push('-');
            }
            out.push_str(&part);
        }
        let out = out.trim_end_matches('~');
        out.nfc().collect()
    }

    /// Romanize whole text using the tokenizer's word segmentation. A
    /// failing or empty tokenizer downgrades to whitespace splitting and
    /// rules-only transliteration.
    pub fn romanize(&self, text: &str, tokenizer: &dyn ThaiTokenizer) -> String {
        let text = normalize::normalize_text(text);
        let tokens = self.word_tokens(&text, tokenizer);
        self.render_tokens(&text, &tokens, None)
    }

    /// Like [`Engine::romanize`], but words not found in the dictionaries
    /// are split with the tokenizer's syllable segmentation before the
    /// rules run.
    pub fn romanize_with_syllables(&self, text: &str, tokenizer: &dyn ThaiTokenizer) -> String {
        let text = normalize::normalize_text(text);
        let tokens = self.word_tokens(&text, tokenizer);
        self.render_tokens(&text, &tokens, Some(tokenizer))
    }

    fn word_tokens(&self, text: &str, tokenizer: &dyn ThaiTokenizer) -> Vec<String> {
        match tokenizer.word_tokenize(text) {
            Ok(tokens) if !tokens.is_empty() => tokens,
            Ok(_) => {
                warn!("tokenizer returned no tokens; falling back to whitespace split");
                text.split_whitespace().map(str::to_string).collect()
            }
            Err(e) => {
                warn!(error = %e, "tokenizer unavailable; falling back to whitespace split");
                text.split_whitespace().map(str::to_string).collect()
            }
        }
    }

    /// Join romanized tokens: " " where the original text had a space
    /// between them, "-" between the glued tokens of a compound.
    fn render_tokens(
        &self,
        text: &str,
        tokens: &[String],
        syllable_source: Option<&dyn ThaiTokenizer>,
    ) -> String {
        let mut out = String::new();
        let mut cursor = 0usize;
        let mut last_roman: Option<String> = None;

        for token in tokens {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                continue;
            }

            let spaced = match text[cursor..].find(token.as_str()) {
                Some(pos) => {
                    let gap = &text[cursor..cursor + pos];
                    cursor += pos + token.len();
                    gap.chars().any(char::is_whitespace)
                }
                None => true,
            };

            let roman = if trimmed == "ๆ" {
                match last_roman.clone() {
                    Some(r) => r,
                    None => continue,
                }
            } else if let Some(base) = trimmed.strip_suffix('ๆ') {
                let r = self.romanize_token(base, syllable_source);
                if r.is_empty() {
                    continue;
                }
                format!("{}-{}", r, r)
            } else {
                self.romanize_token(trimmed, syllable_source)
            };
            if roman.is_empty() {
                continue;
            }

            if !out.is_empty() {
                out.push_str(if spaced { " " } else { "-" });
            }
            out.push_str(&roman);
            last_roman = Some(roman);
        }

        out.nfc().collect()
    }

    fn romanize_token(&self, token: &str, syllable_source: Option<&dyn ThaiTokenizer>) -> String {
        if !contains_thai(token) && !numbers::is_number_token(token) {
            return token.to_string();
        }
        if numbers::is_number_token(token) {
            return numbers::romanize_number(token);
        }
        if let Some(r) = self.word_level_lookup(token) {
            return r.to_string();
        }
        if let Some(tokenizer) = syllable_source {
            match tokenizer.syllable_tokenize(token) {
                Ok(syllables) if !syllables.is_empty() => {
                    return self.transliterate_word_with_syllables(token, &syllables);
                }
                Ok(_) => warn!(word = token, "empty syllable response; using rules"),
                Err(e) => warn!(word = token, error = %e, "syllable tokenizer failed; using rules"),
            }
        }
        self.transliterate_word(token)
    }

    fn word_level_lookup(&self, word: &str) -> Option<&str> {
        self.dict
            .lookup_special(word)
            .or_else(|| self.dict.lookup_word(word))
            .or_else(|| self.dict.lookup_syllable(word))
    }

    /// Longest dictionary key at position `i`, within the bounded window.
    /// A length that would strand a single trailing consonant is skipped.
    fn longest_match(&self, chars: &[char], i: usize) -> Option<(&str, usize)> {
        let max_len = (chars.len() - i).min(MATCH_WINDOW);
        for len in (1..=max_len).rev() {
            let rest = &chars[i + len..];
            if rest.len() == 1 && is_consonant(rest[0]) {
                continue;
            }
            let candidate: String = chars[i..i + len].iter().collect();
            if let Some(r) = self
                .dict
                .lookup_special(&candidate)
                .or_else(|| self.dict.lookup_syllable(&candidate))
            {
                return Some((r, len));
            }
        }
        None
    }
}
