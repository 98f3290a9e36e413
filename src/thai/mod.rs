//! Thai script analysis: orthography tables, syllable parsing and the
//! rule-based romanizer.
//!
//! The entry point for a single syllable is [`romanize_syllable`]: the
//! template matcher handles the patterns it knows, everything else goes
//! through the parser and the fallback builder.

pub mod builder;
pub mod numbers;
pub mod orthography;
pub mod patterns;
pub mod silent;
pub mod syllable;
pub mod tone;

pub use orthography::{contains_thai, is_thai};
pub use silent::remove_silent_consonants;
pub use syllable::{extract_syllables, parse_syllable, ParsedSyllable};

/// Romanize one Thai syllable by rules alone: template match first,
/// parse-and-build on a miss. Output is NFC with its tone mark applied.
pub fn romanize_syllable(syl: &str) -> String {
    if let Some(rom) = patterns::match_syllable(syl) {
        return rom;
    }
    builder::build_syllable(&syllable::parse_syllable(syl))
}
