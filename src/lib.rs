//! Thai → Paiboon+ romanization.
//!
//! Thai orthography is non-linear: vowels precede, follow, surround or sit
//! above the consonants they belong to, tone is computed from the initial
//! consonant's class crossed with syllable liveness and explicit tone
//! marks, and word boundaries are unwritten. This crate implements the
//! Paiboon+ convention on top of that: layered dictionaries for the words
//! and syllables that rules cannot derive, a priority-ordered vowel-pattern
//! matcher, a five-tone calculator placing combining diacritics, and a
//! whole-text pipeline fed by an injected word tokenizer.
//!
//! ```no_run
//! use paiboonizer::Engine;
//!
//! let engine = Engine::new().expect("dictionary init");
//! assert_eq!(engine.transliterate_word("สวัสดี"), "sà~wàt-dii");
//! assert_eq!(engine.transliterate_word("แดง"), "dɛɛng");
//! ```
//!
//! All engine state is built once at construction and read-only afterwards,
//! so a shared `Engine` may be used from any number of threads.

use thiserror::Error;

pub mod dict;
pub mod engine;
pub mod normalize;
pub mod thai;
pub mod tokenizer;

pub use engine::Engine;
pub use thai::{extract_syllables, remove_silent_consonants};
pub use tokenizer::{ThaiTokenizer, TokenizerError};

/// Fatal errors. Everything that can go wrong per syllable recovers
/// locally; only a dictionary that fails to load refuses to start.
#[derive(Debug, Error)]
pub enum Error {
    #[error("dictionary initialization failed: {0}")]
    DictionaryInit(String),
}
