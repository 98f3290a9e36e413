//! The external-tokenizer port.
//!
//! Thai text carries no word boundaries, so segmentation comes from an
//! external NLP service (pythainlp over a local RPC in the reference
//! deployment). The engine only sees this trait; tests inject stubs with
//! canned token lists. Both operations are synchronous and idempotent, and
//! the pipeline treats every failure as recoverable: the affected word is
//! downgraded to rules-only transliteration.

use thiserror::Error;

/// Errors surfaced by a tokenizer implementation. The pipeline never
/// propagates these; they only select the rules-only fallback.
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer unavailable: {0}")]
    Unavailable(String),
    #[error("tokenizer returned an empty response")]
    Empty,
    #[error("tokenizer deadline expired")]
    DeadlineExpired,
}

/// Word and syllable segmentation as provided by an external service.
pub trait ThaiTokenizer {
    /// Split running text into word tokens, in order. Spaces and
    /// punctuation may appear as their own tokens.
    fn word_tokenize(&self, text: &str) -> Result<Vec<String>, TokenizerError>;

    /// Split a single word into syllable strings, in order.
    fn syllable_tokenize(&self, word: &str) -> Result<Vec<String>, TokenizerError>;
}
