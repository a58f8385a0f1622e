//! # tts-text
//!
//! Text normalization and tokenization for neural text-to-speech models.
//!
//! ## Features
//!
//! - **Numeral expansion**: English integers are spelled out (`21` → `twenty one`)
//! - **Pause markers**: punctuation becomes `@SIL` or, for Tacotron models, `@@<punct>`
//! - **Character filtering**: only characters in a configurable allow-set survive
//! - **Vocabulary lookup**: map tokens to model input ids
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! tts-text = "2026.2"
//! ```
//!
//! ```
//! use tts_text::text::{Language, TextTokenizer, TokenizerConfig};
//! use tts_text::TextFrontend;
//!
//! let config = TokenizerConfig {
//!     language: Language::English,
//!     ..Default::default()
//! };
//! let tokenizer = TextTokenizer::from_config(&config);
//!
//! let stream = tokenizer.to_tokens("I have 3 apples.")?;
//! assert_eq!(stream.tokens, ["I", "have", "three", "apples", "@SIL"]);
//! # Ok::<(), tts_text::TokenizerError>(())
//! ```

pub mod error;
pub mod text;

pub use error::TokenizerError;

use text::TokenVocab;

/// The ordered output of a tokenization call.
///
/// Order encodes prosodic timing, so tokens are never reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    pub tokens: Vec<String>,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Map every token to its vocabulary id, skipping unknown tokens.
    pub fn to_ids(&self, vocab: &TokenVocab) -> Vec<i32> {
        vocab.encode(&self.tokens)
    }
}

impl From<Vec<String>> for TokenStream {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// Common interface for text front-ends feeding a synthesis model.
pub trait TextFrontend {
    /// Tokenize text using the front-end's configured language and mode.
    fn to_tokens(&self, text: &str) -> Result<TokenStream, TokenizerError>;

    /// Tokenize raw bytes, rejecting input that is not valid UTF-8.
    ///
    /// Default implementation decodes then calls `to_tokens()`.
    fn bytes_to_tokens(&self, bytes: &[u8]) -> Result<TokenStream, TokenizerError> {
        self.to_tokens(std::str::from_utf8(bytes)?)
    }

    /// Tokenize text and map the result to model input ids.
    fn to_ids(&self, text: &str, vocab: &TokenVocab) -> Result<Vec<i32>, TokenizerError> {
        Ok(self.to_tokens(text)?.to_ids(vocab))
    }
}

impl TextFrontend for text::TextTokenizer {
    fn to_tokens(&self, text: &str) -> Result<TokenStream, TokenizerError> {
        Ok(self
            .tokenize(text, self.language(), self.tacotron_mode())
            .into())
    }
}
