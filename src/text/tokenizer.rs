use std::collections::HashSet;

use super::config::{Language, TokenizerConfig, DEFAULT_ALLOWED_CHARS};
use super::numbers::expand_numbers;
use super::segmenter::Segmenter;
use crate::error::TokenizerError;

/// Marker emitted at punctuation boundaries in the default convention.
pub const SILENCE_MARKER: &str = "@SIL";

/// Prefix of the punctuation-echo markers emitted in Tacotron mode.
pub const PUNCT_MARKER_PREFIX: &str = "@@";

/// Chunks containing this character bypass filtering entirely.
pub const PASSTHROUGH_CHAR: char = '@';

/// Bare word removed when it is the last of several tokens.
const TRAILING_SIL: &str = "SIL";

/// Punctuation that ends the pending token and emits a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationSet {
    /// `, . - ;`, each converted to [`SILENCE_MARKER`].
    Silence,
    /// Adds `: ! ? ¡ ¿` and drops `-`; each echoed as `@@<char>`.
    Tacotron,
}

impl PunctuationSet {
    pub fn for_mode(tacotron_mode: bool) -> Self {
        if tacotron_mode {
            Self::Tacotron
        } else {
            Self::Silence
        }
    }

    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Silence => matches!(ch, ',' | '.' | '-' | ';'),
            Self::Tacotron => matches!(ch, ',' | '.' | ';' | '¡' | '!' | '¿' | '?' | ':'),
        }
    }

    fn marker(self, ch: char) -> String {
        match self {
            Self::Silence => SILENCE_MARKER.to_string(),
            Self::Tacotron => format!("{PUNCT_MARKER_PREFIX}{ch}"),
        }
    }
}

/// Converts raw text into the token sequence a synthesis model consumes.
///
/// The tokenizer owns its allow-set; reconfigure it with
/// [`set_allowed_chars`](Self::set_allowed_chars) between calls.
///
/// ```
/// use tts_text::text::{Language, TextTokenizer};
///
/// let tokenizer = TextTokenizer::new("abcdefghijklmnopqrstuvwxyzH");
/// let tokens = tokenizer.tokenize("Hello, 2 worlds.", Language::English, false);
/// assert_eq!(tokens, ["Hello", "@SIL", "two", "worlds", "@SIL"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextTokenizer {
    allowed: HashSet<char>,
    segmenter: Segmenter,
    language: Language,
    tacotron_mode: bool,
}

impl Default for TextTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_CHARS)
    }
}

impl TextTokenizer {
    /// Create a tokenizer accepting every Unicode scalar value in `allowed_chars`.
    pub fn new(allowed_chars: &str) -> Self {
        Self {
            allowed: allowed_chars.chars().collect(),
            segmenter: Segmenter::whitespace(),
            language: Language::Other,
            tacotron_mode: false,
        }
    }

    /// Create a tokenizer from a config; its language and mode become the
    /// defaults used by [`TextFrontend::to_tokens`](crate::TextFrontend::to_tokens).
    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self {
            language: config.language,
            tacotron_mode: config.tacotron_mode,
            ..Self::new(&config.allowed_chars)
        }
    }

    /// Replace the allow-set with the scalar values of `value`.
    pub fn set_allowed_chars(&mut self, value: &str) {
        self.allowed = value.chars().collect();
    }

    pub fn is_allowed(&self, ch: char) -> bool {
        self.allowed.contains(&ch)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn tacotron_mode(&self) -> bool {
        self.tacotron_mode
    }

    /// Tokenize `text` into words and pause markers.
    ///
    /// Numerals are spelled out when `language` is English. Characters
    /// outside the allow-set that are not punctuation are dropped.
    pub fn tokenize(&self, text: &str, language: Language, tacotron_mode: bool) -> Vec<String> {
        let chunks: Vec<&str> = self.segmenter.split(text).unwrap_or_else(|| vec![text]);
        let chunks: Vec<String> = match language {
            Language::English => expand_numbers(&chunks),
            Language::Other => chunks.iter().map(|c| c.to_string()).collect(),
        };

        let punctuation = PunctuationSet::for_mode(tacotron_mode);
        let mut tokens = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            if chunk.contains(PASSTHROUGH_CHAR) {
                log::trace!("Passing through marker chunk {chunk:?}");
                tokens.push(chunk.clone());
                continue;
            }
            self.assemble_chunk(chunk, punctuation, &mut tokens);
        }

        if tokens.len() > 1 && tokens.last().is_some_and(|t| t == TRAILING_SIL) {
            tokens.pop();
        }

        log::debug!(
            "Tokenized {} chunks into {} tokens (language={language:?}, tacotron_mode={tacotron_mode})",
            chunks.len(),
            tokens.len()
        );
        tokens
    }

    /// Tokenize raw bytes, failing if they are not valid UTF-8.
    pub fn tokenize_bytes(
        &self,
        bytes: &[u8],
        language: Language,
        tacotron_mode: bool,
    ) -> Result<Vec<String>, TokenizerError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.tokenize(text, language, tacotron_mode))
    }

    fn assemble_chunk(&self, chunk: &str, punctuation: PunctuationSet, tokens: &mut Vec<String>) {
        let mut pending = String::new();

        for ch in chunk.chars() {
            if punctuation.contains(ch) {
                // Flush first so the marker follows the word it ends.
                if !pending.is_empty() {
                    tokens.push(std::mem::take(&mut pending));
                }
                tokens.push(punctuation.marker(ch));
            } else if self.is_allowed(ch) {
                pending.push(ch);
            }
        }

        if !pending.is_empty() {
            tokens.push(pending);
        }
    }
}
