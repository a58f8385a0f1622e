//! Text front-end: numeral expansion, segmentation and tokenization.
//!
//! Raw text flows through the pipeline as:
//!
//! ```text
//! text ─▶ Segmenter ─▶ expand_numbers (English only) ─▶ TextTokenizer ─▶ tokens
//! ```
//!
//! # Output conventions
//!
//! | Mode | Punctuation | Marker |
//! |---|---|---|
//! | default | `, . - ;` | `@SIL` |
//! | Tacotron | `, . ; : ! ? ¡ ¿` | `@@` followed by the punctuation character |
//!
//! Chunks that already contain `@` are treated as hand-written markers and
//! passed through untouched.

pub mod config;
pub mod numbers;
pub mod segmenter;
pub mod tokenizer;
pub mod vocab;

pub use config::{load_config, Language, TokenizerConfig, TokenizerConfigBuilder};
pub use numbers::{expand_numbers, int_to_str};
pub use segmenter::Segmenter;
pub use tokenizer::{PunctuationSet, TextTokenizer, PUNCT_MARKER_PREFIX, SILENCE_MARKER};
pub use vocab::{load_vocab, TokenVocab};
