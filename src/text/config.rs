use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::TokenizerError;

/// Characters accepted by a default-configured tokenizer.
pub const DEFAULT_ALLOWED_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ'";

/// Input language. Only English enables numeral expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Other,
    English,
}

/// Tokenizer settings, loadable from JSON or assembled with
/// [`TokenizerConfigBuilder`].
///
/// ```
/// use tts_text::text::{Language, TokenizerConfigBuilder};
///
/// let config = TokenizerConfigBuilder::default()
///     .allowed_chars("abc")
///     .language(Language::English)
///     .build()
///     .unwrap();
/// assert!(!config.tacotron_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Every Unicode scalar value in this string is allowed through the filter.
    #[builder(setter(into))]
    pub allowed_chars: String,
    pub language: Language,
    /// Emit `@@<punct>` markers instead of `@SIL`.
    pub tacotron_mode: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            allowed_chars: DEFAULT_ALLOWED_CHARS.to_string(),
            language: Language::Other,
            tacotron_mode: false,
        }
    }
}

impl TokenizerConfig {
    /// Parse a config from a JSON document. Missing fields take defaults.
    pub fn from_json_str(content: &str) -> Result<Self, TokenizerError> {
        serde_json::from_str(content)
            .map_err(|e| TokenizerError::Config(format!("Failed to parse JSON: {e}")))
    }
}

/// Load a tokenizer config from a JSON file.
///
/// ```json
/// { "allowed_chars": "abcdefghijklmnopqrstuvwxyz'", "language": "english", "tacotron_mode": true }
/// ```
pub fn load_config(config_path: &Path) -> Result<TokenizerConfig, TokenizerError> {
    let content = std::fs::read_to_string(config_path)?;
    let config = TokenizerConfig::from_json_str(&content)?;
    log::info!(
        "Loaded tokenizer config from {} ({} allowed chars, language={:?}, tacotron_mode={})",
        config_path.display(),
        config.allowed_chars.chars().count(),
        config.language,
        config.tacotron_mode
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_config, Language, TokenizerConfig, TokenizerConfigBuilder};
    use crate::error::TokenizerError;

    #[test]
    fn parses_full_config() {
        let config = TokenizerConfig::from_json_str(
            r#"{"allowed_chars": "xyz", "language": "english", "tacotron_mode": true}"#,
        )
        .expect("config should parse");
        assert_eq!(config.allowed_chars, "xyz");
        assert_eq!(config.language, Language::English);
        assert!(config.tacotron_mode);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = TokenizerConfig::from_json_str(r#"{"language": "english"}"#)
            .expect("config should parse");
        assert_eq!(config.allowed_chars, TokenizerConfig::default().allowed_chars);
        assert!(!config.tacotron_mode);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = TokenizerConfig::from_json_str(r#"{"language": "klingon"}"#).unwrap_err();
        assert!(matches!(err, TokenizerError::Config(_)));
    }

    #[test]
    fn builder_starts_from_defaults() {
        let config = TokenizerConfigBuilder::default()
            .tacotron_mode(true)
            .build()
            .expect("builder should succeed");
        assert_eq!(config.language, Language::Other);
        assert_eq!(config.allowed_chars, TokenizerConfig::default().allowed_chars);
        assert!(config.tacotron_mode);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("tts-text-no-such-config.json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, TokenizerError::Io(_)));
    }

    #[test]
    fn loads_config_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "tts-text-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"allowed_chars": "ab", "tacotron_mode": true}"#)
            .expect("temp file should be writable");
        let config = load_config(&path).expect("config should load");
        std::fs::remove_file(&path).ok();
        assert_eq!(config.allowed_chars, "ab");
        assert_eq!(config.language, Language::Other);
        assert!(config.tacotron_mode);
    }
}
