use std::collections::HashMap;
use std::path::Path;

use crate::error::TokenizerError;

/// Mapping from output tokens to the integer ids a synthesis model expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenVocab {
    ids: HashMap<String, i32>,
}

impl TokenVocab {
    /// Parse a vocabulary from JSON of the form `{"vocab": {"<token>": <id>}}`.
    pub fn from_json_str(content: &str) -> Result<Self, TokenizerError> {
        let json: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| TokenizerError::Config(format!("Failed to parse JSON: {e}")))?;

        let vocab_obj = json
            .get("vocab")
            .ok_or_else(|| TokenizerError::Config("Missing 'vocab' field".to_string()))?
            .as_object()
            .ok_or_else(|| TokenizerError::Config("'vocab' must be an object".to_string()))?;

        let mut ids = HashMap::with_capacity(vocab_obj.len());
        for (token, v) in vocab_obj {
            if token.is_empty() {
                return Err(TokenizerError::Config("Empty key in vocab".to_string()));
            }
            let id = v
                .as_i64()
                .and_then(|id| i32::try_from(id).ok())
                .ok_or_else(|| {
                    TokenizerError::Config(format!("Non-integer vocab value for key {token:?}"))
                })?;
            ids.insert(token.clone(), id);
        }

        Ok(Self { ids })
    }

    pub fn get(&self, token: &str) -> Option<i32> {
        self.ids.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Map tokens to ids. Tokens missing from the vocabulary are skipped.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<i32> {
        let mut encoded = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            match self.get(token) {
                Some(id) => encoded.push(id),
                None => log::warn!("Token {token:?} not in vocabulary, skipping"),
            }
        }
        encoded
    }
}

impl FromIterator<(String, i32)> for TokenVocab {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Load a token vocabulary from a JSON file.
pub fn load_vocab(vocab_path: &Path) -> Result<TokenVocab, TokenizerError> {
    let content = std::fs::read_to_string(vocab_path)?;
    let vocab = TokenVocab::from_json_str(&content)?;
    log::info!(
        "Loaded {} vocab entries from {}",
        vocab.len(),
        vocab_path.display()
    );
    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use super::TokenVocab;
    use crate::error::TokenizerError;

    const VOCAB: &str = r#"{"vocab": {"@SIL": 1, "@@,": 2, "hello": 10, "world": 11}}"#;

    #[test]
    fn encodes_known_tokens() {
        let vocab = TokenVocab::from_json_str(VOCAB).expect("vocab should parse");
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.encode(&["hello", "@SIL", "world"]), vec![10, 1, 11]);
    }

    #[test]
    fn skips_unknown_tokens() {
        let vocab = TokenVocab::from_json_str(VOCAB).expect("vocab should parse");
        assert_eq!(vocab.encode(&["hello", "there", "@@,"]), vec![10, 2]);
    }

    #[test]
    fn requires_vocab_object() {
        let err = TokenVocab::from_json_str(r#"{"tokens": {}}"#).unwrap_err();
        assert!(matches!(err, TokenizerError::Config(_)));

        let err = TokenVocab::from_json_str(r#"{"vocab": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, TokenizerError::Config(_)));
    }

    #[test]
    fn rejects_non_integer_ids() {
        let err = TokenVocab::from_json_str(r#"{"vocab": {"a": "one"}}"#).unwrap_err();
        assert!(matches!(err, TokenizerError::Config(_)));

        let err = TokenVocab::from_json_str(r#"{"vocab": {"a": 5000000000}}"#).unwrap_err();
        assert!(matches!(err, TokenizerError::Config(_)));
    }

    #[test]
    fn collects_from_pairs() {
        let vocab: TokenVocab = [("a".to_string(), 3)].into_iter().collect();
        assert_eq!(vocab.get("a"), Some(3));
        assert_eq!(vocab.get("b"), None);
    }
}
