/// Splits text into chunks on a configurable set of delimiter strings.
///
/// Delimiters may be longer than one character. Runs of adjacent
/// delimiters never produce empty chunks.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    delimiters: Vec<String>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter splitting on space, tab, carriage return and line feed.
    pub fn whitespace() -> Self {
        let mut segmenter = Self::new();
        for delim in [" ", "\t", "\r", "\n"] {
            segmenter.add_delimiter(delim);
        }
        segmenter
    }

    /// Register an additional delimiter. Empty strings are ignored.
    pub fn add_delimiter(&mut self, delimiter: &str) {
        if delimiter.is_empty() || self.delimiters.iter().any(|d| d == delimiter) {
            return;
        }
        self.delimiters.push(delimiter.to_string());
    }

    /// Split `text` into the non-empty chunks between delimiters.
    ///
    /// Returns `None` when `text` contains no delimiter at all; callers
    /// decide how to treat such single-chunk input.
    pub fn split<'a>(&self, text: &'a str) -> Option<Vec<&'a str>> {
        let mut chunks = Vec::new();
        let mut found = false;
        let mut start = 0;
        let mut idx = 0;

        while idx < text.len() {
            match self.delimiter_at(&text[idx..]) {
                Some(len) => {
                    found = true;
                    if idx > start {
                        chunks.push(&text[start..idx]);
                    }
                    idx += len;
                    start = idx;
                }
                None => {
                    idx += text[idx..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if !found {
            return None;
        }
        if start < text.len() {
            chunks.push(&text[start..]);
        }
        Some(chunks)
    }

    /// Length of the longest delimiter matching at the start of `rest`.
    fn delimiter_at(&self, rest: &str) -> Option<usize> {
        self.delimiters
            .iter()
            .filter(|d| rest.starts_with(d.as_str()))
            .map(String::len)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::Segmenter;

    #[test]
    fn splits_on_whitespace_runs() {
        let segmenter = Segmenter::whitespace();
        assert_eq!(
            segmenter.split("Hello,  world.\tagain\n"),
            Some(vec!["Hello,", "world.", "again"])
        );
        assert_eq!(segmenter.split("   "), Some(vec![]));
    }

    #[test]
    fn returns_nothing_without_a_delimiter() {
        let segmenter = Segmenter::whitespace();
        assert_eq!(segmenter.split("single"), None);
        assert_eq!(segmenter.split(""), None);
    }

    #[test]
    fn supports_multi_character_delimiters() {
        let mut segmenter = Segmenter::new();
        segmenter.add_delimiter("||");
        segmenter.add_delimiter("|");
        assert_eq!(segmenter.split("a||b|c"), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn keeps_multibyte_characters_intact() {
        let segmenter = Segmenter::whitespace();
        assert_eq!(segmenter.split("¿qué tal?"), Some(vec!["¿qué", "tal?"]));
    }

    #[test]
    fn ignores_empty_delimiters() {
        let mut segmenter = Segmenter::new();
        segmenter.add_delimiter("");
        assert_eq!(segmenter.split("abc"), None);
    }
}
