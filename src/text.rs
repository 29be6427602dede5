use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STOP_WORDS, TOKEN_SEPARATOR};

/// Words dropped from both queries and command names before word matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords(
            words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn is_stop_word(&self, w: &str) -> bool {
        self.0.contains(w)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        StopWords::new(DEFAULT_STOP_WORDS)
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        StopWords::new(words)
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        let mut words: Vec<String> = stop_words.0.into_iter().collect();
        words.sort();
        words
    }
}

/// Lower-case `text` and split it on single spaces, dropping stop words.
///
/// Blank input yields no tokens. Anything else is split literally, so a
/// double space still produces an empty token.
pub fn normalise_words(text: &str, stop_words: &StopWords) -> Vec<String> {
    if text.trim_matches(TOKEN_SEPARATOR).is_empty() {
        return Vec::new();
    }
    text.to_ascii_lowercase()
        .split(TOKEN_SEPARATOR)
        .filter(|w| !stop_words.is_stop_word(w))
        .map(str::to_owned)
        .collect()
}

/// Split a command into its raw words: no case folding, no stop words.
pub fn split_command(command: &str) -> Vec<&str> {
    command.split(TOKEN_SEPARATOR).collect()
}
