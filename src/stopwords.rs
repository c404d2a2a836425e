//! Linguistic resources used to filter tokens
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SentimentError};

/// English stopwords as shipped with the NLTK stopwords corpus
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Stopwords and punctuation symbols removed by the [`Tokenizer`](crate::Tokenizer)
///
/// A token is dropped if it is contained in the stopword set, or if it consists of exactly one
/// punctuation symbol. Punctuation attached to a word (`"great!"`) is kept as part of the token.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
    punctuation: HashSet<char>,
}

impl StopWords {
    pub fn new<I, S>(words: I, punctuation: HashSet<char>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            punctuation,
        }
    }

    /// NLTK English stopwords and the ASCII punctuation symbols
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter().copied(), ascii_punctuation())
    }

    /// Filters nothing
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new(), HashSet::new())
    }

    /// Reads a stopword list with one entry per line, blank lines are skipped. Entries are
    /// lowercased to match the normalized tokens. The ASCII punctuation symbols are used.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase);

        Ok(Self::new(words, ascii_punctuation()))
    }

    /// Adds more stopwords to the set
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn is_punctuation(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.punctuation.contains(&c),
            _ => false,
        }
    }

    /// Whether the token has to be removed
    pub fn contains(&self, token: &str) -> bool {
        self.is_stopword(token) || self.is_punctuation(token)
    }

    pub fn n_words(&self) -> usize {
        self.words.len()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

fn ascii_punctuation() -> HashSet<char> {
    (0u8..128)
        .map(char::from)
        .filter(char::is_ascii_punctuation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_resources() {
        let stopwords = StopWords::english();
        assert_eq!(stopwords.n_words(), 179);
        assert_eq!(ascii_punctuation().len(), 32);

        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("don't"));
        assert!(stopwords.contains(","));
        assert!(stopwords.contains("`"));
        assert!(!stopwords.contains("movie"));
        // only bare symbols are punctuation tokens
        assert!(!stopwords.contains("!!"));
        assert!(!stopwords.contains("great!"));
    }

    #[test]
    fn empty_filters_nothing() {
        let stopwords = StopWords::empty();
        assert!(!stopwords.contains("the"));
        assert!(!stopwords.contains("."));

        let stopwords = stopwords.with_words(vec!["film"]);
        assert!(stopwords.contains("film"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Movie\n\n  plot \nthe").unwrap();

        let stopwords = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stopwords.n_words(), 3);
        assert!(stopwords.contains("movie"));
        assert!(stopwords.contains("plot"));
        assert!(stopwords.contains("?"));
        assert!(!stopwords.contains("and"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopWords::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SentimentError::Io { .. }));
    }
}
