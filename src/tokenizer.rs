//! Text normalization and bag-of-words tokenization
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::stopwords::StopWords;

/// Splits documents into normalized tokens
///
/// A document is normalized according to unicode's NFKD normalization and converted to
/// lowercase, then split on whitespace. Tokens which are stopwords or a single punctuation symbol
/// are removed.
///
/// ### Attributes
///
/// * `stopwords`: the [`StopWords`](crate::StopWords) to filter. They are shared between
///   tokenizers and never modified. Defaults to [`StopWords::english`](crate::StopWords::english).
/// * `strip_accents`: if true, combining marks left by the decomposition are removed, so that
///   `"Café"` becomes `"cafe"`. Defaults to `true`.
/// * `convert_to_lowercase`: if true, documents are converted to lowercase. Defaults to `true`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopWords>,
    strip_accents: bool,
    convert_to_lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(StopWords::english()))
    }
}

impl Tokenizer {
    pub fn new(stopwords: Arc<StopWords>) -> Self {
        Self {
            stopwords,
            strip_accents: true,
            convert_to_lowercase: true,
        }
    }

    pub fn strip_accents(mut self, strip_accents: bool) -> Self {
        self.strip_accents = strip_accents;
        self
    }

    pub fn convert_to_lowercase(mut self, convert_to_lowercase: bool) -> Self {
        self.convert_to_lowercase = convert_to_lowercase;
        self
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Applies the normalization steps without splitting the text
    pub fn normalize(&self, text: &str) -> String {
        let decomposed = text.nfkd();
        let normalized: String = if self.strip_accents {
            decomposed.filter(|c| !is_combining_mark(*c)).collect()
        } else {
            decomposed.collect()
        };

        if self.convert_to_lowercase {
            normalized.to_lowercase()
        } else {
            normalized
        }
    }

    /// Tokens of `text` in document order, repetitions included
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Bag of words of `text`
    pub fn term_counts(&self, text: &str) -> TermCounts {
        self.tokens(text).into_iter().collect()
    }

    /// Distinct tokens of `text`, without frequencies
    pub fn distinct_tokens(&self, text: &str) -> BTreeSet<String> {
        self.tokens(text).into_iter().collect()
    }
}

/// Occurrence count of each token of a single document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    counts: HashMap<String, usize>,
    total: usize,
}

impl TermCounts {
    /// Occurrences of `token`, zero if absent
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of tokens in the document, repetitions included
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `token` divided by the number of tokens in this document.
    ///
    /// A document without tokens has a term frequency of zero for every token.
    pub fn term_frequency(&self, token: &str) -> f64 {
        if self.total == 0 {
            return 0.;
        }
        self.count(token) as f64 / self.total as f64
    }

    /// Iterates over the distinct tokens and their counts in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for TermCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut term_counts = TermCounts::default();
        for token in iter {
            *term_counts.counts.entry(token.into()).or_insert(0) += 1;
            term_counts.total += 1;
        }
        term_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<Tokenizer>();
        has_autotraits::<TermCounts>();
    }

    #[test]
    fn normalizes_and_filters() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokens("The Café was GREAT , and the \u{FB01}lm was great !");

        assert_eq!(tokens, vec!["cafe", "great", "film", "great"]);
    }

    #[test]
    fn keep_accents() {
        let tokenizer = Tokenizer::default().strip_accents(false);
        let tokens = tokenizer.tokens("Café");

        assert_eq!(tokens, vec!["cafe\u{301}"]);
    }

    #[test]
    fn keep_case() {
        let tokenizer = Tokenizer::new(Arc::new(StopWords::empty())).convert_to_lowercase(false);

        assert_eq!(tokenizer.tokens("Good GOOD good"), vec!["Good", "GOOD", "good"]);
    }

    #[test]
    fn no_stopword_or_punctuation_is_emitted() {
        let tokenizer = Tokenizer::default();
        let text = "I don't think this movie is worth it ; it's dull - very dull , isn't it ?";

        let tokens = tokenizer.tokens(text);
        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(!tokenizer.stopwords().is_stopword(token), "{}", token);
            assert!(!tokenizer.stopwords().is_punctuation(token), "{}", token);
        }
    }

    #[test]
    fn term_counts_and_frequencies() {
        let tokenizer = Tokenizer::default();
        let counts = tokenizer.term_counts("good plot , good acting , bad");

        assert_eq!(counts.total(), 5);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.count("good"), 2);
        assert_eq!(counts.count("missing"), 0);
        assert_abs_diff_eq!(counts.term_frequency("good"), 0.4);
        assert_abs_diff_eq!(counts.term_frequency("bad"), 0.2);

        let distinct = tokenizer.distinct_tokens("good plot , good acting , bad");
        assert_eq!(
            distinct.into_iter().collect::<Vec<_>>(),
            vec!["acting", "bad", "good", "plot"]
        );
    }

    #[test]
    fn empty_document() {
        let tokenizer = Tokenizer::default();

        for text in &["", "   \n\t", "the and of , ."] {
            let counts = tokenizer.term_counts(text);
            assert!(counts.is_empty());
            assert_eq!(counts.total(), 0);
            assert_abs_diff_eq!(counts.term_frequency("good"), 0.);
        }
    }

    #[test]
    fn deterministic() {
        let tokenizer = Tokenizer::default();
        let text = "A strangely moving film ; the score is superb and the cast is superb too";

        assert_eq!(tokenizer.tokens(text), tokenizer.tokens(text));
        assert_eq!(tokenizer.term_counts(text), tokenizer.term_counts(text));
    }
}
