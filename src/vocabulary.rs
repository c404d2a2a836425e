//! Document frequencies and inverse document frequencies of a document collection
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::tokenizer::TermCounts;

/// Methods for computing the inverse document frequency of a vocabulary entry
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdfMethod {
    /// Computes the idf as `ln(n/document_frequency)`. Entries that appear in every document get a
    /// weight of zero.
    Standard,
    /// Computes the idf as `ln((1+n)/(1+document_frequency)) + 1`. The "plus ones" inside the log
    /// add an artificial document containing every vocabulary entry, the "plus one" after the log
    /// keeps entries that appear in every document with a weight of one.
    Smooth,
}

impl IdfMethod {
    pub fn compute_idf(&self, n: usize, df: usize) -> f64 {
        match self {
            IdfMethod::Standard => (n as f64 / df as f64).ln(),
            IdfMethod::Smooth => ((1. + n as f64) / (1. + df as f64)).ln() + 1.,
        }
    }
}

impl Default for IdfMethod {
    fn default() -> Self {
        IdfMethod::Standard
    }
}

/// Counts in how many documents of a collection each token occurs
///
/// Every distinct token of a document increments the count of that token by one, no matter how
/// often it is repeated inside the document. Counts start at zero, so after the scan the count of
/// a token is the number of documents containing it.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencies {
    n_documents: usize,
    frequencies: HashMap<String, usize>,
}

impl DocumentFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the distinct tokens of one document
    pub fn add_document(&mut self, document: &TermCounts) {
        self.n_documents += 1;
        for token in document.tokens() {
            if let Some(freq) = self.frequencies.get_mut(token) {
                *freq += 1;
            } else {
                self.frequencies.insert(token.to_string(), 1);
            }
        }
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Number of documents containing `token`
    pub fn document_frequency(&self, token: &str) -> usize {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    /// Computes the inverse document frequency of every token, producing an immutable
    /// [Vocabulary](Vocabulary).
    ///
    /// Returns an error if:
    /// * no document was added
    /// * all documents were empty, leaving no token in the vocabulary
    pub fn finish(self, method: IdfMethod) -> Result<Vocabulary> {
        if self.n_documents == 0 {
            return Err(SentimentError::EmptyCollection);
        }
        if self.frequencies.is_empty() {
            return Err(SentimentError::EmptyVocabulary);
        }

        let n_documents = self.n_documents;
        let mut entries = self
            .frequencies
            .into_iter()
            .map(|(token, document_frequency)| VocabularyEntry {
                idf: method.compute_idf(n_documents, document_frequency),
                token,
                document_frequency,
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.token.cmp(&b.token));

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.token.clone(), i))
            .collect();

        Ok(Vocabulary {
            entries,
            index,
            n_documents,
            method,
        })
    }
}

impl<'a> Extend<&'a TermCounts> for DocumentFrequencies {
    fn extend<I: IntoIterator<Item = &'a TermCounts>>(&mut self, iter: I) {
        for document in iter {
            self.add_document(document);
        }
    }
}

/// A token of the vocabulary together with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    token: String,
    document_frequency: usize,
    idf: f64,
}

impl VocabularyEntry {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Number of documents of the collection containing the token
    pub fn document_frequency(&self) -> usize {
        self.document_frequency
    }

    pub fn idf(&self) -> f64 {
        self.idf
    }

    /// TF-IDF weight of this entry in `document`
    pub fn tf_idf(&self, document: &TermCounts) -> f64 {
        document.term_frequency(&self.token) * self.idf
    }
}

/// Tokens of a document collection with their inverse document frequencies
///
/// Entries are sorted by token, the position of an entry is the column used by the per-token
/// features. The statistics are computed once and never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    index: HashMap<String, usize>,
    n_documents: usize,
    method: IdfMethod,
}

impl Vocabulary {
    /// Builds the vocabulary of a collection of tokenized documents
    pub fn fit<'a, I>(documents: I, method: IdfMethod) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TermCounts>,
    {
        let mut frequencies = DocumentFrequencies::new();
        frequencies.extend(documents);
        frequencies.finish(method)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the collection the statistics were computed on
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn method(&self) -> IdfMethod {
        self.method
    }

    pub fn get(&self, token: &str) -> Option<&VocabularyEntry> {
        self.index.get(token).map(|&i| &self.entries[i])
    }

    /// Column of `token` in the per-token features
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn idf(&self, token: &str) -> Option<f64> {
        self.get(token).map(VocabularyEntry::idf)
    }

    /// Entries sorted by token
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabularyEntry> {
        self.entries.iter()
    }

    /// All tokens, in the order of the per-token features
    pub fn tokens(&self) -> Vec<&str> {
        self.entries.iter().map(VocabularyEntry::token).collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabularyEntry;
    type IntoIter = std::slice::Iter<'a, VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;
    use approx::assert_abs_diff_eq;

    fn documents(texts: &[&str]) -> Vec<TermCounts> {
        let tokenizer = Tokenizer::default();
        texts.iter().map(|text| tokenizer.term_counts(text)).collect()
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<DocumentFrequencies>();
        has_autotraits::<Vocabulary>();
        has_autotraits::<IdfMethod>();
    }

    #[test]
    fn document_frequencies_count_documents_not_occurrences() {
        let docs = documents(&[
            "good good good plot",
            "good acting",
            "bad plot",
            "bad bad ending",
        ]);
        let mut frequencies = DocumentFrequencies::new();
        frequencies.extend(&docs);

        assert_eq!(frequencies.n_documents(), 4);
        assert_eq!(frequencies.document_frequency("good"), 2);
        assert_eq!(frequencies.document_frequency("plot"), 2);
        assert_eq!(frequencies.document_frequency("bad"), 2);
        assert_eq!(frequencies.document_frequency("acting"), 1);
        assert_eq!(frequencies.document_frequency("missing"), 0);
    }

    #[test]
    fn standard_idf() {
        let docs = documents(&["good plot", "good acting", "good ending", "bad ending"]);
        let vocabulary = Vocabulary::fit(&docs, IdfMethod::Standard).unwrap();

        assert_eq!(vocabulary.n_documents(), 4);
        assert_eq!(
            vocabulary.tokens(),
            vec!["acting", "bad", "ending", "good", "plot"]
        );
        assert_abs_diff_eq!(vocabulary.idf("good").unwrap(), (4f64 / 3.).ln());
        assert_abs_diff_eq!(vocabulary.idf("ending").unwrap(), (2f64).ln());
        assert_abs_diff_eq!(vocabulary.idf("plot").unwrap(), (4f64).ln());
        assert_eq!(vocabulary.idf("missing"), None);
        assert_eq!(vocabulary.position("ending"), Some(2));
    }

    #[test]
    fn token_in_every_document_has_zero_idf() {
        let docs = documents(&["great film", "great cast", "great great score"]);
        let vocabulary = Vocabulary::fit(&docs, IdfMethod::Standard).unwrap();

        assert_eq!(vocabulary.get("great").unwrap().document_frequency(), 3);
        assert_abs_diff_eq!(vocabulary.idf("great").unwrap(), 0.);
        for entry in &vocabulary {
            assert!(entry.idf() >= 0.);
        }
    }

    #[test]
    fn smooth_idf_is_positive() {
        let docs = documents(&["great film", "great cast", "great great score"]);
        let vocabulary = Vocabulary::fit(&docs, IdfMethod::Smooth).unwrap();

        assert_eq!(vocabulary.method(), IdfMethod::Smooth);
        assert_abs_diff_eq!(vocabulary.idf("great").unwrap(), 1.);
        assert_abs_diff_eq!(vocabulary.idf("film").unwrap(), 2f64.ln() + 1.);
    }

    #[test]
    fn tf_idf_of_entry() {
        let docs = documents(&["good plot", "bad plot"]);
        let vocabulary = Vocabulary::fit(&docs, IdfMethod::Standard).unwrap();
        let good = vocabulary.get("good").unwrap();

        let document = Tokenizer::default().term_counts("good good acting");
        assert_abs_diff_eq!(good.tf_idf(&document), 2. / 3. * 2f64.ln());
        let document = Tokenizer::default().term_counts("bad acting");
        assert_abs_diff_eq!(good.tf_idf(&document), 0.);
    }

    #[test]
    fn empty_collections_are_rejected() {
        let err = Vocabulary::fit(&Vec::<TermCounts>::new(), IdfMethod::Standard).unwrap_err();
        assert!(matches!(err, SentimentError::EmptyCollection));

        let docs = documents(&["", "the , of"]);
        let err = Vocabulary::fit(&docs, IdfMethod::Standard).unwrap_err();
        assert!(matches!(err, SentimentError::EmptyVocabulary));
    }
}
