//! Sentiment classification of free text
use std::path::Path;

use linfa::metrics::ConfusionMatrix;
use linfa::ParamGuard;
use ndarray::{Array1, Array2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::corpus::{read_document, ReviewCorpus};
use crate::error::{Result, SentimentError};
use crate::features::{FeatureExtractor, FeatureStrategy};
use crate::hyperparams::{SentimentParams, SentimentValidParams};
use crate::model::{accuracy_score, confusion_matrix, labeled_dataset, NaiveBayesModel};
use crate::sentiment::Sentiment;
use crate::tokenizer::{TermCounts, Tokenizer};
use crate::vocabulary::Vocabulary;

impl<R: Rng + Clone> SentimentValidParams<R> {
    /// Learns the TF-IDF statistics of the labeled `documents` and trains the Naive Bayes model
    /// on their features.
    ///
    /// Returns an error if:
    /// * one of the two classes has no document
    /// * the documents of a vocabulary contain no token after filtering
    /// * the Naive Bayes estimator fails
    pub fn fit<T: AsRef<str>>(&self, documents: &[(T, Sentiment)]) -> Result<SentimentClassifier> {
        let targets = documents.iter().map(|(_, label)| *label).collect::<Vec<_>>();
        for label in Sentiment::ALL.iter() {
            if !targets.contains(label) {
                return Err(SentimentError::MissingClass(*label));
            }
        }

        let term_counts = documents
            .iter()
            .map(|(text, _)| self.tokenizer().term_counts(text.as_ref()))
            .collect::<Vec<_>>();

        let extractor = match self.strategy() {
            FeatureStrategy::PerToken => FeatureExtractor::PerToken {
                vocabulary: Vocabulary::fit(&term_counts, self.idf_method())?,
            },
            FeatureStrategy::Pooled => {
                let vocabulary_of = |label: Sentiment| {
                    let documents = term_counts
                        .iter()
                        .zip(targets.iter())
                        .filter(|(_, target)| **target == label)
                        .map(|(counts, _)| counts);
                    Vocabulary::fit(documents, self.idf_method())
                };
                FeatureExtractor::Pooled {
                    positive: vocabulary_of(Sentiment::Positive)?,
                    negative: vocabulary_of(Sentiment::Negative)?,
                }
            }
        };
        log::debug!(
            "Fitted {:?} features on {} documents, {} features per document.",
            extractor.strategy(),
            documents.len(),
            extractor.n_features()
        );

        let default_label = majority_label(&targets);
        let records = extractor.transform(&term_counts);
        let dataset = labeled_dataset(records, targets);
        let mut rng = self.rng().clone();
        let model = NaiveBayesModel::train(&self.naive_bayes(), &dataset, &mut rng)?;

        Ok(SentimentClassifier {
            tokenizer: self.tokenizer().clone(),
            extractor,
            model,
            default_label,
        })
    }

    /// Reads every document of `corpus` and fits on them
    pub fn fit_corpus(&self, corpus: &ReviewCorpus) -> Result<SentimentClassifier> {
        let documents = corpus.read()?;
        self.fit(&documents)
    }
}

impl<R: Rng + Clone> SentimentParams<R> {
    /// Checks the hyperparameters, then fits on the labeled `documents`.
    /// See [SentimentValidParams::fit](SentimentValidParams::fit).
    pub fn fit<T: AsRef<str>>(&self, documents: &[(T, Sentiment)]) -> Result<SentimentClassifier> {
        self.check_ref()?.fit(documents)
    }

    pub fn fit_corpus(&self, corpus: &ReviewCorpus) -> Result<SentimentClassifier> {
        self.check_ref()?.fit_corpus(corpus)
    }
}

/// A fitted sentiment classifier
///
/// Documents are tokenized with the same [Tokenizer](crate::Tokenizer) used during fitting,
/// mapped to feature vectors by the fitted [FeatureExtractor](crate::FeatureExtractor) and
/// labeled by the trained [NaiveBayesModel](crate::NaiveBayesModel). Tokens never seen during
/// fitting are ignored.
///
/// A document whose feature vector is all zero (empty, or made only of unknown or zero weight
/// tokens) carries no evidence. It gets the [default label](SentimentClassifier::default_label),
/// the most frequent class of the training documents, `Negative` on a tie.
///
/// ### Example
///
/// ```rust
/// use linfa_sentiment::{Sentiment, SentimentClassifier};
///
/// let train = [
///     ("a wonderful and moving film", Sentiment::Positive),
///     ("wonderful acting", Sentiment::Positive),
///     ("a dull and boring film", Sentiment::Negative),
///     ("boring plot", Sentiment::Negative),
/// ];
/// let classifier = SentimentClassifier::params().fit(&train).unwrap();
///
/// assert_eq!(classifier.classify("wonderful"), Sentiment::Positive);
/// assert_eq!(classifier.classify("so boring"), Sentiment::Negative);
/// ```
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    tokenizer: Tokenizer,
    extractor: FeatureExtractor,
    model: NaiveBayesModel,
    default_label: Sentiment,
}

impl SentimentClassifier {
    /// Default hyperparameters, training samples are shuffled with a generator seeded with 42
    pub fn params() -> SentimentParams<SmallRng> {
        Self::params_with_rng(SmallRng::seed_from_u64(42))
    }

    pub fn params_with_rng<R: Rng>(rng: R) -> SentimentParams<R> {
        SentimentParams::new(rng)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn feature_extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    /// Label of documents without any feature weight
    pub fn default_label(&self) -> Sentiment {
        self.default_label
    }

    /// Label of a single document
    pub fn classify(&self, text: &str) -> Sentiment {
        self.predict(&self.transform(&[text]))[0]
    }

    /// Labels of a sequence of documents, in the same order
    pub fn classify_many<T: AsRef<str>>(&self, texts: &[T]) -> Vec<Sentiment> {
        self.predict(&self.transform(texts)).to_vec()
    }

    /// Reads every file of `paths` and labels its content
    pub fn classify_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Sentiment>> {
        let texts = paths
            .iter()
            .map(read_document)
            .collect::<Result<Vec<_>>>()?;
        Ok(self.classify_many(&texts))
    }

    /// Feature vector of a single document
    pub fn features(&self, text: &str) -> Array1<f64> {
        self.extractor.extract(&self.term_counts(text))
    }

    /// Given a sequence of `n` documents, produces an array of size `(n, n_features)`
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> Array2<f64> {
        let term_counts = texts
            .iter()
            .map(|text| self.term_counts(text.as_ref()))
            .collect::<Vec<_>>();
        self.extractor.transform(&term_counts)
    }

    /// Fraction of correctly labeled documents
    ///
    /// Returns an error if `documents` is empty.
    pub fn accuracy<T: AsRef<str>>(&self, documents: &[(T, Sentiment)]) -> Result<f64> {
        let (records, targets) = self.labeled_records(documents);
        let accuracy = accuracy_score(&self.predict(&records), &targets)?;
        log::info!(
            "Accuracy on {} documents: {:.4}",
            documents.len(),
            accuracy
        );
        Ok(accuracy)
    }

    pub fn confusion_matrix<T: AsRef<str>>(
        &self,
        documents: &[(T, Sentiment)],
    ) -> Result<ConfusionMatrix<Sentiment>> {
        let (records, targets) = self.labeled_records(documents);
        confusion_matrix(&self.predict(&records), &targets)
    }

    fn predict(&self, records: &Array2<f64>) -> Array1<Sentiment> {
        if records.nrows() == 0 {
            return Array1::from(Vec::new());
        }

        let mut labels = self.model.classify_many(records);
        for (row, label) in records.rows().into_iter().zip(labels.iter_mut()) {
            if row.iter().all(|&x| x == 0.) {
                *label = self.default_label;
            }
        }
        labels
    }

    fn labeled_records<T: AsRef<str>>(
        &self,
        documents: &[(T, Sentiment)],
    ) -> (Array2<f64>, Array1<Sentiment>) {
        let texts = documents
            .iter()
            .map(|(text, _)| text.as_ref())
            .collect::<Vec<_>>();
        let targets = documents.iter().map(|(_, label)| *label).collect();
        (self.transform(&texts), targets)
    }

    fn term_counts(&self, text: &str) -> TermCounts {
        let term_counts = self.tokenizer.term_counts(text);
        if term_counts.is_empty() {
            log::warn!("Document without any token after filtering, all its features are zero.");
        }
        term_counts
    }
}

/// Most frequent label, the first of [Sentiment::ALL](Sentiment::ALL) on a tie
fn majority_label(targets: &[Sentiment]) -> Sentiment {
    let count = |label: Sentiment| targets.iter().filter(|&&target| target == label).count();

    let mut majority = Sentiment::ALL[0];
    for &label in Sentiment::ALL.iter().skip(1) {
        if count(label) > count(majority) {
            majority = label;
        }
    }
    majority
}
