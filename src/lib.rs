//! `linfa-sentiment` labels free text reviews as positive or negative.
//!
//! Documents are normalized (unicode NFKD, lowercase), split on whitespace and stripped of
//! English stopwords and punctuation symbols. The bag of words of every document is then
//! weighted by TF-IDF and handed to a Naive Bayes classifier from
//! [`linfa-bayes`](https://docs.rs/linfa-bayes).
//!
//! ## The pipeline
//!
//! * [`Tokenizer`](crate::Tokenizer) turns a text into [`TermCounts`](crate::TermCounts)
//! * [`Vocabulary`](crate::Vocabulary) holds the inverse document frequencies of a collection
//! * [`FeatureExtractor`](crate::FeatureExtractor) maps term counts to feature vectors, either
//!   one feature per vocabulary token or two pooled features computed on per-class vocabularies
//! * [`NaiveBayesModel`](crate::NaiveBayesModel) wraps the multinomial and Gaussian estimators
//! * [`SentimentClassifier`](crate::SentimentClassifier) ties them together and is fitted from
//!   labeled texts or from a [`ReviewCorpus`](crate::ReviewCorpus) of files
//!
//! ## Example
//!
//! ```rust
//! use linfa_sentiment::{FeatureStrategy, Sentiment, SentimentClassifier};
//!
//! let train = [
//!     ("a superb and moving story", Sentiment::Positive),
//!     ("superb cast", Sentiment::Positive),
//!     ("a tedious and predictable story", Sentiment::Negative),
//!     ("predictable ending", Sentiment::Negative),
//! ];
//!
//! let classifier = SentimentClassifier::params()
//!     .strategy(FeatureStrategy::PerToken)
//!     .multinomial(1.0)
//!     .fit(&train)?;
//!
//! let labels = classifier.classify_many(&["superb !", "so predictable"]);
//! assert_eq!(labels, vec![Sentiment::Positive, Sentiment::Negative]);
//! # Ok::<(), linfa_sentiment::SentimentError>(())
//! ```

mod classifier;
mod corpus;
pub mod error;
mod features;
mod hyperparams;
mod model;
mod sentiment;
mod stopwords;
mod tokenizer;
mod vocabulary;

pub use classifier::SentimentClassifier;
pub use corpus::{read_document, ReviewCorpus};
pub use error::{Result, SentimentError};
pub use features::{FeatureExtractor, FeatureStrategy, FEATURE_NEGATIVE, FEATURE_POSITIVE};
pub use hyperparams::{SentimentParams, SentimentValidParams};
pub use model::{NaiveBayes, NaiveBayesModel};
pub use sentiment::Sentiment;
pub use stopwords::{StopWords, ENGLISH_STOPWORDS};
pub use tokenizer::{TermCounts, Tokenizer};
pub use vocabulary::{DocumentFrequencies, IdfMethod, Vocabulary, VocabularyEntry};
