//! Error definitions for sentiment classification
use std::path::PathBuf;

use linfa_bayes::NaiveBayesError;
use thiserror::Error;

use crate::sentiment::Sentiment;

/// Simplified `Result` using [`SentimentError`](crate::SentimentError) as error type
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Error variants from parameter checking, document loading, vocabulary construction or model
/// estimation
#[derive(Error, Debug)]
pub enum SentimentError {
    /// A document could not be opened or decoded as UTF-8
    #[error("cannot read document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The training documents do not cover both classes
    #[error("no training documents labeled {0}")]
    MissingClass(Sentiment),
    /// Inverse document frequencies are undefined for an empty collection
    #[error("cannot compute inverse document frequencies of an empty document collection")]
    EmptyCollection,
    /// Every document of the collection was empty after tokenization
    #[error("the vocabulary is empty, no document of the collection produced a token")]
    EmptyVocabulary,
    /// The smoothing parameter must be finite and strictly positive
    #[error("invalid smoothing parameter {0}, it must be finite and strictly positive")]
    InvalidSmoothing(f64),
    /// Every training feature is constant, Gaussian Naive Bayes cannot estimate a variance
    #[error("all training features are constant, var_smoothing {0} leaves a zero variance")]
    ConstantFeatures(f64),
    #[error("{0:?} is not a sentiment label")]
    InvalidLabel(String),
    #[error("cannot evaluate the classifier on an empty test set")]
    EmptyEvaluation,
    #[error("number of predictions ({0}) does not match number of expected labels ({1})")]
    MismatchedLengths(usize, usize),
    #[error(transparent)]
    NaiveBayes(#[from] NaiveBayesError),
    #[error(transparent)]
    BaseCrate(#[from] linfa::Error),
}
