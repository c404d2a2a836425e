use linfa::ParamGuard;
use rand::Rng;

use crate::error::SentimentError;
use crate::features::FeatureStrategy;
use crate::model::NaiveBayes;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::IdfMethod;

/// Sentiment classifier: learns TF-IDF statistics from labeled documents and trains a Naive
/// Bayes model on the resulting feature vectors, producing a
/// [SentimentClassifier](crate::SentimentClassifier).
///
/// ### Attributes
///
/// * `tokenizer`: normalization and token filtering applied to every document, both during
///   fitting and classification. Defaults to [`Tokenizer::default`](crate::Tokenizer).
/// * `strategy`: the [FeatureStrategy](crate::FeatureStrategy) used to summarize documents.
///   Defaults to `PerToken`.
/// * `idf_method`: the [IdfMethod](crate::IdfMethod) used for the inverse document frequencies.
///   Defaults to `Standard`.
/// * `naive_bayes`: the [NaiveBayes](crate::NaiveBayes) variant and its smoothing. Defaults to a
///   multinomial model with `alpha = 1`.
/// * `rng`: random generator used to shuffle the training samples.
#[derive(Clone, Debug)]
pub struct SentimentValidParams<R: Rng> {
    tokenizer: Tokenizer,
    strategy: FeatureStrategy,
    idf_method: IdfMethod,
    naive_bayes: NaiveBayes,
    rng: R,
}

impl<R: Rng> SentimentValidParams<R> {
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn strategy(&self) -> FeatureStrategy {
        self.strategy
    }

    pub fn idf_method(&self) -> IdfMethod {
        self.idf_method
    }

    pub fn naive_bayes(&self) -> NaiveBayes {
        self.naive_bayes
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[derive(Clone, Debug)]
pub struct SentimentParams<R: Rng>(SentimentValidParams<R>);

impl<R: Rng> SentimentParams<R> {
    /// Default hyperparameters with the given random generator
    pub fn new(rng: R) -> Self {
        Self(SentimentValidParams {
            tokenizer: Tokenizer::default(),
            strategy: FeatureStrategy::default(),
            idf_method: IdfMethod::default(),
            naive_bayes: NaiveBayes::default(),
            rng,
        })
    }

    /// Tokenizer applied to training and classified documents
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.0.tokenizer = tokenizer;
        self
    }

    pub fn strategy(mut self, strategy: FeatureStrategy) -> Self {
        self.0.strategy = strategy;
        self
    }

    pub fn idf_method(mut self, idf_method: IdfMethod) -> Self {
        self.0.idf_method = idf_method;
        self
    }

    pub fn naive_bayes(mut self, naive_bayes: NaiveBayes) -> Self {
        self.0.naive_bayes = naive_bayes;
        self
    }

    /// Uses a multinomial Naive Bayes model with additive smoothing `alpha`.
    /// `alpha` must be finite and strictly positive.
    pub fn multinomial(self, alpha: f64) -> Self {
        self.naive_bayes(NaiveBayes::Multinomial { alpha })
    }

    /// Uses a Gaussian Naive Bayes model. `var_smoothing` must be finite and strictly positive.
    pub fn gaussian(self, var_smoothing: f64) -> Self {
        self.naive_bayes(NaiveBayes::Gaussian { var_smoothing })
    }
}

impl<R: Rng> ParamGuard for SentimentParams<R> {
    type Checked = SentimentValidParams<R>;
    type Error = SentimentError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if !self.0.naive_bayes.is_valid() {
            Err(SentimentError::InvalidSmoothing(
                self.0.naive_bayes.smoothing(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
