//! Naive Bayes estimators from `linfa-bayes` trained on labeled feature vectors
use linfa::metrics::{ConfusionMatrix, ToConfusionMatrix};
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_bayes::{GaussianNb, MultinomialNb};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::sentiment::Sentiment;

/// Naive Bayes variant and its smoothing parameter
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NaiveBayes {
    /// Multinomial Naive Bayes with additive (Laplace/Lidstone) smoothing `alpha`
    Multinomial { alpha: f64 },
    /// Gaussian Naive Bayes, `var_smoothing` stabilizes the variance estimates
    Gaussian { var_smoothing: f64 },
}

impl NaiveBayes {
    /// The smoothing parameter of the variant
    pub fn smoothing(&self) -> f64 {
        match self {
            NaiveBayes::Multinomial { alpha } => *alpha,
            NaiveBayes::Gaussian { var_smoothing } => *var_smoothing,
        }
    }

    /// Whether the smoothing parameter is finite and strictly positive
    ///
    /// A zero `alpha` leaves `ln(0)` in the log probabilities of features a class never saw, a
    /// zero `var_smoothing` leaves constant features without variance.
    pub fn is_valid(&self) -> bool {
        let smoothing = self.smoothing();
        smoothing.is_finite() && smoothing > 0.
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        NaiveBayes::Multinomial { alpha: 1.0 }
    }
}

/// A fitted Naive Bayes classifier over sentiment labels
#[derive(Debug, Clone)]
pub enum NaiveBayesModel {
    Multinomial(MultinomialNb<f64, Sentiment>),
    Gaussian(GaussianNb<f64, Sentiment>),
}

impl NaiveBayesModel {
    /// Shuffles the rows of `dataset` with `rng` and fits the selected estimator on them
    ///
    /// Returns an error if:
    /// * the smoothing parameter is not strictly positive
    /// * the Gaussian variant is trained on features which are all constant, the smoothed
    ///   variances would then be zero
    /// * the estimator from `linfa-bayes` fails
    pub fn train<R: Rng>(
        kind: &NaiveBayes,
        dataset: &Dataset<f64, Sentiment, Ix1>,
        rng: &mut R,
    ) -> Result<Self> {
        if !kind.is_valid() {
            return Err(SentimentError::InvalidSmoothing(kind.smoothing()));
        }

        let mut permutation = (0..dataset.records().nrows()).collect::<Vec<_>>();
        permutation.shuffle(rng);

        let records = dataset.records().select(Axis(0), &permutation);
        let targets = dataset.targets().select(Axis(0), &permutation);
        let shuffled = Dataset::new(records, targets);

        log::info!(
            "Train {:?} Naive Bayes with {} samples and {} features.",
            kind,
            shuffled.records().nrows(),
            shuffled.records().ncols()
        );

        let model = match *kind {
            NaiveBayes::Multinomial { alpha } => NaiveBayesModel::Multinomial(
                MultinomialNb::<f64, Sentiment>::params()
                    .alpha(alpha)
                    .fit(&shuffled)?,
            ),
            NaiveBayes::Gaussian { var_smoothing } => {
                let max_variance = shuffled
                    .records()
                    .var_axis(Axis(0), 0.)
                    .fold(0., |max: f64, &variance| max.max(variance));
                if !(var_smoothing * max_variance > 0.) {
                    return Err(SentimentError::ConstantFeatures(var_smoothing));
                }

                NaiveBayesModel::Gaussian(
                    GaussianNb::<f64, Sentiment>::params()
                        .var_smoothing(var_smoothing)
                        .fit(&shuffled)?,
                )
            }
        };

        Ok(model)
    }

    /// Predicts one label per row of `records`, in the same order
    pub fn classify_many<D: Data<Elem = f64>>(
        &self,
        records: &ArrayBase<D, Ix2>,
    ) -> Array1<Sentiment> {
        match self {
            NaiveBayesModel::Multinomial(model) => model.predict(records),
            NaiveBayesModel::Gaussian(model) => model.predict(records),
        }
    }

    /// Fraction of rows of `records` whose prediction equals the expected label
    ///
    /// Returns an error if the test set is empty or if the number of rows and labels differ.
    pub fn accuracy<D: Data<Elem = f64>>(
        &self,
        records: &ArrayBase<D, Ix2>,
        targets: &Array1<Sentiment>,
    ) -> Result<f64> {
        let predictions = self.predictions_for(records, targets)?;
        accuracy_score(&predictions, targets)
    }

    /// Confusion matrix of the predictions on `records` against `targets`
    pub fn confusion_matrix<D: Data<Elem = f64>>(
        &self,
        records: &ArrayBase<D, Ix2>,
        targets: &Array1<Sentiment>,
    ) -> Result<ConfusionMatrix<Sentiment>> {
        let predictions = self.predictions_for(records, targets)?;
        confusion_matrix(&predictions, targets)
    }

    fn predictions_for<D: Data<Elem = f64>>(
        &self,
        records: &ArrayBase<D, Ix2>,
        targets: &Array1<Sentiment>,
    ) -> Result<Array1<Sentiment>> {
        check_evaluation(records.nrows(), targets.len())?;
        Ok(self.classify_many(records))
    }
}

/// Fraction of `predictions` equal to the expected label in `targets`
pub(crate) fn accuracy_score(
    predictions: &Array1<Sentiment>,
    targets: &Array1<Sentiment>,
) -> Result<f64> {
    check_evaluation(predictions.len(), targets.len())?;
    let correct = predictions
        .iter()
        .zip(targets.iter())
        .filter(|(predicted, expected)| predicted == expected)
        .count();

    Ok(correct as f64 / targets.len() as f64)
}

pub(crate) fn confusion_matrix(
    predictions: &Array1<Sentiment>,
    targets: &Array1<Sentiment>,
) -> Result<ConfusionMatrix<Sentiment>> {
    check_evaluation(predictions.len(), targets.len())?;
    Ok(predictions.confusion_matrix(targets)?)
}

fn check_evaluation(n_predictions: usize, n_targets: usize) -> Result<()> {
    if n_targets == 0 {
        Err(SentimentError::EmptyEvaluation)
    } else if n_predictions != n_targets {
        Err(SentimentError::MismatchedLengths(n_predictions, n_targets))
    } else {
        Ok(())
    }
}

/// Builds a dataset from feature rows and their labels
pub(crate) fn labeled_dataset(
    records: Array2<f64>,
    targets: Vec<Sentiment>,
) -> Dataset<f64, Sentiment, Ix1> {
    Dataset::new(records, Array1::from(targets))
}
