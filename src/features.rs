//! TF-IDF feature extraction
use ndarray::{Array1, Array2, ArrayViewMut1};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::tokenizer::TermCounts;
use crate::vocabulary::Vocabulary;

/// Name of the first pooled feature
pub const FEATURE_POSITIVE: &str = "feature-positive";
/// Name of the second pooled feature
pub const FEATURE_NEGATIVE: &str = "feature-negative";

/// How documents are turned into feature vectors
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureStrategy {
    /// A single vocabulary built from the training documents of both classes. Every vocabulary
    /// token is a feature, weighted as `tf * idf`.
    PerToken,
    /// One vocabulary per class, each with its own inverse document frequencies. A document is
    /// summarized by two features, the sum of `tf * idf` over the positive vocabulary and the sum
    /// over the negative vocabulary.
    Pooled,
}

impl Default for FeatureStrategy {
    fn default() -> Self {
        FeatureStrategy::PerToken
    }
}

/// A fitted [FeatureStrategy](FeatureStrategy)
///
/// The term frequency of a token is computed relative to the number of tokens of the current
/// document. Tokens absent from the document contribute zero, so a document without any token is
/// mapped to the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureExtractor {
    PerToken {
        vocabulary: Vocabulary,
    },
    Pooled {
        positive: Vocabulary,
        negative: Vocabulary,
    },
}

impl FeatureExtractor {
    pub fn strategy(&self) -> FeatureStrategy {
        match self {
            FeatureExtractor::PerToken { .. } => FeatureStrategy::PerToken,
            FeatureExtractor::Pooled { .. } => FeatureStrategy::Pooled,
        }
    }

    /// Length of the feature vectors
    pub fn n_features(&self) -> usize {
        match self {
            FeatureExtractor::PerToken { vocabulary } => vocabulary.len(),
            FeatureExtractor::Pooled { .. } => 2,
        }
    }

    /// Names of the features, in column order
    pub fn feature_names(&self) -> Vec<String> {
        match self {
            FeatureExtractor::PerToken { vocabulary } => vocabulary
                .iter()
                .map(|entry| entry.token().to_string())
                .collect(),
            FeatureExtractor::Pooled { .. } => {
                vec![FEATURE_POSITIVE.to_string(), FEATURE_NEGATIVE.to_string()]
            }
        }
    }

    /// Feature vector of a single document
    pub fn extract(&self, document: &TermCounts) -> Array1<f64> {
        let mut features = Array1::zeros(self.n_features());
        self.extract_into(document, features.view_mut());
        features
    }

    /// Writes the feature vector of `document` into `features`, which must be zero initialized
    /// and of length [n_features](Self::n_features).
    pub fn extract_into(&self, document: &TermCounts, mut features: ArrayViewMut1<f64>) {
        assert_eq!(
            features.len(),
            self.n_features(),
            "The feature vector must have one entry per feature."
        );

        match self {
            FeatureExtractor::PerToken { vocabulary } => {
                for token in document.tokens() {
                    if let Some(i) = vocabulary.position(token) {
                        features[i] = vocabulary.entries()[i].tf_idf(document);
                    }
                }
            }
            FeatureExtractor::Pooled { positive, negative } => {
                features[0] = pooled_tf_idf(positive, document);
                features[1] = pooled_tf_idf(negative, document);
            }
        }
    }

    /// Given a sequence of `n` documents, produces an array of size `(n, n_features)` where row
    /// `i` holds the features of document `i`
    pub fn transform(&self, documents: &[TermCounts]) -> Array2<f64> {
        let mut records = Array2::zeros((documents.len(), self.n_features()));
        for (document, row) in documents.iter().zip(records.rows_mut()) {
            self.extract_into(document, row);
        }
        records
    }
}

/// Sum of the TF-IDF weights of all vocabulary tokens in `document`
fn pooled_tf_idf(vocabulary: &Vocabulary, document: &TermCounts) -> f64 {
    document
        .tokens()
        .filter_map(|token| vocabulary.get(token))
        .map(|entry| entry.tf_idf(document))
        .fold(0., |acc, weight| acc + weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::IdfMethod;
    use crate::Tokenizer;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn documents(texts: &[&str]) -> Vec<TermCounts> {
        let tokenizer = Tokenizer::default();
        texts.iter().map(|text| tokenizer.term_counts(text)).collect()
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<FeatureExtractor>();
        has_autotraits::<FeatureStrategy>();
    }

    #[test]
    fn per_token_features() {
        let train = documents(&["good plot", "good acting", "bad plot", "bad ending"]);
        let vocabulary = Vocabulary::fit(&train, IdfMethod::Standard).unwrap();
        let extractor = FeatureExtractor::PerToken { vocabulary };

        assert_eq!(extractor.strategy(), FeatureStrategy::PerToken);
        assert_eq!(
            extractor.feature_names(),
            vec!["acting", "bad", "ending", "good", "plot"]
        );

        let ln2 = 2f64.ln();
        let ln4 = 4f64.ln();
        let features = extractor.transform(&documents(&["good good acting", "bad unknown", ""]));
        assert_abs_diff_eq!(
            features,
            array![
                [ln4 / 3., 0., 0., 2. * ln2 / 3., 0.],
                [0., ln2 / 2., 0., 0., 0.],
                [0., 0., 0., 0., 0.]
            ],
            epsilon = 1e-12
        );
    }

    #[test]
    fn per_token_features_are_non_negative() {
        let train = documents(&[
            "a gripping thriller with a superb cast",
            "superb acting , gripping plot",
            "a dull and predictable thriller",
            "predictable plot , wooden acting",
        ]);
        let vocabulary = Vocabulary::fit(&train, IdfMethod::Standard).unwrap();
        let extractor = FeatureExtractor::PerToken { vocabulary };

        let test = documents(&["gripping but predictable", "wooden wooden cast", "nothing known"]);
        let features = extractor.transform(&test);
        assert!(features.iter().all(|&x| x >= 0.));

        // absent tokens are exactly zero
        let names = extractor.feature_names();
        for (i, name) in names.iter().enumerate() {
            if !["gripping", "predictable"].contains(&name.as_str()) {
                assert_eq!(features[(0, i)], 0.);
            }
        }
        assert!(features.row(2).iter().all(|&x| x == 0.));
    }

    #[test]
    fn pooled_features() {
        let positive = Vocabulary::fit(
            &documents(&["great film", "wonderful film", "great story"]),
            IdfMethod::Standard,
        )
        .unwrap();
        let negative = Vocabulary::fit(
            &documents(&["awful film", "terrible film", "awful story"]),
            IdfMethod::Standard,
        )
        .unwrap();
        let extractor = FeatureExtractor::Pooled { positive, negative };

        assert_eq!(extractor.n_features(), 2);
        assert_eq!(
            extractor.feature_names(),
            vec![FEATURE_POSITIVE, FEATURE_NEGATIVE]
        );

        let ln3 = 3f64.ln();
        let ln3_2 = (3f64 / 2.).ln();
        let features = extractor.transform(&documents(&["wonderful great", "terrible film", "plain"]));
        assert_abs_diff_eq!(
            features,
            array![
                [0.5 * ln3 + 0.5 * ln3_2, 0.],
                [0.5 * ln3_2, 0.5 * ln3 + 0.5 * ln3_2],
                [0., 0.]
            ],
            epsilon = 1e-12
        );
        // a vocabulary matching no token contributes a positive zero
        assert!(features[(0, 1)].is_sign_positive());
        assert!(features.row(2).iter().all(|x| x.is_sign_positive()));
    }
}
