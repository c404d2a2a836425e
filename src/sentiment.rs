use std::fmt;
use std::str::FromStr;

use linfa::Label;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Polarity of a review
///
/// The label set is closed: every document is either [`Positive`](Sentiment::Positive) or
/// [`Negative`](Sentiment::Negative). `Negative` is the default, `linfa` uses it as placeholder
/// when allocating predictions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    /// Both labels, negative first
    pub const ALL: [Sentiment; 2] = [Sentiment::Negative, Sentiment::Positive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }

    /// The other label
    pub fn opposite(&self) -> Self {
        match self {
            Sentiment::Positive => Sentiment::Negative,
            Sentiment::Negative => Sentiment::Positive,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Negative
    }
}

impl Label for Sentiment {}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "positivo" => Ok(Sentiment::Positive),
            "negative" | "neg" | "negativo" => Ok(Sentiment::Negative),
            _ => Err(SentimentError::InvalidLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sentiment;

    #[test]
    fn parse_labels() {
        assert_eq!("positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("NEG".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert_eq!("positivo".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!(" negativo ".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert!("neutral".parse::<Sentiment>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for label in Sentiment::ALL.iter() {
            assert_eq!(label.to_string().parse::<Sentiment>().unwrap(), *label);
            assert_ne!(label.opposite(), *label);
        }
    }
}
