use std::path::PathBuf;
use std::sync::Arc;

use env_logger::Env;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use structopt::StructOpt;

use linfa_sentiment::{
    FeatureStrategy, IdfMethod, NaiveBayes, ReviewCorpus, SentimentClassifier, StopWords,
    Tokenizer,
};

/// Trains a sentiment classifier on a corpus of reviews and labels the held out reviews
#[derive(Debug, StructOpt)]
#[structopt(name = "classify-reviews")]
struct Options {
    #[structopt(long, default_value = "./reviews/pos", parse(from_os_str))]
    /// Directory of positive reviews, one review per file
    positive: PathBuf,
    #[structopt(long, default_value = "./reviews/neg", parse(from_os_str))]
    /// Directory of negative reviews, one review per file
    negative: PathBuf,
    #[structopt(long, default_value = "500")]
    /// Number of training files per class
    train: usize,
    #[structopt(long, default_value = "900")]
    /// Index of the first held out file of each class
    test_from: usize,
    #[structopt(long, default_value = "per-token", parse(try_from_str = parse_strategy))]
    /// Feature strategy: per-token or pooled
    strategy: FeatureStrategy,
    #[structopt(long, default_value = "standard", parse(try_from_str = parse_idf))]
    /// Inverse document frequency: standard or smooth
    idf: IdfMethod,
    #[structopt(long, default_value = "multinomial", possible_values = &["multinomial", "gaussian"])]
    /// Naive Bayes variant
    classifier: String,
    #[structopt(long)]
    /// Smoothing of the Naive Bayes model, defaults to 1 (multinomial) or 1e-9 (gaussian)
    smoothing: Option<f64>,
    #[structopt(long, default_value = "42")]
    /// Seed of the generator shuffling the training samples
    seed: u64,
    #[structopt(long, parse(from_os_str))]
    /// File with one stopword per line, replaces the English stopwords
    stopwords: Option<PathBuf>,
}

fn parse_strategy(src: &str) -> Result<FeatureStrategy, String> {
    match src {
        "per-token" => Ok(FeatureStrategy::PerToken),
        "pooled" => Ok(FeatureStrategy::Pooled),
        _ => Err(format!("unknown feature strategy `{}`", src)),
    }
}

fn parse_idf(src: &str) -> Result<IdfMethod, String> {
    match src {
        "standard" => Ok(IdfMethod::Standard),
        "smooth" => Ok(IdfMethod::Smooth),
        _ => Err(format!("unknown idf method `{}`", src)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = Options::from_args();

    let naive_bayes = match opt.classifier.as_str() {
        "gaussian" => NaiveBayes::Gaussian {
            var_smoothing: opt.smoothing.unwrap_or(1e-9),
        },
        _ => NaiveBayes::Multinomial {
            alpha: opt.smoothing.unwrap_or(1.0),
        },
    };
    let stopwords = match &opt.stopwords {
        Some(path) => StopWords::from_file(path)?,
        None => StopWords::english(),
    };

    let corpus = ReviewCorpus::from_dirs(&opt.positive, &opt.negative)?;
    let (train, test) = corpus.split(opt.train, opt.test_from);
    println!(
        "Loaded {} reviews, training on {} and testing on {}",
        corpus.len(),
        train.len(),
        test.len()
    );

    let classifier = SentimentClassifier::params_with_rng(SmallRng::seed_from_u64(opt.seed))
        .tokenizer(Tokenizer::new(Arc::new(stopwords)))
        .strategy(opt.strategy)
        .idf_method(opt.idf)
        .naive_bayes(naive_bayes)
        .fit_corpus(&train)?;

    let documents = test.read()?;
    let texts = documents.iter().map(|(text, _)| text).collect::<Vec<_>>();
    let labels = classifier.classify_many(&texts);
    for ((path, _), label) in test.labeled_files().zip(&labels) {
        println!("{}\t{}", path.display(), label);
    }

    if !documents.is_empty() {
        println!("accuracy {:.4}", classifier.accuracy(&documents)?);
        println!("{:?}", classifier.confusion_matrix(&documents)?);
    }

    Ok(())
}
