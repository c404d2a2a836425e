use linfa_sentiment::{FeatureStrategy, Result, ReviewCorpus, SentimentClassifier};

fn main() -> Result<()> {
    // Six training reviews per class, the remaining two are held out
    let corpus = ReviewCorpus::from_root("data/reviews")?;
    let (train, valid) = corpus.split(6, 6);

    for strategy in &[FeatureStrategy::PerToken, FeatureStrategy::Pooled] {
        let classifier = SentimentClassifier::params()
            .strategy(*strategy)
            .fit_corpus(&train)?;

        let documents = valid.read()?;
        let texts = documents.iter().map(|(text, _)| text).collect::<Vec<_>>();
        for (text, label) in texts.iter().zip(classifier.classify_many(&texts)) {
            println!("{:>8}  {}", label, text.trim());
        }

        // classes    | negative   | positive
        // negative   | 2          | 0
        // positive   | 0          | 2
        println!("{:?}", classifier.confusion_matrix(&documents)?);
        println!("{:?} accuracy {}", strategy, classifier.accuracy(&documents)?);
    }

    Ok(())
}
