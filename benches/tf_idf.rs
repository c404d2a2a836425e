use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linfa_sentiment::{FeatureExtractor, IdfMethod, TermCounts, Tokenizer, Vocabulary};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const WORDS: &[&str] = &[
    "film", "movie", "plot", "story", "acting", "cast", "director", "script", "score", "scene",
    "wonderful", "superb", "brilliant", "moving", "delightful", "boring", "awful", "dull",
    "terrible", "predictable", "the", "a", "and", "of", "is", ",", ".",
];

fn generate_documents(rng: &mut SmallRng, n_documents: usize, length: usize) -> Vec<String> {
    (0..n_documents)
        .map(|i| {
            // keeps the vocabulary growing with the collection
            let rare = format!("token{}", i % 97);
            let mut words = (0..length)
                .map(|_| *WORDS.choose(rng).unwrap())
                .collect::<Vec<_>>();
            words.push(&rare);
            words.join(" ")
        })
        .collect()
}

fn tf_idf_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(40);
    let tokenizer = Tokenizer::default();
    let mut group = c.benchmark_group("tf_idf");

    for n_documents in [100, 1000, 5000].iter() {
        let documents = generate_documents(&mut rng, *n_documents, 200);
        let term_counts = documents
            .iter()
            .map(|text| tokenizer.term_counts(text))
            .collect::<Vec<TermCounts>>();

        group.bench_with_input(
            BenchmarkId::new("tokenize", n_documents),
            &documents,
            |bencher, documents| {
                bencher.iter(|| {
                    for text in documents {
                        black_box(tokenizer.term_counts(text));
                    }
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fit_vocabulary", n_documents),
            &term_counts,
            |bencher, term_counts| {
                bencher.iter(|| black_box(Vocabulary::fit(term_counts, IdfMethod::Standard)))
            },
        );

        let vocabulary = Vocabulary::fit(&term_counts, IdfMethod::Standard).unwrap();
        let extractor = FeatureExtractor::PerToken { vocabulary };
        group.bench_with_input(
            BenchmarkId::new("transform", n_documents),
            &term_counts,
            |bencher, term_counts| bencher.iter(|| black_box(extractor.transform(term_counts))),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = tf_idf_bench
}
criterion_main!(benches);
