//! Labeled review collections stored as one text file per document
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SentimentError};
use crate::sentiment::Sentiment;

/// Reads the whole content of a document as UTF-8
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SentimentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Document files grouped by sentiment
///
/// Files are only listed on construction, they are read by [read](ReviewCorpus::read) or by the
/// classifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewCorpus {
    files: BTreeMap<Sentiment, Vec<PathBuf>>,
}

impl ReviewCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists the regular files of a directory of positive reviews and a directory of negative
    /// reviews. Files are sorted by name.
    pub fn from_dirs<P: AsRef<Path>, Q: AsRef<Path>>(positive: P, negative: Q) -> Result<Self> {
        let corpus = Self::new()
            .with_files(Sentiment::Positive, list_files(positive.as_ref())?)
            .with_files(Sentiment::Negative, list_files(negative.as_ref())?);
        log::debug!(
            "Listed {} positive and {} negative reviews.",
            corpus.files(Sentiment::Positive).len(),
            corpus.files(Sentiment::Negative).len()
        );

        Ok(corpus)
    }

    /// Uses the `pos` and `neg` subdirectories of `root`
    pub fn from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        Self::from_dirs(root.join("pos"), root.join("neg"))
    }

    /// Appends files labeled with `label`
    pub fn with_files<I, P>(mut self, label: Sentiment, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files
            .entry(label)
            .or_insert_with(Vec::new)
            .extend(files.into_iter().map(Into::into));
        self
    }

    pub fn files(&self, label: Sentiment) -> &[PathBuf] {
        self.files.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Files of both classes with their labels, negative reviews first
    pub fn labeled_files(&self) -> impl Iterator<Item = (&Path, Sentiment)> {
        self.files
            .iter()
            .flat_map(|(label, files)| files.iter().map(move |file| (file.as_path(), *label)))
    }

    /// Total number of files
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits every class into a training corpus with its first `n_train` files and a held out
    /// corpus with the files starting at index `test_from`. Both ranges are clipped to the number
    /// of available files and may overlap.
    pub fn split(&self, n_train: usize, test_from: usize) -> (ReviewCorpus, ReviewCorpus) {
        let mut train = ReviewCorpus::new();
        let mut test = ReviewCorpus::new();
        for (label, files) in &self.files {
            let n_train = n_train.min(files.len());
            let test_from = test_from.min(files.len());
            train = train.with_files(*label, files[..n_train].iter().cloned());
            test = test.with_files(*label, files[test_from..].iter().cloned());
        }

        (train, test)
    }

    /// Reads every document, negative reviews first
    pub fn read(&self) -> Result<Vec<(String, Sentiment)>> {
        self.labeled_files()
            .map(|(path, label)| Ok((read_document(path)?, label)))
            .collect()
    }
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source| SentimentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}
