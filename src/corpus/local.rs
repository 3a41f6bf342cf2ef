//! Word list read from a local file

use super::loader::parse_word_list;
use super::{Corpus, CorpusError, CorpusSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Corpus source backed by a word-list file
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse a word-list file, failing if it holds no valid words
pub(super) fn read_word_list(path: &Path) -> Result<Corpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = parse_word_list(&content);
    debug!(
        path = %path.display(),
        lines = content.lines().count(),
        words = corpus.len(),
        "parsed word list"
    );

    if corpus.is_empty() {
        return Err(CorpusError::Empty {
            origin: path.display().to_string(),
        });
    }

    Ok(corpus)
}

impl CorpusSource for LocalSource {
    fn load(&self) -> Result<Corpus, CorpusError> {
        let corpus = read_word_list(&self.path)?;
        info!(
            path = %self.path.display(),
            words = corpus.len(),
            weighted = corpus.has_weights(),
            "loaded local word list"
        );
        Ok(corpus)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_words_from_file() {
        let file = word_file("about\nOther\naudio\nabout\nnope\n");
        let corpus = LocalSource::new(file.path()).load().unwrap();

        let texts: Vec<&str> = corpus.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["about", "audio", "other"]);
        assert!(!corpus.has_weights());
    }

    #[test]
    fn loads_weighted_file() {
        let file = word_file("about 10\nother 4\n");
        let corpus = LocalSource::new(file.path()).load().unwrap();
        assert_eq!(corpus.weight_of("about"), Some(10.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = LocalSource::new("/definitely/not/here/words.txt");
        assert!(matches!(source.load(), Err(CorpusError::Io { .. })));
    }

    #[test]
    fn file_without_valid_words_is_empty_error() {
        let file = word_file("toolong\nabc\n\n");
        let result = LocalSource::new(file.path()).load();
        assert!(matches!(result, Err(CorpusError::Empty { .. })));
    }

    #[test]
    fn describe_names_the_file() {
        let source = LocalSource::new("words.txt");
        assert_eq!(source.describe(), "file words.txt");
        assert_eq!(source.path(), Path::new("words.txt"));
    }
}
