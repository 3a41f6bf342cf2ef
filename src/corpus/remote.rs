//! Word list downloaded over HTTP and cached on disk
//!
//! The first load downloads the list, normalises it and writes the resulting
//! corpus to the cache file. Later loads read the cache file only.

use super::local::read_word_list;
use super::loader::parse_word_list;
use super::{Corpus, CorpusError, CorpusSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default download location: the public list of five-letter Wordle words
pub const DEFAULT_URL: &str = "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";

/// Corpus source that fetches a remote word list and caches it
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    cache_path: PathBuf,
    timeout: Duration,
    refresh: bool,
}

impl RemoteSource {
    /// File name used inside the cache directory
    pub const CACHE_FILE: &'static str = "words.txt";

    pub fn new(url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            cache_path: cache_path.into(),
            timeout: Duration::from_secs(30),
            refresh: false,
        }
    }

    /// Download even if a cache file exists
    #[must_use]
    pub const fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    fn http_error(&self, source: reqwest::Error) -> CorpusError {
        CorpusError::Http {
            url: self.url.clone(),
            source,
        }
    }

    fn fetch(&self) -> Result<String, CorpusError> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Downloading word list from {}", self.url));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .and_then(|client| client.get(&self.url).send())
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text);

        spinner.finish_and_clear();
        result.map_err(|e| self.http_error(e))
    }

    /// Write the normalised corpus to the cache file; failures are only logged
    ///
    /// The list goes to a sibling temp file first and is renamed over the
    /// cache file, so a reader never sees a half-written cache.
    fn store(&self, corpus: &Corpus) {
        if let Some(dir) = self.cache_path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            warn!(dir = %dir.display(), error = %e, "cannot create cache directory");
            return;
        }

        let tmp = self.cache_path.with_extension("tmp");
        let written = fs::write(&tmp, corpus.to_word_list())
            .and_then(|()| fs::rename(&tmp, &self.cache_path));

        match written {
            Ok(()) => debug!(path = %self.cache_path.display(), "word list cached"),
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                warn!(
                    path = %self.cache_path.display(),
                    error = %e,
                    "cannot write word list cache"
                );
            }
        }
    }
}

impl CorpusSource for RemoteSource {
    fn load(&self) -> Result<Corpus, CorpusError> {
        if !self.refresh && self.cache_path.is_file() {
            info!(path = %self.cache_path.display(), "using cached word list");
            return read_word_list(&self.cache_path);
        }

        info!(url = %self.url, "downloading word list");
        let body = self.fetch()?;

        let corpus = parse_word_list(&body);
        if corpus.is_empty() {
            return Err(CorpusError::Empty {
                origin: self.url.clone(),
            });
        }

        info!(words = corpus.len(), "downloaded word list");
        self.store(&corpus);
        Ok(corpus)
    }

    fn describe(&self) -> String {
        format!("{} (cache {})", self.url, self.cache_path.display())
    }
}
