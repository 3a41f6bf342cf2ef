//! Corpus sources, configuration and memoisation

use super::{Corpus, CorpusError, DEFAULT_URL, LocalSource, RemoteSource};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Something that can produce a fresh corpus
pub trait CorpusSource {
    /// Load and normalise the word list
    ///
    /// # Errors
    /// Returns `CorpusError` if the underlying resource cannot be read or
    /// yields no valid words.
    fn load(&self) -> Result<Corpus, CorpusError>;

    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;
}

/// The corpus handed to the solver when the caller does not supply one
pub trait CorpusProvider {
    /// Return the session corpus, loading it on first use
    ///
    /// # Errors
    /// Propagates the source's `CorpusError` unchanged.
    fn load_word_list(&self) -> Result<Arc<Corpus>, CorpusError>;
}

/// Which kind of source to build from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceChoice {
    Local,
    #[default]
    Remote,
}

impl SourceChoice {
    /// Parse a source name
    ///
    /// Supported names: "local", "file", "remote", "download"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "local" | "file" => Some(Self::Local),
            "remote" | "download" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Enum wrapper for the available sources
///
/// Allows runtime selection of the source while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SourceKind {
    Local(LocalSource),
    Remote(RemoteSource),
}

impl CorpusSource for SourceKind {
    fn load(&self) -> Result<Corpus, CorpusError> {
        match self {
            Self::Local(s) => s.load(),
            Self::Remote(s) => s.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Local(s) => s.describe(),
            Self::Remote(s) => s.describe(),
        }
    }
}

/// Settings that select and parameterise a corpus source
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub source: SourceChoice,
    /// Word-list file for the local source
    pub path: Option<PathBuf>,
    /// Download location for the remote source
    pub url: String,
    /// Directory holding the remote source's cache file
    pub cache_dir: PathBuf,
    /// Ignore an existing cache file and download again
    pub refresh: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source: SourceChoice::default(),
            path: None,
            url: DEFAULT_URL.to_string(),
            cache_dir: PathBuf::from(".wordle_sieve"),
            refresh: false,
        }
    }
}

impl CorpusConfig {
    /// Build the configured source
    ///
    /// # Errors
    /// Returns `CorpusError::NotConfigured` if the local source is selected
    /// without a path.
    pub fn build(&self) -> Result<SourceKind, CorpusError> {
        match self.source {
            SourceChoice::Local => {
                let path = self.path.clone().ok_or_else(|| {
                    CorpusError::NotConfigured("local source needs a word-list path".to_string())
                })?;
                Ok(SourceKind::Local(LocalSource::new(path)))
            }
            SourceChoice::Remote => Ok(SourceKind::Remote(
                RemoteSource::new(self.url.clone(), self.cache_dir.join(RemoteSource::CACHE_FILE))
                    .refresh(self.refresh),
            )),
        }
    }
}

/// Memoising provider around a source
///
/// The first successful load is kept for the provider's lifetime and shared
/// by `Arc`. Failed loads are not cached, so a later call retries the
/// source. Concurrent first calls are serialised by the lock.
#[derive(Debug)]
pub struct CachedProvider<S> {
    source: S,
    cached: Mutex<Option<Arc<Corpus>>>,
}

impl<S: CorpusSource> CachedProvider<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CorpusSource> CorpusProvider for CachedProvider<S> {
    fn load_word_list(&self) -> Result<Arc<Corpus>, CorpusError> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(corpus) = cached.as_ref() {
            return Ok(Arc::clone(corpus));
        }

        let corpus = Arc::new(self.source.load()?);
        debug!(
            source = %self.source.describe(),
            words = corpus.len(),
            "corpus loaded"
        );
        *cached = Some(Arc::clone(&corpus));
        Ok(corpus)
    }
}

impl CorpusProvider for Arc<Corpus> {
    fn load_word_list(&self) -> Result<Arc<Corpus>, CorpusError> {
        Ok(Arc::clone(self))
    }
}
