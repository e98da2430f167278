/// Word pools — named word lists loaded once per run.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::source::{SourceError, TextSource};

/// The word list files every story directory is expected to carry.
/// Placeholder keys are these names verbatim, extension included.
pub const POOL_FILES: &[&str] = &[
    "adj.txt",
    "adv.txt",
    "singnoun.txt",
    "plunoun.txt",
    "singverb.txt",
    "pluverb.txt",
    "pastverb.txt",
];

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to load word list '{name}': {source}")]
    Missing {
        name: String,
        #[source]
        source: SourceError,
    },
}

/// A named list of candidate words, one per line of its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    pub name: String,
    pub words: Vec<String>,
}

impl WordPool {
    /// Split `text` into words on line breaks, keeping order, duplicates
    /// and interior blank lines. Trailing empty lines are dropped. Text with
    /// no words at all yields a single empty candidate, so a pool always has
    /// something to draw.
    pub fn parse(name: impl Into<String>, text: &str) -> WordPool {
        let mut words: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        while words.last().is_some_and(|w| w.is_empty()) {
            words.pop();
        }
        if words.is_empty() {
            words.push(String::new());
        }
        WordPool {
            name: name.into(),
            words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of candidates that are empty or whitespace only.
    pub fn blank_count(&self) -> usize {
        self.words.iter().filter(|w| w.trim().is_empty()).count()
    }
}

/// All pools for a run, keyed by pool name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolSet {
    pools: FxHashMap<String, WordPool>,
}

impl PoolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every pool in `names` from `source`.
    ///
    /// All-or-nothing: the first file that cannot be read fails the whole
    /// load and no partial set is returned.
    pub fn load<S: TextSource>(source: &S, names: &[impl AsRef<str>]) -> Result<PoolSet, PoolError> {
        let mut set = PoolSet::new();
        for name in names {
            let name = name.as_ref();
            let text = source.read_text(name).map_err(|e| PoolError::Missing {
                name: name.to_string(),
                source: e,
            })?;
            let pool = WordPool::parse(name, &text);
            tracing::debug!(pool = name, words = pool.words.len(), "loaded word list");
            set.insert(pool);
        }
        tracing::info!(pools = set.len(), "word lists loaded");
        Ok(set)
    }

    /// Load the standard pool files.
    pub fn load_default<S: TextSource>(source: &S) -> Result<PoolSet, PoolError> {
        Self::load(source, POOL_FILES)
    }

    /// Add or replace a pool.
    pub fn insert(&mut self, pool: WordPool) {
        self.pools.insert(pool.name.clone(), pool);
    }

    /// Convenience for building pools from newline-delimited text.
    pub fn with_pool(mut self, name: &str, text: &str) -> Self {
        self.insert(WordPool::parse(name, text));
        self
    }

    pub fn get(&self, key: &str) -> Option<&WordPool> {
        self.pools.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pools.contains_key(key)
    }

    /// Pool names in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.pools.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
