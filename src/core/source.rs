/// Text sources — read-by-name access to word lists and story templates.

use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("'{0}' not found")]
    NotFound(String),
    #[error("IO error reading '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Anything that can hand back the full text of a named file.
pub trait TextSource {
    fn read_text(&self, name: &str) -> Result<String, SourceError>;
}

/// Reads `<root>/<name>` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextSource for DirSource {
    fn read_text(&self, name: &str) -> Result<String, SourceError> {
        let path = self.root.join(name);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
            _ => SourceError::Io {
                name: path.display().to_string(),
                source: e,
            },
        })?;
        // Files in a legacy encoding still load; bad bytes become U+FFFD.
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!(file = %path.display(), "file is not valid UTF-8, decoding lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

/// In-memory files, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: FxHashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }
}

impl TextSource for MemorySource {
    fn read_text(&self, name: &str) -> Result<String, SourceError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_text(&self, name: &str) -> Result<String, SourceError> {
        (**self).read_text(name)
    }
}
