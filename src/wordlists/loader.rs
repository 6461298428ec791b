//! Word list loading utilities
//!
//! A [`WordSource`] owns the bytes of one word list, either compiled into the
//! binary or read from a file. Corpora borrow from it.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::WordCorpus;

/// A word list could not be turned into a usable corpus
///
/// There is no recovering from this: a game cannot start without both
/// lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {name} contains no words")]
    Empty { name: String },
}

/// Owned backing buffer of a word list
#[derive(Debug, Clone)]
pub struct WordSource {
    name: String,
    bytes: Cow<'static, [u8]>,
}

impl WordSource {
    /// Wrap a list compiled into the binary
    #[must_use]
    pub fn embedded(name: impl Into<String>, bytes: &'static [u8]) -> Self {
        Self {
            name: name.into(),
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Read a list from disk
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use clidle::wordlists::WordSource;
    ///
    /// let source = WordSource::from_file("words.txt").unwrap();
    /// let corpus = source.corpus().unwrap();
    /// println!("Loaded {} words", corpus.count());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read word list");

        Ok(Self {
            name: path.display().to_string(),
            bytes: Cow::Owned(bytes),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Tokenize the buffer into a corpus borrowing from `self`
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if the list holds no words at all.
    pub fn corpus(&self) -> Result<WordCorpus<'_>, LoadError> {
        let corpus = WordCorpus::load(&self.bytes);
        if corpus.is_empty() {
            return Err(LoadError::Empty {
                name: self.name.clone(),
            });
        }
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_source_builds_corpus() {
        let source = WordSource::embedded("test", b"crane\nslate\n");
        let corpus = source.corpus().unwrap();
        assert_eq!(corpus.count(), 2);
        assert_eq!(source.name(), "test");
    }

    #[test]
    fn empty_source_is_rejected() {
        let source = WordSource::embedded("blank", b"\n\n");
        assert!(matches!(
            source.corpus(),
            Err(LoadError::Empty { name }) if name == "blank"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WordSource::from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn file_source_reads_bytes() {
        let path = std::env::temp_dir().join(format!("clidle-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(b"cigar\nrebut").unwrap();
        }

        let source = WordSource::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(source.bytes(), b"cigar\nrebut");
        assert_eq!(source.corpus().unwrap().count(), 2);
    }
}
