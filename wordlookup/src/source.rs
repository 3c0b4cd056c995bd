//! Raw word lists that feed the vocabulary.
//!
//! Sources hand out words exactly as stored: arbitrary case, possibly
//! duplicated, possibly blank. Cleaning them up is the job of
//! [`VocabularyIndex::load`](crate::vocabulary::VocabularyIndex::load).
use std::path::{Path, PathBuf};

use crate::dictionary::error::DictionaryError;

pub trait WordSource {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl WordSource for Vec<String> {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl WordSource for Vec<&str> {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(|word| *word))
    }
}

impl<const N: usize> WordSource for [&str; N] {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(|word| *word))
    }
}

/// A newline-separated word list, one word per line.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
    content: String,
}

impl WordListFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<WordListFile, DictionaryError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("Read word list {} ({} bytes)", path.display(), content.len());

        Ok(WordListFile { path, content })
    }

    pub fn from_string(path: PathBuf, content: String) -> WordListFile {
        WordListFile { path, content }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for WordListFile {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }
}
