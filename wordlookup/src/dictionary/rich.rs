use std::path::Path;

use hashbrown::HashMap;
use smol_str::SmolStr;

use super::error::DictionaryError;
use super::model::WordDetail;
use super::WordDetailLookup;
use crate::source::WordSource;
use crate::tokenizer::normalize;

/// Words with full structured definitions, keyed by normalised word.
#[derive(Debug, Default, Clone)]
pub struct RichDictionary {
    entries: HashMap<SmolStr, WordDetail>,
}

impl RichDictionary {
    /// Reads a JSON array of [`WordDetail`]s.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<RichDictionary, DictionaryError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let details: Vec<WordDetail> =
            serde_json::from_slice(&data).map_err(|source| DictionaryError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = RichDictionary::from_entries(details);
        log::debug!(
            "Loaded {} rich entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Later entries for the same word replace earlier ones.
    pub fn from_entries(details: Vec<WordDetail>) -> RichDictionary {
        let entries = details
            .into_iter()
            .map(|detail| (normalize(&detail.word), detail))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        RichDictionary { entries }
    }

    pub fn get(&self, word: &str) -> Option<&WordDetail> {
        self.entries.get(normalize(word).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordSource for RichDictionary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.keys().map(SmolStr::as_str))
    }
}

impl WordDetailLookup for RichDictionary {
    type Detail = WordDetail;

    fn find(&self, word: &str) -> Option<WordDetail> {
        self.get(word).cloned()
    }
}
