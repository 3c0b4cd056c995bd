use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;
use smol_str::SmolStr;

use super::error::DictionaryError;
use super::{DictionaryTab, WordDetailLookup};
use crate::source::WordSource;
use crate::tokenizer::normalize;

/// A dictionary whose entries are pre-rendered HTML, such as a synonym or
/// Collins export: a JSON object mapping each word to its markup.
#[derive(Debug, Clone)]
pub struct HtmlDictionary {
    tab: DictionaryTab,
    entries: HashMap<SmolStr, String>,
}

impl HtmlDictionary {
    pub fn open<P: AsRef<Path>>(
        tab: DictionaryTab,
        path: P,
    ) -> Result<HtmlDictionary, DictionaryError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: HashMap<String, String> =
            serde_json::from_slice(&data).map_err(|source| DictionaryError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Loaded {} {} entries from {}", raw.len(), tab, path.display());

        Ok(HtmlDictionary::from_entries(tab, raw))
    }

    pub fn from_entries<I>(tab: DictionaryTab, entries: I) -> HtmlDictionary
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, html)| (normalize(&word), html))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        HtmlDictionary { tab, entries }
    }

    pub fn tab(&self) -> DictionaryTab {
        self.tab
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(normalize(word).as_str()).map(String::as_str)
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordSource for HtmlDictionary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.keys().map(SmolStr::as_str).sorted())
    }
}

impl WordDetailLookup for HtmlDictionary {
    type Detail = String;

    fn find(&self, word: &str) -> Option<String> {
        self.get(word).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn opens_json_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "Happy": "<b>glad</b>, cheerful", "sad": "<b>unhappy</b>" }}"#
        )
        .unwrap();

        let dict = HtmlDictionary::open(DictionaryTab::Synonym, file.path()).unwrap();
        assert_eq!(dict.tab(), DictionaryTab::Synonym);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("happy"), Some("<b>glad</b>, cheerful"));
        assert!(dict.has_word("SAD"));
        assert_eq!(dict.find("glad"), None);
    }

    #[test]
    fn words_are_sorted() {
        let dict = HtmlDictionary::from_entries(
            DictionaryTab::Collins,
            vec![
                ("walk".to_string(), "<i>v.</i>".to_string()),
                ("Apple".to_string(), "<i>n.</i>".to_string()),
                ("mild".to_string(), "<i>adj.</i>".to_string()),
            ],
        );

        assert_eq!(
            dict.words().collect::<Vec<_>>(),
            vec!["apple", "mild", "walk"]
        );
    }

    #[test]
    fn array_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["happy"]"#).unwrap();

        let err = HtmlDictionary::open(DictionaryTab::Collins, file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Json { .. }));
    }
}
