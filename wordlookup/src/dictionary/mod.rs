//! Resolving a selected word to what gets shown for it.
//!
//! Which dictionaries are wired in is configuration: the search engine only
//! ever sees the merged vocabulary, and a session only ever sees a
//! [`WordDetailLookup`].
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tokenizer::normalize;
use crate::vocabulary::VocabularyIndex;

pub mod error;
pub mod html;
pub mod model;
pub mod rich;

pub use self::html::HtmlDictionary;
pub use self::model::WordDetail;
pub use self::rich::RichDictionary;

pub trait WordDetailLookup {
    type Detail;

    fn find(&self, word: &str) -> Option<Self::Detail>;
}

impl<L: WordDetailLookup + ?Sized> WordDetailLookup for Arc<L> {
    type Detail = L::Detail;

    #[inline]
    fn find(&self, word: &str) -> Option<Self::Detail> {
        (**self).find(word)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionaryTab {
    Collins,
    Synonym,
}

impl DictionaryTab {
    pub fn as_str(self) -> &'static str {
        match self {
            DictionaryTab::Collins => "Collins",
            DictionaryTab::Synonym => "Synonym",
        }
    }
}

impl fmt::Display for DictionaryTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rich definitions where available, a basic entry for any other word in the
/// vocabulary, nothing for unknown words.
#[derive(Debug, Clone)]
pub struct VocabularyLookup {
    index: Arc<VocabularyIndex>,
    rich: Arc<RichDictionary>,
}

impl VocabularyLookup {
    pub fn new(index: Arc<VocabularyIndex>, rich: Arc<RichDictionary>) -> VocabularyLookup {
        VocabularyLookup { index, rich }
    }

    /// Only basic entries, for a vocabulary without a rich dictionary.
    pub fn plain(index: Arc<VocabularyIndex>) -> VocabularyLookup {
        VocabularyLookup::new(index, Arc::new(RichDictionary::default()))
    }
}

impl WordDetailLookup for VocabularyLookup {
    type Detail = WordDetail;

    fn find(&self, word: &str) -> Option<WordDetail> {
        let key = normalize(word);
        if key.is_empty() {
            return None;
        }

        if let Some(detail) = self.rich.get(&key) {
            return Some(detail.clone());
        }

        if self.index.contains(&key) {
            return Some(WordDetail::basic(key));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::model::*;
    use super::*;

    fn lookup() -> VocabularyLookup {
        let rich = RichDictionary::from_entries(vec![WordDetail {
            word: "Book".into(),
            part_of_speech: PartOfSpeech::Noun,
            noun_type: Some(NounType::Countable),
            verb_type: None,
            definitions: vec![Definition {
                meaning: "a written work".into(),
                examples: vec![],
            }],
        }]);
        let list = vec!["boot", "box"];
        let index = VocabularyIndex::load(&[&list, &rich]);

        VocabularyLookup::new(Arc::new(index), Arc::new(rich))
    }

    #[test]
    fn rich_then_basic_then_nothing() {
        let lookup = lookup();

        let book = lookup.find("BOOK").unwrap();
        assert_eq!(book.definitions[0].meaning, "a written work");

        let boot = lookup.find("boot").unwrap();
        assert_eq!(boot.word, "boot");
        assert_eq!(boot.definitions[0].meaning, model::BASIC_DEFINITION);

        assert!(lookup.find("bok").is_none());
        assert!(lookup.find("  ").is_none());
    }

    #[test]
    fn rich_words_join_the_vocabulary() {
        let lookup = lookup();

        assert_eq!(lookup.index.all_words(), &["book", "boot", "box"]);
    }

    #[test]
    fn shared_lookup() {
        let lookup = Arc::new(lookup());

        assert!(lookup.find("box").is_some());
        assert_eq!(DictionaryTab::Synonym.to_string(), "Synonym");
    }
}
