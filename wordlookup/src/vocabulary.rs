//! The sorted, de-duplicated word list every lookup runs against.
use std::ops::Range;

use hashbrown::HashSet;
use itertools::Itertools;
use smol_str::SmolStr;

use crate::source::WordSource;
use crate::tokenizer::normalize;

/// Immutable snapshot of all known words.
///
/// `sorted` is strictly ascending, `membership` holds exactly the same words.
/// Once loaded nothing mutates it, so one instance can be shared behind an
/// `Arc` by any number of sessions without locking.
#[derive(Debug, Default, Clone)]
pub struct VocabularyIndex {
    sorted: Vec<SmolStr>,
    membership: HashSet<SmolStr>,
}

impl VocabularyIndex {
    pub fn empty() -> VocabularyIndex {
        VocabularyIndex::default()
    }

    /// Merges all sources into one index. Words are trimmed and lower-cased,
    /// blanks dropped and duplicates across or within sources kept once.
    /// Sources yielding nothing produce a valid, empty index.
    pub fn load(sources: &[&dyn WordSource]) -> VocabularyIndex {
        let sorted: Vec<SmolStr> = sources
            .iter()
            .flat_map(|source| source.words())
            .map(normalize)
            .filter(|word| !word.is_empty())
            .sorted_unstable()
            .dedup()
            .collect();

        let membership = sorted.iter().cloned().collect::<HashSet<_>>();

        log::debug!(
            "Loaded vocabulary of {} words from {} sources",
            sorted.len(),
            sources.len()
        );

        VocabularyIndex { sorted, membership }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.membership.contains(normalize(word).as_str())
    }

    #[inline]
    pub fn all_words(&self) -> &[SmolStr] {
        &self.sorted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// First index whose word is not less than `key`.
    #[inline]
    pub fn lower_bound(&self, key: &str) -> usize {
        self.sorted.partition_point(|word| word.as_str() < key)
    }

    /// Index range of the words beginning with `first`.
    pub fn initial_range(&self, first: char) -> Range<usize> {
        let mut buf = [0u8; 4];
        let start = self.lower_bound(first.encode_utf8(&mut buf));
        let end = match successor(first) {
            Some(next) => self.lower_bound(next.encode_utf8(&mut buf)),
            None => self.sorted.len(),
        };

        start..end.max(start)
    }
}

/// The next valid scalar value after `c`, stepping over the surrogate gap.
fn successor(c: char) -> Option<char> {
    (c as u32 + 1..=char::MAX as u32).find_map(char::from_u32)
}
