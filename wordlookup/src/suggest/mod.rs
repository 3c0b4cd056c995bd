//! Ranked word suggestions for a partial query.
//!
//! Suggestions come from two phases. The prefix phase binary-searches the
//! sorted vocabulary and walks forward while words start with the query. If
//! that leaves room, the fuzzy phase computes edit distances, but only over
//! words sharing the query's first character, so its cost is bounded by that
//! slice of the vocabulary rather than the whole of it.
use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::tokenizer::normalize;
use crate::vocabulary::VocabularyIndex;

pub mod suggestion;

use self::suggestion::Suggestion;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// maximum number of suggestions returned
    pub limit: usize,
    /// largest accepted edit distance in the fuzzy phase
    pub max_distance: usize,
    /// candidates whose length differs from the query by more than this are
    /// skipped before computing their distance
    pub max_length_delta: usize,
}

impl SuggestionConfig {
    pub const fn default() -> SuggestionConfig {
        SuggestionConfig {
            limit: 10,
            max_distance: 2,
            max_length_delta: 2,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig::default()
    }
}

/// Levenshtein distance over Unicode scalar values, with unit cost for
/// insertion, deletion and substitution.
#[inline]
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Suggestion engine over a shared vocabulary.
///
/// `suggest` is a pure function of the index, the query and the limit, and the
/// engine is `Send + Sync`: clones share the same index.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    index: Arc<VocabularyIndex>,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    pub fn new(index: Arc<VocabularyIndex>) -> SuggestionEngine {
        SuggestionEngine::with_config(index, SuggestionConfig::default())
    }

    pub fn with_config(index: Arc<VocabularyIndex>, config: SuggestionConfig) -> SuggestionEngine {
        SuggestionEngine { index, config }
    }

    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Suggestions for `prefix` using the configured limit.
    #[inline]
    pub fn suggest_default(&self, prefix: &str) -> Vec<SmolStr> {
        self.suggest(prefix, self.config.limit)
    }

    /// Up to `limit` words: prefix matches first, in vocabulary order, then
    /// fuzzy matches ordered by distance and word.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<SmolStr> {
        self.suggest_ranked(prefix, limit)
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), keeping how each word matched.
    pub fn suggest_ranked(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            log::warn!("Suggestion limit of 0 requested, returning nothing");
            return vec![];
        }

        let query = normalize(prefix);
        let first = match query.chars().next() {
            Some(c) => c,
            None => return vec![],
        };

        let prefixed = self.prefix_matches(&query, limit);
        let mut out = self.index.all_words()[prefixed.clone()]
            .iter()
            .cloned()
            .map(Suggestion::prefix)
            .collect::<Vec<_>>();

        if out.len() < limit {
            let mut fuzzy = self.fuzzy_matches(&query, first, prefixed);
            fuzzy.sort();
            fuzzy.truncate(limit - out.len());
            out.extend(fuzzy);
        }

        log::trace!("{:?}: {} suggestions", query, out.len());

        out
    }

    /// Index range of the words starting with `query`, at most `limit` long.
    /// Sortedness keeps all of them contiguous from the query's lower bound.
    fn prefix_matches(&self, query: &str, limit: usize) -> Range<usize> {
        let words = self.index.all_words();
        let start = self.index.lower_bound(query);
        let count = words[start..]
            .iter()
            .take(limit)
            .take_while(|word| word.starts_with(query))
            .count();

        start..start + count
    }

    fn fuzzy_matches(&self, query: &str, first: char, skip: Range<usize>) -> Vec<Suggestion> {
        let SuggestionConfig {
            max_distance,
            max_length_delta,
            ..
        } = self.config;

        let words = self.index.all_words();
        let query_len = query.chars().count();
        let range = self.index.initial_range(first);
        let mut out = vec![];

        for i in range.clone() {
            if skip.contains(&i) {
                continue;
            }

            let word = &words[i];
            if word.chars().count().abs_diff(query_len) > max_length_delta {
                continue;
            }

            let distance = levenshtein(query, word);
            if distance <= max_distance {
                out.push(Suggestion::fuzzy(word.clone(), distance));
            }
        }

        log::trace!(
            "{:?}: {} fuzzy candidates within {} words",
            query,
            out.len(),
            range.len()
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str]) -> SuggestionEngine {
        let words = words.to_vec();
        SuggestionEngine::new(Arc::new(VocabularyIndex::load(&[&words])))
    }

    fn sample() -> SuggestionEngine {
        engine(&["book", "boot", "boots", "box", "cat"])
    }

    #[test]
    fn edit_distance() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("book", "book"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn prefix_matches_in_order() {
        assert_eq!(sample().suggest("boo", 3), vec!["book", "boot", "boots"]);
    }

    #[test]
    fn short_prefix_run_is_topped_up_with_fuzzy() {
        let ranked = sample().suggest_ranked("boo", 10);

        assert_eq!(ranked.len(), 4);
        assert!(ranked[..3].iter().all(Suggestion::is_prefix));
        assert_eq!(ranked[3], Suggestion::fuzzy("box".into(), 1));
        assert_eq!(ranked[3].distance(), 1);
    }

    #[test]
    fn query_is_normalized() {
        assert_eq!(
            sample().suggest("  BOO ", 10),
            vec!["book", "boot", "boots", "box"]
        );
    }

    #[test]
    fn default_limit_comes_from_config() {
        let words = (0..20).map(|i| format!("word{:02}", i)).collect::<Vec<_>>();
        let config = SuggestionConfig {
            limit: 4,
            ..SuggestionConfig::default()
        };
        let engine = SuggestionEngine::with_config(
            Arc::new(VocabularyIndex::load(&[&words])),
            config,
        );

        assert_eq!(
            engine.suggest_default("word"),
            vec!["word00", "word01", "word02", "word03"]
        );
        assert_eq!(sample().suggest_default("boo"), sample().suggest("boo", 10));
    }

    #[test]
    fn fuzzy_fallback() {
        let ranked = sample().suggest_ranked("bok", 10);

        assert_eq!(
            ranked,
            vec![
                Suggestion::fuzzy("book".into(), 1),
                Suggestion::fuzzy("box".into(), 1),
                Suggestion::fuzzy("boot".into(), 2),
            ]
        );
        assert_eq!(sample().suggest("bok", 2), vec!["book", "box"]);
    }

    #[test]
    fn prefix_before_fuzzy() {
        let engine = engine(&["bat", "bot", "both", "bottle", "bout", "cot"]);
        let ranked = engine.suggest_ranked("bot", 10);

        assert_eq!(
            ranked.iter().map(Suggestion::value).collect::<Vec<_>>(),
            vec!["bot", "both", "bottle", "bat", "bout"]
        );
        assert!(ranked[..3].iter().all(Suggestion::is_prefix));
        assert!(ranked[3..].iter().all(|s| s.distance() == 1));
    }

    #[test]
    fn empty_query_and_zero_limit() {
        let engine = sample();

        assert!(engine.suggest("", 10).is_empty());
        assert!(engine.suggest("   ", 10).is_empty());
        assert!(engine.suggest("boo", 0).is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let engine = sample();

        for limit in 1..6 {
            for query in &["b", "bo", "boo", "bok", "bx", "c", "ca", "zzz"] {
                assert!(engine.suggest(query, limit).len() <= limit);
            }
        }
        assert_eq!(engine.suggest("b", 2), vec!["book", "boot"]);
    }

    #[test]
    fn fuzzy_stays_within_first_letter() {
        // "cot" is one edit from "bot" but starts with another letter
        let engine = engine(&["apple", "bot", "cot", "dot"]);

        assert_eq!(engine.suggest("bxt", 10), vec!["bot"]);
        assert!(engine.suggest("qot", 10).is_empty());
    }

    #[test]
    fn long_query() {
        let engine = sample();

        assert_eq!(engine.suggest("bootss", 10), vec!["boots", "boot"]);
        assert!(engine.suggest("booksellers", 10).is_empty());
    }

    #[test]
    fn length_delta_prunes() {
        let engine = engine(&["ab", "abcdef"]);
        let strict = SuggestionEngine::with_config(
            Arc::new(engine.index().clone()),
            SuggestionConfig {
                max_length_delta: 0,
                ..SuggestionConfig::default()
            },
        );

        assert_eq!(engine.suggest("abd", 10), vec!["ab"]);
        assert!(strict.suggest("abd", 10).is_empty());
    }

    #[test]
    fn properties_hold() {
        let engine = engine(&[
            "bake", "baker", "ball", "band", "bank", "bark", "barn", "base", "bask", "bass",
            "cake", "call", "calm", "came", "camp", "can", "cane", "cap", "car", "card",
        ]);

        for query in &["ba", "bak", "bam", "barx", "ca", "cam", "cax", "cxx", "b", "c"] {
            let normalized = normalize(query);
            let ranked = engine.suggest_ranked(query, 6);
            let prefix_len = ranked.iter().take_while(|s| s.is_prefix()).count();

            assert!(ranked.len() <= 6);
            assert!(ranked[..prefix_len]
                .iter()
                .all(|s| s.value.starts_with(normalized.as_str())));
            assert!(ranked[prefix_len..].iter().all(|s| !s.is_prefix()));

            for s in &ranked[prefix_len..] {
                assert!(levenshtein(&normalized, &s.value) <= 2);
                assert_eq!(levenshtein(&normalized, &s.value), s.distance());
                assert!(!ranked[..prefix_len].iter().any(|p| p.value == s.value));
            }

            let keys = ranked[prefix_len..]
                .iter()
                .map(|s| (s.distance(), s.value.clone()))
                .collect::<Vec<_>>();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);

            assert_eq!(ranked, engine.suggest_ranked(query, 6));
        }
    }

    #[test]
    fn empty_vocabulary() {
        let engine = engine(&[]);

        assert!(engine.suggest("book", 10).is_empty());
    }

    #[test]
    fn shared_between_threads() {
        let engine = sample();
        let expected = engine.suggest("bok", 10);

        std::thread::scope(|s| {
            for _ in 0..4 {
                let engine = engine.clone();
                let expected = &expected;
                s.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(&engine.suggest("bok", 10), expected);
                    }
                });
            }
        });
    }
}
