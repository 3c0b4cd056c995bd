//! A ranked suggestion for a query.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

/// How a suggestion was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatchKind {
    /// the word starts with the whole query
    Prefix,
    /// the word is within a bounded edit distance of the query
    Fuzzy { distance: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Suggestion for a query
pub struct Suggestion {
    /// the suggested word
    pub value: SmolStr,
    /// which phase produced it
    #[serde(flatten)]
    pub kind: MatchKind,
}

impl Suggestion {
    pub fn prefix(value: SmolStr) -> Suggestion {
        Suggestion {
            value,
            kind: MatchKind::Prefix,
        }
    }

    pub fn fuzzy(value: SmolStr, distance: usize) -> Suggestion {
        Suggestion {
            value,
            kind: MatchKind::Fuzzy { distance },
        }
    }

    /// gets the suggested word
    pub fn value(&self) -> &str {
        &self.value
    }

    /// edit distance to the query, zero for prefix matches
    pub fn distance(&self) -> usize {
        match self.kind {
            MatchKind::Prefix => 0,
            MatchKind::Fuzzy { distance } => distance,
        }
    }

    pub fn is_prefix(&self) -> bool {
        self.kind == MatchKind::Prefix
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prefix matches before fuzzy ones, fuzzy ones by distance, then by word.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        let x = other
            .is_prefix()
            .cmp(&self.is_prefix())
            .then(self.distance().cmp(&other.distance()));

        if let Ordering::Equal = x {
            return self.value.cmp(&other.value);
        }

        x
    }
}
