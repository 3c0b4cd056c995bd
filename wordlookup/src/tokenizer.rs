//! Normalisation and word segmentation.
//!
//! Every word that enters the vocabulary, every query handed to the suggestion
//! engine and every word adopted into the navigation history goes through
//! [`normalize`], so that equality and ordering are case-insensitive.
use smol_str::SmolStr;
use unic_segment::WordBoundIndices;
use unic_ucd_category::GeneralCategory;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Trims surrounding whitespace and lower-cases the word.
#[inline(always)]
pub fn normalize(word: &str) -> SmolStr {
    lower_case(word.trim())
}

/// Strips leading and trailing non-alphanumeric characters from a token
/// taken from running text, then normalises it.
pub fn clean_for_lookup(token: &str) -> SmolStr {
    normalize(token.trim_matches(|c: char| !c.is_alphanumeric()))
}

/// Whether the token contains at least one letter according to the Unicode
/// general category.
pub fn is_word_like(token: &str) -> bool {
    token.chars().any(|c| GeneralCategory::of(c).is_letter())
}

pub trait Tokenize {
    /// Word-boundary segments of the text, including whitespace and punctuation.
    fn word_bound_indices(&self) -> WordBoundIndices;

    /// Only the segments that look like words, with their byte offsets.
    fn word_indices(&self) -> WordIndices;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices {
        WordBoundIndices::new(self)
    }

    fn word_indices(&self) -> WordIndices {
        WordIndices {
            inner: self.word_bound_indices(),
        }
    }
}

pub struct WordIndices<'a> {
    inner: WordBoundIndices<'a>,
}

impl<'a> Iterator for WordIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|(_, token)| is_word_like(token))
    }
}
