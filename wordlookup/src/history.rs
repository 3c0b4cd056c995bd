//! Back/forward navigation over looked-up words.
use smol_str::SmolStr;

/// Linear history with browser semantics: adding a word while positioned
/// before the end discards everything after the cursor.
///
/// `cursor` is `None` exactly when `entries` is empty, and otherwise indexes
/// into it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<SmolStr>,
    cursor: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> NavigationHistory {
        NavigationHistory::default()
    }

    /// Records a visit. Returns `false` when `word` is already the current
    /// entry, in which case nothing changes.
    pub fn add(&mut self, word: SmolStr) -> bool {
        if self.current_word() == Some(&word) {
            return false;
        }

        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(word);
        self.cursor = Some(self.entries.len() - 1);
        true
    }

    /// Moves one entry back, returning the new current word.
    pub fn go_back(&mut self) -> Option<&SmolStr> {
        if !self.can_go_back() {
            return None;
        }

        self.cursor = self.cursor.map(|c| c - 1);
        self.current_word()
    }

    /// Moves one entry forward, returning the new current word.
    pub fn go_forward(&mut self) -> Option<&SmolStr> {
        if !self.can_go_forward() {
            return None;
        }

        self.cursor = self.cursor.map(|c| c + 1);
        self.current_word()
    }

    pub fn current_word(&self) -> Option<&SmolStr> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    #[inline]
    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    pub fn entries(&self) -> &[SmolStr] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
