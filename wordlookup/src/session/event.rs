use smol_str::SmolStr;

/// Notification sent to session subscribers after a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SuggestionsChanged(Vec<SmolStr>),
    HistoryChanged {
        can_go_back: bool,
        can_go_forward: bool,
    },
    WordSelected(SmolStr),
}

/// Result of selecting or searching a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// the word resolved and is now the query text and current entry
    Adopted(SmolStr),
    /// nothing resolved; text and history are untouched
    NoMatch,
}

impl Selection {
    pub fn word(&self) -> Option<&SmolStr> {
        match self {
            Selection::Adopted(word) => Some(word),
            Selection::NoMatch => None,
        }
    }
}

/// Result of moving through the history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Moved(SmolStr),
    /// already at that end of the history
    Unchanged,
}
