//! One user's search view: query text, suggestions, the selected word and the
//! navigation history.
//!
//! A session is single-writer. All mutating calls happen on one control flow,
//! and subscribers are called synchronously from it. Time is passed in
//! explicitly; an event loop calls [`Session::tick`] whenever
//! [`Session::next_deadline`] has passed.
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::dictionary::WordDetailLookup;
use crate::history::NavigationHistory;
use crate::pipeline::{Firing, QueryPipeline};
use crate::suggest::{SuggestionConfig, SuggestionEngine};
use crate::tokenizer::{clean_for_lookup, normalize, Tokenize};
use crate::vocabulary::VocabularyIndex;

mod event;

pub use self::event::{Navigation, Selection, SessionEvent};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// quiescence delay before a typed query is looked up
    pub debounce_ms: u64,
    pub suggestions: SuggestionConfig,
}

impl SessionConfig {
    pub const fn default() -> SessionConfig {
        SessionConfig {
            debounce_ms: 300,
            suggestions: SuggestionConfig::default(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::default()
    }
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

pub struct Session<L: WordDetailLookup> {
    pipeline: QueryPipeline,
    history: NavigationHistory,
    lookup: L,
    selected: Option<L::Detail>,
    listeners: Vec<Listener>,
}

impl<L: WordDetailLookup> Session<L> {
    pub fn new(index: Arc<VocabularyIndex>, lookup: L, config: &SessionConfig) -> Session<L> {
        let engine = SuggestionEngine::with_config(index, config.suggestions.clone());
        Session::with_engine(engine, lookup, config.debounce())
    }

    pub fn with_engine(engine: SuggestionEngine, lookup: L, debounce: Duration) -> Session<L> {
        Session {
            pipeline: QueryPipeline::new(engine, debounce),
            history: NavigationHistory::new(),
            lookup,
            selected: None,
            listeners: vec![],
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: SessionEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn emit_suggestions(&mut self) {
        let suggestions = self.pipeline.suggestions().to_vec();
        self.emit(SessionEvent::SuggestionsChanged(suggestions));
    }

    fn emit_history(&mut self) {
        let event = SessionEvent::HistoryChanged {
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        };
        self.emit(event);
    }

    pub fn text(&self) -> &str {
        self.pipeline.text()
    }

    pub fn suggestions(&self) -> &[SmolStr] {
        self.pipeline.suggestions()
    }

    pub fn selected(&self) -> Option<&L::Detail> {
        self.selected.as_ref()
    }

    pub fn current_word(&self) -> Option<&SmolStr> {
        self.history.current_word()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn pipeline(&self) -> &QueryPipeline {
        &self.pipeline
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pipeline.next_deadline()
    }

    /// Feeds a keystroke into the debounced pipeline.
    pub fn on_text_changed(&mut self, text: &str, now: Instant) {
        let had_suggestions = !self.pipeline.suggestions().is_empty();
        self.pipeline.on_text_changed(text, now);

        if had_suggestions && self.pipeline.suggestions().is_empty() {
            self.emit_suggestions();
        }
    }

    /// Fires the pending lookup if its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<Firing> {
        let firing = self.pipeline.poll(now)?;

        if let Firing::Applied(_) = firing {
            self.emit_suggestions();
        }

        Some(firing)
    }

    pub fn clear_search(&mut self) {
        let had_suggestions = !self.pipeline.suggestions().is_empty();
        self.pipeline.clear();

        if had_suggestions {
            self.emit_suggestions();
        }
    }

    /// Makes `word` the selected word, the query text and the newest history
    /// entry. Words the lookup cannot resolve leave everything unchanged.
    pub fn select_word(&mut self, word: &str, now: Instant) -> Selection {
        let word = normalize(word);
        let detail = match self.lookup.find(&word) {
            Some(detail) => detail,
            None => {
                log::debug!("No entry for {:?}, selection ignored", word);
                return Selection::NoMatch;
            }
        };

        self.adopt(word.clone(), detail, now);
        if self.history.add(word.clone()) {
            self.emit_history();
        }

        Selection::Adopted(word)
    }

    /// A word tapped inside definition text.
    pub fn lookup_word_from_text(&mut self, token: &str, now: Instant) -> Selection {
        let word = clean_for_lookup(token);
        if word.is_empty() {
            return Selection::NoMatch;
        }

        self.select_word(&word, now)
    }

    /// The submit action: selects the text itself when it is a known word,
    /// otherwise the best suggestion for it, computed immediately.
    pub fn search_current_text(&mut self, now: Instant) -> Selection {
        let text = normalize(self.pipeline.text());
        if text.is_empty() {
            return Selection::NoMatch;
        }

        if let Selection::Adopted(word) = self.select_word(&text, now) {
            return Selection::Adopted(word);
        }

        let first = self.pipeline.search_now().first().cloned();
        if let Some(first) = first {
            if let Selection::Adopted(word) = self.select_word(&first, now) {
                return Selection::Adopted(word);
            }
        }

        self.emit_suggestions();
        Selection::NoMatch
    }

    pub fn go_back(&mut self, now: Instant) -> Navigation {
        let word = match self.history.go_back() {
            Some(word) => word.clone(),
            None => return Navigation::Unchanged,
        };

        self.emit_history();
        self.load(word.clone(), now);
        Navigation::Moved(word)
    }

    pub fn go_forward(&mut self, now: Instant) -> Navigation {
        let word = match self.history.go_forward() {
            Some(word) => word.clone(),
            None => return Navigation::Unchanged,
        };

        self.emit_history();
        self.load(word.clone(), now);
        Navigation::Moved(word)
    }

    /// Tokens of `text` that resolve to an entry, with their byte offsets.
    pub fn cross_references(&self, text: &str) -> Vec<(usize, SmolStr)> {
        text.word_indices()
            .filter_map(|(offset, token)| {
                let word = clean_for_lookup(token);
                self.lookup.find(&word).map(|_| (offset, word))
            })
            .collect()
    }

    /// Shows a history entry without recording a new visit.
    fn load(&mut self, word: SmolStr, now: Instant) {
        match self.lookup.find(&word) {
            Some(detail) => self.adopt(word, detail, now),
            None => log::warn!("History entry {:?} no longer resolves", word),
        }
    }

    fn adopt(&mut self, word: SmolStr, detail: L::Detail, now: Instant) {
        log::debug!("Selected {:?}", word);

        let had_suggestions = !self.pipeline.suggestions().is_empty();
        self.selected = Some(detail);
        self.pipeline.adopt(&word, now);

        if had_suggestions {
            self.emit_suggestions();
        }
        self.emit(SessionEvent::WordSelected(word));
    }
}
