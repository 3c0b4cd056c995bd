//! Turns raw text changes into suggestion lookups.
//!
//! Every change restarts a quiescence delay; when it runs out the settled
//! text is handed to the [`SuggestionEngine`] exactly once. Text assigned by
//! the application itself (a picked suggestion, history navigation, a tapped
//! cross-reference) is scheduled as [`TextOrigin::Programmatic`] and its
//! firing resolves to [`Firing::Suppressed`] without touching the engine.
use std::time::{Duration, Instant};

use smol_str::SmolStr;

use crate::suggest::SuggestionEngine;

mod debounce;

pub use self::debounce::Debouncer;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// typed by the user
    User,
    /// assigned when the application adopts a word
    Programmatic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingQuery {
    text: String,
    origin: TextOrigin,
}

/// Outcome of a debounce firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Firing {
    /// the engine ran for this text and the suggestions were replaced
    Applied(String),
    /// the text was assigned programmatically, the engine was not called
    Suppressed(String),
}

#[derive(Debug, Clone)]
pub struct QueryPipeline {
    engine: SuggestionEngine,
    limit: usize,
    text: String,
    suggestions: Vec<SmolStr>,
    debounce: Debouncer<PendingQuery>,
    lookups: usize,
}

impl QueryPipeline {
    pub fn new(engine: SuggestionEngine, delay: Duration) -> QueryPipeline {
        let limit = engine.config().limit;

        QueryPipeline {
            engine,
            limit,
            text: String::new(),
            suggestions: vec![],
            debounce: Debouncer::new(delay),
            lookups: 0,
        }
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[SmolStr] {
        &self.suggestions
    }

    /// Number of times the engine has been invoked.
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// A keystroke. Blank text cancels any pending lookup and clears the
    /// suggestions right away.
    ///
    /// A change that repeats the text of a pending adoption is the binding
    /// echoing it back and is ignored, so the adoption stays suppressed.
    pub fn on_text_changed(&mut self, text: &str, now: Instant) {
        if self.is_adoption_pending() && text == self.text {
            log::trace!("Ignoring echo of adopted word {:?}", text);
            return;
        }

        self.set_text(text, TextOrigin::User, now);
    }

    /// Whether the pending change was assigned programmatically.
    pub fn is_adoption_pending(&self) -> bool {
        matches!(
            self.debounce.pending(),
            Some(PendingQuery {
                origin: TextOrigin::Programmatic,
                ..
            })
        )
    }

    /// Assigns `word` as the query text without triggering a lookup for it.
    /// Current suggestions are dropped, since a choice has been made.
    pub fn adopt(&mut self, word: &str, now: Instant) {
        self.suggestions.clear();
        self.set_text(word, TextOrigin::Programmatic, now);
    }

    /// Empties the text, cancelling any pending lookup.
    pub fn clear(&mut self) {
        self.text.clear();
        self.suggestions.clear();
        if self.debounce.cancel() {
            log::trace!("Cancelled pending lookup");
        }
    }

    fn set_text(&mut self, text: &str, origin: TextOrigin, now: Instant) {
        if text.trim().is_empty() {
            self.clear();
            self.text.push_str(text);
            return;
        }

        self.text = text.to_string();
        self.debounce.schedule(
            PendingQuery {
                text: self.text.clone(),
                origin,
            },
            now,
        );
    }

    /// Fires the pending change if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Firing> {
        let PendingQuery { text, origin } = self.debounce.poll(now)?;

        match origin {
            TextOrigin::Programmatic => {
                log::trace!("Suppressed lookup for adopted word {:?}", text);
                Some(Firing::Suppressed(text))
            }
            TextOrigin::User => {
                self.suggestions = self.lookup(&text);
                Some(Firing::Applied(text))
            }
        }
    }

    /// Runs the engine on the current text immediately, bypassing and
    /// cancelling the debounce.
    pub fn search_now(&mut self) -> &[SmolStr] {
        self.debounce.cancel();
        let text = self.text.clone();
        self.suggestions = self.lookup(&text);
        &self.suggestions
    }

    fn lookup(&mut self, text: &str) -> Vec<SmolStr> {
        self.lookups += 1;
        self.engine.suggest(text, self.limit)
    }
}
