/*! Word lookup with ranked, as-you-type suggestions.

A [`VocabularyIndex`](vocabulary::VocabularyIndex) is built once from one or
more [`WordSource`](source::WordSource)s and shared read-only. The
[`SuggestionEngine`](suggest::SuggestionEngine) ranks exact prefix matches
first and fills the remaining slots with words within a small edit distance.
A [`Session`](session::Session) wraps the engine in a debounced query
pipeline and keeps a back/forward history of the words looked up.

# Usage examples

```
use std::sync::Arc;
use std::time::{Duration, Instant};

use wordlookup::dictionary::VocabularyLookup;
use wordlookup::session::{Session, SessionConfig};
use wordlookup::vocabulary::VocabularyIndex;

let words = vec!["book", "boot", "boots", "box", "cat"];
let index = Arc::new(VocabularyIndex::load(&[&words]));
let lookup = VocabularyLookup::plain(index.clone());
let mut session = Session::new(index, lookup, &SessionConfig::default());

let now = Instant::now();
session.on_text_changed("boo", now);
session.tick(now + Duration::from_millis(300));
assert_eq!(session.suggestions(), &["book", "boot", "boots", "box"]);
```

Further examples of how to use the library can be found in the
`wordlookup-bin` crate in the same workspace.

*/

pub mod dictionary;
pub mod history;
pub mod pipeline;
pub mod session;
pub mod source;
pub mod suggest;
pub mod tokenizer;
pub mod vocabulary;

/// Initialises `env_logger` from `RUST_LOG`, ignoring repeated calls.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
