use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use gumdrop::Options;
use serde::Serialize;

use wordlookup::dictionary::model::WordDetail;
use wordlookup::dictionary::{RichDictionary, VocabularyLookup, WordDetailLookup};
use wordlookup::session::{Navigation, Selection, Session, SessionConfig, SessionEvent};
use wordlookup::source::WordListFile;
use wordlookup::suggest::suggestion::Suggestion;
use wordlookup::suggest::SuggestionEngine;
use wordlookup::vocabulary::VocabularyIndex;

trait OutputWriter {
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]) {
        println!("Input: {}", &word);
        for sugg in suggestions {
            if sugg.is_prefix() {
                println!("{}\t\t[prefix]", sugg.value);
            } else {
                println!("{}\t\t[distance {}]", sugg.value, sugg.distance());
            }
        }
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<SuggestionRequest>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            suggestions: suggestions.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(v) => println!("{}", v),
            Err(e) => eprintln!("{:?}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "get ranked suggestions for provided input")]
    Suggest(SuggestArgs),

    #[options(help = "print the entry for each provided word")]
    Lookup(LookupArgs),

    #[options(help = "drive an interactive search session from stdin")]
    Session(SessionArgs),
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "newline-separated word list", required)]
    words: PathBuf,

    #[options(help = "JSON dictionary with full definitions")]
    dictionary: Option<PathBuf>,

    #[options(help = "JSON session configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum number of results")]
    limit: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct LookupArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "newline-separated word list", required)]
    words: PathBuf,

    #[options(help = "JSON dictionary with full definitions")]
    dictionary: Option<PathBuf>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be looked up")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SessionArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "newline-separated word list", required)]
    words: PathBuf,

    #[options(help = "JSON dictionary with full definitions")]
    dictionary: Option<PathBuf>,

    #[options(help = "JSON session configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum number of results")]
    limit: Option<usize>,
}

fn load_config(path: Option<&Path>, limit: Option<usize>) -> anyhow::Result<SessionConfig> {
    let mut config = match path {
        Some(path) => serde_json::from_slice(&std::fs::read(path)?)?,
        None => SessionConfig::default(),
    };

    if let Some(limit) = limit {
        config.suggestions.limit = limit;
    }

    Ok(config)
}

fn load_dictionaries(
    words: &Path,
    dictionary: Option<&Path>,
) -> anyhow::Result<(Arc<VocabularyIndex>, Arc<RichDictionary>)> {
    let list = match WordListFile::open(words) {
        Ok(v) => v,
        Err(e) if e.is_not_found() => {
            log::warn!("{}, continuing without it", e);
            WordListFile::from_string(words.to_path_buf(), String::new())
        }
        Err(e) => return Err(e.into()),
    };

    let rich = match dictionary.map(RichDictionary::open) {
        None => RichDictionary::default(),
        Some(Ok(v)) => v,
        Some(Err(e)) if e.is_not_found() => {
            log::warn!("{}, continuing without it", e);
            RichDictionary::default()
        }
        Some(Err(e)) => return Err(e.into()),
    };

    let index = VocabularyIndex::load(&[&list, &rich]);
    Ok((Arc::new(index), Arc::new(rich)))
}

fn read_inputs(inputs: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer
        .lines()
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.limit)?;
    let (index, _) = load_dictionaries(&args.words, args.dictionary.as_deref())?;
    let engine = SuggestionEngine::with_config(index, config.suggestions.clone());

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    for word in read_inputs(args.inputs)? {
        let suggestions = engine.suggest_ranked(&word, config.suggestions.limit);
        writer.write_suggestions(&word, &suggestions);
    }

    writer.finish();

    Ok(())
}

fn print_detail(detail: &WordDetail) {
    println!("{} ({})", detail.word, detail.pos_description());
    for (i, definition) in detail.definitions.iter().enumerate() {
        println!("  {}. {}", i + 1, definition.meaning);
        for example in &definition.examples {
            println!("       \"{}\"", example.sentence);
        }
    }
}

fn lookup(args: LookupArgs) -> anyhow::Result<()> {
    let (index, rich) = load_dictionaries(&args.words, args.dictionary.as_deref())?;
    let lookup = VocabularyLookup::new(index, rich);

    let mut found = vec![];
    for word in read_inputs(args.inputs)? {
        match lookup.find(&word) {
            Some(detail) if args.use_json => found.push(detail),
            Some(detail) => print_detail(&detail),
            None if args.use_json => {}
            None => println!("{}: not found", word),
        }
    }

    if args.use_json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    }

    Ok(())
}

fn print_state(session: &Session<VocabularyLookup>) {
    println!(
        "[{}{}] {:?}",
        if session.can_go_back() { "<" } else { " " },
        if session.can_go_forward() { ">" } else { " " },
        session.text()
    );
    if let Some(detail) = session.selected() {
        print_detail(detail);
    }
}

fn session(args: SessionArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.limit)?;
    let (index, rich) = load_dictionaries(&args.words, args.dictionary.as_deref())?;
    let lookup = VocabularyLookup::new(index.clone(), rich);
    let mut session = Session::new(index, lookup, &config);

    session.subscribe(|event| {
        if let SessionEvent::SuggestionsChanged(suggestions) = event {
            if !suggestions.is_empty() {
                println!("  {}", suggestions.join(", "));
            }
        }
    });

    // Simulated clock: every input line settles before the next one.
    let mut now = Instant::now();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let (command, rest) = match line.strip_prefix(':') {
            Some(cmd) => {
                let mut parts = cmd.splitn(2, ' ');
                (parts.next().unwrap_or(""), parts.next().unwrap_or("").trim())
            }
            None => ("", line.as_str()),
        };

        match command {
            "" => session.on_text_changed(rest, now),
            "select" => {
                if let Selection::NoMatch = session.select_word(rest, now) {
                    println!("{}: not found", rest);
                }
            }
            "enter" => {
                if let Selection::NoMatch = session.search_current_text(now) {
                    println!("{}: no match", session.text());
                }
            }
            "back" => {
                if let Navigation::Unchanged = session.go_back(now) {
                    println!("Nothing to go back to");
                }
            }
            "forward" => {
                if let Navigation::Unchanged = session.go_forward(now) {
                    println!("Nothing to go forward to");
                }
            }
            "clear" => session.clear_search(),
            "refs" => {
                for (offset, word) in session.cross_references(rest) {
                    println!("{:>4}: {}", offset, word);
                }
            }
            other => {
                eprintln!("Unknown command :{}", other);
                continue;
            }
        }

        now += config.debounce();
        session.tick(now);
        print_state(&session);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Lookup(args)) => lookup(args),
        Some(Command::Session(args)) => session(args),
    }
}
