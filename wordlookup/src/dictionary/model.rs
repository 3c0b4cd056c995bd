//! Structured word definitions as stored in the rich dictionary.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounType {
    Countable,
    Uncountable,
    Both,
}

impl NounType {
    pub fn as_str(self) -> &'static str {
        match self {
            NounType::Countable => "countable",
            NounType::Uncountable => "uncountable",
            NounType::Both => "both",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbType {
    Transitive,
    Intransitive,
    Both,
}

impl VerbType {
    pub fn as_str(self) -> &'static str {
        match self {
            VerbType::Transitive => "transitive",
            VerbType::Intransitive => "intransitive",
            VerbType::Both => "both",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    /// 1 = easy, 2 = medium, 3 = hard
    pub difficulty: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub meaning: String,
    pub examples: Vec<Example>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetail {
    pub word: SmolStr,
    pub part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noun_type: Option<NounType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb_type: Option<VerbType>,
    pub definitions: Vec<Definition>,
}

pub const BASIC_DEFINITION: &str =
    "Word found in dictionary. Detailed definition not yet available.";

impl WordDetail {
    /// Placeholder entry for a word that is known but has no rich definition.
    pub fn basic(word: SmolStr) -> WordDetail {
        WordDetail {
            word,
            part_of_speech: PartOfSpeech::Noun,
            noun_type: None,
            verb_type: None,
            definitions: vec![Definition {
                meaning: BASIC_DEFINITION.to_string(),
                examples: vec![],
            }],
        }
    }

    /// Part of speech with its noun or verb type, e.g. `noun (countable)`.
    pub fn pos_description(&self) -> String {
        let mut desc = self.part_of_speech.as_str().to_string();
        if let Some(noun_type) = self.noun_type {
            desc.push_str(&format!(" ({})", noun_type.as_str()));
        }
        if let Some(verb_type) = self.verb_type {
            desc.push_str(&format!(" ({})", verb_type.as_str()));
        }
        desc
    }
}
