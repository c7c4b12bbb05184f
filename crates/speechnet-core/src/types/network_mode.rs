//! Network modes: which annotation layer feeds the network, and which
//! corpus the records come from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AggregationError;

const CHARACTER_SPEECH_TAGS: &[&str] = &[
    "direct_speech",
    "indirect_speech",
    "narrated_character_speech",
];

const EMBEDDED_NARRATION_TAGS: &[&str] = &["secondary_narration", "tertiary_narration"];

/// The annotation layer a network is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NetworkAnnotations {
    /// Direct, indirect and narrated character speech.
    #[default]
    CharacterSpeech,
    /// Secondary and tertiary narration levels.
    EmbeddedNarrations,
}

impl NetworkAnnotations {
    /// Tag whitelist for this mode.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::CharacterSpeech => CHARACTER_SPEECH_TAGS,
            Self::EmbeddedNarrations => EMBEDDED_NARRATION_TAGS,
        }
    }

    /// Whether a record with `tag` belongs to this mode.
    pub fn admits(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CharacterSpeech => "character_speech",
            Self::EmbeddedNarrations => "embedded_narrations",
        }
    }

    pub fn all() -> &'static [NetworkAnnotations] {
        &[Self::CharacterSpeech, Self::EmbeddedNarrations]
    }
}

impl fmt::Display for NetworkAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkAnnotations {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| AggregationError::UnknownAnnotationMode(s.to_string()))
    }
}

/// The corpus a text belongs to. Corpora differ in which annotation
/// layers they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorpusKind {
    #[default]
    Novellas,
    /// Dramas have no narrator, so no character speech layer.
    Dramas,
}

impl CorpusKind {
    pub fn has_character_speech_layer(&self) -> bool {
        matches!(self, Self::Novellas)
    }

    /// Whether `annotations` can be built for this corpus.
    pub fn supports(&self, annotations: NetworkAnnotations) -> bool {
        match annotations {
            NetworkAnnotations::CharacterSpeech => self.has_character_speech_layer(),
            NetworkAnnotations::EmbeddedNarrations => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novellas => "novellas",
            Self::Dramas => "dramas",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorpusKind {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "novellas" => Ok(Self::Novellas),
            "dramas" => Ok(Self::Dramas),
            _ => Err(AggregationError::UnknownCorpus(s.to_string())),
        }
    }
}

/// Validated parameters for one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub corpus: CorpusKind,
    pub annotations: NetworkAnnotations,
    /// Lower bound as a fraction of the largest record end point.
    pub start_fraction: f64,
    /// Upper bound as a fraction of the largest record end point.
    pub end_fraction: f64,
}

impl NetworkParams {
    pub fn new(annotations: NetworkAnnotations) -> Self {
        Self {
            annotations,
            ..Self::default()
        }
    }

    pub fn with_corpus(mut self, corpus: CorpusKind) -> Self {
        self.corpus = corpus;
        self
    }

    pub fn with_range(mut self, start_fraction: f64, end_fraction: f64) -> Self {
        self.start_fraction = start_fraction;
        self.end_fraction = end_fraction;
        self
    }

    /// Reject mode/corpus combinations the corpus cannot satisfy.
    pub fn check_compatibility(&self) -> Result<(), AggregationError> {
        if self.corpus.supports(self.annotations) {
            Ok(())
        } else {
            Err(AggregationError::IncompatibleCorpus {
                corpus: self.corpus.to_string(),
            })
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            corpus: CorpusKind::Novellas,
            annotations: NetworkAnnotations::CharacterSpeech,
            start_fraction: 0.0,
            end_fraction: 1.0,
        }
    }
}
