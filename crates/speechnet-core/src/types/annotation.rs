//! Annotation records as supplied by the loader.

use serde::{Deserialize, Serialize};

use super::collections::SmallVec2;

/// One annotated span of a narrative text.
///
/// Field names on the wire follow the loader's export format, where the
/// speaker and addressee lists are stored as `prop:speaker` and
/// `prop:addressee` and the raw span text as `annotation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Start of the span, text-relative (not necessarily normalized).
    pub start_point: f64,
    /// End of the span, text-relative.
    pub end_point: f64,
    /// Category label, e.g. `direct_speech` or `secondary_narration`.
    pub tag: String,
    #[serde(rename = "prop:speaker", default)]
    pub speakers: SmallVec2<String>,
    #[serde(rename = "prop:addressee", default)]
    pub addressees: SmallVec2<String>,
    #[serde(rename = "annotation", default)]
    pub text: String,
}

impl AnnotationRecord {
    /// Create a record with no speakers, addressees, or text.
    pub fn new(start_point: f64, end_point: f64, tag: impl Into<String>) -> Self {
        Self {
            start_point,
            end_point,
            tag: tag.into(),
            speakers: SmallVec2::new(),
            addressees: SmallVec2::new(),
            text: String::new(),
        }
    }

    pub fn with_speakers<I, S>(mut self, speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speakers = speakers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_addressees<I, S>(mut self, addressees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addressees = addressees.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Every (speaker, addressee) combination this record attests.
    /// Empty when either side is empty.
    pub fn speaker_addressee_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.speakers.iter().flat_map(move |speaker| {
            self.addressees
                .iter()
                .map(move |addressee| (speaker.as_str(), addressee.as_str()))
        })
    }
}
