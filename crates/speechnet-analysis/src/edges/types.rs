//! Edge types.

use serde::{Deserialize, Serialize};

/// Identity of an edge: the ordered (speaker, addressee) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub speaker: String,
    pub addressee: String,
}

impl EdgeKey {
    pub fn new(speaker: impl Into<String>, addressee: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            addressee: addressee.into(),
        }
    }
}

/// A directed speaker → addressee edge aggregated over all qualifying records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub speaker: String,
    pub addressee: String,
    /// Newline-joined evidence, one truncated line per contributing record.
    pub text: String,
    /// Number of records attesting this pair.
    pub weight: u32,
    /// Start positions of the contributing records, in record order.
    pub start_points: Vec<f64>,
}

impl Edge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.speaker.as_str(), self.addressee.as_str())
    }

    /// `speaker → addressee`, as shown in legends and hover text.
    pub fn label(&self) -> String {
        format!("{} → {}", self.speaker, self.addressee)
    }

    pub fn is_self_loop(&self) -> bool {
        self.speaker == self.addressee
    }
}
