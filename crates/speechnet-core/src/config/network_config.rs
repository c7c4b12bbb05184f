//! Network (aggregation) configuration.

use serde::{Deserialize, Serialize};

use crate::errors::AggregationError;
use crate::types::{CorpusKind, NetworkAnnotations, NetworkParams};

/// Which records feed the network.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Corpus name: "novellas" or "dramas". Default: "novellas".
    pub corpus: Option<String>,
    /// Annotation layer: "character_speech" or "embedded_narrations".
    /// Default: "character_speech".
    pub annotations: Option<String>,
    /// Range start as a fraction of the text. Default: 0.0.
    pub start_point: Option<f64>,
    /// Range end as a fraction of the text. Default: 1.0.
    pub end_point: Option<f64>,
    /// Characters kept per evidence line. Default: 50.
    pub evidence_width: Option<usize>,
}

impl NetworkConfig {
    pub fn effective_start_point(&self) -> f64 {
        self.start_point.unwrap_or(0.0)
    }

    pub fn effective_end_point(&self) -> f64 {
        self.end_point.unwrap_or(1.0)
    }

    pub fn effective_evidence_width(&self) -> usize {
        self.evidence_width.unwrap_or(50)
    }

    /// Resolve the string-typed fields into validated parameters.
    pub fn params(&self) -> Result<NetworkParams, AggregationError> {
        let corpus = match self.corpus.as_deref() {
            Some(name) => name.parse::<CorpusKind>()?,
            None => CorpusKind::default(),
        };
        let annotations = match self.annotations.as_deref() {
            Some(name) => name.parse::<NetworkAnnotations>()?,
            None => NetworkAnnotations::default(),
        };
        let params = NetworkParams::new(annotations)
            .with_corpus(corpus)
            .with_range(self.effective_start_point(), self.effective_end_point());
        params.check_compatibility()?;
        Ok(params)
    }
}
