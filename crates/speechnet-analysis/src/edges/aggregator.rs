//! Folds filtered annotation records into weighted speaker → addressee edges.

use speechnet_core::errors::AggregationError;
use speechnet_core::types::collections::FxHashMap;
use speechnet_core::types::{AnnotationRecord, NetworkParams};
use tracing::debug;

use super::types::{Edge, EdgeKey};
use crate::format::{format_evidence_text, EVIDENCE_WIDTH};

/// Evidence collected for one edge while folding records.
struct PendingEdge<'a> {
    key: EdgeKey,
    weight: u32,
    texts: Vec<&'a str>,
    start_points: Vec<f64>,
}

/// Aggregates annotation records into edges.
#[derive(Debug, Clone, Copy)]
pub struct EdgeAggregator {
    evidence_width: usize,
}

impl Default for EdgeAggregator {
    fn default() -> Self {
        Self {
            evidence_width: EVIDENCE_WIDTH,
        }
    }
}

impl EdgeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters kept per evidence line before eliding.
    pub fn with_evidence_width(mut self, evidence_width: usize) -> Self {
        self.evidence_width = evidence_width;
        self
    }

    /// Aggregate `records` into one edge per distinct (speaker, addressee)
    /// pair, in first-observation order.
    ///
    /// Records are kept when their start point lies within the range
    /// fractions of the largest end point and their tag belongs to the
    /// requested annotation layer. The last kept record never contributes.
    pub fn aggregate(
        &self,
        records: &[AnnotationRecord],
        params: &NetworkParams,
    ) -> Result<Vec<Edge>, AggregationError> {
        params.check_compatibility()?;

        let qualifying = select_records(records, params);
        let Some((dropped, contributing)) = qualifying.split_last() else {
            debug!(total = records.len(), "no qualifying records");
            return Ok(Vec::new());
        };
        // Boundary artifact kept as-is: the final qualifying record is discarded.
        debug!(
            total = records.len(),
            qualifying = qualifying.len(),
            dropped_start = dropped.start_point,
            "filtered annotation records"
        );

        let mut index: FxHashMap<EdgeKey, usize> = FxHashMap::default();
        let mut pending: Vec<PendingEdge<'_>> = Vec::new();

        for record in contributing {
            for (speaker, addressee) in record.speaker_addressee_pairs() {
                let key = EdgeKey::new(speaker, addressee);
                let slot = match index.get(&key) {
                    Some(&slot) => slot,
                    None => {
                        index.insert(key.clone(), pending.len());
                        pending.push(PendingEdge {
                            key,
                            weight: 0,
                            texts: Vec::new(),
                            start_points: Vec::new(),
                        });
                        pending.len() - 1
                    }
                };
                let edge = &mut pending[slot];
                edge.weight += 1;
                edge.texts.push(record.text.as_str());
                edge.start_points.push(record.start_point);
            }
        }

        let edges: Vec<Edge> = pending
            .into_iter()
            .map(|p| Edge {
                text: format_evidence_text(&p.texts, self.evidence_width),
                speaker: p.key.speaker,
                addressee: p.key.addressee,
                weight: p.weight,
                start_points: p.start_points,
            })
            .collect();

        debug!(edges = edges.len(), "aggregated edges");
        Ok(edges)
    }
}

/// Records passing the range and tag filters, in input order.
fn select_records<'a>(
    records: &'a [AnnotationRecord],
    params: &NetworkParams,
) -> Vec<&'a AnnotationRecord> {
    let Some(max_end_point) = records
        .iter()
        .map(|r| r.end_point)
        .reduce(f64::max)
    else {
        return Vec::new();
    };

    let lower = params.start_fraction * max_end_point;
    let upper = params.end_fraction * max_end_point;

    records
        .iter()
        .filter(|r| r.start_point >= lower && r.start_point <= upper)
        .filter(|r| params.annotations.admits(&r.tag))
        .collect()
}

/// Aggregate with the default evidence width.
pub fn aggregate(
    records: &[AnnotationRecord],
    params: &NetworkParams,
) -> Result<Vec<Edge>, AggregationError> {
    EdgeAggregator::default().aggregate(records, params)
}
