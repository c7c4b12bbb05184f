//! Statistics table types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use speechnet_core::errors::StatsError;

/// A column of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Degree,
    Indegree,
    WeightedIndegree,
    Outdegree,
    WeightedOutdegree,
    Betweenness,
    BetweennessWeighted,
    Pagerank,
    PagerankWeighted,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Indegree => "indegree",
            Self::WeightedIndegree => "weighted_indegree",
            Self::Outdegree => "outdegree",
            Self::WeightedOutdegree => "weighted_outdegree",
            Self::Betweenness => "betweenness",
            Self::BetweennessWeighted => "betweenness_weighted",
            Self::Pagerank => "pagerank",
            Self::PagerankWeighted => "pagerank_weighted",
        }
    }

    /// All columns in table order.
    pub fn all() -> &'static [Metric] {
        &[
            Self::Degree,
            Self::Indegree,
            Self::WeightedIndegree,
            Self::Outdegree,
            Self::WeightedOutdegree,
            Self::Betweenness,
            Self::BetweennessWeighted,
            Self::Pagerank,
            Self::PagerankWeighted,
        ]
    }

    /// Whether the column holds integer counts.
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Self::Degree
                | Self::Indegree
                | Self::WeightedIndegree
                | Self::Outdegree
                | Self::WeightedOutdegree
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| StatsError::UnknownMetric(s.to_string()))
    }
}

/// Per-character metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    /// In-degree + out-degree.
    pub degree: u32,
    pub indegree: u32,
    /// Sum of incoming arc weights.
    pub weighted_indegree: u64,
    pub outdegree: u32,
    /// Sum of outgoing arc weights.
    pub weighted_outdegree: u64,
    pub betweenness: f64,
    pub betweenness_weighted: f64,
    pub pagerank: f64,
    pub pagerank_weighted: f64,
}

impl NodeStats {
    /// Value of `metric` as a float.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Degree => f64::from(self.degree),
            Metric::Indegree => f64::from(self.indegree),
            Metric::WeightedIndegree => self.weighted_indegree as f64,
            Metric::Outdegree => f64::from(self.outdegree),
            Metric::WeightedOutdegree => self.weighted_outdegree as f64,
            Metric::Betweenness => self.betweenness,
            Metric::BetweennessWeighted => self.betweenness_weighted,
            Metric::Pagerank => self.pagerank,
            Metric::PagerankWeighted => self.pagerank_weighted,
        }
    }

    /// Value of `metric` formatted for display: counts as integers.
    pub fn display_value(&self, metric: Metric) -> String {
        match metric {
            Metric::Degree => self.degree.to_string(),
            Metric::Indegree => self.indegree.to_string(),
            Metric::WeightedIndegree => self.weighted_indegree.to_string(),
            Metric::Outdegree => self.outdegree.to_string(),
            Metric::WeightedOutdegree => self.weighted_outdegree.to_string(),
            other => self.get(other).to_string(),
        }
    }
}

/// One row of the statistics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub character: String,
    #[serde(flatten)]
    pub stats: NodeStats,
}

/// Per-character statistics, sorted descending by unweighted betweenness.
///
/// Characters without any arc are never present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsTable {
    rows: Vec<StatsRow>,
}

impl StatsTable {
    /// Wrap rows that are already filtered and sorted.
    pub(crate) fn from_sorted_rows(rows: Vec<StatsRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StatsRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatsRow> + '_ {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, character: &str) -> Option<&NodeStats> {
        self.rows
            .iter()
            .find(|row| row.character == character)
            .map(|row| &row.stats)
    }

    /// The first `n` rows.
    pub fn top(&self, n: usize) -> &[StatsRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// (character, value) pairs for one column, in table order.
    pub fn column(&self, metric: Metric) -> Vec<(&str, f64)> {
        self.rows
            .iter()
            .map(|row| (row.character.as_str(), row.stats.get(metric)))
            .collect()
    }

    /// Each character's share of the column total. All shares are zero
    /// when the column sums to zero.
    pub fn share(&self, metric: Metric) -> Vec<(&str, f64)> {
        let column = self.column(metric);
        let total: f64 = column.iter().map(|(_, v)| v).sum();
        column
            .into_iter()
            .map(|(character, v)| {
                let share = if total > 0.0 { v / total } else { 0.0 };
                (character, share)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a StatsTable {
    type Item = &'a StatsRow;
    type IntoIter = std::slice::Iter<'a, StatsRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
