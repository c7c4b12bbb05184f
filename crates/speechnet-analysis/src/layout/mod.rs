//! Node placement. Providers map every graph node to a 2D point;
//! geometry helpers place arrows and hover markers between them.

pub mod circular;
pub mod geometry;
pub mod kamada_kawai;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use speechnet_core::config::LayoutConfig;
use speechnet_core::errors::{LayoutError, SceneError};
use speechnet_core::types::collections::FxHashMap;

use crate::network::SpeechGraph;

pub use circular::Circular;
pub use geometry::{interpolated_point, ARROW_HEAD_OFFSET, ARROW_TAIL_OFFSET, HOVER_MARKER_OFFSET};
pub use kamada_kawai::KamadaKawai;

/// A position in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Positions for every node of a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    positions: FxHashMap<String, Point>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: impl Into<String>, point: Point) {
        self.positions.insert(character.into(), point);
    }

    pub fn get(&self, character: &str) -> Option<Point> {
        self.positions.get(character).copied()
    }

    /// Position of `character`; an unknown character means the layout was
    /// computed for a different graph.
    pub fn position(&self, character: &str) -> Result<Point, SceneError> {
        self.get(character).ok_or_else(|| SceneError::MissingPosition {
            character: character.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.positions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Build a layout from points listed in node insertion order.
    pub(crate) fn from_points(graph: &SpeechGraph, points: &[Point]) -> Self {
        let positions = graph
            .characters()
            .zip(points)
            .map(|(character, point)| (character.to_string(), *point))
            .collect();
        Self { positions }
    }
}

/// Maps graph nodes to 2D coordinates. Arc weights are ignored by the
/// bundled providers so the picture stays stable when counts change.
pub trait LayoutProvider {
    fn name(&self) -> &'static str;

    fn layout(&self, graph: &SpeechGraph) -> Layout;
}

/// Bundled layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAlgorithm {
    #[default]
    KamadaKawai,
    Circular,
}

impl LayoutAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::KamadaKawai => "kamada_kawai",
            Self::Circular => "circular",
        }
    }

    /// Provider for this algorithm, tuned by `config`.
    pub fn provider(&self, config: &LayoutConfig) -> Box<dyn LayoutProvider> {
        match self {
            Self::KamadaKawai => Box::new(KamadaKawai {
                max_iterations: config.effective_max_iterations(),
                scale: config.effective_scale(),
            }),
            Self::Circular => Box::new(Circular {
                scale: config.effective_scale(),
            }),
        }
    }
}

impl fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutAlgorithm {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kamada_kawai" => Ok(Self::KamadaKawai),
            "circular" => Ok(Self::Circular),
            _ => Err(LayoutError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Provider named by `config.algorithm`.
pub fn provider_from_config(config: &LayoutConfig) -> Result<Box<dyn LayoutProvider>, LayoutError> {
    let algorithm: LayoutAlgorithm = config.effective_algorithm().parse()?;
    Ok(algorithm.provider(config))
}
