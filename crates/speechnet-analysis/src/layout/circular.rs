//! Nodes evenly spaced on a circle.

use std::f64::consts::TAU;

use super::{Layout, LayoutProvider, Point};
use crate::network::SpeechGraph;

#[derive(Debug, Clone, Copy)]
pub struct Circular {
    /// Circle radius.
    pub scale: f64,
}

impl Default for Circular {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Circular {
    /// Points for `n` nodes, first node at angle 0, counter-clockwise.
    /// A single node sits at the origin.
    pub fn points(&self, n: usize) -> Vec<Point> {
        if n == 1 {
            return vec![Point::ORIGIN];
        }
        (0..n)
            .map(|i| {
                let theta = TAU * i as f64 / n as f64;
                Point::new(self.scale * theta.cos(), self.scale * theta.sin())
            })
            .collect()
    }
}

impl LayoutProvider for Circular {
    fn name(&self) -> &'static str {
        "circular"
    }

    fn layout(&self, graph: &SpeechGraph) -> Layout {
        Layout::from_points(graph, &self.points(graph.node_count()))
    }
}
