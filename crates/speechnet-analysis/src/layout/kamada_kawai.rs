//! Kamada–Kawai style layout: place nodes so that Euclidean distances
//! approximate graph-theoretic distances.
//!
//! Distances are hop counts with arc direction ignored. The energy
//! `Σ d⁻² (|pᵢ - pⱼ| - d)²` is minimized by stress majorization starting
//! from the circular layout, which makes the result deterministic.

use std::collections::VecDeque;

use super::{Circular, Layout, LayoutProvider, Point};
use crate::network::SpeechGraph;

/// Stop once no node moves further than this in a sweep.
const CONVERGENCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub struct KamadaKawai {
    /// Maximum number of sweeps over all nodes.
    pub max_iterations: usize,
    /// Largest absolute coordinate after rescaling.
    pub scale: f64,
}

impl Default for KamadaKawai {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            scale: 1.0,
        }
    }
}

impl LayoutProvider for KamadaKawai {
    fn name(&self) -> &'static str {
        "kamada_kawai"
    }

    fn layout(&self, graph: &SpeechGraph) -> Layout {
        let n = graph.node_count();
        if n <= 1 {
            return Layout::from_points(graph, &[Point::ORIGIN]);
        }

        let distances = hop_distances(graph);
        let mut points = Circular::default().points(n);

        for _ in 0..self.max_iterations {
            let mut max_shift = 0.0f64;
            for i in 0..n {
                let mut x = 0.0;
                let mut y = 0.0;
                let mut total_weight = 0.0;
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let d = distances[i][j];
                    let w = 1.0 / (d * d);
                    let (dx, dy) = (points[i].x - points[j].x, points[i].y - points[j].y);
                    let norm = dx.hypot(dy);
                    // Coincident nodes exert no directional pull.
                    let target = if norm > f64::EPSILON {
                        Point::new(points[j].x + d * dx / norm, points[j].y + d * dy / norm)
                    } else {
                        points[i]
                    };
                    x += w * target.x;
                    y += w * target.y;
                    total_weight += w;
                }
                let next = Point::new(x / total_weight, y / total_weight);
                max_shift = max_shift.max(next.distance(&points[i]));
                points[i] = next;
            }
            if max_shift < CONVERGENCE {
                break;
            }
        }

        rescale(&mut points, self.scale);
        Layout::from_points(graph, &points)
    }
}

/// All-pairs hop distances on the undirected view of `graph`.
/// Unreachable pairs are placed one hop beyond the longest finite distance.
fn hop_distances(graph: &SpeechGraph) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let mut neighbors = vec![Vec::new(); n];
    for (from, to, _) in graph.arcs() {
        if from != to {
            neighbors[from.index()].push(to.index());
            neighbors[to.index()].push(from.index());
        }
    }

    let mut hops = vec![vec![usize::MAX; n]; n];
    for (source, row) in hops.iter_mut().enumerate() {
        row[source] = 0;
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for &w in &neighbors[v] {
                if row[w] == usize::MAX {
                    row[w] = row[v] + 1;
                    queue.push_back(w);
                }
            }
        }
    }

    let longest = hops
        .iter()
        .flatten()
        .filter(|&&h| h != usize::MAX)
        .max()
        .copied()
        .unwrap_or(0);
    let unreachable = (longest + 1) as f64;

    hops.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|h| if h == usize::MAX { unreachable } else { h as f64 })
                .collect()
        })
        .collect()
}

/// Centre on the origin and scale so the largest absolute coordinate is `scale`.
fn rescale(points: &mut [Point], scale: f64) {
    if points.is_empty() {
        return;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
    let mut limit = 0.0f64;
    for p in points.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }
    if limit > 0.0 {
        let factor = scale / limit;
        for p in points.iter_mut() {
            p.x *= factor;
            p.y *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> SpeechGraph {
        let mut graph = SpeechGraph::new();
        for i in 0..n - 1 {
            graph.set_edge(&format!("n{i}"), &format!("n{}", i + 1), 1);
        }
        graph
    }

    #[test]
    fn every_node_gets_a_position() {
        let graph = chain(5);
        let layout = KamadaKawai::default().layout(&graph);
        assert_eq!(layout.len(), 5);
        for character in graph.characters() {
            assert!(layout.get(character).is_some());
        }
    }

    #[test]
    fn layout_is_scaled_and_centred() {
        let layout = KamadaKawai::default().layout(&chain(4));
        let max = layout
            .iter()
            .map(|(_, p)| p.x.abs().max(p.y.abs()))
            .fold(0.0f64, f64::max);
        assert!((max - 1.0).abs() < 1e-9);
        let mean_x: f64 = layout.iter().map(|(_, p)| p.x).sum::<f64>() / 4.0;
        assert!(mean_x.abs() < 1e-9);
    }

    #[test]
    fn neighbours_sit_closer_than_chain_ends() {
        let layout = KamadaKawai::default().layout(&chain(4));
        let p0 = layout.get("n0").unwrap();
        let p1 = layout.get("n1").unwrap();
        let p3 = layout.get("n3").unwrap();
        assert!(p0.distance(&p1) < p0.distance(&p3));
    }

    #[test]
    fn deterministic_and_weight_blind() {
        let mut light = SpeechGraph::new();
        light.set_edge("a", "b", 1);
        light.set_edge("b", "c", 1);
        let mut heavy = SpeechGraph::new();
        heavy.set_edge("a", "b", 40);
        heavy.set_edge("b", "c", 1);
        let provider = KamadaKawai::default();
        assert_eq!(provider.layout(&light), provider.layout(&light));
        assert_eq!(provider.layout(&light), provider.layout(&heavy));
    }

    #[test]
    fn disconnected_components_are_finite() {
        let mut graph = SpeechGraph::new();
        graph.set_edge("a", "b", 1);
        graph.set_edge("c", "d", 1);
        let layout = KamadaKawai::default().layout(&graph);
        assert!(layout.iter().all(|(_, p)| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn empty_and_single_node_graphs() {
        assert!(KamadaKawai::default().layout(&SpeechGraph::new()).is_empty());
        let mut graph = SpeechGraph::new();
        graph.set_edge("solo", "solo", 1);
        let layout = KamadaKawai::default().layout(&graph);
        assert_eq!(layout.get("solo"), Some(Point::ORIGIN));
    }
}
