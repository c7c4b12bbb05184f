//! Scene assembly from edges, layout and statistics.

use speechnet_core::errors::SceneError;

use super::types::{EdgeGlyph, NetworkScene, NodeGlyph, SceneOptions};
use crate::edges::Edge;
use crate::format::{format_hover_stats, format_node_label, truncate_hover_text};
use crate::layout::{
    interpolated_point, Layout, ARROW_HEAD_OFFSET, ARROW_TAIL_OFFSET, HOVER_MARKER_OFFSET,
};
use crate::stats::StatsTable;

/// Assemble the scene. Fails if an edge endpoint or a table row has no
/// layout position.
pub fn build_scene(
    edges: &[Edge],
    layout: &Layout,
    stats: &StatsTable,
    options: &SceneOptions,
) -> Result<NetworkScene, SceneError> {
    let weight_sum: f64 = edges.iter().map(|e| f64::from(e.weight)).sum();

    let edge_glyphs = edges
        .iter()
        .map(|edge| edge_glyph(edge, layout, weight_sum, options))
        .collect::<Result<Vec<_>, _>>()?;

    let node_glyphs = stats
        .share(options.node_size)
        .into_iter()
        .zip(stats.rows())
        .map(|((character, share), row)| -> Result<NodeGlyph, SceneError> {
            Ok(NodeGlyph {
                character: character.to_string(),
                position: layout.position(character)?,
                size: share * options.node_factor + options.node_alpha,
                label: format_node_label(character),
                hover_text: format_hover_stats(character, &row.stats),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NetworkScene {
        title: options
            .title
            .as_ref()
            .map(|title| format!("NETWORK GRAPH FOR {title}")),
        edges: edge_glyphs,
        nodes: node_glyphs,
    })
}

fn edge_glyph(
    edge: &Edge,
    layout: &Layout,
    weight_sum: f64,
    options: &SceneOptions,
) -> Result<EdgeGlyph, SceneError> {
    let speaker = layout.position(&edge.speaker)?;
    let addressee = layout.position(&edge.addressee)?;
    let label = edge.label();
    let evidence = truncate_hover_text(&edge.text, options.hover_text_limit);

    Ok(EdgeGlyph {
        hover_text: format!("{label}:\n{evidence}"),
        label,
        speaker: edge.speaker.clone(),
        addressee: edge.addressee.clone(),
        weight: edge.weight,
        head: interpolated_point(addressee, speaker, ARROW_HEAD_OFFSET),
        tail: interpolated_point(addressee, speaker, ARROW_TAIL_OFFSET),
        hover_point: interpolated_point(speaker, addressee, HOVER_MARKER_OFFSET),
        width: f64::from(edge.weight) / weight_sum * 100.0 + 1.0,
    })
}
