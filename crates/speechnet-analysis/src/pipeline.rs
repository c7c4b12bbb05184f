//! `SpeechNetwork`: the speech network of one text, from records to scene.

use speechnet_core::config::SpeechnetConfig;
use speechnet_core::errors::{AggregationError, PipelineError, SceneError};
use speechnet_core::types::{AnnotationRecord, NetworkParams};
use tracing::info;

use crate::edges::{Edge, EdgeAggregator};
use crate::layout::{provider_from_config, Layout, LayoutProvider};
use crate::network::{build_network, SpeechGraph};
use crate::scene::{build_scene, NetworkScene, RenderAdapter, SceneOptions};
use crate::stats::{StatsEngine, StatsRow, StatsTable};

/// Edges, graph and layout of one text. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct SpeechNetwork {
    title: Option<String>,
    edges: Vec<Edge>,
    graph: SpeechGraph,
    layout: Layout,
}

impl SpeechNetwork {
    /// Aggregate `records`, build the graph and lay it out with `provider`.
    pub fn from_records(
        records: &[AnnotationRecord],
        params: &NetworkParams,
        provider: &dyn LayoutProvider,
    ) -> Result<Self, AggregationError> {
        let edges = EdgeAggregator::default().aggregate(records, params)?;
        Ok(Self::from_edges(edges, provider))
    }

    /// Run the pipeline with every setting taken from `config`.
    pub fn from_config(
        records: &[AnnotationRecord],
        config: &SpeechnetConfig,
    ) -> Result<Self, PipelineError> {
        let params = config.network.params()?;
        let provider = provider_from_config(&config.layout)?;
        let edges = EdgeAggregator::default()
            .with_evidence_width(config.network.effective_evidence_width())
            .aggregate(records, &params)?;
        Ok(Self::from_edges(edges, provider.as_ref()))
    }

    /// Build graph and layout from already aggregated edges.
    pub fn from_edges(edges: Vec<Edge>, provider: &dyn LayoutProvider) -> Self {
        let graph = build_network(&edges);
        let layout = provider.layout(&graph);
        info!(
            edges = edges.len(),
            characters = graph.node_count(),
            layout = provider.name(),
            "speech network ready"
        );
        Self {
            title: None,
            edges,
            graph,
            layout,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn graph(&self) -> &SpeechGraph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Statistics with the default engine.
    pub fn stats(&self) -> StatsTable {
        self.stats_with(&StatsEngine::default())
    }

    pub fn stats_with(&self, engine: &StatsEngine) -> StatsTable {
        engine.compute(&self.graph)
    }

    /// Leading statistics rows as configured: engine tuned by
    /// `config.stats`, cut to `config.plot.top_stats` rows.
    pub fn top_stats(&self, config: &SpeechnetConfig) -> Vec<StatsRow> {
        let table = self.stats_with(&StatsEngine::from_config(&config.stats));
        table.top(config.plot.effective_top_stats()).to_vec()
    }

    /// Scene for a render adapter, using the default statistics engine.
    pub fn scene(&self, options: &SceneOptions) -> Result<NetworkScene, SceneError> {
        self.scene_with(&StatsEngine::default(), options)
    }

    pub fn scene_with(
        &self,
        engine: &StatsEngine,
        options: &SceneOptions,
    ) -> Result<NetworkScene, SceneError> {
        build_scene(&self.edges, &self.layout, &self.stats_with(engine), options)
    }

    /// Assemble the scene and hand it to `adapter`.
    pub fn render<A: RenderAdapter>(
        &self,
        adapter: &mut A,
        options: &SceneOptions,
    ) -> Result<(), PipelineError> {
        let scene = self.scene(options)?;
        adapter
            .render(&scene)
            .map_err(|e| PipelineError::Render(e.to_string()))
    }

    /// Scene options from `config`, titled with this network's title when
    /// the configuration asks for it.
    pub fn scene_options(&self, config: &SpeechnetConfig) -> Result<SceneOptions, PipelineError> {
        Ok(SceneOptions::from_config(&config.plot, self.title())?)
    }
}
