//! End-to-end: records → network → scene → render adapter.

use speechnet_analysis::layout::{Circular, KamadaKawai, Layout, LayoutProvider, Point};
use speechnet_analysis::network::SpeechGraph;
use speechnet_analysis::scene::{JsonSceneWriter, NetworkScene, RenderAdapter, SceneOptions};
use speechnet_analysis::stats::Metric;
use speechnet_analysis::SpeechNetwork;
use speechnet_core::config::SpeechnetConfig;
use speechnet_core::errors::{PipelineError, SceneError, SpeechnetErrorCode};
use speechnet_core::tracing::init_tracing;
use speechnet_core::types::{AnnotationRecord, CorpusKind, NetworkAnnotations, NetworkParams};

/// Places nodes at fixed coordinates; unknown characters are left out.
struct Fixed(Vec<(&'static str, Point)>);

impl LayoutProvider for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn layout(&self, graph: &SpeechGraph) -> Layout {
        let mut layout = Layout::new();
        for (character, point) in &self.0 {
            if graph.get_node(character).is_some() {
                layout.insert(*character, *point);
            }
        }
        layout
    }
}

fn line_layout() -> Fixed {
    Fixed(vec![("A", Point::new(0.0, 0.0)), ("B", Point::new(1.0, 0.0))])
}

fn dialogue() -> Vec<AnnotationRecord> {
    let speech = |start: f64, speaker: &str, addressee: &str, text: &str| {
        AnnotationRecord::new(start, start + 1.0, "direct_speech")
            .with_speakers([speaker])
            .with_addressees([addressee])
            .with_text(text)
    };
    vec![
        speech(0.0, "A", "B", "hi"),
        speech(1.0, "B", "A", "hey"),
        speech(2.0, "A", "B", "again"),
        speech(3.0, "B", "A", "never counted"),
    ]
}

fn close(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

fn network() -> SpeechNetwork {
    init_tracing();
    SpeechNetwork::from_records(&dialogue(), &NetworkParams::default(), &line_layout()).unwrap()
}

#[test]
fn records_to_network() {
    let net = network();
    assert_eq!(net.edges().len(), 2);
    assert_eq!(net.edges()[0].weight, 2);
    assert_eq!(net.edges()[0].text, "hi\nagain");
    assert_eq!(net.graph().node_count(), 2);
    assert_eq!(net.layout().len(), 2);
    assert_eq!(net.stats().len(), 2);
}

#[test]
fn arrow_geometry_and_widths() {
    let scene = network().scene(&SceneOptions::default()).unwrap();
    assert_eq!(scene.title, None);

    let ab = &scene.edges[0];
    assert_eq!(ab.label, "A → B");
    assert!(close(ab.head, 0.97, 0.0));
    assert!(close(ab.tail, 0.03, 0.0));
    assert!(close(ab.hover_point, 0.5, 0.0));
    assert!((ab.width - (2.0 / 3.0 * 100.0 + 1.0)).abs() < 1e-9);
    assert_eq!(ab.hover_text, "A → B:\nhi\nagain");

    let ba = &scene.edges[1];
    assert!(close(ba.head, 0.03, 0.0));
    assert!(close(ba.tail, 0.97, 0.0));
    assert!((ba.width - (1.0 / 3.0 * 100.0 + 1.0)).abs() < 1e-9);
}

#[test]
fn node_sizes_follow_metric_share() {
    let net = network();

    // Zero betweenness everywhere: every node gets the minimal size.
    let scene = net.scene(&SceneOptions::default()).unwrap();
    assert!(scene.nodes.iter().all(|n| n.size == 3.0));

    let options = SceneOptions {
        node_size: Metric::WeightedIndegree,
        ..Default::default()
    };
    let scene = net.scene(&options).unwrap();
    let size = |c: &str| scene.nodes.iter().find(|n| n.character == c).unwrap().size;
    assert!((size("A") - (100.0 / 3.0 + 3.0)).abs() < 1e-9);
    assert!((size("B") - (200.0 / 3.0 + 3.0)).abs() < 1e-9);

    let a = scene.nodes.iter().find(|n| n.character == "A").unwrap();
    assert!(close(a.position, 0.0, 0.0));
    assert_eq!(a.label, "A");
    assert!(a.hover_text.starts_with("A\nDEGREE = 2\nINDEGREE = 1\n"));
}

#[test]
fn hover_evidence_is_capped() {
    let options = SceneOptions {
        hover_text_limit: 4,
        ..Default::default()
    };
    let scene = network().scene(&options).unwrap();
    assert_eq!(scene.edges[0].hover_text, "A → B:\nhi\na\n[...]");
}

#[test]
fn titled_scene() {
    let net = network().with_title("Michael Kohlhaas");
    let options = SceneOptions::default().with_title("Michael Kohlhaas");
    let scene = net.scene(&options).unwrap();
    assert_eq!(
        scene.title.as_deref(),
        Some("NETWORK GRAPH FOR Michael Kohlhaas")
    );
}

#[test]
fn scene_options_respect_show_title() {
    let net = network().with_title("Novella");
    let mut config = SpeechnetConfig::default();

    let options = net.scene_options(&config).unwrap();
    assert_eq!(options.title, None);
    assert_eq!(options.node_size, Metric::Betweenness);

    config.plot.show_title = Some(true);
    config.plot.node_size = Some("pagerank_weighted".into());
    let options = net.scene_options(&config).unwrap();
    assert_eq!(options.title.as_deref(), Some("Novella"));
    assert_eq!(options.node_size, Metric::PagerankWeighted);

    config.plot.node_size = Some("loudness".into());
    assert!(matches!(
        net.scene_options(&config),
        Err(PipelineError::Stats(_))
    ));
}

#[test]
fn layout_missing_a_character_is_an_error() {
    let partial = Fixed(vec![("A", Point::ORIGIN)]);
    let net =
        SpeechNetwork::from_records(&dialogue(), &NetworkParams::default(), &partial).unwrap();
    let err = net.scene(&SceneOptions::default()).unwrap_err();
    assert_eq!(
        err,
        SceneError::MissingPosition {
            character: "B".into()
        }
    );
    assert_eq!(err.error_code(), "MISSING_IDENTIFIER");
}

#[test]
fn json_writer_emits_one_document_per_scene() {
    let net = network();
    let mut writer = JsonSceneWriter::new(Vec::new());
    net.render(&mut writer, &SceneOptions::default()).unwrap();
    net.render(&mut writer, &SceneOptions::default()).unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    let docs: Vec<&str> = out.lines().collect();
    assert_eq!(docs.len(), 2);
    let scene: NetworkScene = serde_json::from_str(docs[0]).unwrap();
    assert_eq!(scene, net.scene(&SceneOptions::default()).unwrap());
}

#[test]
fn failing_adapter_surfaces_as_render_error() {
    struct Broken;
    impl RenderAdapter for Broken {
        type Error = String;
        fn render(&mut self, _scene: &NetworkScene) -> Result<(), Self::Error> {
            Err("display unavailable".into())
        }
    }

    let err = network()
        .render(&mut Broken, &SceneOptions::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Render(ref msg) if msg == "display unavailable"));
    assert_eq!(err.error_code(), "RENDER_ERROR");
}

#[test]
fn from_config_runs_whole_pipeline() {
    let mut config = SpeechnetConfig::default();
    config.layout.algorithm = Some("circular".into());
    let net = SpeechNetwork::from_config(&dialogue(), &config).unwrap();
    assert_eq!(net.edges().len(), 2);
    // Two nodes on the unit circle sit opposite each other.
    let a = net.layout().get("A").unwrap();
    let b = net.layout().get("B").unwrap();
    assert!((a.distance(&b) - 2.0).abs() < 1e-9);

    config.layout.algorithm = Some("spring".into());
    assert!(matches!(
        SpeechNetwork::from_config(&dialogue(), &config),
        Err(PipelineError::Layout(_))
    ));

    config.layout.algorithm = None;
    config.network.corpus = Some("dramas".into());
    let err = SpeechNetwork::from_config(&dialogue(), &config).unwrap_err();
    assert!(matches!(err, PipelineError::Aggregation(_)));
    assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
}

#[test]
fn dramas_build_narration_networks() {
    let records = vec![
        AnnotationRecord::new(0.0, 5.0, "secondary_narration")
            .with_speakers(["chorus"])
            .with_addressees(["king"]),
        AnnotationRecord::new(5.0, 9.0, "secondary_narration")
            .with_speakers(["king"])
            .with_addressees(["chorus"]),
    ];
    let params = NetworkParams::new(NetworkAnnotations::EmbeddedNarrations)
        .with_corpus(CorpusKind::Dramas);
    let net = SpeechNetwork::from_records(&records, &params, &KamadaKawai::default()).unwrap();
    assert_eq!(net.edges().len(), 1);
    assert_eq!(net.layout().len(), 2);
}

#[test]
fn bundled_layouts_cover_every_node() {
    let records: Vec<AnnotationRecord> = ["A", "B", "C", "D", "E"]
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            AnnotationRecord::new(i as f64, i as f64 + 1.0, "indirect_speech")
                .with_speakers([pair[0]])
                .with_addressees([pair[1]])
        })
        .collect();
    let params = NetworkParams::default();
    let providers: [&dyn LayoutProvider; 2] = [&KamadaKawai::default(), &Circular::default()];
    for provider in providers {
        let net = SpeechNetwork::from_records(&records, &params, provider).unwrap();
        for character in net.graph().characters() {
            let p = net.layout().position(character).unwrap();
            assert!(p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9);
        }
        assert!(net.scene(&SceneOptions::default()).is_ok());
    }
}

#[test]
fn top_stats_follow_config() {
    let records: Vec<AnnotationRecord> = ["A", "B", "C", "D", "E", "F", "G", "A"]
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            AnnotationRecord::new(i as f64, i as f64 + 1.0, "direct_speech")
                .with_speakers([pair[0]])
                .with_addressees([pair[1]])
        })
        .collect();
    let net =
        SpeechNetwork::from_records(&records, &NetworkParams::default(), &Circular::default())
            .unwrap();
    assert_eq!(net.stats().len(), 7);

    let mut config = SpeechnetConfig::default();
    assert_eq!(net.top_stats(&config).len(), 5);
    config.plot.top_stats = Some(2);
    let top = net.top_stats(&config);
    assert_eq!(top.len(), 2);
    assert_eq!(top, net.stats().top(2));
}
