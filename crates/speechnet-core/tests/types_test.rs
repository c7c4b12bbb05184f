//! Tests for annotation records and error codes.

use speechnet_core::errors::{
    AggregationError, PipelineError, SceneError, SpeechnetErrorCode,
};
use speechnet_core::types::AnnotationRecord;

#[test]
fn record_deserializes_from_loader_field_names() {
    let json = r#"{
        "start_point": 12.0,
        "end_point": 40.5,
        "tag": "direct_speech",
        "prop:speaker": ["kohlhaas"],
        "prop:addressee": ["junker", "tronka"],
        "annotation": "Wo ist mein Pferd?",
        "document": "1810-kohlhaas"
    }"#;
    let record: AnnotationRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.start_point, 12.0);
    assert_eq!(record.tag, "direct_speech");
    assert_eq!(record.speakers.as_slice(), ["kohlhaas".to_string()]);
    assert_eq!(record.addressees.len(), 2);
    assert_eq!(record.text, "Wo ist mein Pferd?");
}

#[test]
fn record_lists_default_to_empty() {
    let json = r#"{"start_point": 0, "end_point": 1, "tag": "secondary_narration"}"#;
    let record: AnnotationRecord = serde_json::from_str(json).unwrap();
    assert!(record.speakers.is_empty());
    assert!(record.addressees.is_empty());
    assert_eq!(record.speaker_addressee_pairs().count(), 0);
}

#[test]
fn pairs_are_the_cross_product() {
    let record = AnnotationRecord::new(0.0, 1.0, "direct_speech")
        .with_speakers(["a", "b"])
        .with_addressees(["c", "d"]);
    let pairs: Vec<_> = record.speaker_addressee_pairs().collect();
    assert_eq!(pairs, vec![("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")]);
}

#[test]
fn aggregation_errors_are_invalid_configuration() {
    let err = AggregationError::UnknownCorpus("poems".into());
    assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    assert!(err.coded_string().starts_with("[INVALID_CONFIGURATION]"));
}

#[test]
fn pipeline_error_keeps_subsystem_code() {
    let err: PipelineError = SceneError::MissingPosition {
        character: "ghost".into(),
    }
    .into();
    assert_eq!(err.error_code(), "MISSING_IDENTIFIER");
}
