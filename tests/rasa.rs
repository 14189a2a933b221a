use std::fs;
use std::path::Path;

use annoconv::error::Error;
use annoconv::io::read_json;
use annoconv::pipelines::{AnnotationToTable, AnnotationToTrainingJson, Pipeline};
use annoconv::report::Event;
use annoconv::schema::rasa::AnnotationErrorKind;
use annoconv::schema::{RasaDocument, RasaOptions, TrainingDocument};

const DOCUMENT: &str = r#"{"rasa_nlu_data": {"common_examples": [
    {"text": "阿司匹林和布洛芬缓解头痛", "intent": "(1,2)->(3)->治疗", "entities": [
        {"start": 0, "end": 4, "value": "E-1", "entity": "药物"},
        {"start": 5, "end": 8, "value": "E-2", "entity": "药物"},
        {"start": 8, "end": 10, "value": "特性", "entity": "特性"},
        {"start": 10, "end": 12, "value": "E-3", "entity": "症状"}
    ]},
    {"text": "布洛芬, 退烧", "intent": "", "entities": [
        {"start": 0, "end": 3, "value": "E-1", "entity": "药物"},
        {"start": 5, "end": 7, "value": "E-2", "entity": "症状"}
    ]},
    {"text": "没有标注", "intent": "", "entities": []}
]}}"#;

fn write_document(dir: &Path, name: &str, content: &str) {
    // some annotation tools write a byte order mark
    fs::write(dir.join(name), format!("\u{feff}{}", content)).unwrap();
}

#[test]
fn tables() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_document(src.path(), "drugs.json", DOCUMENT);

    let p = AnnotationToTable::new(src.path().to_path_buf(), dst.path().to_path_buf());
    let written = p.run(&mut Vec::<Event>::new()).unwrap();
    assert_eq!(
        written,
        vec![
            dst.path().join("drugs-entity.csv"),
            dst.path().join("drugs-relation.csv")
        ]
    );

    let entities = fs::read_to_string(dst.path().join("drugs-entity.csv")).unwrap();
    assert_eq!(entities, "药物,症状\n阿司匹林,头痛\n布洛芬,退烧\n");

    let relations = fs::read_to_string(dst.path().join("drugs-relation.csv")).unwrap();
    assert_eq!(
        relations,
        "关系名称,主体类型,主体名称,客体类型,客体名称\n\
         治疗,药物,阿司匹林,症状,头痛\n\
         治疗,药物,布洛芬,症状,头痛\n"
    );
}

#[test]
fn legacy_pivot_drops_last_row() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_document(src.path(), "drugs.json", DOCUMENT);

    let p = AnnotationToTable::new(src.path().to_path_buf(), dst.path().to_path_buf())
        .with_legacy_pivot(true);
    p.run(&mut Vec::<Event>::new()).unwrap();

    let entities = fs::read_to_string(dst.path().join("drugs-entity.csv")).unwrap();
    assert_eq!(entities, "药物,症状\n阿司匹林,头痛\n");
}

#[test]
fn training_round_trip() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_document(src.path(), "drugs.json", DOCUMENT);

    let p = AnnotationToTrainingJson::new(src.path().to_path_buf(), dst.path().to_path_buf());
    let written = p.run(&mut Vec::<Event>::new()).unwrap();
    assert_eq!(written, vec![dst.path().join("drugs.json")]);

    let original: RasaDocument = read_json(&src.path().join("drugs.json")).unwrap();
    let original = original.sentences(&RasaOptions::default()).unwrap();

    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.contains("\"feature\":\"缓解\""));
    assert!(content.contains("\"relation_name\":\"治疗\""));

    let training: TrainingDocument = serde_json::from_str(&content).unwrap();
    let sentences = training.into_sentences();

    assert_eq!(sentences.len(), original.len());
    for (parsed, expected) in sentences.iter().zip(original.iter()) {
        assert_eq!(parsed.text, expected.text);
        assert_eq!(parsed.feature, expected.feature);
        assert_eq!(parsed.entities.len(), expected.entities.len());
        assert_eq!(parsed.relations.len(), expected.relations.len());
    }
    assert_eq!(sentences, original);
}

#[test]
fn malformed_intent_aborts() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_document(
        src.path(),
        "bad.json",
        r#"{"rasa_nlu_data": {"common_examples": [
            {"text": "ab", "intent": "(1)->(9)->r", "entities": [{"start": 0, "end": 1, "value": "E-1", "entity": "T"}]}
        ]}}"#,
    );

    let p = AnnotationToTable::new(src.path().to_path_buf(), dst.path().to_path_buf());
    let mut events: Vec<Event> = Vec::new();
    match p.run(&mut events) {
        Err(Error::Annotation(e)) => {
            assert_eq!(e.kind(), &AnnotationErrorKind::UnknownEntity("9".to_string()));
            assert_eq!(e.example(), 0);
        }
        other => panic!("expected an annotation error, got {:?}", other),
    }
    assert!(matches!(events.last(), Some(Event::FileFailed { .. })));
    assert!(!dst.path().join("bad-entity.csv").exists());
}
