use std::fs;
use std::path::PathBuf;

use annoconv::annotation::Endpoint;
use annoconv::pipelines::{JsonlToTable, Pipeline};
use annoconv::report::{Event, LogReporter};
use annoconv::schema::DoccanoOptions;

const EXPORT: &str = r#"{"id": 1, "text": "阿司 匹林缓解头痛。常用药", "entities": [{"id": 10, "start_offset": 0, "end_offset": 5, "label": "药物"}, {"id": 11, "start_offset": 7, "end_offset": 9, "label": "症状"}, {"id": 12, "start_offset": 10, "end_offset": 13, "label": "实体描述"}, {"id": 13, "start_offset": 5, "end_offset": 7, "label": "关系描述"}], "relations": [{"id": 1, "from_id": 11, "to_id": 10, "type": "治疗"}]}
{"id": 2, "text": "阿司匹林治疗头痛", "entities": [{"id": 20, "start_offset": 0, "end_offset": 4, "label": "药物"}, {"id": 21, "start_offset": 6, "end_offset": 8, "label": "症状"}, {"id": 22, "start_offset": 4, "end_offset": 6, "label": "关系描述"}], "relations": [{"id": 2, "from_id": 21, "to_id": 20, "type": "治疗"}, {"id": 3, "from_id": 21, "to_id": 99, "type": "治疗"}]}
{"id": 3, "text": "没有实体", "entities": [], "relations": []}
{"id": 4, "text": "a,b 引起 发热", "entities": [{"id": 40, "start_offset": 0, "end_offset": 3, "label": "病因"}, {"id": 41, "start_offset": 7, "end_offset": 9, "label": "症状"}], "relations": [{"id": 4, "from_id": 41, "to_id": 40, "type": "引起"}]}
"#;

fn run(options: DoccanoOptions) -> (tempfile::TempDir, Vec<PathBuf>, Vec<Event>) {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::write(src.path().join("export.jsonl"), EXPORT).unwrap();
    // not a JSON-Lines file, ignored
    fs::write(src.path().join("export.json"), "{}").unwrap();

    let p = JsonlToTable::new(src.path().to_path_buf(), dst.path().to_path_buf())
        .with_options(options);
    let mut events: Vec<Event> = Vec::new();
    let written = p.run(&mut events).unwrap();
    (dst, written, events)
}

#[test]
fn entity_table() {
    let (dst, written, _) = run(DoccanoOptions::default());
    assert_eq!(
        written,
        vec![
            dst.path().join("export-entity.csv"),
            dst.path().join("export-relation.csv")
        ]
    );

    let entities = fs::read_to_string(dst.path().join("export-entity.csv")).unwrap();
    assert_eq!(
        entities,
        "sentence_id,entity_type,value,description0\n\
         1-2,药物,阿司匹林,常用药\n\
         1-2,症状,头痛,常用药\n\
         4,症状,发热,\n\
         4,病因,\"a,b\",\n"
    );
}

#[test]
fn relation_table() {
    let (dst, _, _) = run(DoccanoOptions::default());

    let relations = fs::read_to_string(dst.path().join("export-relation.csv")).unwrap();
    assert_eq!(
        relations,
        "sentence_id,object_type,object,relation_type,subject_type,subject,description0,description1\n\
         1-2,症状,头痛,治疗,药物,阿司匹林,缓解,治疗\n\
         4,症状,发热,引起,病因,\"a,b\",,\n"
    );
}

#[test]
fn without_descriptions() {
    let options = DoccanoOptions {
        with_descriptions: false,
        ..Default::default()
    };
    let (dst, _, _) = run(options);

    let entities = fs::read_to_string(dst.path().join("export-entity.csv")).unwrap();
    assert!(entities.starts_with("sentence_id,entity_type,value\n"));
    assert!(!entities.contains("常用药"));

    let relations = fs::read_to_string(dst.path().join("export-relation.csv")).unwrap();
    assert!(relations.starts_with("sentence_id,object_type,object,relation_type,subject_type,subject\n"));
    assert_eq!(relations.lines().count(), 3);
}

#[test]
fn events() {
    let (_, _, events) = run(DoccanoOptions::default());

    let skipped: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            Event::RecordSkipped { record_id, .. } => Some(record_id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(skipped, vec!["3"]);

    let dangling: Vec<(&str, Endpoint)> = events
        .iter()
        .filter_map(|e| match e {
            Event::DanglingRelation {
                record_id, missing, ..
            } => Some((record_id.as_str(), *missing)),
            _ => None,
        })
        .collect();
    assert_eq!(dangling, vec![("2", Endpoint::Subject)]);

    let dedups: Vec<(&str, usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            Event::Deduplicated {
                kind,
                before,
                after,
                ..
            } => Some((*kind, *before, *after)),
            _ => None,
        })
        .collect();
    assert_eq!(dedups, vec![("entities", 6, 4), ("relations", 4, 3)]);
}

#[test_log::test]
fn log_reporter() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::write(src.path().join("export.jsonl"), EXPORT).unwrap();

    let p = JsonlToTable::new(src.path().to_path_buf(), dst.path().to_path_buf());
    let written = p.run(&mut LogReporter).unwrap();
    assert_eq!(written.len(), 2);
}

#[test]
fn files_are_independent() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::write(
        src.path().join("a.jsonl"),
        r#"{"id": 1, "text": "阿司匹林", "entities": [{"id": 10, "start_offset": 0, "end_offset": 4, "label": "药物"}]}
"#,
    )
    .unwrap();
    fs::write(
        src.path().join("b.jsonl"),
        r#"{"id": 7, "text": "阿司匹林", "entities": [{"id": 70, "start_offset": 0, "end_offset": 4, "label": "药物"}]}
{"id": 8, "text": "阿司匹林", "entities": [{"id": 80, "start_offset": 0, "end_offset": 4, "label": "药物"}]}
"#,
    )
    .unwrap();

    let p = JsonlToTable::new(src.path().to_path_buf(), dst.path().to_path_buf());
    let mut events: Vec<Event> = Vec::new();
    let written = p.run(&mut events).unwrap();
    assert_eq!(written.len(), 4);

    let a = fs::read_to_string(dst.path().join("a-entity.csv")).unwrap();
    assert_eq!(a, "sentence_id,entity_type,value\n1,药物,阿司匹林\n");
    let b = fs::read_to_string(dst.path().join("b-entity.csv")).unwrap();
    assert_eq!(b, "sentence_id,entity_type,value\n7-8,药物,阿司匹林\n");

    let dedups: Vec<(&str, usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            Event::Deduplicated {
                kind,
                before,
                after,
                ..
            } => Some((*kind, *before, *after)),
            _ => None,
        })
        .collect();
    assert_eq!(
        dedups,
        vec![
            ("entities", 1, 1),
            ("relations", 0, 0),
            ("entities", 2, 1),
            ("relations", 0, 0)
        ]
    );
}
