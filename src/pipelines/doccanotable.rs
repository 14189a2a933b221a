//! Schema B JSON-Lines exports to deduplicated CSV tables.
//!
//! For each `*.jsonl` file:
//! 1. entities and relations are extracted from every record holding entities,
//! 1. relations with an unresolved endpoint are reported (they are never written),
//! 1. entities and relations are deduplicated, merging provenance and descriptions,
//! 1. `<stem>-entity.csv` and `<stem>-relation.csv` are written.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::{output_path, read_jsonl, write_csv};
use crate::pipelines::pipeline::{convert_files, Pipeline};
use crate::processing::dedup;
use crate::processing::tables::{entity_table, linked_relation_table};
use crate::report::{Event, Reporter};
use crate::schema::doccano::{self, DoccanoOptions, DoccanoRecord};

pub struct JsonlToTable {
    src: PathBuf,
    dst: PathBuf,
    options: DoccanoOptions,
}

impl JsonlToTable {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            options: DoccanoOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DoccanoOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert a single JSON-Lines file.
    pub fn convert(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        let records: Vec<DoccanoRecord> = read_jsonl(path)?;
        let extraction = doccano::extract(&records, &self.options);

        for record_id in extraction.skipped {
            reporter.report(Event::RecordSkipped {
                file: path.to_path_buf(),
                record_id,
            });
        }

        for relation in &extraction.relations {
            if let Some(missing) = relation.missing() {
                reporter.report(Event::DanglingRelation {
                    file: path.to_path_buf(),
                    record_id: relation.sentence_ids().join("-"),
                    relation_type: relation.name().to_string(),
                    missing,
                });
            }
        }

        let nb_entities = extraction.entities.len();
        let entities = dedup(extraction.entities);
        reporter.report(Event::Deduplicated {
            file: path.to_path_buf(),
            kind: "entities",
            before: nb_entities,
            after: entities.len(),
        });

        let nb_relations = extraction.relations.len();
        let relations = dedup(extraction.relations);
        reporter.report(Event::Deduplicated {
            file: path.to_path_buf(),
            kind: "relations",
            before: nb_relations,
            after: relations.len(),
        });

        let entity_path = output_path(&self.dst, path, "-entity.csv")?;
        let entity_rows = entity_table(&entities);
        write_csv(&entity_rows, &entity_path)?;
        reporter.report(Event::FileWritten {
            path: entity_path.clone(),
            records: entity_rows.rows().len(),
        });

        let relation_path = output_path(&self.dst, path, "-relation.csv")?;
        let relation_rows = linked_relation_table(&relations);
        write_csv(&relation_rows, &relation_path)?;
        reporter.report(Event::FileWritten {
            path: relation_path.clone(),
            records: relation_rows.rows().len(),
        });

        Ok(vec![entity_path, relation_path])
    }
}

impl Pipeline<Vec<PathBuf>> for JsonlToTable {
    fn run(&self, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        convert_files(&self.src, &self.dst, "jsonl", reporter, |path, reporter| {
            self.convert(path, reporter)
        })
    }
}
