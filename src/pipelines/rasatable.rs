//! Schema A documents to CSV tables.
//!
//! For each `*.json` file, writes:
//! - `<stem>-entity.csv`, a column per entity type listing its distinct values,
//! - `<stem>-relation.csv`, a row per (subject, object) couple of each relation.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::{output_path, read_json, write_csv};
use crate::pipelines::pipeline::{convert_files, Pipeline};
use crate::processing::tables::{entity_pivot, relation_table};
use crate::report::{Event, Reporter};
use crate::schema::{RasaDocument, RasaOptions};

pub struct AnnotationToTable {
    src: PathBuf,
    dst: PathBuf,
    options: RasaOptions,
    legacy_pivot: bool,
}

impl AnnotationToTable {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            options: RasaOptions::default(),
            legacy_pivot: false,
        }
    }

    pub fn with_options(mut self, options: RasaOptions) -> Self {
        self.options = options;
        self
    }

    /// Reproduce the historical entity table, which misses its last row.
    pub fn with_legacy_pivot(mut self, legacy_pivot: bool) -> Self {
        self.legacy_pivot = legacy_pivot;
        self
    }

    /// Convert a single annotation file.
    pub fn convert(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        let document: RasaDocument = read_json(path)?;
        let sentences = document.sentences(&self.options)?;

        let entity_path = output_path(&self.dst, path, "-entity.csv")?;
        let entities = entity_pivot(&sentences, self.legacy_pivot);
        write_csv(&entities, &entity_path)?;
        reporter.report(Event::FileWritten {
            path: entity_path.clone(),
            records: entities.rows().len(),
        });

        let relation_path = output_path(&self.dst, path, "-relation.csv")?;
        let relations = relation_table(&sentences);
        write_csv(&relations, &relation_path)?;
        reporter.report(Event::FileWritten {
            path: relation_path.clone(),
            records: relations.rows().len(),
        });

        Ok(vec![entity_path, relation_path])
    }
}

impl Pipeline<Vec<PathBuf>> for AnnotationToTable {
    fn run(&self, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        convert_files(&self.src, &self.dst, "json", reporter, |path, reporter| {
            self.convert(path, reporter)
        })
    }
}
