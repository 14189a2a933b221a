//! Schema A documents to training documents.
//!
//! Each `*.json` file is written under the same name in `dst`.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::{read_json, write_json};
use crate::pipelines::pipeline::{convert_files, Pipeline};
use crate::report::{Event, Reporter};
use crate::schema::{RasaDocument, RasaOptions, TrainingDocument};

pub struct AnnotationToTrainingJson {
    src: PathBuf,
    dst: PathBuf,
    options: RasaOptions,
}

impl AnnotationToTrainingJson {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            options: RasaOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RasaOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert a single annotation file.
    pub fn convert(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        let document: RasaDocument = read_json(path)?;
        let sentences = document.sentences(&self.options)?;
        let training = TrainingDocument::from_sentences(&sentences);

        let filename = path
            .file_name()
            .ok_or_else(|| Error::Custom(format!("invalid source file: {:?}", path)))?;
        let dst = self.dst.join(filename);
        write_json(&training, &dst)?;
        reporter.report(Event::FileWritten {
            path: dst.clone(),
            records: training.sentence_list.len(),
        });

        Ok(vec![dst])
    }
}

impl Pipeline<Vec<PathBuf>> for AnnotationToTrainingJson {
    fn run(&self, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        convert_files(&self.src, &self.dst, "json", reporter, |path, reporter| {
            self.convert(path, reporter)
        })
    }
}
