//! Text to pre-annotation skeleton.
//!
//! Each non-empty line of a `*.txt` file becomes an unannotated example of a schema A document,
//! written in `<dst>/<stem>.json`.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::{output_path, read_lines, write_json};
use crate::pipelines::pipeline::{convert_files, Pipeline};
use crate::report::{Event, Reporter};
use crate::schema::RasaDocument;

pub struct TextToSkeleton {
    src: PathBuf,
    dst: PathBuf,
}

impl TextToSkeleton {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// Convert a single text file.
    pub fn convert(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        let lines = read_lines(path)?;
        let nb_lines = lines.len();
        let document = RasaDocument::skeleton(lines);

        let dst = output_path(&self.dst, path, ".json")?;
        write_json(&document, &dst)?;
        reporter.report(Event::FileWritten {
            path: dst.clone(),
            records: nb_lines,
        });

        Ok(vec![dst])
    }
}

impl Pipeline<Vec<PathBuf>> for TextToSkeleton {
    fn run(&self, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>, Error> {
        convert_files(&self.src, &self.dst, "txt", reporter, |path, reporter| {
            self.convert(path, reporter)
        })
    }
}
