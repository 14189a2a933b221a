//! # annoconv
//!
//! Conversion tools for the entity/relation annotation workflow:
//! text files are turned into pre-annotation documents, and annotated documents or JSON-Lines exports
//! into CSV tables or training documents.
//!
//! ## Getting started
//!
//! ```sh
//! annoconv 0.1.0
//! annotation export conversion tool.
//!
//! USAGE:
//!     annoconv <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help             Prints this message or the help of the given subcommand(s)
//!     json-to-csv      Convert annotation documents to entity/relation CSV tables
//!     json-to-train    Convert annotation documents to training documents
//!     jsonl-to-csv     Convert JSON-Lines exports to deduplicated entity/relation CSV tables
//!     txt-to-json      Build pre-annotation documents from text files
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=info`).
use annoconv::error::Error;
use annoconv::pipelines::{
    AnnotationToTable, AnnotationToTrainingJson, JsonlToTable, Pipeline, TextToSkeleton,
};
use annoconv::report::LogReporter;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Annoconv::from_args();
    debug!("cli args\n{:#?}", opt);

    let mut reporter = LogReporter;
    let written = match opt {
        cli::Annoconv::TxtToJson(c) => TextToSkeleton::new(c.src, c.dst).run(&mut reporter)?,
        cli::Annoconv::JsonToCsv(c) => {
            let options = (&c).into();
            AnnotationToTable::new(c.src, c.dst)
                .with_options(options)
                .with_legacy_pivot(c.legacy_pivot)
                .run(&mut reporter)?
        }
        cli::Annoconv::JsonToTrain(c) => {
            let options = (&c).into();
            AnnotationToTrainingJson::new(c.src, c.dst)
                .with_options(options)
                .run(&mut reporter)?
        }
        cli::Annoconv::JsonlToCsv(c) => {
            let options = (&c).into();
            JsonlToTable::new(c.src, c.dst)
                .with_options(options)
                .run(&mut reporter)?
        }
    };

    info!("done, {} files written", written.len());
    Ok(())
}
