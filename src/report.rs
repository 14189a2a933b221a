//! Progress reporting.
//!
//! Pipelines do not log by themselves: they emit [Event]s to a [Reporter] provided by the caller.
//! [LogReporter] forwards events to the [log] facade, and a `Vec<Event>` collects them.
use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::annotation::Endpoint;

/// Something worth telling that happened while processing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FileStarted(PathBuf),
    FileWritten {
        path: PathBuf,
        records: usize,
    },
    /// A record had no entity and was ignored.
    RecordSkipped {
        file: PathBuf,
        record_id: String,
    },
    /// A relation endpoint could not be resolved, the relation won't be written.
    DanglingRelation {
        file: PathBuf,
        record_id: String,
        relation_type: String,
        missing: Endpoint,
    },
    Deduplicated {
        file: PathBuf,
        kind: &'static str,
        before: usize,
        after: usize,
    },
    FileFailed {
        file: PathBuf,
        reason: String,
    },
}

pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Forwards events to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: Event) {
        match event {
            Event::FileStarted(path) => info!("processing {:?}", path),
            Event::FileWritten { path, records } => {
                info!("wrote {:?} ({} records)", path, records)
            }
            Event::RecordSkipped { file, record_id } => {
                debug!("[{:?}] record {} has no entity, skipping", file, record_id)
            }
            Event::DanglingRelation {
                file,
                record_id,
                relation_type,
                missing,
            } => warn!(
                "[{:?}] record {}: relation {} has no {:?} endpoint, dropping",
                file, record_id, relation_type, missing
            ),
            Event::Deduplicated {
                file,
                kind,
                before,
                after,
            } => debug!("[{:?}] {} deduplicated: {} -> {}", file, kind, before, after),
            Event::FileFailed { file, reason } => error!("[{:?}] failed: {}", file, reason),
        }
    }
}

impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_events() {
        let mut events: Vec<Event> = Vec::new();
        events.report(Event::FileStarted(PathBuf::from("a.json")));
        assert_eq!(events, vec![Event::FileStarted(PathBuf::from("a.json"))]);
    }

    #[test_log::test]
    fn log_events() {
        let mut reporter = LogReporter;
        reporter.report(Event::FileStarted(PathBuf::from("a.json")));
        reporter.report(Event::DanglingRelation {
            file: PathBuf::from("a.jsonl"),
            record_id: "3".to_string(),
            relation_type: "treats".to_string(),
            missing: Endpoint::Both,
        });
    }
}
