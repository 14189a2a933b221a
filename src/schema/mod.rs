//! Annotation export schemas.
//!
//! - [rasa] is the nested `rasa_nlu_data` document (schema A), where relations are encoded in the `intent` string.
//! - [doccano] is the JSON-Lines export (schema B), with offset spans and relation edges between entity ids.
//! - [training] is the normalized document built from schema A sentences.
pub mod doccano;
pub mod rasa;
pub mod training;

pub use doccano::{DoccanoOptions, DoccanoRecord};
pub use rasa::{RasaDocument, RasaOptions};
pub use training::TrainingDocument;
