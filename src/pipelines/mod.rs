//! Pipelines.
//!
//! Each conversion job is implemented here as a [pipeline::Pipeline]
//! running over the files of a source folder.
pub mod doccanotable;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod rasatable;
pub mod rasatrain;
pub mod skeleton;

pub use doccanotable::JsonlToTable;
pub use pipeline::Pipeline;
pub use rasatable::AnnotationToTable;
pub use rasatrain::AnnotationToTrainingJson;
pub use skeleton::TextToSkeleton;
