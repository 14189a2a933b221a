pub mod annotation;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod report;
pub mod schema;
