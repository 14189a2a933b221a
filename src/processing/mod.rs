/*! Record processing

Deduplication of extracted records and their rendering as tables.
!*/
pub mod dedup;
pub mod tables;

pub use dedup::{dedup, Merge};
pub use tables::Table;
