/*!
# IO utilities

Input file listing and reading, and output writing (pretty JSON and CSV tables).
!*/
pub mod reader;
pub mod writer;

pub use reader::{list_files, read_json, read_jsonl, read_lines};
pub use writer::{output_path, write_csv, write_json};
