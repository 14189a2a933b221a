/*! Input reading utilities

- [list_files] enumerates the input files of a folder,
- [read_lines] reads plain text files,
- [read_json]/[read_jsonl] read JSON documents and JSON-Lines files.
!*/
mod files;
mod jsonreader;
mod textreader;

pub use files::list_files;
pub use jsonreader::{read_json, read_jsonl};
pub use textreader::read_lines;
