/*!
# Output writing

- [write_json] writes pretty JSON with the layout expected by annotation tools (4-space indent, `"key":value`),
- [write_csv] writes a [crate::processing::Table] as CSV.

Output files are named after their input file, see [output_path].
!*/
mod csvwriter;
mod jsonwriter;

use std::path::{Path, PathBuf};

use crate::error::Error;

pub use csvwriter::write_csv;
pub use jsonwriter::{write_json, TightPrettyFormatter};

/// Forge `dst/<stem of src><suffix>`.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use annoconv::io::output_path;
///
/// let p = output_path(Path::new("out"), Path::new("in/doc.v2.jsonl"), "-entity.csv").unwrap();
/// assert_eq!(p, PathBuf::from("out/doc.v2-entity.csv"));
/// ```
pub fn output_path(dst: &Path, src: &Path, suffix: &str) -> Result<PathBuf, Error> {
    let stem = src
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Custom(format!("invalid source file: {:?}", src)))?;
    Ok(dst.join(format!("{}{}", stem, suffix)))
}
