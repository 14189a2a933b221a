use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::error::Error;

const BOM: char = '\u{feff}';

/// Read a JSON document, ignoring a leading byte order mark.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let content = fs::read_to_string(path)?;
    let content = content.strip_prefix(BOM).unwrap_or(content.as_str());
    Ok(serde_json::from_str(content)?)
}

/// Read a JSON-Lines file, one document per line.
///
/// Blank lines are ignored.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Error::from))
        .collect()
}
