use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;

use crate::error::Error;

/// List the `*.{extension}` files of `src` (not recursive), sorted by path.
///
/// Errors if `src` is not a folder.
pub fn list_files(src: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    if !src.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source must be a folder! (is {:?})", src),
        )));
    }

    let src_str = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", src)))?;
    let pattern = format!("{}/*.{}", Pattern::escape(src_str), extension);
    debug!("listing files matching {}", pattern);

    let mut files = glob::glob(&pattern)?
        .map(|entry| entry.map_err(Error::from))
        .collect::<Result<Vec<PathBuf>, Error>>()?;
    files.retain(|f| f.is_file());
    files.sort();

    Ok(files)
}
