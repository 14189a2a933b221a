//! Pipeline trait.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::list_files;
use crate::report::{Event, Reporter};

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
///
/// Progress is told to the provided [Reporter].
pub trait Pipeline<T> {
    fn run(&self, reporter: &mut dyn Reporter) -> Result<T, Error>;
}

/// Run `convert` on each `*.{extension}` file of `src`, one after the other, in path order.
///
/// `dst` is created if needed.
/// Stops at the first failing file, returning its error. Returns the written files otherwise.
pub(crate) fn convert_files<F>(
    src: &Path,
    dst: &Path,
    extension: &str,
    reporter: &mut dyn Reporter,
    mut convert: F,
) -> Result<Vec<PathBuf>, Error>
where
    F: FnMut(&Path, &mut dyn Reporter) -> Result<Vec<PathBuf>, Error>,
{
    let files = list_files(src, extension)?;
    std::fs::create_dir_all(dst)?;

    let mut written = Vec::new();
    for file in files {
        reporter.report(Event::FileStarted(file.clone()));
        match convert(&file, reporter) {
            Ok(paths) => written.extend(paths),
            Err(e) => {
                reporter.report(Event::FileFailed {
                    file,
                    reason: format!("{:?}", e),
                });
                return Err(e);
            }
        }
    }

    Ok(written)
}
