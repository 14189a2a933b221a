use std::path::Path;

use crate::{error::Error, processing::Table};

/// Write `table` as a CSV file at `path`.
///
/// Cells holding a delimiter, a quote or a line break are quoted.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(path)?;
    out.write_record(table.header())?;
    for row in table.rows() {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}
