use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Read the non-empty lines of a UTF-8 text file, in order.
///
/// Lines made of whitespace only are kept.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let f = File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn skip_empty_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut f = File::create(&path).unwrap();
        write!(f, "first\n\nsecond\r\n \n\nthird").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second", " ", "third"]);
    }
}
