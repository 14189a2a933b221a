use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::error::Error;

/// [PrettyFormatter] with a 4-space indent and no space between keys and values.
///
/// Non-ASCII characters are written as is.
pub struct TightPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> Default for TightPrettyFormatter<'a> {
    fn default() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl<'a> Formatter for TightPrettyFormatter<'a> {
    #[inline]
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    #[inline]
    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    #[inline]
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    #[inline]
    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    #[inline]
    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    #[inline]
    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    #[inline]
    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    #[inline]
    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b":")
    }

    #[inline]
    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serialize `value` to a writer.
pub fn to_writer<W: Write, T: Serialize>(writer: W, value: &T) -> Result<(), Error> {
    let mut ser = serde_json::Serializer::with_formatter(writer, TightPrettyFormatter::default());
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write `value` to a (created or truncated) file at `path`.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), Error> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    to_writer(&mut w, value)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_string<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        to_writer(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn layout() {
        let v = json!({"text": "头痛", "entities": [], "nested": {"a": [1, 2]}});
        let expected = r#"{
    "entities":[],
    "nested":{
        "a":[
            1,
            2
        ]
    },
    "text":"头痛"
}"#;
        assert_eq!(to_string(&v), expected);
    }

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&json!({"a": "é"}), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n    \"a\":\"é\"\n}");
    }
}
