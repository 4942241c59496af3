//! Decoding, key sorting, and encoding of JSON documents.
//!
//! ```text
//! {"b":1,"a":{"z":9,"y":8}}
//! ```
//!
//! becomes
//!
//! ```text
//! {
//!   "a": {
//!     "y": 8,
//!     "z": 9
//!   },
//!   "b": 1
//! }
//! ```

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::io::{self, Write};

/// A schema-less JSON tree.
pub type Document = Value;

/// Numbers keep their source text, so integers past 64 bits survive intact.
pub fn decode(bytes: &[u8]) -> serde_json::Result<Document> {
    serde_json::from_slice(bytes)
}

/// Rebuild every object in the tree with its keys in code point order.
///
/// Arrays keep their order and scalars are untouched. Objects inside arrays
/// are sorted too.
pub fn sort_keys(doc: Document) -> Document {
    match doc {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}

/// Serialize with two-space indentation and everything outside printable
/// ASCII written as `\uXXXX`. No trailing newline.
pub fn encode(doc: &Document) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, AsciiFormatter::new());
    doc.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Pretty printing from serde_json, with non-ASCII text escaped.
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl<'a> AsciiFormatter<'a> {
    fn new() -> Self {
        Self(PrettyFormatter::with_indent(b"  "))
    }
}

impl<'a> Formatter for AsciiFormatter<'a> {
    fn begin_array<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array(w)
    }

    fn end_array<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array(w)
    }

    fn begin_array_value<W>(&mut self, w: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array_value(w, first)
    }

    fn end_array_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array_value(w)
    }

    fn begin_object<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object(w)
    }

    fn end_object<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object(w)
    }

    fn begin_object_key<W>(&mut self, w: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_key(w, first)
    }

    fn begin_object_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_value(w)
    }

    fn end_object_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object_value(w)
    }

    // Quotes, backslashes and control characters never reach this; serde_json
    // escapes those itself.
    fn write_string_fragment<W>(&mut self, w: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (c as u32) < 0x7f {
                continue;
            }
            w.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(w, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        w.write_all(fragment[start..].as_bytes())
    }
}
