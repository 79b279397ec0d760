//! Canonical request bodies.
//!
//! Mutation bodies are the whole test-case record, written with `", "` and
//! `": "` separators and ASCII-only output (non-ASCII characters and DEL
//! become `\uXXXX` escapes). Numbers are written exactly as they were read. Keys keep the record's insertion order, so the same
//! record always produces the same bytes.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|byte| byte.is_ascii() && byte != 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize a record into the exact bytes sent as a mutation body.
pub fn canonical_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    // The formatter only ever emits ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
