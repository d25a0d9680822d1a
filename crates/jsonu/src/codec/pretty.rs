//! Pretty formatter: two-space object indentation, ` : ` key separators,
//! platform line separators, and single-line arrays (`[ a, b ]`). Empty
//! composites render as `{ }` and `[ ]`.

use std::io::{self, Write};

use serde_json::ser::Formatter;

use super::LINE_SEPARATOR;

pub(crate) struct PrettyFormatter {
    // Indentation depth counts enclosing objects only; arrays stay inline.
    depth: usize,
    entries: Vec<bool>,
}

impl PrettyFormatter {
    pub(crate) fn new() -> Self {
        Self {
            depth: 0,
            entries: Vec::new(),
        }
    }

    fn newline<W: ?Sized + Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        out.write_all(LINE_SEPARATOR.as_bytes())?;
        for _ in 0..depth {
            out.write_all(b"  ")?;
        }
        Ok(())
    }
}

impl Formatter for PrettyFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" ]")
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        writer.write_all(if first { b" " as &[u8] } else { b", " })
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.entries.push(false);
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        let had_entries = self.entries.pop().unwrap_or(false);
        self.depth = self.depth.saturating_sub(1);
        if had_entries {
            self.newline(writer, self.depth)?;
        } else {
            writer.write_all(b" ")?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if let Some(top) = self.entries.last_mut() {
            *top = true;
        }
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer, self.depth)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }
}
