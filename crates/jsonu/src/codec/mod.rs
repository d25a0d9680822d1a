//! Shared encode configuration.
//!
//! A [`Codec`] is an immutable value selecting compact or pretty output.
//! Reads never depend on the codec; only the write path consults it.

mod pretty;

use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;

use crate::errors::{JsonError, Result};
use pretty::PrettyFormatter;

/// Line separator used between object entries in pretty output.
pub(crate) const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Output style selected by a codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Minimal output with no whitespace.
    Compact,
    /// Two-space indented, human-readable output.
    Pretty,
}

/// Immutable encode configuration, freely shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct Codec {
    style: Style,
}

impl Codec {
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Encode a value to a JSON string in this codec's style.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        match self.style {
            Style::Compact => serde_json::to_string(value).map_err(JsonError::write),
            Style::Pretty => {
                let mut buf = Vec::with_capacity(128);
                self.encode_pretty(value, &mut buf)?;
                String::from_utf8(buf).map_err(JsonError::write)
            }
        }
    }

    /// Encode a value as JSON bytes into the given sink.
    pub fn encode_to<T: Serialize, W: Write>(&self, value: &T, mut out: W) -> Result<()> {
        match self.style {
            Style::Compact => serde_json::to_writer(&mut out, value).map_err(JsonError::write),
            Style::Pretty => self.encode_pretty(value, &mut out),
        }
    }

    fn encode_pretty<T: Serialize, W: Write>(&self, value: &T, out: &mut W) -> Result<()> {
        let mut ser = Serializer::with_formatter(out, PrettyFormatter::new());
        value.serialize(&mut ser).map_err(JsonError::write)
    }
}
