//! Thin facade over `serde_json` for converting between JSON text, bytes,
//! or streams and typed values, lists, and insertion-ordered maps.
//!
//! Absent input is distinguished from an empty parsed result in every read
//! operation: `None` in yields `Ok(None)` out, while `{}` / `[]` parse to
//! empty collections. Every underlying parse, serialize, or sink failure
//! surfaces as [`JsonError`]; no `serde_json` or I/O error type escapes.

use std::hash::Hash;
use std::io::{Read, Write};

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::codec::{Codec, Style};
use crate::errors::{JsonError, Result};

/// The conversion facade. Two shared instances exist for the process
/// lifetime, one per output style; the module-level functions use the
/// compact one, [`pretty`] returns the other.
#[derive(Debug)]
pub struct Json {
    codec: Codec,
}

static COMPACT: Json = Json::new(Codec::new(Style::Compact));
static PRETTY: Json = Json::new(Codec::new(Style::Pretty));

/// Returns the facade bound to the pretty-printing configuration:
/// two-space indent, ` : ` key separators, platform line separators.
pub fn pretty() -> &'static Json {
    &PRETTY
}

impl Json {
    pub const fn new(codec: Codec) -> Self {
        Self { codec }
    }

    /// Deserialize a JSON string into `T`. `None` input yields `Ok(None)`.
    pub fn read_value<T: DeserializeOwned>(&self, json: Option<&str>) -> Result<Option<T>> {
        match json {
            None => Ok(None),
            Some(json) => serde_json::from_str(json).map(Some).map_err(JsonError::read),
        }
    }

    /// Deserialize raw JSON bytes into `T`. `None` input yields `Ok(None)`.
    pub fn read_value_bytes<T: DeserializeOwned>(&self, buf: Option<&[u8]>) -> Result<Option<T>> {
        match buf {
            None => Ok(None),
            Some(buf) => serde_json::from_slice(buf).map(Some).map_err(JsonError::read),
        }
    }

    /// Deserialize JSON from a reader into `T`. `None` input yields `Ok(None)`.
    pub fn read_value_from<T: DeserializeOwned, R: Read>(&self, reader: Option<R>) -> Result<Option<T>> {
        match reader {
            None => Ok(None),
            Some(reader) => serde_json::from_reader(reader).map(Some).map_err(JsonError::read),
        }
    }

    /// Deserialize a JSON array into a `Vec<T>`. `None` input yields
    /// `Ok(None)`; `[]` and `{}` both yield an empty vector. Any other
    /// non-array top level fails.
    pub fn read_list<T: DeserializeOwned>(&self, json: Option<&str>) -> Result<Option<Vec<T>>> {
        let Some(json) = json else { return Ok(None) };
        match parse(json)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(JsonError::read))
                .collect::<Result<Vec<T>>>()
                .map(Some),
            Value::Object(entries) if entries.is_empty() => Ok(Some(Vec::new())),
            other => Err(JsonError::read(unexpected("an array", &other))),
        }
    }

    /// Deserialize a JSON object into an insertion-ordered map of raw
    /// values. `None` input yields `Ok(None)`; `{}` and `[]` both yield an
    /// empty map.
    pub fn read_map(&self, json: Option<&str>) -> Result<Option<Map<String, Value>>> {
        let Some(json) = json else { return Ok(None) };
        match parse(json)? {
            Value::Object(entries) => Ok(Some(entries)),
            Value::Array(items) if items.is_empty() => Ok(Some(Map::new())),
            other => Err(JsonError::read(unexpected("an object", &other))),
        }
    }

    /// Like [`Json::read_map`] with values deserialized into `V`.
    pub fn read_map_of<V: DeserializeOwned>(&self, json: Option<&str>) -> Result<Option<IndexMap<String, V>>> {
        self.read_map_keyed(json)
    }

    /// Like [`Json::read_map`] with keys converted from their JSON string
    /// representation into `K` (integer keys included) and values into `V`.
    pub fn read_map_keyed<K, V>(&self, json: Option<&str>) -> Result<Option<IndexMap<K, V>>>
    where
        K: DeserializeOwned + Hash + Eq,
        V: DeserializeOwned,
    {
        let Some(json) = json else { return Ok(None) };
        match parse(json)? {
            Value::Object(entries) if entries.is_empty() => Ok(Some(IndexMap::new())),
            object @ Value::Object(_) => serde_json::from_value(object).map(Some).map_err(JsonError::read),
            Value::Array(items) if items.is_empty() => Ok(Some(IndexMap::new())),
            other => Err(JsonError::read(unexpected("an object", &other))),
        }
    }

    /// Serialize a value to a JSON string. `None` yields `Ok(None)`, not
    /// the literal string "null".
    pub fn write_value<T: Serialize>(&self, value: Option<&T>) -> Result<Option<String>> {
        match value {
            None => Ok(None),
            Some(value) => self.codec.encode(value).map(Some),
        }
    }

    /// Serialize a value as JSON bytes into the given sink. `None` writes
    /// the literal `null`. The sink's lifecycle stays with the caller.
    pub fn write_value_to<T: Serialize, W: Write>(&self, value: Option<&T>, mut out: W) -> Result<()> {
        match value {
            None => out.write_all(b"null").map_err(JsonError::write),
            Some(value) => self.codec.encode_to(value, &mut out),
        }
    }
}

/// Deserialize a JSON string into `T` using the shared compact facade.
pub fn read_value<T: DeserializeOwned>(json: Option<&str>) -> Result<Option<T>> {
    COMPACT.read_value(json)
}

/// Deserialize raw JSON bytes into `T` using the shared compact facade.
pub fn read_value_bytes<T: DeserializeOwned>(buf: Option<&[u8]>) -> Result<Option<T>> {
    COMPACT.read_value_bytes(buf)
}

/// Deserialize JSON from a reader into `T` using the shared compact facade.
pub fn read_value_from<T: DeserializeOwned, R: Read>(reader: Option<R>) -> Result<Option<T>> {
    COMPACT.read_value_from(reader)
}

/// Deserialize a JSON array into a `Vec<T>` using the shared compact facade.
pub fn read_list<T: DeserializeOwned>(json: Option<&str>) -> Result<Option<Vec<T>>> {
    COMPACT.read_list(json)
}

/// Deserialize a JSON object into an insertion-ordered map of raw values.
pub fn read_map(json: Option<&str>) -> Result<Option<Map<String, Value>>> {
    COMPACT.read_map(json)
}

/// Deserialize a JSON object into an insertion-ordered map of `V` values.
pub fn read_map_of<V: DeserializeOwned>(json: Option<&str>) -> Result<Option<IndexMap<String, V>>> {
    COMPACT.read_map_of(json)
}

/// Deserialize a JSON object into an insertion-ordered `K` to `V` map.
pub fn read_map_keyed<K, V>(json: Option<&str>) -> Result<Option<IndexMap<K, V>>>
where
    K: DeserializeOwned + Hash + Eq,
    V: DeserializeOwned,
{
    COMPACT.read_map_keyed(json)
}

/// Serialize a value to a compact JSON string.
pub fn write_value<T: Serialize>(value: Option<&T>) -> Result<Option<String>> {
    COMPACT.write_value(value)
}

/// Serialize a value as compact JSON bytes into the given sink.
pub fn write_value_to<T: Serialize, W: Write>(value: Option<&T>, out: W) -> Result<()> {
    COMPACT.write_value_to(value, out)
}

/// Convert a value to a `serde_json::Value`.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(JsonError::write)
}

/// Convert a `serde_json::Value` into a typed value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(JsonError::read)
}

fn parse(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(JsonError::read)
}

fn unexpected(expected: &str, found: &Value) -> serde_json::Error {
    serde_json::Error::custom(format!("expected {expected}, found {}", kind(found)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a non-empty array",
        Value::Object(_) => "a non-empty object",
    }
}
