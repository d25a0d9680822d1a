use std::fmt;

use thiserror::Error;

/// The single error kind surfaced by every facade operation.
///
/// Whatever low-level failure occurred (`serde_json::Error`,
/// `std::io::Error` from a caller-supplied sink, ...) is preserved as the
/// `source()` for diagnostics; callers only distinguish success from
/// failure.
#[derive(Debug, Error)]
#[error("{op} failed")]
pub struct JsonError {
    op: Op,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Read,
    Write,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Read => write!(f, "JSON read"),
            Op::Write => write!(f, "JSON write"),
        }
    }
}

impl JsonError {
    pub(crate) fn read(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::wrap(Op::Read, source.into())
    }

    pub(crate) fn write(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::wrap(Op::Write, source.into())
    }

    fn wrap(op: Op, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        tracing::debug!(%op, error = %source, "json conversion failed");
        Self { op, source }
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;
