// jsonu: typed JSON conversion facade over serde_json

pub mod codec;
pub mod errors;
pub mod json;

pub use errors::{JsonError, Result};
pub use json::{pretty, Json};
