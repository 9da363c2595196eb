//! Graph serialization
//!
//! Two-step rendering: the accumulated quads are first written as prefix-
//! compacted Turtle, then that text is re-parsed and shaped into a JSON-LD
//! document. The intermediate text is the canonical form; failure to re-parse
//! it is an internal fault, not a user input error.

mod jsonld;
mod turtle;

pub use jsonld::to_jsonld;
pub use turtle::write_turtle;

use serde_json::Value;
use thiserror::Error;

use super::namespace::PrefixTable;
use super::types::Quad;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// The canonical RDF text did not survive re-parsing
    #[error("Serialization error: intermediate RDF text could not be re-parsed: {0}")]
    Reparse(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

impl From<rio_turtle::TurtleError> for SerializeError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        SerializeError::Reparse(e.to_string())
    }
}

/// Render a complete graph as a JSON-LD document
pub fn graph_to_jsonld(quads: &[Quad], prefixes: &PrefixTable) -> SerializeResult<Value> {
    let text = write_turtle(quads, prefixes);
    to_jsonld(&text, prefixes)
}
