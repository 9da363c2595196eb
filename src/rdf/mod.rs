//! RDF support for the container pipeline
//!
//! This module provides:
//! - quad primitives wrapped over oxrdf
//! - document parsing for the recognized textual syntaxes (Turtle, N3,
//!   RDF/XML) with base-identifier resolution
//! - the immutable namespace prefix table
//! - two-step serialization (canonical Turtle, then JSON-LD)

mod namespace;
mod parse;
mod serialize;
mod types;
pub mod vocab;

pub use namespace::PrefixTable;

pub use parse::{parse_document, ParseError, ParseResult, RdfFormat};

pub use serialize::{graph_to_jsonld, to_jsonld, write_turtle, SerializeError, SerializeResult};

pub use types::{
    BlankNode, Literal, NamedNode, Quad, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
};
