//! ldpfs — a read-only Linked Data Platform server over a filesystem workspace
//!
//! Every directory under the workspace root is published as an LDP container:
//! its description is the union of structural membership links (one
//! `ldp:contains` per immediate sub-directory) and the RDF triples parsed
//! from the files stored directly in it. Descriptions are rendered as
//! JSON-LD.
//!
//! # Architecture
//!
//! - [`container`] — the aggregation core: directory scanning, placeholder
//!   substitution, per-file parse tasks joined before a single serialization
//! - [`rdf`] — quad primitives, document parsing (Turtle, N3, RDF/XML), the
//!   namespace prefix table, and the Turtle → JSON-LD serializer
//! - [`http`] — the axum surface mapping request URLs onto the workspace
//! - [`config`] — immutable process configuration
//!
//! # Example
//!
//! ```no_run
//! use ldpfs::{describe_container, PrefixTable, RequestContext};
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), ldpfs::ContainerError> {
//! let ctx = RequestContext::new("http://localhost:3000/data", "http://localhost:3000");
//! let prefixes = PrefixTable::with_defaults();
//! let description = describe_container(&ctx, Path::new("./workspace/data"), &prefixes).await?;
//! println!("{}", description.document);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod container;
pub mod http;
pub mod rdf;

// Re-export main types for convenience
pub use config::ServerConfig;

pub use container::{
    describe_container, scan_directory, ContainerDescription, ContainerError, ContainerGraph,
    FileError, FileOutcome, Listing, PlaceholderRewriter, RequestContext,
};

pub use http::HttpServer;

pub use rdf::{
    graph_to_jsonld, parse_document, BlankNode, Literal, NamedNode, ParseError, PrefixTable, Quad,
    RdfError, RdfFormat, RdfObject, RdfPredicate, RdfSubject, SerializeError,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
