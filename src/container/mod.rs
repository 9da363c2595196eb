//! LDP container aggregation
//!
//! Turns one directory of the workspace into a single merged RDF graph and
//! renders it as JSON-LD: structural membership quads for the immediate
//! sub-directories, plus every quad parsed from the RDF files stored directly
//! in the directory. One orchestrator instance runs per request; nothing is
//! shared between requests except the read-only configuration.

mod aggregate;
mod graph;
mod scan;
mod substitute;

pub use aggregate::{describe_container, ContainerDescription, FileOutcome};
pub use graph::ContainerGraph;
pub use scan::{scan_directory, Listing};
pub use substitute::PlaceholderRewriter;

use std::path::PathBuf;
use thiserror::Error;

use crate::rdf::{ParseError, SerializeError};

/// Per-request identifiers, immutable after creation.
///
/// `current` is the canonical request IRI: it identifies the container
/// itself and doubles as the parse base for every document in it, so files
/// describe the container from the requester's point of view. `base` is the
/// site root. Both are stored without a trailing slash.
#[derive(Debug, Clone)]
pub struct RequestContext {
    current: String,
    base: String,
}

impl RequestContext {
    /// Create a context from the canonical request IRI and the site base IRI
    pub fn new(current: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            current: strip_trailing_slash(current.into()),
            base: strip_trailing_slash(base.into()),
        }
    }

    /// The canonical request identifier
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The base site identifier
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Identifier of an immediate child resource
    pub fn child_iri(&self, name: &str) -> String {
        format!("{}/{}", self.current, name)
    }
}

fn strip_trailing_slash(mut s: String) -> String {
    if s.ends_with('/') {
        s.pop();
    }
    s
}

/// Request-fatal container errors
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The target path is missing or not a directory
    #[error("{} is not a valid directory", .0.display())]
    NotFound(PathBuf),

    /// The request identifier is not a usable IRI
    #[error("invalid request identifier: {0}")]
    InvalidIdentifier(String),

    /// Unexpected filesystem fault
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The accumulated graph could not be rendered
    #[error(transparent)]
    Serialization(#[from] SerializeError),
}

/// A per-file parse failure, recovered by the orchestrator.
///
/// Recorded on the response's error channel; the request continues and the
/// final graph simply omits this file's quads.
#[derive(Error, Debug)]
#[error("{}: {}", .file.display(), .cause)]
pub struct FileError {
    /// The file that failed to parse
    pub file: PathBuf,
    /// What went wrong
    pub cause: ParseError,
}
