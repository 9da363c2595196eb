//! Aggregation orchestration
//!
//! Drives one container request end to end: validate and scan the target
//! directory, derive membership quads, run every qualifying file through
//! substitution and parsing as its own task, and serialize exactly once
//! after the last file has reached a terminal outcome.
//!
//! The join is a counting join over the spawned file tasks: the number of
//! outcomes is known after enumeration and the `JoinSet` is drained to
//! completion before serialization, whatever order the tasks finish in. A
//! file that fails to parse is recorded and skipped; it never aborts the
//! request.

use std::io;
use std::path::{Path, PathBuf};

use bytes::BytesMut;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::rdf::{
    graph_to_jsonld, parse_document, vocab, NamedNode, ParseError, PrefixTable, Quad, RdfFormat,
};

use super::graph::ContainerGraph;
use super::scan::scan_directory;
use super::substitute::PlaceholderRewriter;
use super::{ContainerError, FileError, RequestContext};

/// Terminal outcome of one file's substitution + parse task
#[derive(Debug)]
pub enum FileOutcome {
    /// The file parsed; its quads join the container graph
    Parsed(Vec<Quad>),
    /// The file failed; the error is recorded and the request continues
    Failed(FileError),
}

/// The rendered container description plus its error channel
#[derive(Debug)]
pub struct ContainerDescription {
    /// The JSON-LD document
    pub document: Value,
    /// Per-file parse failures encountered while building the graph
    pub file_errors: Vec<FileError>,
}

/// Describe the container at `dir` as a JSON-LD document.
///
/// `ctx.current()` identifies the container and serves as the parse base
/// for every file in it. Fails with `NotFound` before any graph work when
/// the path is missing or not a directory; per-file parse errors are
/// collected on the returned description instead of failing the request.
pub async fn describe_container(
    ctx: &RequestContext,
    dir: &Path,
    prefixes: &PrefixTable,
) -> Result<ContainerDescription, ContainerError> {
    let listing = scan_directory(dir).await?;

    let container = NamedNode::new(ctx.current())
        .map_err(|e| ContainerError::InvalidIdentifier(e.to_string()))?;

    let mut graph = ContainerGraph::new();
    graph.add_quad(Quad::new(
        container.clone(),
        NamedNode::from(vocab::rdf::TYPE),
        NamedNode::from(vocab::ldp::CONTAINER),
        None,
    ));
    for name in &listing.directories {
        let child = NamedNode::new(ctx.child_iri(name))
            .map_err(|e| ContainerError::InvalidIdentifier(e.to_string()))?;
        graph.add_quad(Quad::new(
            container.clone(),
            NamedNode::from(vocab::ldp::CONTAINS),
            child,
            None,
        ));
    }
    debug!(
        container = ctx.current(),
        directories = listing.directories.len(),
        files = listing.files.len(),
        "scanned container"
    );

    let mut tasks: JoinSet<FileOutcome> = JoinSet::new();
    for file in listing.files {
        let ctx = ctx.clone();
        tasks.spawn(async move { process_file(ctx, file).await });
    }

    // Counting join: every spawned task yields exactly one outcome, and the
    // set is drained before serialization regardless of completion order.
    let mut file_errors = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(FileOutcome::Parsed(quads)) => {
                for quad in quads {
                    graph.add_quad(quad);
                }
            }
            Ok(FileOutcome::Failed(error)) => {
                warn!(file = %error.file.display(), cause = %error.cause, "file skipped");
                file_errors.push(error);
            }
            Err(join_error) => {
                return Err(ContainerError::Io(io::Error::new(
                    io::ErrorKind::Other,
                    join_error,
                )))
            }
        }
    }

    let document = graph_to_jsonld(graph.quads(), prefixes)?;
    Ok(ContainerDescription {
        document,
        file_errors,
    })
}

async fn process_file(ctx: RequestContext, path: PathBuf) -> FileOutcome {
    match read_substitute_parse(&ctx, &path).await {
        Ok(quads) => FileOutcome::Parsed(quads),
        Err(cause) => FileOutcome::Failed(FileError { file: path, cause }),
    }
}

async fn read_substitute_parse(
    ctx: &RequestContext,
    path: &Path,
) -> Result<Vec<Quad>, ParseError> {
    let format = RdfFormat::from_path(path).ok_or_else(|| {
        ParseError::UnrecognizedExtension(path.display().to_string())
    })?;
    debug!(file = %path.display(), "adding file");

    let mut file = tokio::fs::File::open(path).await?;
    let mut rewriter = PlaceholderRewriter::new(ctx.current(), ctx.base());
    let mut substituted = BytesMut::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        substituted.extend_from_slice(&rewriter.push(&chunk[..n]));
    }
    substituted.extend_from_slice(&rewriter.finish());

    parse_document(format, &substituted, ctx.current())
}
