//! RDF document parsing
//!
//! Converts the bytes of one source document into quads. Relative references
//! in a document resolve against the caller-supplied base identifier, which
//! for container requests is the canonical request IRI.

use oxiri::Iri;
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use rio_xml::RdfXmlParser;
use std::io::{BufReader, Cursor};
use std::path::Path;
use thiserror::Error;

use super::types::{BlankNode, Literal, NamedNode, Quad, RdfObject, RdfPredicate, RdfSubject};

/// Textual RDF syntax recognized by its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle (.ttl)
    Turtle,
    /// Notation3 (.n3), parsed with the Turtle grammar
    Notation3,
    /// RDF/XML (.rdf)
    RdfXml,
}

impl RdfFormat {
    /// Detect the format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("ttl") {
            Some(RdfFormat::Turtle)
        } else if ext.eq_ignore_ascii_case("n3") {
            Some(RdfFormat::Notation3)
        } else if ext.eq_ignore_ascii_case("rdf") {
            Some(RdfFormat::RdfXml)
        } else {
            None
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed document
    #[error("Parse error: {0}")]
    Syntax(String),

    /// The base identifier is not a valid IRI
    #[error("Invalid base IRI: {0}")]
    InvalidBase(String),

    /// The path carries no recognized RDF extension
    #[error("Unrecognized RDF extension: {0}")]
    UnrecognizedExtension(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<rio_turtle::TurtleError> for ParseError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

impl From<rio_xml::RdfXmlError> for ParseError {
    fn from(e: rio_xml::RdfXmlError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

impl From<super::types::RdfError> for ParseError {
    fn from(e: super::types::RdfError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

/// Parse one document into quads in the default graph.
///
/// The whole document must parse for any quads to be returned; a syntax error
/// anywhere yields `ParseError` and no partial output.
pub fn parse_document(format: RdfFormat, input: &[u8], base_iri: &str) -> ParseResult<Vec<Quad>> {
    let base = Iri::parse(base_iri.to_string())
        .map_err(|e| ParseError::InvalidBase(format!("{}: {}", base_iri, e)))?;
    let reader = BufReader::new(Cursor::new(input));

    let mut quads = Vec::new();
    let mut on_triple = |t: rio_api::model::Triple<'_>| -> ParseResult<()> {
        quads.push(convert_triple(&t)?);
        Ok(())
    };

    match format {
        RdfFormat::Turtle | RdfFormat::Notation3 => {
            TurtleParser::new(reader, Some(base)).parse_all(&mut on_triple)?
        }
        RdfFormat::RdfXml => RdfXmlParser::new(reader, Some(base)).parse_all(&mut on_triple)?,
    }

    Ok(quads)
}

fn convert_triple(t: &rio_api::model::Triple<'_>) -> ParseResult<Quad> {
    Ok(Quad {
        subject: convert_subject(&t.subject)?,
        predicate: RdfPredicate::new(t.predicate.iri)?,
        object: convert_object(&t.object)?,
        graph: None,
    })
}

fn convert_subject(s: &rio_api::model::Subject<'_>) -> ParseResult<RdfSubject> {
    match s {
        rio_api::model::Subject::NamedNode(n) => Ok(NamedNode::new(n.iri)?.into()),
        rio_api::model::Subject::BlankNode(b) => Ok(BlankNode::new(b.id)?.into()),
        rio_api::model::Subject::Triple(_) => {
            Err(ParseError::Syntax("RDF-star subjects are not supported".into()))
        }
    }
}

fn convert_object(o: &rio_api::model::Term<'_>) -> ParseResult<RdfObject> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(NamedNode::new(n.iri)?.into()),
        rio_api::model::Term::BlankNode(b) => Ok(BlankNode::new(b.id)?.into()),
        rio_api::model::Term::Literal(l) => Ok(convert_literal(l)?.into()),
        rio_api::model::Term::Triple(_) => {
            Err(ParseError::Syntax("RDF-star objects are not supported".into()))
        }
    }
}

fn convert_literal(l: &rio_api::model::Literal<'_>) -> ParseResult<Literal> {
    match l {
        rio_api::model::Literal::Simple { value } => Ok(Literal::new_simple(*value)),
        rio_api::model::Literal::LanguageTaggedString { value, language } => {
            Ok(Literal::new_language_tagged(*value, *language)?)
        }
        rio_api::model::Literal::Typed { value, datatype } => {
            let dt = NamedNode::new(datatype.iri)?;
            Ok(Literal::new_typed(*value, dt))
        }
    }
}
