//! Compacting Turtle writer
//!
//! Emits the canonical text form of a graph: one `@prefix` directive per
//! table entry, then one statement per quad in insertion order. Graph labels
//! are ignored; the container pipeline only produces default-graph quads.

use std::fmt::Write;

use crate::rdf::namespace::PrefixTable;
use crate::rdf::types::{Literal, NamedNode, Quad, RdfObject, RdfSubject};
use crate::rdf::vocab;

/// Write quads as Turtle text, compacting IRIs through the prefix table.
pub fn write_turtle(quads: &[Quad], prefixes: &PrefixTable) -> String {
    let mut out = String::new();

    for (prefix, ns) in prefixes.iter() {
        // String formatting cannot fail; ignore the fmt::Result.
        let _ = writeln!(out, "@prefix {}: <{}> .", prefix, ns);
    }
    if !prefixes.is_empty() && !quads.is_empty() {
        out.push('\n');
    }

    for quad in quads {
        let subject = match &quad.subject {
            RdfSubject::NamedNode(n) => named_term(n, prefixes),
            RdfSubject::BlankNode(b) => format!("_:{}", b.as_str()),
        };
        let predicate = compact_iri(quad.predicate.as_str(), prefixes);
        let object = match &quad.object {
            RdfObject::NamedNode(n) => named_term(n, prefixes),
            RdfObject::BlankNode(b) => format!("_:{}", b.as_str()),
            RdfObject::Literal(l) => literal_term(l, prefixes),
        };
        let _ = writeln!(out, "{} {} {} .", subject, predicate, object);
    }

    out
}

fn named_term(node: &NamedNode, prefixes: &PrefixTable) -> String {
    compact_iri(node.as_str(), prefixes)
}

fn compact_iri(iri: &str, prefixes: &PrefixTable) -> String {
    prefixes
        .compact(iri)
        .unwrap_or_else(|| format!("<{}>", iri))
}

fn literal_term(literal: &Literal, prefixes: &PrefixTable) -> String {
    let quoted = format!("\"{}\"", escape_literal(literal.value()));
    if let Some(lang) = literal.language() {
        format!("{}@{}", quoted, lang)
    } else if literal.datatype() == vocab::xsd::STRING {
        quoted
    } else {
        format!("{}^^{}", quoted, compact_iri(literal.datatype(), prefixes))
    }
}

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
