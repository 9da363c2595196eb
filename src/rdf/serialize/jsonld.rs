//! JSON-LD rendering of the canonical Turtle text
//!
//! Re-parses the intermediate Turtle and groups statements by subject, in
//! first-seen order, into a `@graph` array under a `@context` built from the
//! prefix table. Subjects, predicates, and IRI objects are compacted through
//! the same table.

use indexmap::IndexMap;
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use serde_json::{json, Value};
use std::io::{BufReader, Cursor};

use super::{SerializeError, SerializeResult};
use crate::rdf::namespace::PrefixTable;
use crate::rdf::vocab;

/// Convert canonical Turtle text into a JSON-LD document.
pub fn to_jsonld(turtle: &str, prefixes: &PrefixTable) -> SerializeResult<Value> {
    let reader = BufReader::new(Cursor::new(turtle.as_bytes()));
    let mut parser = TurtleParser::new(reader, None);

    // subject -> predicate -> objects, all in first-seen order
    let mut nodes: IndexMap<String, IndexMap<String, Vec<Value>>> = IndexMap::new();

    parser.parse_all(&mut |t: rio_api::model::Triple<'_>| -> SerializeResult<()> {
        let subject = subject_key(&t.subject, prefixes)?;
        let predicate = compact(t.predicate.iri, prefixes);
        let object = object_value(&t.object, prefixes)?;
        nodes
            .entry(subject)
            .or_default()
            .entry(predicate)
            .or_default()
            .push(object);
        Ok(())
    })?;

    let mut graph = Vec::with_capacity(nodes.len());
    for (id, properties) in nodes {
        let mut node = serde_json::Map::new();
        node.insert("@id".to_string(), json!(id));
        for (predicate, mut objects) in properties {
            let value = if objects.len() == 1 {
                objects.swap_remove(0)
            } else {
                Value::Array(objects)
            };
            node.insert(predicate, value);
        }
        graph.push(Value::Object(node));
    }

    let mut context = serde_json::Map::new();
    for (prefix, ns) in prefixes.iter() {
        context.insert(prefix.to_string(), json!(ns));
    }

    Ok(json!({
        "@context": context,
        "@graph": graph,
    }))
}

fn subject_key(
    subject: &rio_api::model::Subject<'_>,
    prefixes: &PrefixTable,
) -> SerializeResult<String> {
    match subject {
        rio_api::model::Subject::NamedNode(n) => Ok(compact(n.iri, prefixes)),
        rio_api::model::Subject::BlankNode(b) => Ok(format!("_:{}", b.id)),
        rio_api::model::Subject::Triple(_) => Err(SerializeError::Reparse(
            "unexpected RDF-star subject in canonical text".into(),
        )),
    }
}

fn object_value(
    object: &rio_api::model::Term<'_>,
    prefixes: &PrefixTable,
) -> SerializeResult<Value> {
    match object {
        rio_api::model::Term::NamedNode(n) => Ok(json!({ "@id": compact(n.iri, prefixes) })),
        rio_api::model::Term::BlankNode(b) => Ok(json!({ "@id": format!("_:{}", b.id) })),
        rio_api::model::Term::Literal(l) => Ok(literal_value(l, prefixes)),
        rio_api::model::Term::Triple(_) => Err(SerializeError::Reparse(
            "unexpected RDF-star object in canonical text".into(),
        )),
    }
}

fn literal_value(literal: &rio_api::model::Literal<'_>, prefixes: &PrefixTable) -> Value {
    match literal {
        rio_api::model::Literal::Simple { value } => json!({ "@value": value }),
        rio_api::model::Literal::LanguageTaggedString { value, language } => {
            json!({ "@value": value, "@language": language })
        }
        rio_api::model::Literal::Typed { value, datatype } => {
            if datatype.iri == vocab::xsd::STRING {
                json!({ "@value": value })
            } else {
                json!({ "@value": value, "@type": compact(datatype.iri, prefixes) })
            }
        }
    }
}

fn compact(iri: &str, prefixes: &PrefixTable) -> String {
    prefixes.compact(iri).unwrap_or_else(|| iri.to_string())
}
