//! End-to-end container aggregation tests
//!
//! Exercises the whole pipeline against real directory fixtures: scan,
//! substitution, parsing, the counting join, and JSON-LD rendering.

use ldpfs::{describe_container, ContainerError, PrefixTable, RequestContext};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const CURRENT: &str = "http://localhost:3000/data";
const BASE: &str = "http://localhost:3000";

fn ctx() -> RequestContext {
    RequestContext::new(CURRENT, BASE)
}

fn node<'a>(doc: &'a Value, id: &str) -> Option<&'a Value> {
    doc["@graph"].as_array().unwrap().iter().find(|n| n["@id"] == id)
}

/// Expand a possibly-compacted term through the document's prefix table.
fn expand(prefixes: &PrefixTable, term: &str) -> String {
    prefixes.expand(term).unwrap_or_else(|| term.to_string())
}

#[tokio::test]
async fn test_mixed_container() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("people")).unwrap();
    fs::create_dir(tmp.path().join("projects")).unwrap();
    fs::write(
        tmp.path().join("alice.ttl"),
        "<{{current}}/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" ;\n\
         \t<http://purl.org/dc/terms/creator> <{{base}}/agents/importer> .",
    )
    .unwrap();
    fs::write(
        tmp.path().join("site.n3"),
        "<> <http://purl.org/dc/terms/title> \"Data workspace\" .",
    )
    .unwrap();
    fs::write(tmp.path().join("README.md"), "not rdf, ignored").unwrap();

    let prefixes = PrefixTable::with_defaults();
    let description = describe_container(&ctx(), tmp.path(), &prefixes)
        .await
        .unwrap();
    assert!(description.file_errors.is_empty());

    let doc = &description.document;
    let container = node(doc, CURRENT).expect("container node present");

    // Membership: the type quad plus one contains per sub-directory.
    assert_eq!(
        expand(&prefixes, container["rdf:type"]["@id"].as_str().unwrap()),
        "http://www.w3.org/ns/ldp#Container"
    );
    let contains = container["ldp:contains"].as_array().unwrap();
    let ids: Vec<_> = contains.iter().map(|c| c["@id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "http://localhost:3000/data/people",
            "http://localhost:3000/data/projects",
        ]
    );

    // {{current}} and {{base}} were substituted before parsing.
    let alice = node(doc, "http://localhost:3000/data/alice").unwrap();
    assert_eq!(alice["http://xmlns.com/foaf/0.1/name"]["@value"], "Alice");
    assert_eq!(
        alice["dcterms:creator"]["@id"],
        "http://localhost:3000/agents/importer"
    );

    // The n3 file's empty reference resolved against the container itself.
    assert_eq!(container["dcterms:title"]["@value"], "Data workspace");
}

#[tokio::test]
async fn test_round_trip_single_triple_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("one.ttl"),
        "<http://example.org/thing> <http://purl.org/dc/terms/title> \"One\" .",
    )
    .unwrap();

    let prefixes = PrefixTable::with_defaults();
    let description = describe_container(&ctx(), tmp.path(), &prefixes)
        .await
        .unwrap();

    // Reconstruct the triples from the JSON-LD document and compare with the
    // expected two-triple graph.
    let graph = description.document["@graph"].as_array().unwrap();
    let mut triples = Vec::new();
    for n in graph {
        let subject = expand(&prefixes, n["@id"].as_str().unwrap());
        for (key, value) in n.as_object().unwrap() {
            if key == "@id" {
                continue;
            }
            let predicate = expand(&prefixes, key);
            let object = if let Some(id) = value.get("@id") {
                expand(&prefixes, id.as_str().unwrap())
            } else {
                value["@value"].as_str().unwrap().to_string()
            };
            triples.push((subject.clone(), predicate, object));
        }
    }
    triples.sort();

    let mut expected = vec![
        (
            CURRENT.to_string(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type".to_string(),
            "http://www.w3.org/ns/ldp#Container".to_string(),
        ),
        (
            "http://example.org/thing".to_string(),
            "http://purl.org/dc/terms/title".to_string(),
            "One".to_string(),
        ),
    ];
    expected.sort();
    assert_eq!(triples, expected);
}

#[tokio::test]
async fn test_parse_errors_are_reported_not_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.ttl"), "<<<<").unwrap();
    fs::write(
        tmp.path().join("fine.ttl"),
        "<http://example.org/ok> <http://example.org/p> \"fine\" .",
    )
    .unwrap();

    let prefixes = PrefixTable::with_defaults();
    let description = describe_container(&ctx(), tmp.path(), &prefixes)
        .await
        .unwrap();

    assert_eq!(description.file_errors.len(), 1);
    let reported = &description.file_errors[0];
    assert!(reported.file.ends_with("broken.ttl"));
    assert!(!reported.cause.to_string().is_empty());

    assert!(node(&description.document, "http://example.org/ok").is_some());
}

#[tokio::test]
async fn test_missing_directory_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent");
    let prefixes = PrefixTable::with_defaults();

    let err = describe_container(&ctx(), &missing, &prefixes)
        .await
        .unwrap_err();
    match err {
        ContainerError::NotFound(path) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {}", other),
    }
}

#[tokio::test]
async fn test_many_staggered_files_all_join() {
    let tmp = TempDir::new().unwrap();
    // Mix tiny and large documents so per-file tasks complete out of order;
    // the join must still gather every file's quads before serializing.
    for i in 0..12 {
        let mut body = String::from("@prefix ex: <http://example.org/> .\n");
        for j in 0..(1 + (i % 4) * 200) {
            body.push_str(&format!("ex:f{}-{} ex:p \"v\" .\n", i, j));
        }
        fs::write(tmp.path().join(format!("doc{:02}.ttl", i)), body).unwrap();
    }

    let prefixes = PrefixTable::with_defaults();
    let description = describe_container(&ctx(), tmp.path(), &prefixes)
        .await
        .unwrap();
    assert!(description.file_errors.is_empty());

    for i in 0..12 {
        let id = format!("http://example.org/f{}-0", i);
        assert!(
            node(&description.document, &id).is_some(),
            "quads from doc{:02}.ttl missing",
            i
        );
    }
}
