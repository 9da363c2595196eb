//! Namespace prefix table
//!
//! One fixed prefix-to-namespace mapping, built at startup and read-only for
//! the lifetime of the process. It is used exclusively to compact IRIs in the
//! serialized output; input documents always resolve against the request base
//! identifier, never against this table.

use indexmap::IndexMap;

use super::vocab;

/// Immutable prefix → namespace IRI table
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    entries: IndexMap<String, String>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the namespaces the container output uses
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert("rdf", vocab::rdf::NS);
        table.insert("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        table.insert("xsd", vocab::xsd::NS);
        table.insert("ldp", vocab::ldp::NS);
        table.insert("dcterms", "http://purl.org/dc/terms/");
        table.insert("hydra", "http://www.w3.org/ns/hydra/core#");
        table
    }

    /// Register a prefix. Only meaningful before the table is shared.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.entries.insert(prefix.into(), namespace.into());
    }

    /// Get the namespace IRI registered for a prefix
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// Compact an IRI to `prefix:local` form.
    ///
    /// The longest matching namespace wins, so more specific prefixes beat
    /// their parents. Returns None when no namespace matches or the local
    /// part would not survive a Turtle round-trip as a prefixed name.
    pub fn compact(&self, iri: &str) -> Option<String> {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, ns) in &self.entries {
            if iri.starts_with(ns.as_str()) {
                match best {
                    Some((_, current)) if current.len() >= ns.len() => {}
                    _ => best = Some((prefix, ns)),
                }
            }
        }
        let (prefix, ns) = best?;
        let local = &iri[ns.len()..];
        if is_safe_local(local) {
            Some(format!("{}:{}", prefix, local))
        } else {
            None
        }
    }

    /// Expand a `prefix:local` compact IRI back to the full form
    pub fn expand(&self, compact: &str) -> Option<String> {
        let (prefix, local) = compact.split_once(':')?;
        let ns = self.entries.get(prefix)?;
        Some(format!("{}{}", ns, local))
    }

    /// Iterate over all (prefix, namespace) pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Local names restricted to the portable subset of PN_LOCAL, so compacted
/// terms re-parse identically in both Turtle and JSON-LD.
fn is_safe_local(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !local.starts_with('-')
}
