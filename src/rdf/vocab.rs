//! Well-known vocabulary IRIs used by the container pipeline.

use oxrdf::NamedNodeRef;

/// RDF vocabulary constants
pub mod rdf {
    use super::NamedNodeRef;

    /// rdf:type IRI
    pub const TYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");

    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
}

/// LDP vocabulary constants
pub mod ldp {
    use super::NamedNodeRef;

    /// ldp:Container IRI
    pub const CONTAINER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#Container");

    /// ldp:contains IRI
    pub const CONTAINS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/ldp#contains");

    /// LDP namespace
    pub const NS: &str = "http://www.w3.org/ns/ldp#";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
}
