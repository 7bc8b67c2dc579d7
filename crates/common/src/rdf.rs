//! RDF graph model
//!
//! Thin wrappers over the `oxrdf` primitives, restricted to what the mapping
//! produces: named-node subjects and IRI or literal objects. Blank nodes are
//! never produced; every resource gets a stable IRI so the output is
//! deterministic.

use crate::vocab::{rdf, xsd};
use indexmap::{IndexMap, IndexSet};
use oxrdf::{IriParseError, NamedNode};
use std::fmt;

/// Absolute IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(NamedNode);

impl Iri {
    /// Parse and validate an absolute IRI
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// IRI of a fixed vocabulary term
    ///
    /// Only for the constants of [`crate::vocab`], which are known to be valid.
    pub fn vocab(term: &str) -> Self {
        debug_assert!(NamedNode::new(term).is_ok(), "invalid vocabulary IRI {}", term);
        Self(NamedNode::new_unchecked(term))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Append an already percent-encoded suffix to this IRI
    pub fn join(&self, suffix: &str) -> Iri {
        Iri(NamedNode::new_unchecked(format!("{}{}", self.0.as_str(), suffix)))
    }

    pub fn inner(&self) -> &NamedNode {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for Iri {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

/// Plain or datatyped literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(oxrdf::Literal);

impl Literal {
    /// Plain string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self(oxrdf::Literal::new_simple_literal(value))
    }

    pub fn typed(value: impl Into<String>, datatype: &str) -> Self {
        Self(oxrdf::Literal::new_typed_literal(
            value,
            Iri::vocab(datatype).0,
        ))
    }

    pub fn boolean(value: bool) -> Self {
        Self(value.into())
    }

    pub fn integer(value: i64) -> Self {
        Self(value.into())
    }

    /// Literal holding a JSON value verbatim
    pub fn json(value: impl Into<String>) -> Self {
        Self::typed(value, rdf::JSON)
    }

    pub fn lexical(&self) -> &str {
        self.0.value()
    }

    /// Datatype IRI, `None` for plain strings
    pub fn datatype(&self) -> Option<&str> {
        let datatype = self.0.datatype().as_str();
        if datatype == xsd::STRING {
            None
        } else {
            Some(datatype)
        }
    }

    pub fn inner(&self) -> &oxrdf::Literal {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
}

impl Term {
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Iri(_) => None,
            Term::Literal(lit) => Some(lit),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<&Iri> for Term {
    fn from(iri: &Iri) -> Self {
        Term::Iri(iri.clone())
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// RDF statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl From<&Triple> for oxrdf::Triple {
    fn from(triple: &Triple) -> Self {
        let object: oxrdf::Term = match triple.object {
            Term::Iri(ref iri) => iri.0.clone().into(),
            Term::Literal(ref lit) => lit.0.clone().into(),
        };
        oxrdf::Triple::new(triple.subject.0.clone(), triple.predicate.0.clone(), object)
    }
}

/// Insertion-ordered set of triples
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns `false` if it was already present.
    ///
    /// `predicate` must be a vocabulary term.
    pub fn insert(&mut self, subject: &Iri, predicate: &str, object: impl Into<Term>) -> bool {
        self.triples.insert(Triple {
            subject: subject.clone(),
            predicate: Iri::vocab(predicate),
            object: object.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// The graph as an `oxrdf` graph, for set-based comparison
    pub fn to_oxrdf(&self) -> oxrdf::Graph {
        let mut graph = oxrdf::Graph::new();
        for triple in &self.triples {
            graph.insert(&oxrdf::Triple::from(triple));
        }
        graph
    }

    /// Distinct subjects in order of first appearance
    pub fn subjects(&self) -> Vec<&Iri> {
        let subjects: IndexSet<&Iri> = self.triples.iter().map(|t| &t.subject).collect();
        subjects.into_iter().collect()
    }

    /// Triples grouped by subject, subjects in order of first appearance
    pub fn grouped_by_subject(&self) -> IndexMap<&Iri, Vec<&Triple>> {
        let mut groups: IndexMap<&Iri, Vec<&Triple>> = IndexMap::new();
        for triple in &self.triples {
            groups.entry(&triple.subject).or_default().push(triple);
        }
        groups
    }

    /// Objects of all triples matching `subject` and `predicate`
    pub fn objects<'a>(&'a self, subject: &'a Iri, predicate: &'a str) -> Vec<&'a Term> {
        self.triples
            .iter()
            .filter(|t| &t.subject == subject && t.predicate.as_str() == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// First literal object for `subject` and `predicate`
    pub fn literal<'a>(&'a self, subject: &'a Iri, predicate: &'a str) -> Option<&'a str> {
        self.objects(subject, predicate)
            .into_iter()
            .find_map(|o| o.as_literal())
            .map(|l| l.lexical())
    }

    /// All triples using `predicate`
    pub fn with_predicate<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Triple> {
        self.triples
            .iter()
            .filter(move |t| t.predicate.as_str() == predicate)
    }

    /// Subjects typed with `class` via `rdf:type`
    pub fn instances_of<'a>(&'a self, class: &'a str) -> Vec<&'a Iri> {
        self.with_predicate(rdf::TYPE)
            .filter(|t| matches!(&t.object, Term::Iri(c) if c.as_str() == class))
            .map(|t| &t.subject)
            .collect()
    }
}
