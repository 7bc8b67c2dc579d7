//! RDF serialization for openapi-rdf
//!
//! This crate writes a mapped [`Graph`] as RDF/XML (the primary output) or
//! Turtle using the `rio` formatters. Triples are handed over grouped by
//! subject so that each subject gets a single description block.

use openapi_rdf_common::{ConvertError, Graph, Literal, Result, Term, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::model;
use rio_turtle::TurtleFormatter;
use rio_xml::RdfXmlFormatter;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Output serialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    RdfXml,
    Turtle,
}

impl OutputFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::RdfXml => "rdf",
            OutputFormat::Turtle => "ttl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::RdfXml => write!(f, "rdfxml"),
            OutputFormat::Turtle => write!(f, "turtle"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rdfxml" | "rdf/xml" | "xml" | "rdf" => Ok(OutputFormat::RdfXml),
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// RDF generator
///
/// Subjects are written in order of first appearance and their triples in
/// insertion order, so the same graph always gives the same bytes.
pub struct RdfGenerator {
    graph: Graph,
}

impl RdfGenerator {
    /// Create a new generator for a graph
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Serialize the whole graph to a string
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        debug!(%format, subjects = self.graph.subjects().len(), "rendering graph");

        let bytes = match format {
            OutputFormat::RdfXml => {
                check_xml(&self.graph)?;
                let mut formatter = RdfXmlFormatter::with_indentation(Vec::new(), 2)
                    .map_err(|e| formatter_error(format, e))?;
                self.format_triples(&mut formatter)?;
                formatter.finish().map_err(|e| formatter_error(format, e))?
            },
            OutputFormat::Turtle => {
                let mut formatter = TurtleFormatter::new(Vec::new());
                self.format_triples(&mut formatter)?;
                formatter.finish().map_err(|e| formatter_error(format, e))?
            },
        };

        String::from_utf8(bytes).map_err(|e| formatter_error(format, e))
    }

    /// Serialize the graph and write it to `path`
    ///
    /// Nothing is written unless serialization succeeds.
    pub fn generate_to_file(&self, path: &Path, format: OutputFormat) -> Result<()> {
        let rendered = self.render(format)?;

        fs::write(path, &rendered).map_err(|e| {
            ConvertError::write(
                path.display().to_string(),
                format!("Failed to write output: {}", e),
            )
        })?;

        info!(path = %path.display(), bytes = rendered.len(), %format, "wrote graph");
        Ok(())
    }

    fn format_triples<F: TriplesFormatter>(&self, formatter: &mut F) -> Result<()> {
        for (subject, triples) in self.graph.grouped_by_subject() {
            for triple in triples {
                formatter.format(&rio_triple(triple)).map_err(|e| {
                    ConvertError::write(subject.as_str(), format!("cannot serialize triple: {}", e))
                })?;
            }
        }
        Ok(())
    }
}

fn rio_triple(triple: &Triple) -> model::Triple<'_> {
    let object = match triple.object {
        Term::Iri(ref iri) => model::Term::NamedNode(model::NamedNode { iri: iri.as_str() }),
        Term::Literal(ref literal) => model::Term::Literal(rio_literal(literal)),
    };

    model::Triple {
        subject: model::Subject::NamedNode(model::NamedNode {
            iri: triple.subject.as_str(),
        }),
        predicate: model::NamedNode {
            iri: triple.predicate.as_str(),
        },
        object,
    }
}

fn rio_literal(literal: &Literal) -> model::Literal<'_> {
    match literal.datatype() {
        None => model::Literal::Simple {
            value: literal.lexical(),
        },
        Some(datatype) => model::Literal::Typed {
            value: literal.lexical(),
            datatype: model::NamedNode { iri: datatype },
        },
    }
}

fn formatter_error(format: OutputFormat, e: impl fmt::Display) -> ConvertError {
    ConvertError::write(format.to_string(), format!("serialization failed: {}", e))
}

/// Whether XML 1.0 can represent `c` at all
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Reject literals holding characters outside the XML 1.0 character set
fn check_xml(graph: &Graph) -> Result<()> {
    for triple in graph.iter() {
        let Some(literal) = triple.object.as_literal() else {
            continue;
        };
        if let Some(c) = literal.lexical().chars().find(|&c| !is_xml_char(c)) {
            return Err(ConvertError::write(
                triple.subject.as_str(),
                format!(
                    "value contains U+{:04X}, which XML 1.0 cannot represent",
                    c as u32
                ),
            ));
        }
    }
    Ok(())
}

/// Serialize a graph to a file (convenience function)
pub fn generate_rdf(graph: Graph, output_path: &Path, format: OutputFormat) -> Result<()> {
    RdfGenerator::new(graph).generate_to_file(output_path, format)
}
