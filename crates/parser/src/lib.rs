//! API document parsing and mapping for openapi-rdf
//!
//! This crate loads Swagger 2.0 and OpenAPI 3.x JSON documents and maps them
//! onto an RDF [`Graph`] in the `api` vocabulary.
//!
//! ## Mapping Strategy
//!
//! Every information-bearing node of the document becomes a named resource:
//! - The document root becomes an `api:Document` / `owl:Ontology`
//! - Paths, operations, parameters, bodies and responses are linked in
//!   document order (`api:position` where order matters)
//! - Schemas keep their structure, annotations and XSD datatypes
//! - `$ref` is kept as `api:refersTo`; each definition is mapped once

pub mod openapi;
mod operation_mapper;
mod stats;
mod type_mapper;

pub use openapi::{ApiLoader, MapperOptions};
pub use operation_mapper::{HttpMethod, StatusClass};
pub use stats::GraphStats;
pub use type_mapper::TypeMapper;

use openapi_rdf_common::{Graph, Result};
use std::path::Path;

/// Load an API document from disk and map it to a graph
///
/// # Arguments
/// * `path` - Path of a Swagger 2.0 / OpenAPI 3.x JSON document
/// * `options` - Mapping options (base IRI)
///
/// # Returns
/// * `Graph` - The mapped triples, in deterministic order
pub fn map_file<P: AsRef<Path>>(path: P, options: &MapperOptions) -> Result<Graph> {
    ApiLoader::from_file(path)?.map(options)
}
