//! Swagger 2.0 / OpenAPI 3.x document loading and mapping
//!
//! Loads JSON API documents into a typed model and maps them to an RDF graph
//! in the `api` vocabulary.
//!
//! ## Resource naming
//! Each resource is named by the JSON Pointer of the node it came from,
//! appended to the base IRI with every segment percent-encoded:
//!
//! - `#/paths/~1pets/get` → `<base>paths/%2Fpets/get`
//! - `#/components/schemas/Pet` → `<base>components/schemas/Pet`
//!
//! The base IRI is `https://w3id.org/api/<slug of info.title>/` unless one
//! is given in [`MapperOptions`].
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_rdf_parser::openapi::{ApiLoader, MapperOptions};
//!
//! let loader = ApiLoader::from_file("petstore.json")?;
//! let graph = loader.map(&MapperOptions::default())?;
//! ```

mod converter;
mod parser;
mod pointer;
mod types;

pub use converter::{
    base_iri, json_literal, slug, template_variables, GraphMapper, MapperOptions,
    DEFAULT_BASE_PREFIX,
};
pub use parser::ApiLoader;
pub use pointer::{encode_segment, JsonPointer};
pub use types::*;
