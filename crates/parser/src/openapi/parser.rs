//! API document loader

use super::converter::{GraphMapper, MapperOptions};
use super::types::ApiDocument;
use openapi_rdf_common::{ConvertError, Graph, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Swagger 2.0 / OpenAPI 3.x document loader
///
/// Holds the typed document together with the raw JSON tree, which is
/// needed to check that `$ref` targets exist.
pub struct ApiLoader {
    /// Typed document
    document: ApiDocument,

    /// Untyped JSON tree of the same document
    raw: Value,

    /// Where the document came from, used in error locations
    source: String,
}

impl ApiLoader {
    /// Load an API document from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let loader = ApiLoader::from_file("petstore.json")?;
    /// let graph = loader.map(&MapperOptions::default())?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConvertError::parse(
                path.display().to_string(),
                format!("Failed to read API document: {}", e),
            )
        })?;

        Self::from_source(&content, &path.display().to_string())
    }

    /// Parse an API document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_source(json, "<input>")
    }

    fn from_source(json: &str, source: &str) -> Result<Self> {
        let locate = |e: serde_json::Error| {
            ConvertError::parse(
                format!("{}:{}:{}", source, e.line(), e.column()),
                format!("Failed to parse API document: {}", e),
            )
        };

        let raw: Value = serde_json::from_str(json).map_err(locate)?;
        if !raw.is_object() {
            return Err(ConvertError::parse(
                source,
                "API document must be a JSON object",
            ));
        }
        let document: ApiDocument = serde_json::from_str(json).map_err(locate)?;

        if document.spec_version().is_none() {
            debug!(source, "document declares neither `openapi` nor `swagger`");
        }

        Ok(Self {
            document,
            raw,
            source: source.to_string(),
        })
    }

    /// Map the document to an RDF graph
    pub fn map(&self, options: &MapperOptions) -> Result<Graph> {
        GraphMapper::new(&self.document, &self.raw, options)?.map()
    }

    /// Get reference to the typed document
    pub fn document(&self) -> &ApiDocument {
        &self.document
    }

    /// Get reference to the raw JSON tree
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
