//! Type mapping from schema types to XML Schema datatypes
//!
//! Maps a JSON Schema primitive `type` plus optional `format` to the XSD
//! datatype IRI stored as `api:datatype` on the schema resource.

use openapi_rdf_common::vocab::xsd;

/// Maps schema type names to XSD datatypes
pub struct TypeMapper;

impl TypeMapper {
    /// XSD datatype for a primitive schema type
    ///
    /// Returns `None` for structural types (`object`, `array`, `null`) and
    /// unknown type names. A recognised `format` wins over the base type.
    ///
    /// # Examples
    /// ```
    /// use openapi_rdf_parser::TypeMapper;
    /// use openapi_rdf_common::vocab::xsd;
    ///
    /// assert_eq!(TypeMapper::xsd_datatype("string", None), Some(xsd::STRING));
    /// assert_eq!(TypeMapper::xsd_datatype("string", Some("date-time")), Some(xsd::DATE_TIME));
    /// assert_eq!(TypeMapper::xsd_datatype("integer", Some("int64")), Some(xsd::LONG));
    /// assert_eq!(TypeMapper::xsd_datatype("object", None), None);
    /// ```
    pub fn xsd_datatype(schema_type: &str, format: Option<&str>) -> Option<&'static str> {
        let base = match schema_type {
            "string" => xsd::STRING,
            "integer" => xsd::INTEGER,
            "number" => xsd::DECIMAL,
            "boolean" => xsd::BOOLEAN,
            _ => return None,
        };

        Some(
            format
                .and_then(|f| Self::format_datatype(schema_type, f))
                .unwrap_or(base),
        )
    }

    /// Datatype implied by a `format`, if it fits the base type
    fn format_datatype(schema_type: &str, format: &str) -> Option<&'static str> {
        match (schema_type, format) {
            ("string", "date") => Some(xsd::DATE),
            ("string", "date-time") => Some(xsd::DATE_TIME),
            ("string", "time") => Some(xsd::TIME),
            ("string", "duration") => Some(xsd::DURATION),
            ("string", "uri" | "url" | "uri-reference" | "iri" | "iri-reference") => {
                Some(xsd::ANY_URI)
            },
            ("string", "byte") => Some(xsd::BASE64_BINARY),
            ("string", "binary") => Some(xsd::HEX_BINARY),
            ("integer", "int32") => Some(xsd::INT),
            ("integer", "int64") => Some(xsd::LONG),
            ("number", "float") => Some(xsd::FLOAT),
            ("number", "double") => Some(xsd::DOUBLE),
            _ => None,
        }
    }
}
