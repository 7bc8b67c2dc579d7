//! JSON Pointers and the IRIs minted from them
//!
//! Every resource in the graph is named by the JSON Pointer of the document
//! node it came from: the base IRI followed by the pointer's segments, each
//! percent-encoded. Two distinct nodes therefore never share an IRI, and a
//! `$ref` resolves to exactly the IRI of the node it points at.

use openapi_rdf_common::Iri;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters left as-is in an IRI segment. `.` is encoded so that `.` and
/// `..` segments cannot be removed by IRI normalisation.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Percent-encode one IRI path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Parsed JSON Pointer (RFC 6901)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    /// Pointer to the document root
    pub fn root() -> Self {
        Self::default()
    }

    /// Pointer to a child of this node
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Parse a pointer such as `/paths/~1pets`
    pub fn parse(pointer: &str) -> Option<Self> {
        if pointer.is_empty() {
            return Some(Self::root());
        }
        let rest = pointer.strip_prefix('/')?;
        let segments = rest
            .split('/')
            .map(|s| s.replace("~1", "/").replace("~0", "~"))
            .collect();
        Some(Self { segments })
    }

    /// Parse the fragment of a local reference such as `#/components/schemas/Pet`
    ///
    /// Returns `None` for references that are not document-local or whose
    /// fragment is not a JSON Pointer.
    pub fn from_reference(reference: &str) -> Option<Self> {
        let fragment = reference.strip_prefix('#')?;
        let decoded = percent_decode_str(fragment).decode_utf8().ok()?;
        Self::parse(&decoded)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether this pointer equals or lies below `ancestor`
    pub fn starts_with(&self, ancestor: &JsonPointer) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// Escaped pointer string, as accepted by `serde_json::Value::pointer`
    pub fn as_pointer_string(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("/{}", s.replace('~', "~0").replace('/', "~1")))
            .collect()
    }

    /// IRI of the node under `base`
    pub fn to_iri(&self, base: &Iri) -> Iri {
        let suffix = self
            .segments
            .iter()
            .map(|s| encode_segment(s))
            .collect::<Vec<_>>()
            .join("/");
        base.join(&suffix)
    }
}

impl fmt::Display for JsonPointer {
    /// Fragment form (`#/paths/~1pets/get`), used in error locations
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_pointer_string())
    }
}
