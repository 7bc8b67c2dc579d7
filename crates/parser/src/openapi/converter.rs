//! Converts an API document to an RDF graph
//!
//! Every node of the document that carries information becomes a named
//! resource whose IRI is derived from its JSON Pointer (see [`JsonPointer`]).
//! `$ref` nodes are kept as `api:refersTo` links to the referenced resource.
//! Reusable definitions are mapped exactly once, the first time they are
//! reached; a definition that is reached again while it is still being mapped
//! (a cycle) only produces the link.

use super::pointer::{encode_segment, JsonPointer};
use super::types::{
    ApiDocument, Header, MediaType, Operation, Parameter, PathItem, RefOr, RequestBody,
    Response, Schema, SchemaOrBool, SecurityRequirement, SecurityScheme,
};
use crate::operation_mapper::{HttpMethod, StatusClass};
use crate::type_mapper::TypeMapper;
use indexmap::{IndexMap, IndexSet};
use openapi_rdf_common::vocab::{api, owl, rdf, rdfs, xsd};
use openapi_rdf_common::{ConvertError, Graph, Iri, Literal, Result};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Prefix of the base IRI derived from the document title
pub const DEFAULT_BASE_PREFIX: &str = "https://w3id.org/api/";

/// Mapping options
#[derive(Debug, Clone, Default)]
pub struct MapperOptions {
    /// Base IRI for minted resources; derived from the title when unset
    pub base_iri: Option<String>,

    /// Also declare the `api` classes and properties the graph uses
    pub vocabulary: bool,
}

impl MapperOptions {
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: bool) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}

/// Base IRI for a document
///
/// An explicit base gets a trailing `/` unless it already ends in `/` or `#`,
/// and must then be an absolute IRI.
pub fn base_iri(doc: &ApiDocument, options: &MapperOptions) -> Result<Iri> {
    let base = match options.base_iri {
        Some(ref base) if base.ends_with('/') || base.ends_with('#') => base.clone(),
        Some(ref base) => format!("{}/", base),
        None => format!(
            "{}{}/",
            DEFAULT_BASE_PREFIX,
            slug(doc.title().unwrap_or_default())
        ),
    };

    Iri::new(base.as_str()).map_err(|e| {
        ConvertError::mapping(base.as_str(), format!("invalid base IRI: {}", e))
    })
}

/// IRI-safe slug of a title: lower case, runs of spaces, `/` and `-`
/// collapsed to a single `-`, anything else outside `[a-z0-9_-]` dropped
pub fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        let c = match c {
            ' ' | '/' => '-',
            c => c.to_ascii_lowercase(),
        };
        if c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }

    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "api".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Template variables of a path, e.g. `petId` in `/pets/{petId}`
pub fn template_variables(template: &str) -> Vec<&str> {
    static TEMPLATE_VARIABLE: OnceLock<Regex> = OnceLock::new();
    let re = TEMPLATE_VARIABLE
        .get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("template variable pattern is valid"));

    re.captures_iter(template)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Literal for an arbitrary JSON value
///
/// Strings stay plain, numbers and booleans get an XSD datatype, and
/// everything else is kept verbatim as an `rdf:JSON` literal.
pub fn json_literal(value: &Value) -> Literal {
    match value {
        Value::String(s) => Literal::string(s.as_str()),
        Value::Bool(b) => Literal::boolean(*b),
        Value::Number(n) if n.is_i64() || n.is_u64() => Literal::typed(n.to_string(), xsd::INTEGER),
        Value::Number(n) => Literal::typed(n.to_string(), xsd::DOUBLE),
        other => Literal::json(other.to_string()),
    }
}

/// Reusable definition addressable by `$ref`
#[derive(Clone, Copy)]
enum Definition<'a> {
    Schema(&'a str, &'a SchemaOrBool),
    Parameter(&'a RefOr<Parameter>),
    RequestBody(&'a RefOr<RequestBody>),
    Response(&'a RefOr<Response>),
    Header(&'a str, &'a RefOr<Header>),
    SecurityScheme(&'a str, &'a SecurityScheme),
}

/// Maps one API document to a graph
pub struct GraphMapper<'a> {
    doc: &'a ApiDocument,
    raw: &'a Value,
    base: Iri,
    graph: Graph,

    /// Reusable definitions by pointer, in document order
    definitions: IndexMap<JsonPointer, Definition<'a>>,

    /// Definitions already mapped or being mapped
    visited: HashSet<JsonPointer>,

    /// Declared tag name → tag resource
    tags: IndexMap<String, Iri>,

    vocabulary: bool,
}

impl<'a> GraphMapper<'a> {
    pub fn new(doc: &'a ApiDocument, raw: &'a Value, options: &MapperOptions) -> Result<Self> {
        Ok(Self {
            doc,
            raw,
            base: base_iri(doc, options)?,
            graph: Graph::new(),
            definitions: collect_definitions(doc),
            visited: HashSet::new(),
            tags: IndexMap::new(),
            vocabulary: options.vocabulary,
        })
    }

    /// Map the whole document
    pub fn map(mut self) -> Result<Graph> {
        info!(base = self.base.as_str(), "mapping API document");

        let doc = self.doc;
        let root = self.base.clone();
        let root_ptr = JsonPointer::root();

        self.map_document(&root);
        self.map_servers(&root);
        self.map_tags(&root);

        let schemes: Vec<JsonPointer> = self
            .definitions
            .iter()
            .filter(|(_, d)| matches!(d, Definition::SecurityScheme(..)))
            .map(|(p, _)| p.clone())
            .collect();
        for scheme in &schemes {
            self.ensure_definition(scheme)?;
        }

        if let Some(ref requirements) = doc.security {
            self.map_security(&root, &root_ptr.child("security"), requirements)?;
        }

        for (template, item) in &doc.paths {
            self.map_path(&root, template, item)?;
        }

        // Definitions no operation refers to
        let pending: Vec<JsonPointer> = self.definitions.keys().cloned().collect();
        for definition in &pending {
            self.ensure_definition(definition)?;
        }

        if let Some(ref components) = doc.components {
            self.map_extensions(&root, &root_ptr.child("components"), &components.extensions);
        }
        self.map_extensions(&root, &root_ptr, &doc.extensions);

        if self.vocabulary {
            self.declare_vocabulary();
        }

        info!(triples = self.graph.len(), "mapping complete");
        Ok(self.graph)
    }

    fn iri(&self, ptr: &JsonPointer) -> Iri {
        ptr.to_iri(&self.base)
    }

    fn typed(&mut self, node: &Iri, class: &str) {
        self.graph.insert(node, rdf::TYPE, Iri::vocab(class));
    }

    fn string(&mut self, node: &Iri, predicate: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.graph.insert(node, predicate, Literal::string(value));
        }
    }

    fn flag(&mut self, node: &Iri, predicate: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.graph.insert(node, predicate, Literal::boolean(value));
        }
    }

    fn position(&mut self, node: &Iri, position: usize) {
        self.graph
            .insert(node, api::POSITION, Literal::integer(position as i64));
    }

    fn map_document(&mut self, root: &Iri) {
        let doc = self.doc;

        self.typed(root, api::DOCUMENT);
        self.typed(root, owl::ONTOLOGY);
        self.string(root, api::SPEC_VERSION, doc.spec_version());

        if let Some(ref info) = doc.info {
            self.string(root, api::TITLE, info.title.as_deref());
            self.string(root, rdfs::LABEL, info.title.as_deref());
            self.string(root, api::VERSION, info.version.as_deref());
            if let Some(ref version) = info.version {
                let version_iri = root.join(&format!("{}/", encode_segment(version)));
                self.graph
                    .insert(root, owl::VERSION_INFO, Literal::string(version.as_str()));
                self.graph.insert(root, owl::VERSION_IRI, version_iri);
            }
            self.string(root, api::DESCRIPTION, info.description.as_deref());
            self.string(root, api::TERMS_OF_SERVICE, info.terms_of_service.as_deref());

            let info_ptr = JsonPointer::root().child("info");
            if let Some(ref contact) = info.contact {
                self.string(root, api::CONTACT_NAME, contact.name.as_deref());
                self.string(root, api::CONTACT_EMAIL, contact.email.as_deref());
                self.string(root, api::CONTACT_URL, contact.url.as_deref());
                self.map_extensions(root, &info_ptr.child("contact"), &contact.extensions);
            }
            if let Some(ref license) = info.license {
                self.string(root, api::LICENSE_NAME, license.name.as_deref());
                self.string(root, api::LICENSE_URL, license.url.as_deref());
                self.map_extensions(root, &info_ptr.child("license"), &license.extensions);
            }

            self.map_extensions(root, &info_ptr, &info.extensions);
        }

        self.string(root, api::HOST, doc.host.as_deref());
        self.string(root, api::BASE_PATH, doc.base_path.as_deref());
        for scheme in &doc.schemes {
            self.graph.insert(root, api::URI_SCHEME, Literal::string(scheme.as_str()));
        }
        self.map_media_types(root, &doc.consumes, &doc.produces);
    }

    fn map_media_types(&mut self, node: &Iri, consumes: &[String], produces: &[String]) {
        for media_type in consumes {
            self.graph.insert(node, api::CONSUMES, Literal::string(media_type.as_str()));
        }
        for media_type in produces {
            self.graph.insert(node, api::PRODUCES, Literal::string(media_type.as_str()));
        }
    }

    fn map_servers(&mut self, root: &Iri) {
        let doc = self.doc;
        let ptr = JsonPointer::root().child("servers");
        for (position, server) in doc.servers.iter().enumerate() {
            let server_ptr = ptr.child(position);
            let node = self.iri(&server_ptr);

            self.graph.insert(root, api::HAS_SERVER, &node);
            self.typed(&node, api::SERVER);
            self.graph.insert(&node, api::URL, Literal::string(server.url.as_str()));
            self.string(&node, api::DESCRIPTION, server.description.as_deref());
            self.position(&node, position);
            self.map_extensions(&node, &server_ptr, &server.extensions);
        }
    }

    fn map_tags(&mut self, root: &Iri) {
        let doc = self.doc;
        let ptr = JsonPointer::root().child("tags");
        for (position, tag) in doc.tags.iter().enumerate() {
            let tag_ptr = ptr.child(position);
            let node = self.iri(&tag_ptr);

            self.graph.insert(root, api::HAS_TAG_DEFINITION, &node);
            self.typed(&node, api::TAG);
            self.graph.insert(&node, api::TAG_NAME, Literal::string(tag.name.as_str()));
            self.string(&node, api::DESCRIPTION, tag.description.as_deref());
            self.position(&node, position);
            self.map_extensions(&node, &tag_ptr, &tag.extensions);

            self.tags.entry(tag.name.clone()).or_insert(node);
        }
    }

    /// Declare every `api` class and property used in the graph
    ///
    /// Properties outside the fixed term lists are schema annotations and
    /// become `owl:AnnotationProperty`.
    fn declare_vocabulary(&mut self) {
        let mut classes: IndexSet<Iri> = IndexSet::new();
        let mut properties: IndexSet<Iri> = IndexSet::new();
        for triple in self.graph.iter() {
            if triple.predicate.as_str().starts_with(api::NS) {
                properties.insert(triple.predicate.clone());
            }
            if triple.predicate.as_str() == rdf::TYPE {
                if let Some(class) = triple.object.as_iri() {
                    if api::CLASSES.contains(&class.as_str()) {
                        classes.insert(class.clone());
                    }
                }
            }
        }
        debug!(
            classes = classes.len(),
            properties = properties.len(),
            "declaring vocabulary"
        );

        for class in &classes {
            self.declare_term(class, owl::CLASS);
        }
        for property in &properties {
            let kind = if api::OBJECT_PROPERTIES.contains(&property.as_str()) {
                owl::OBJECT_PROPERTY
            } else if api::DATATYPE_PROPERTIES.contains(&property.as_str()) {
                owl::DATATYPE_PROPERTY
            } else {
                owl::ANNOTATION_PROPERTY
            };
            self.declare_term(property, kind);
        }
    }

    fn declare_term(&mut self, term: &Iri, kind: &str) {
        self.typed(term, kind);
        if let Some(local) = term.as_str().strip_prefix(api::NS) {
            self.graph.insert(term, rdfs::LABEL, Literal::string(local));
        }
    }

    /// Unrecognised members of an object, as `api:Extension` resources
    fn map_extensions<'e>(
        &mut self,
        owner: &Iri,
        ptr: &JsonPointer,
        members: impl IntoIterator<Item = (&'e String, &'e Value)>,
    ) {
        for (name, value) in members {
            let node = self.iri(&ptr.child(name));
            self.graph.insert(owner, api::HAS_EXTENSION, &node);
            self.typed(&node, api::EXTENSION);
            self.graph.insert(&node, api::EXTENSION_NAME, Literal::string(name.as_str()));
            self.graph.insert(&node, rdf::VALUE, Literal::json(value.to_string()));
        }
    }

    /// Map a reusable definition unless it has been reached before
    fn ensure_definition(&mut self, ptr: &JsonPointer) -> Result<()> {
        if !self.visited.insert(ptr.clone()) {
            debug!(pointer = %ptr, "definition already mapped");
            return Ok(());
        }

        let Some(definition) = self.definitions.get(ptr).copied() else {
            return Err(ConvertError::mapping(ptr.to_string(), "not a reusable definition"));
        };

        debug!(pointer = %ptr, "mapping definition");
        let root = self.base.clone();
        let node = self.iri(ptr);

        match definition {
            Definition::Schema(name, schema) => {
                self.graph.insert(&root, api::HAS_SCHEMA_DEFINITION, &node);
                self.graph.insert(&node, api::SCHEMA_NAME, Literal::string(name));
                self.graph.insert(&node, rdfs::LABEL, Literal::string(name));
                self.map_schema_or_bool(&node, ptr, schema)
            },
            Definition::Parameter(param) => {
                self.graph.insert(&root, api::HAS_COMPONENT, &node);
                self.map_parameter_ref(&node, ptr, param)
            },
            Definition::RequestBody(body) => {
                self.graph.insert(&root, api::HAS_COMPONENT, &node);
                self.map_request_body_ref(&node, ptr, body)
            },
            Definition::Response(response) => {
                self.graph.insert(&root, api::HAS_COMPONENT, &node);
                self.map_response_ref(&node, ptr, response)
            },
            Definition::Header(name, header) => {
                self.graph.insert(&root, api::HAS_COMPONENT, &node);
                self.map_header_ref(&node, ptr, name, header)
            },
            Definition::SecurityScheme(name, scheme) => {
                self.graph.insert(&root, api::HAS_SECURITY_SCHEME, &node);
                self.map_security_scheme(&node, ptr, name, scheme);
                Ok(())
            },
        }
    }

    /// Resolve a `$ref` to the IRI of its target, mapping the enclosing
    /// definition first if needed
    fn resolve_reference(&mut self, reference: &str, at: &JsonPointer) -> Result<Iri> {
        let target = JsonPointer::from_reference(reference).ok_or_else(|| {
            ConvertError::mapping(
                at.to_string(),
                format!(
                    "unsupported reference '{}': only local JSON Pointer references are supported",
                    reference
                ),
            )
        })?;

        if self.raw.pointer(&target.as_pointer_string()).is_none() {
            return Err(ConvertError::mapping(
                at.to_string(),
                format!("unresolved reference '{}'", reference),
            ));
        }

        let owner = self
            .definitions
            .keys()
            .find(|definition| target.starts_with(definition))
            .cloned();

        match owner {
            Some(definition) => self.ensure_definition(&definition)?,
            None if target.segments().first().map(String::as_str) == Some("paths") => {},
            None => {
                return Err(ConvertError::mapping(
                    at.to_string(),
                    format!(
                        "reference '{}' does not point into paths or a reusable definition",
                        reference
                    ),
                ))
            },
        }

        Ok(self.iri(&target))
    }

    fn map_reference(&mut self, node: &Iri, ptr: &JsonPointer, reference: &str) -> Result<()> {
        let target = self.resolve_reference(reference, ptr)?;
        self.graph.insert(node, api::REFERS_TO, target);
        Ok(())
    }

    fn map_path(&mut self, root: &Iri, template: &str, item: &PathItem) -> Result<()> {
        let ptr = JsonPointer::root().child("paths").child(template);
        let node = self.iri(&ptr);
        debug!(path = template, "mapping path");

        self.graph.insert(root, api::HAS_PATH, &node);
        self.typed(&node, api::PATH);
        self.graph.insert(&node, api::PATH_TEMPLATE, Literal::string(template));
        for variable in template_variables(template) {
            self.graph.insert(&node, api::TEMPLATE_VARIABLE, Literal::string(variable));
        }
        self.string(&node, api::SUMMARY, item.summary.as_deref());
        self.string(&node, api::DESCRIPTION, item.description.as_deref());

        if let Some(ref reference) = item.ref_path {
            self.map_reference(&node, &ptr, reference)?;
        }

        self.map_parameters(&node, &ptr.child("parameters"), &item.parameters)?;

        for (method, operation) in item.operations() {
            self.map_operation(&node, &ptr, method, operation)?;
        }

        for key in item.extensions.keys() {
            if HttpMethod::from_key(&key.to_ascii_lowercase()).is_some() {
                warn!(key = key.as_str(), pointer = %ptr, "method keys are lower case; kept as an extension");
            }
        }
        self.map_extensions(&node, &ptr, &item.extensions);
        Ok(())
    }

    fn map_operation(
        &mut self,
        path: &Iri,
        path_ptr: &JsonPointer,
        method: HttpMethod,
        op: &Operation,
    ) -> Result<()> {
        let ptr = path_ptr.child(method.key());
        let node = self.iri(&ptr);
        debug!(method = %method, operation_id = ?op.operation_id, "mapping operation");

        self.graph.insert(path, api::HAS_OPERATION, &node);
        self.typed(&node, api::OPERATION);
        self.graph
            .insert(&node, api::HTTP_METHOD, Literal::string(method.as_upper()));
        self.string(&node, api::OPERATION_ID, op.operation_id.as_deref());
        self.string(&node, api::SUMMARY, op.summary.as_deref());
        self.string(&node, api::DESCRIPTION, op.description.as_deref());
        self.flag(&node, api::DEPRECATED, op.deprecated);

        for tag in &op.tags {
            self.graph.insert(&node, api::TAG_LITERAL, Literal::string(tag.as_str()));
            if let Some(tag_node) = self.tags.get(tag).cloned() {
                self.graph.insert(&node, api::HAS_TAG, tag_node);
            }
        }

        self.map_media_types(&node, &op.consumes, &op.produces);
        self.map_parameters(&node, &ptr.child("parameters"), &op.parameters)?;

        if let Some(ref body) = op.request_body {
            let body_ptr = ptr.child("requestBody");
            let body_node = self.iri(&body_ptr);
            self.graph.insert(&node, api::HAS_REQUEST_BODY, &body_node);
            self.map_request_body_ref(&body_node, &body_ptr, body)?;
        }

        let responses_ptr = ptr.child("responses");
        for (status, response) in &op.responses {
            let response_ptr = responses_ptr.child(status);
            let response_node = self.iri(&response_ptr);

            self.graph.insert(&node, api::HAS_RESPONSE, &response_node);
            self.graph
                .insert(&response_node, api::STATUS_CODE, Literal::string(status.as_str()));
            match StatusClass::classify(status) {
                Some(class) => self.typed(&response_node, class.class_iri()),
                None => warn!(status = status.as_str(), pointer = %response_ptr, "unrecognised response status"),
            }
            self.map_response_ref(&response_node, &response_ptr, response)?;
        }

        if let Some(ref requirements) = op.security {
            self.map_security(&node, &ptr.child("security"), requirements)?;
        }

        self.map_extensions(&node, &ptr, &op.extensions);
        Ok(())
    }

    fn map_parameters(
        &mut self,
        owner: &Iri,
        ptr: &JsonPointer,
        params: &[RefOr<Parameter>],
    ) -> Result<()> {
        for (position, param) in params.iter().enumerate() {
            let param_ptr = ptr.child(position);
            let node = self.iri(&param_ptr);

            self.graph.insert(owner, api::HAS_PARAMETER, &node);
            self.position(&node, position);
            self.map_parameter_ref(&node, &param_ptr, param)?;
        }
        Ok(())
    }

    fn map_parameter_ref(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        param: &RefOr<Parameter>,
    ) -> Result<()> {
        self.typed(node, api::PARAMETER);
        match param {
            RefOr::Ref { ref_path } => self.map_reference(node, ptr, ref_path),
            RefOr::Item(param) => self.map_parameter(node, ptr, param),
        }
    }

    fn map_parameter(&mut self, node: &Iri, ptr: &JsonPointer, param: &Parameter) -> Result<()> {
        self.graph
            .insert(node, api::PARAMETER_NAME, Literal::string(param.name.as_str()));
        self.graph
            .insert(node, api::PARAMETER_IN, Literal::string(param.location.as_str()));
        self.graph
            .insert(node, api::REQUIRED, Literal::boolean(param.required));
        self.string(node, api::DESCRIPTION, param.description.as_deref());
        self.flag(node, api::DEPRECATED, param.deprecated);
        self.string(node, api::COLLECTION_FORMAT, param.collection_format.as_deref());
        if let Some(ref example) = param.example {
            self.graph.insert(node, api::EXAMPLE, json_literal(example));
        }

        let inline = param.inline_schema().map(SchemaOrBool::from);
        if let Some(schema) = param.schema.as_ref().or(inline.as_ref()) {
            self.map_schema_slot(node, &ptr.child("schema"), schema)?;
        }

        self.map_extensions(node, ptr, &param.extensions);
        Ok(())
    }

    /// Link `owner` to a schema node via `api:hasSchema` and map it
    fn map_schema_slot(
        &mut self,
        owner: &Iri,
        ptr: &JsonPointer,
        schema: &SchemaOrBool,
    ) -> Result<()> {
        let node = self.iri(ptr);
        self.graph.insert(owner, api::HAS_SCHEMA, &node);
        self.map_schema_or_bool(&node, ptr, schema)
    }

    fn map_request_body_ref(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        body: &RefOr<RequestBody>,
    ) -> Result<()> {
        self.typed(node, api::REQUEST_BODY);
        let body = match body {
            RefOr::Ref { ref_path } => return self.map_reference(node, ptr, ref_path),
            RefOr::Item(body) => body,
        };

        self.graph
            .insert(node, api::REQUIRED, Literal::boolean(body.required));
        self.string(node, api::DESCRIPTION, body.description.as_deref());
        self.map_content(node, &ptr.child("content"), &body.content)?;
        self.map_extensions(node, ptr, &body.extensions);
        Ok(())
    }

    fn map_content(
        &mut self,
        owner: &Iri,
        ptr: &JsonPointer,
        content: &IndexMap<String, MediaType>,
    ) -> Result<()> {
        for (position, (media_type, media)) in content.iter().enumerate() {
            let media_ptr = ptr.child(media_type);
            let node = self.iri(&media_ptr);

            self.graph.insert(owner, api::HAS_CONTENT, &node);
            self.typed(&node, api::MEDIA_TYPE);
            self.graph
                .insert(&node, api::MEDIA_TYPE_NAME, Literal::string(media_type.as_str()));
            self.position(&node, position);

            if let Some(ref schema) = media.schema {
                self.map_schema_slot(&node, &media_ptr.child("schema"), schema)?;
            }
            if let Some(ref example) = media.example {
                self.graph.insert(&node, api::EXAMPLE, json_literal(example));
            }
            self.map_extensions(&node, &media_ptr, &media.extensions);
        }
        Ok(())
    }

    fn map_response_ref(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        response: &RefOr<Response>,
    ) -> Result<()> {
        self.typed(node, api::RESPONSE);
        let response = match response {
            RefOr::Ref { ref_path } => return self.map_reference(node, ptr, ref_path),
            RefOr::Item(response) => response,
        };

        self.string(node, api::DESCRIPTION, response.description.as_deref());
        self.map_content(node, &ptr.child("content"), &response.content)?;
        if let Some(ref schema) = response.schema {
            self.map_schema_slot(node, &ptr.child("schema"), schema)?;
        }

        let headers_ptr = ptr.child("headers");
        for (name, header) in &response.headers {
            let header_ptr = headers_ptr.child(name);
            let header_node = self.iri(&header_ptr);
            self.graph.insert(node, api::HAS_HEADER, &header_node);
            self.map_header_ref(&header_node, &header_ptr, name, header)?;
        }

        self.map_extensions(node, ptr, &response.extensions);
        Ok(())
    }

    fn map_header_ref(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        name: &str,
        header: &RefOr<Header>,
    ) -> Result<()> {
        self.typed(node, api::HEADER);
        self.graph.insert(node, api::HEADER_NAME, Literal::string(name));
        let header = match header {
            RefOr::Ref { ref_path } => return self.map_reference(node, ptr, ref_path),
            RefOr::Item(header) => header,
        };

        self.string(node, api::DESCRIPTION, header.description.as_deref());
        self.graph
            .insert(node, api::REQUIRED, Literal::boolean(header.required));

        let inline = header.inline_schema().map(SchemaOrBool::from);
        if let Some(schema) = header.schema.as_ref().or(inline.as_ref()) {
            self.map_schema_slot(node, &ptr.child("schema"), schema)?;
        }

        self.map_extensions(node, ptr, &header.extensions);
        Ok(())
    }

    /// A boolean schema is a typed node carrying only its value
    fn map_schema_or_bool(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        schema: &SchemaOrBool,
    ) -> Result<()> {
        match schema {
            SchemaOrBool::Bool(value) => {
                self.typed(node, api::SCHEMA);
                self.graph
                    .insert(node, api::BOOLEAN_SCHEMA, Literal::boolean(*value));
                Ok(())
            },
            SchemaOrBool::Schema(schema) => self.map_schema(node, ptr, schema),
        }
    }

    fn map_schema(&mut self, node: &Iri, ptr: &JsonPointer, schema: &Schema) -> Result<()> {
        self.typed(node, api::SCHEMA);

        if let Some(ref reference) = schema.ref_path {
            self.map_reference(node, ptr, reference)?;
        }

        for type_name in schema.type_names() {
            self.graph
                .insert(node, api::SCHEMA_TYPE, Literal::string(type_name));
            if let Some(datatype) = TypeMapper::xsd_datatype(type_name, schema.format.as_deref()) {
                self.graph.insert(node, api::DATATYPE, Iri::vocab(datatype));
            }
        }
        self.string(node, api::FORMAT, schema.format.as_deref());

        let properties_ptr = ptr.child("properties");
        for (position, (name, property)) in schema.properties.iter().enumerate() {
            let property_ptr = properties_ptr.child(name);
            let property_node = self.iri(&property_ptr);

            self.graph.insert(node, api::HAS_PROPERTY, &property_node);
            self.graph
                .insert(&property_node, api::PROPERTY_NAME, Literal::string(name.as_str()));
            self.graph.insert(
                &property_node,
                api::REQUIRED,
                Literal::boolean(schema.required.contains(name)),
            );
            self.position(&property_node, position);
            self.map_schema_or_bool(&property_node, &property_ptr, property)?;
        }
        for name in &schema.required {
            if !schema.properties.contains_key(name) {
                self.graph
                    .insert(node, api::REQUIRED_PROPERTY, Literal::string(name.as_str()));
            }
        }

        if let Some(ref items) = schema.items {
            let items_ptr = ptr.child("items");
            let items_node = self.iri(&items_ptr);
            self.graph.insert(node, api::HAS_ITEM_TYPE, &items_node);
            self.map_schema_or_bool(&items_node, &items_ptr, items)?;
        }

        match schema.additional_properties {
            Some(SchemaOrBool::Bool(allowed)) => {
                self.graph
                    .insert(node, api::ADDITIONAL_PROPERTIES, Literal::boolean(allowed));
            },
            Some(SchemaOrBool::Schema(ref value)) => {
                let value_ptr = ptr.child("additionalProperties");
                let value_node = self.iri(&value_ptr);
                self.graph
                    .insert(node, api::HAS_ADDITIONAL_PROPERTIES, &value_node);
                self.map_schema(&value_node, &value_ptr, value)?;
            },
            None => {},
        }

        let compositions = [
            ("allOf", api::ALL_OF, &schema.all_of),
            ("oneOf", api::ONE_OF, &schema.one_of),
            ("anyOf", api::ANY_OF, &schema.any_of),
        ];
        for (keyword, predicate, members) in compositions {
            for (position, member) in members.iter().enumerate() {
                let member_ptr = ptr.child(keyword).child(position);
                let member_node = self.iri(&member_ptr);
                self.graph.insert(node, predicate, &member_node);
                self.position(&member_node, position);
                self.map_schema_or_bool(&member_node, &member_ptr, member)?;
            }
        }

        if let Some(ref not) = schema.not {
            let not_ptr = ptr.child("not");
            let not_node = self.iri(&not_ptr);
            self.graph.insert(node, api::NOT, &not_node);
            self.map_schema_or_bool(&not_node, &not_ptr, not)?;
        }

        let enum_ptr = ptr.child("enum");
        for (position, value) in schema.enum_values.iter().enumerate() {
            let value_node = self.iri(&enum_ptr.child(position));
            self.graph.insert(node, api::HAS_ENUM_VALUE, &value_node);
            self.typed(&value_node, api::ENUM_VALUE);
            self.graph.insert(&value_node, rdf::VALUE, json_literal(value));
            self.position(&value_node, position);
        }

        if let Some(ref discriminator) = schema.discriminator {
            self.graph.insert(
                node,
                api::DISCRIMINATOR_PROPERTY,
                Literal::string(discriminator.property_name()),
            );

            let discriminator_ptr = ptr.child("discriminator");
            let mapping_ptr = discriminator_ptr.child("mapping");
            for (key, target) in discriminator.mapping().into_iter().flatten() {
                let entry_ptr = mapping_ptr.child(key);
                let entry_node = self.iri(&entry_ptr);
                self.graph
                    .insert(node, api::HAS_DISCRIMINATOR_MAPPING, &entry_node);
                self.typed(&entry_node, api::DISCRIMINATOR_MAPPING);
                self.graph
                    .insert(&entry_node, api::MAPPING_KEY, Literal::string(key.as_str()));

                let reference = self.schema_reference(target);
                self.map_reference(&entry_node, &entry_ptr, &reference)?;
            }
            if let Some(extensions) = discriminator.extensions() {
                self.map_extensions(node, &discriminator_ptr, extensions);
            }
        }

        for (keyword, value) in &schema.keywords {
            if api::SCHEMA_ANNOTATIONS.contains(&keyword.as_str()) {
                self.graph
                    .insert(node, &api::annotation(keyword), json_literal(value));
            }
        }
        let extensions = schema
            .keywords
            .iter()
            .filter(|(keyword, _)| !api::SCHEMA_ANNOTATIONS.contains(&keyword.as_str()));
        self.map_extensions(node, ptr, extensions);

        Ok(())
    }

    /// Discriminator mapping values may be references or bare schema names
    fn schema_reference(&self, target: &str) -> String {
        if target.contains('#') {
            return target.to_string();
        }
        let container = if self.doc.components.is_some() {
            "/components/schemas/"
        } else {
            "/definitions/"
        };
        format!(
            "#{}{}",
            container,
            target.replace('~', "~0").replace('/', "~1")
        )
    }

    fn map_security_scheme(
        &mut self,
        node: &Iri,
        ptr: &JsonPointer,
        name: &str,
        scheme: &SecurityScheme,
    ) {
        self.typed(node, api::SECURITY_SCHEME);
        self.graph.insert(node, api::SCHEME_NAME, Literal::string(name));
        self.graph
            .insert(node, api::SCHEME_TYPE, Literal::string(scheme.scheme_type.as_str()));
        self.string(node, api::DESCRIPTION, scheme.description.as_deref());
        self.string(node, api::KEY_NAME, scheme.name.as_deref());
        self.string(node, api::KEY_IN, scheme.location.as_deref());
        self.string(node, api::AUTH_SCHEME, scheme.scheme.as_deref());
        self.string(node, api::BEARER_FORMAT, scheme.bearer_format.as_deref());
        self.string(node, api::OPEN_ID_CONNECT_URL, scheme.open_id_connect_url.as_deref());
        self.string(node, api::FLOW, scheme.flow.as_deref());
        self.string(node, api::AUTHORIZATION_URL, scheme.authorization_url.as_deref());
        self.string(node, api::TOKEN_URL, scheme.token_url.as_deref());
        self.map_scopes(node, &ptr.child("scopes"), &scheme.scopes);

        let flows_ptr = ptr.child("flows");
        for (flow_type, flow) in &scheme.flows {
            let flow_ptr = flows_ptr.child(flow_type);
            let flow_node = self.iri(&flow_ptr);

            self.graph.insert(node, api::HAS_FLOW, &flow_node);
            self.typed(&flow_node, api::OAUTH_FLOW);
            self.graph
                .insert(&flow_node, api::FLOW_TYPE, Literal::string(flow_type.as_str()));
            self.string(&flow_node, api::AUTHORIZATION_URL, flow.authorization_url.as_deref());
            self.string(&flow_node, api::TOKEN_URL, flow.token_url.as_deref());
            self.string(&flow_node, api::REFRESH_URL, flow.refresh_url.as_deref());
            self.map_scopes(&flow_node, &flow_ptr.child("scopes"), &flow.scopes);
            self.map_extensions(&flow_node, &flow_ptr, &flow.extensions);
        }

        self.map_extensions(node, ptr, &scheme.extensions);
    }

    fn map_scopes(&mut self, owner: &Iri, ptr: &JsonPointer, scopes: &IndexMap<String, String>) {
        for (scope, description) in scopes {
            let node = self.iri(&ptr.child(scope));
            self.graph.insert(owner, api::HAS_SCOPE, &node);
            self.typed(&node, api::SCOPE);
            self.graph.insert(&node, api::SCOPE_NAME, Literal::string(scope.as_str()));
            self.graph
                .insert(&node, api::DESCRIPTION, Literal::string(description.as_str()));
        }
    }

    /// Security requirements of the document or an operation
    ///
    /// An empty list explicitly disables security.
    fn map_security(
        &mut self,
        owner: &Iri,
        ptr: &JsonPointer,
        requirements: &[SecurityRequirement],
    ) -> Result<()> {
        if requirements.is_empty() {
            self.graph
                .insert(owner, api::SECURITY_DISABLED, Literal::boolean(true));
            return Ok(());
        }

        for (position, requirement) in requirements.iter().enumerate() {
            let requirement_ptr = ptr.child(position);
            let node = self.iri(&requirement_ptr);

            self.graph.insert(owner, api::HAS_SECURITY_REQUIREMENT, &node);
            self.typed(&node, api::SECURITY_REQUIREMENT);
            self.position(&node, position);

            for (scheme_name, scopes) in requirement {
                let entry_ptr = requirement_ptr.child(scheme_name);
                let entry_node = self.iri(&entry_ptr);

                self.graph.insert(&node, api::REQUIRES_SCHEME, &entry_node);
                self.typed(&entry_node, api::SCHEME_REQUIREMENT);
                self.graph
                    .insert(&entry_node, api::SCHEME_NAME, Literal::string(scheme_name.as_str()));

                let scheme = self.security_scheme(scheme_name).ok_or_else(|| {
                    ConvertError::mapping(
                        entry_ptr.to_string(),
                        format!("undeclared security scheme '{}'", scheme_name),
                    )
                })?;
                self.ensure_definition(&scheme)?;
                let scheme_node = self.iri(&scheme);
                self.graph.insert(&entry_node, api::REFERS_TO, scheme_node);

                for scope in scopes {
                    self.graph
                        .insert(&entry_node, api::SCOPE_LITERAL, Literal::string(scope.as_str()));
                }
            }
        }
        Ok(())
    }

    /// Pointer of a declared security scheme
    fn security_scheme(&self, name: &str) -> Option<JsonPointer> {
        let root = JsonPointer::root();
        [
            root.child("components").child("securitySchemes").child(name),
            root.child("securityDefinitions").child(name),
        ]
        .into_iter()
        .find(|ptr| {
            matches!(
                self.definitions.get(ptr),
                Some(Definition::SecurityScheme(..))
            )
        })
    }
}

/// Index every reusable definition of the document by its pointer
fn collect_definitions(doc: &ApiDocument) -> IndexMap<JsonPointer, Definition<'_>> {
    let root = JsonPointer::root();
    let mut definitions = IndexMap::new();

    if let Some(ref components) = doc.components {
        let ptr = root.child("components");
        for (name, schema) in &components.schemas {
            definitions.insert(
                ptr.child("schemas").child(name),
                Definition::Schema(name, schema),
            );
        }
        for (name, param) in &components.parameters {
            definitions.insert(ptr.child("parameters").child(name), Definition::Parameter(param));
        }
        for (name, body) in &components.request_bodies {
            definitions.insert(
                ptr.child("requestBodies").child(name),
                Definition::RequestBody(body),
            );
        }
        for (name, response) in &components.responses {
            definitions.insert(ptr.child("responses").child(name), Definition::Response(response));
        }
        for (name, header) in &components.headers {
            definitions.insert(
                ptr.child("headers").child(name),
                Definition::Header(name, header),
            );
        }
        for (name, scheme) in &components.security_schemes {
            definitions.insert(
                ptr.child("securitySchemes").child(name),
                Definition::SecurityScheme(name, scheme),
            );
        }
    }

    for (name, schema) in &doc.definitions {
        definitions.insert(
            root.child("definitions").child(name),
            Definition::Schema(name, schema),
        );
    }
    for (name, param) in &doc.parameters {
        definitions.insert(root.child("parameters").child(name), Definition::Parameter(param));
    }
    for (name, response) in &doc.responses {
        definitions.insert(root.child("responses").child(name), Definition::Response(response));
    }
    for (name, scheme) in &doc.security_definitions {
        definitions.insert(
            root.child("securityDefinitions").child(name),
            Definition::SecurityScheme(name, scheme),
        );
    }

    definitions
}
