//! Swagger 2.0 / OpenAPI 3.x type definitions
//!
//! Covers both major versions in one model. Maps are `IndexMap`s so document
//! order survives into the graph, and every object keeps the fields it does
//! not name in a flattened map so nothing information-bearing is dropped.

use crate::operation_mapper::HttpMethod;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unnamed fields of an object (`x-` extensions and unknown keywords)
pub type Extensions = IndexMap<String, Value>;

/// Scheme name → required scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// API document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocument {
    /// OpenAPI version (e.g., "3.0.3")
    #[serde(default)]
    pub openapi: Option<String>,

    /// Swagger version ("2.0")
    #[serde(default)]
    pub swagger: Option<String>,

    /// API metadata
    #[serde(default)]
    pub info: Option<Info>,

    /// API paths (endpoints)
    pub paths: IndexMap<String, PathItem>,

    /// Servers (3.x)
    #[serde(default)]
    pub servers: Vec<Server>,

    /// Host (2.0)
    #[serde(default)]
    pub host: Option<String>,

    /// Base path (2.0)
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,

    /// Transfer protocols (2.0)
    #[serde(default)]
    pub schemes: Vec<String>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    /// Reusable components (3.x)
    #[serde(default)]
    pub components: Option<Components>,

    /// Schema definitions (2.0)
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaOrBool>,

    /// Shared parameters (2.0)
    #[serde(default)]
    pub parameters: IndexMap<String, RefOr<Parameter>>,

    /// Shared responses (2.0)
    #[serde(default)]
    pub responses: IndexMap<String, RefOr<Response>>,

    /// Security schemes (2.0)
    #[serde(rename = "securityDefinitions", default)]
    pub security_definitions: IndexMap<String, SecurityScheme>,

    /// Document-wide security requirements
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl ApiDocument {
    /// Version string of whichever format the document declares
    pub fn spec_version(&self) -> Option<&str> {
        self.openapi.as_deref().or(self.swagger.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.title.as_deref())
    }
}

/// API information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "termsOfService", default)]
    pub terms_of_service: Option<String>,

    #[serde(default)]
    pub contact: Option<Contact>,

    #[serde(default)]
    pub license: Option<License>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    /// `identifier` (3.1) and `x-` extensions
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Tag declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Either an inline object or a `$ref` to one
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Item(T),
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// Reference to a path item defined elsewhere
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,

    #[serde(default)]
    pub options: Option<Operation>,

    #[serde(default)]
    pub head: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    #[serde(default)]
    pub trace: Option<Operation>,

    /// Parameters shared by every operation of the path
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl PathItem {
    /// Operations in canonical method order
    pub fn operations(&self) -> Vec<(HttpMethod, &Operation)> {
        HttpMethod::ALL
            .iter()
            .filter_map(|&method| self.operation(method).map(|op| (method, op)))
            .collect()
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub deprecated: Option<bool>,

    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,

    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RefOr<RequestBody>>,

    #[serde(default)]
    pub responses: IndexMap<String, RefOr<Response>>,

    /// `Some(vec![])` explicitly disables document-level security
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Parameter location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
    Body,
    FormData,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
        }
    }
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub deprecated: Option<bool>,

    /// Schema (3.x, and 2.0 body parameters)
    #[serde(default)]
    pub schema: Option<SchemaOrBool>,

    /// Inline type (2.0 non-body parameters)
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(rename = "collectionFormat", default)]
    pub collection_format: Option<String>,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Parameter {
    /// Schema built from 2.0 inline type fields, when there is no `schema`
    pub fn inline_schema(&self) -> Option<Schema> {
        if self.schema.is_some() {
            return None;
        }
        let param_type = self.param_type.as_ref()?;

        let mut keywords = Extensions::new();
        if let Some(ref default) = self.default {
            keywords.insert("default".to_string(), default.clone());
        }

        Some(Schema {
            schema_type: Some(SchemaType::Single(param_type.clone())),
            format: self.format.clone(),
            items: self.items.clone().map(SchemaOrBool::Schema),
            enum_values: self.enum_values.clone(),
            keywords,
            ..Schema::default()
        })
    }
}

/// Request body (3.x)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    /// Content types (3.x)
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    /// Body schema (2.0)
    #[serde(default)]
    pub schema: Option<SchemaOrBool>,

    #[serde(default)]
    pub headers: IndexMap<String, RefOr<Header>>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Media type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<SchemaOrBool>,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Response header
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub schema: Option<SchemaOrBool>,

    /// Inline type (2.0)
    #[serde(rename = "type", default)]
    pub header_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Header {
    /// Schema built from 2.0 inline type fields, when there is no `schema`
    pub fn inline_schema(&self) -> Option<Schema> {
        if self.schema.is_some() {
            return None;
        }
        Some(Schema {
            schema_type: Some(SchemaType::Single(self.header_type.clone()?)),
            format: self.format.clone(),
            ..Schema::default()
        })
    }
}

/// `type` keyword: a single name or (3.1) a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    pub fn names(&self) -> Vec<&str> {
        match self {
            SchemaType::Single(name) => vec![name.as_str()],
            SchemaType::Multiple(names) => names.iter().map(|s| s.as_str()).collect(),
        }
    }
}

/// A schema, or (3.1) a boolean schema accepting (`true`) or rejecting
/// (`false`) every instance
///
/// `additionalProperties` uses the same shape in every version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrBool {
    Bool(bool),
    Schema(Box<Schema>),
}

impl SchemaOrBool {
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrBool::Bool(_) => None,
            SchemaOrBool::Schema(schema) => Some(schema),
        }
    }
}

impl From<Schema> for SchemaOrBool {
    fn from(schema: Schema) -> Self {
        SchemaOrBool::Schema(Box::new(schema))
    }
}

/// Discriminator: a property name (2.0) or an object with a mapping (3.x)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Discriminator {
    Property(String),
    Object {
        #[serde(rename = "propertyName")]
        property_name: String,

        #[serde(default)]
        mapping: IndexMap<String, String>,

        #[serde(flatten)]
        extensions: Extensions,
    },
}

impl Discriminator {
    pub fn property_name(&self) -> &str {
        match self {
            Discriminator::Property(name) => name,
            Discriminator::Object { property_name, .. } => property_name,
        }
    }

    /// Discriminator value → schema reference or name
    pub fn mapping(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Discriminator::Property(_) => None,
            Discriminator::Object { mapping, .. } => Some(mapping),
        }
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        match self {
            Discriminator::Property(_) => None,
            Discriminator::Object { extensions, .. } => Some(extensions),
        }
    }
}

/// Schema definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,

    /// Type: string, number, integer, boolean, array, object, null
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,

    /// Format (e.g., int32, int64, date-time)
    #[serde(default)]
    pub format: Option<String>,

    /// Properties (for object type)
    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrBool>,

    /// Required properties
    #[serde(default)]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<SchemaOrBool>,

    #[serde(rename = "additionalProperties", default)]
    pub additional_properties: Option<SchemaOrBool>,

    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrBool>,

    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<SchemaOrBool>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<SchemaOrBool>,

    #[serde(default)]
    pub not: Option<SchemaOrBool>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub discriminator: Option<Discriminator>,

    /// Every other keyword (title, description, pattern, example, x-*, ...)
    #[serde(flatten)]
    pub keywords: Extensions,
}

impl Schema {
    pub fn type_names(&self) -> Vec<&str> {
        self.schema_type
            .as_ref()
            .map(|t| t.names())
            .unwrap_or_default()
    }
}

/// Reusable components (3.x)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrBool>,

    #[serde(default)]
    pub parameters: IndexMap<String, RefOr<Parameter>>,

    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RefOr<RequestBody>>,

    #[serde(default)]
    pub responses: IndexMap<String, RefOr<Response>>,

    #[serde(default)]
    pub headers: IndexMap<String, RefOr<Header>>,

    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Security scheme (3.x `securitySchemes` or 2.0 `securityDefinitions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// apiKey, http, oauth2, openIdConnect, mutualTLS, basic (2.0)
    #[serde(rename = "type")]
    pub scheme_type: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Header, query or cookie name (apiKey)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "in", default)]
    pub location: Option<String>,

    /// HTTP auth scheme, e.g. "bearer"
    #[serde(default)]
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat", default)]
    pub bearer_format: Option<String>,

    #[serde(rename = "openIdConnectUrl", default)]
    pub open_id_connect_url: Option<String>,

    /// OAuth2 flows (3.x)
    #[serde(default)]
    pub flows: IndexMap<String, OAuthFlow>,

    /// OAuth2 flow name (2.0)
    #[serde(default)]
    pub flow: Option<String>,

    #[serde(rename = "authorizationUrl", default)]
    pub authorization_url: Option<String>,

    #[serde(rename = "tokenUrl", default)]
    pub token_url: Option<String>,

    /// OAuth2 scopes (2.0)
    #[serde(default)]
    pub scopes: IndexMap<String, String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

/// OAuth2 flow (3.x)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuthFlow {
    #[serde(rename = "authorizationUrl", default)]
    pub authorization_url: Option<String>,

    #[serde(rename = "tokenUrl", default)]
    pub token_url: Option<String>,

    #[serde(rename = "refreshUrl", default)]
    pub refresh_url: Option<String>,

    #[serde(default)]
    pub scopes: IndexMap<String, String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}
