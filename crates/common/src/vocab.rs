//! Fixed vocabulary used in the emitted graph
//!
//! The `api` namespace holds every class and predicate the mapper produces.
//! Its IRI is a constant so that output from different runs can be merged
//! and reversed. Terms are grouped by kind for the optional OWL declarations.

macro_rules! terms {
    ($ns:literal; $($name:ident => $local:literal),* $(,)?) => {
        /// Namespace IRI
        pub const NS: &str = $ns;
        $(pub const $name: &str = concat!($ns, $local);)*
    };
}

/// Terms of an ontology, listed by kind so that they can be declared
macro_rules! vocabulary {
    ($ns:literal;
        classes { $($class:ident => $class_local:literal),* $(,)? }
        object_properties { $($object:ident => $object_local:literal),* $(,)? }
        datatype_properties { $($data:ident => $data_local:literal),* $(,)? }
    ) => {
        terms! { $ns;
            $($class => $class_local,)*
            $($object => $object_local,)*
            $($data => $data_local,)*
        }

        pub const CLASSES: &[&str] = &[$($class),*];
        pub const OBJECT_PROPERTIES: &[&str] = &[$($object),*];
        pub const DATATYPE_PROPERTIES: &[&str] = &[$($data),*];
    };
}

pub mod rdf {
    terms! { "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
        TYPE => "type",
        VALUE => "value",
        JSON => "JSON",
    }
}

pub mod rdfs {
    terms! { "http://www.w3.org/2000/01/rdf-schema#";
        LABEL => "label",
        COMMENT => "comment",
    }
}

pub mod owl {
    terms! { "http://www.w3.org/2002/07/owl#";
        ONTOLOGY => "Ontology",
        CLASS => "Class",
        OBJECT_PROPERTY => "ObjectProperty",
        DATATYPE_PROPERTY => "DatatypeProperty",
        ANNOTATION_PROPERTY => "AnnotationProperty",
        VERSION_IRI => "versionIRI",
        VERSION_INFO => "versionInfo",
    }
}

pub mod xsd {
    terms! { "http://www.w3.org/2001/XMLSchema#";
        STRING => "string",
        BOOLEAN => "boolean",
        INTEGER => "integer",
        INT => "int",
        LONG => "long",
        DECIMAL => "decimal",
        FLOAT => "float",
        DOUBLE => "double",
        DATE => "date",
        DATE_TIME => "dateTime",
        TIME => "time",
        DURATION => "duration",
        ANY_URI => "anyURI",
        BASE64_BINARY => "base64Binary",
        HEX_BINARY => "hexBinary",
    }
}

pub mod api {
    vocabulary! { "https://w3id.org/openapi-rdf/vocab#";
        classes {
            DOCUMENT => "Document",
            SERVER => "Server",
            PATH => "Path",
            OPERATION => "Operation",
            PARAMETER => "Parameter",
            REQUEST_BODY => "RequestBody",
            RESPONSE => "Response",
            INFORMATIONAL_RESPONSE => "InformationalResponse",
            SUCCESS_RESPONSE => "SuccessResponse",
            REDIRECT_RESPONSE => "RedirectResponse",
            CLIENT_ERROR_RESPONSE => "ClientErrorResponse",
            SERVER_ERROR_RESPONSE => "ServerErrorResponse",
            DEFAULT_RESPONSE => "DefaultResponse",
            MEDIA_TYPE => "MediaType",
            HEADER => "Header",
            SCHEMA => "Schema",
            ENUM_VALUE => "EnumValue",
            DISCRIMINATOR_MAPPING => "DiscriminatorMapping",
            SECURITY_SCHEME => "SecurityScheme",
            OAUTH_FLOW => "OAuthFlow",
            SCOPE => "Scope",
            SECURITY_REQUIREMENT => "SecurityRequirement",
            SCHEME_REQUIREMENT => "SchemeRequirement",
            TAG => "Tag",
            EXTENSION => "Extension",
        }

        object_properties {
            HAS_SERVER => "hasServer",
            HAS_PATH => "hasPath",
            HAS_SCHEMA_DEFINITION => "hasSchemaDefinition",
            HAS_SECURITY_SCHEME => "hasSecurityScheme",
            HAS_COMPONENT => "hasComponent",
            HAS_TAG_DEFINITION => "hasTagDefinition",
            HAS_EXTENSION => "hasExtension",
            REFERS_TO => "refersTo",
            HAS_OPERATION => "hasOperation",
            HAS_TAG => "hasTag",
            HAS_PARAMETER => "hasParameter",
            HAS_SCHEMA => "hasSchema",
            HAS_REQUEST_BODY => "hasRequestBody",
            HAS_CONTENT => "hasContent",
            HAS_RESPONSE => "hasResponse",
            HAS_HEADER => "hasHeader",
            DATATYPE => "datatype",
            HAS_PROPERTY => "hasProperty",
            HAS_ITEM_TYPE => "hasItemType",
            HAS_ADDITIONAL_PROPERTIES => "hasAdditionalProperties",
            ALL_OF => "allOf",
            ONE_OF => "oneOf",
            ANY_OF => "anyOf",
            NOT => "not",
            HAS_ENUM_VALUE => "hasEnumValue",
            HAS_DISCRIMINATOR_MAPPING => "hasDiscriminatorMapping",
            HAS_FLOW => "hasFlow",
            HAS_SCOPE => "hasScope",
            HAS_SECURITY_REQUIREMENT => "hasSecurityRequirement",
            REQUIRES_SCHEME => "requiresScheme",
        }

        datatype_properties {
            // Document
            SPEC_VERSION => "specVersion",
            TITLE => "title",
            VERSION => "version",
            DESCRIPTION => "description",
            TERMS_OF_SERVICE => "termsOfService",
            CONTACT_NAME => "contactName",
            CONTACT_EMAIL => "contactEmail",
            CONTACT_URL => "contactUrl",
            LICENSE_NAME => "licenseName",
            LICENSE_URL => "licenseUrl",
            HOST => "host",
            BASE_PATH => "basePath",
            URI_SCHEME => "scheme",
            CONSUMES => "consumes",
            PRODUCES => "produces",
            URL => "url",
            EXTENSION_NAME => "extensionName",
            POSITION => "position",

            // Paths and operations
            PATH_TEMPLATE => "pathTemplate",
            TEMPLATE_VARIABLE => "templateVariable",
            HTTP_METHOD => "httpMethod",
            OPERATION_ID => "operationId",
            SUMMARY => "summary",
            DEPRECATED => "deprecated",
            TAG_NAME => "tagName",
            TAG_LITERAL => "tag",

            // Parameters, bodies, responses
            PARAMETER_NAME => "parameterName",
            PARAMETER_IN => "parameterIn",
            REQUIRED => "required",
            COLLECTION_FORMAT => "collectionFormat",
            MEDIA_TYPE_NAME => "mediaType",
            STATUS_CODE => "statusCode",
            HEADER_NAME => "headerName",

            // Schemas
            SCHEMA_NAME => "schemaName",
            SCHEMA_TYPE => "schemaType",
            FORMAT => "format",
            PROPERTY_NAME => "propertyName",
            REQUIRED_PROPERTY => "requiredProperty",
            ADDITIONAL_PROPERTIES => "additionalProperties",
            BOOLEAN_SCHEMA => "booleanSchema",
            DISCRIMINATOR_PROPERTY => "discriminatorProperty",
            MAPPING_KEY => "mappingKey",

            // Security
            SCHEME_NAME => "schemeName",
            SCHEME_TYPE => "schemeType",
            KEY_NAME => "keyName",
            KEY_IN => "keyIn",
            AUTH_SCHEME => "authScheme",
            BEARER_FORMAT => "bearerFormat",
            OPEN_ID_CONNECT_URL => "openIdConnectUrl",
            FLOW => "flow",
            FLOW_TYPE => "flowType",
            AUTHORIZATION_URL => "authorizationUrl",
            TOKEN_URL => "tokenUrl",
            REFRESH_URL => "refreshUrl",
            SCOPE_NAME => "scopeName",
            SECURITY_DISABLED => "securityDisabled",
            SCOPE_LITERAL => "scope",

            EXAMPLE => "example",
        }
    }

    /// Annotation keywords copied from a schema as `api:<keyword>` literals
    pub const SCHEMA_ANNOTATIONS: &[&str] = &[
        "title",
        "description",
        "pattern",
        "minimum",
        "maximum",
        "exclusiveMinimum",
        "exclusiveMaximum",
        "minLength",
        "maxLength",
        "minItems",
        "maxItems",
        "minProperties",
        "maxProperties",
        "uniqueItems",
        "multipleOf",
        "nullable",
        "readOnly",
        "writeOnly",
        "deprecated",
        "default",
        "example",
    ];

    /// IRI of the `api:<keyword>` predicate for a schema annotation
    pub fn annotation(keyword: &str) -> String {
        format!("{}{}", NS, keyword)
    }
}
