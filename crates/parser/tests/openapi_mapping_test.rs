//! Integration tests for mapping API documents to graphs

use openapi_rdf_common::vocab::{api, owl, rdf, rdfs, xsd};
use openapi_rdf_common::{ErrorKind, Graph, Iri, Literal, Term};
use openapi_rdf_parser::openapi::{ApiLoader, MapperOptions};
use openapi_rdf_parser::GraphStats;
use std::io::Write;
use tempfile::NamedTempFile;

fn map(json: &str) -> Graph {
    ApiLoader::from_json(json)
        .unwrap()
        .map(&MapperOptions::default())
        .unwrap()
}

fn map_with_base(json: &str, base: &str) -> Graph {
    ApiLoader::from_json(json)
        .unwrap()
        .map(&MapperOptions::default().with_base_iri(base))
        .unwrap()
}

fn iri(s: &str) -> Iri {
    Iri::new(s).unwrap()
}

fn has(graph: &Graph, subject: &str, predicate: &str, object: impl Into<Term>) -> bool {
    let object = object.into();
    graph.iter().any(|t| {
        t.subject.as_str() == subject && t.predicate.as_str() == predicate && t.object == object
    })
}

const BASE: &str = "https://example.org/api/";

#[test]
fn test_minimal_document_yields_only_root() {
    let graph = map(r#"{
        "openapi": "3.0.0",
        "info": {"title": "Minimal", "version": "1.0.0"},
        "paths": {}
    }"#);

    let root = "https://w3id.org/api/minimal/";
    assert_eq!(graph.subjects(), vec![&iri(root)]);
    assert!(has(&graph, root, rdf::TYPE, iri(api::DOCUMENT)));
    assert!(has(&graph, root, rdf::TYPE, iri(owl::ONTOLOGY)));
    assert!(has(&graph, root, api::SPEC_VERSION, Literal::string("3.0.0")));
    assert!(has(&graph, root, api::TITLE, Literal::string("Minimal")));
    assert!(has(&graph, root, rdfs::LABEL, Literal::string("Minimal")));
    assert!(has(&graph, root, api::VERSION, Literal::string("1.0.0")));
    assert!(has(&graph, root, owl::VERSION_INFO, Literal::string("1.0.0")));
    assert!(has(
        &graph,
        root,
        owl::VERSION_IRI,
        iri("https://w3id.org/api/minimal/1%2E0%2E0/")
    ));
    assert!(graph.with_predicate(rdf::TYPE).all(|t| t.subject.as_str() == root));
}

#[test]
fn test_pets_example() {
    let graph = map(r#"{"paths": {"/pets": {"get": {"responses": {"200": {"description": "ok"}}}}}}"#);

    let root = "https://w3id.org/api/api/";
    let path = "https://w3id.org/api/api/paths/%2Fpets";
    let op = "https://w3id.org/api/api/paths/%2Fpets/get";
    let response = "https://w3id.org/api/api/paths/%2Fpets/get/responses/200";

    assert_eq!(graph.instances_of(api::PATH), vec![&iri(path)]);
    assert_eq!(graph.instances_of(api::OPERATION), vec![&iri(op)]);
    assert_eq!(graph.instances_of(api::RESPONSE), vec![&iri(response)]);

    assert!(has(&graph, root, api::HAS_PATH, iri(path)));
    assert!(has(&graph, path, api::PATH_TEMPLATE, Literal::string("/pets")));
    assert!(has(&graph, path, api::HAS_OPERATION, iri(op)));
    assert!(has(&graph, op, api::HTTP_METHOD, Literal::string("GET")));
    assert!(has(&graph, op, api::HAS_RESPONSE, iri(response)));
    assert!(has(&graph, response, api::STATUS_CODE, Literal::string("200")));
    assert!(has(&graph, response, rdf::TYPE, iri(api::SUCCESS_RESPONSE)));
    assert!(has(&graph, response, api::DESCRIPTION, Literal::string("ok")));
}

#[test]
fn test_one_has_operation_per_operation() {
    let graph = map_with_base(
        r#"{
        "paths": {
            "/pets": {
                "get": {"responses": {}},
                "post": {"responses": {}}
            },
            "/pets/{petId}": {
                "get": {"responses": {}},
                "put": {"responses": {}},
                "delete": {"responses": {}},
                "x-internal": true
            }
        }
    }"#,
        BASE,
    );

    assert_eq!(graph.with_predicate(api::HAS_OPERATION).count(), 5);
    assert_eq!(graph.instances_of(api::OPERATION).len(), 5);

    let path = "https://example.org/api/paths/%2Fpets%2F%7BpetId%7D";
    assert!(has(&graph, path, api::TEMPLATE_VARIABLE, Literal::string("petId")));
    assert!(has(
        &graph,
        &format!("{}/delete", path),
        api::HTTP_METHOD,
        Literal::string("DELETE")
    ));

    let extension = format!("{}/x-internal", path);
    assert!(has(&graph, path, api::HAS_EXTENSION, iri(&extension)));
    assert!(has(&graph, &extension, api::EXTENSION_NAME, Literal::string("x-internal")));
    assert!(has(&graph, &extension, rdf::VALUE, Literal::json("true")));
}

#[test]
fn test_parameters_keep_position_and_defaults() {
    let graph = map_with_base(
        r#"{
        "openapi": "3.0.0",
        "paths": {
            "/pets": {
                "get": {
                    "parameters": [
                        {"name": "limit", "in": "query", "schema": {"type": "integer", "format": "int32"}},
                        {"name": "X-Trace", "in": "header", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {}
                }
            }
        }
    }"#,
        BASE,
    );

    let first = "https://example.org/api/paths/%2Fpets/get/parameters/0";
    let second = "https://example.org/api/paths/%2Fpets/get/parameters/1";

    assert!(has(&graph, first, api::PARAMETER_NAME, Literal::string("limit")));
    assert!(has(&graph, first, api::PARAMETER_IN, Literal::string("query")));
    assert!(has(&graph, first, api::REQUIRED, Literal::boolean(false)));
    assert!(has(&graph, first, api::POSITION, Literal::integer(0)));
    assert!(has(&graph, second, api::REQUIRED, Literal::boolean(true)));
    assert!(has(&graph, second, api::POSITION, Literal::integer(1)));

    let schema = format!("{}/schema", first);
    assert!(has(&graph, first, api::HAS_SCHEMA, iri(&schema)));
    assert!(has(&graph, &schema, api::SCHEMA_TYPE, Literal::string("integer")));
    assert!(has(&graph, &schema, api::DATATYPE, iri(xsd::INT)));
}

#[test]
fn test_self_referencing_schema_yields_single_reference() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.0.0",
        "paths": {},
        "components": {
            "schemas": {
                "Node": {
                    "type": "object",
                    "properties": {
                        "value": {"type": "string"},
                        "next": {"$ref": "#/components/schemas/Node"}
                    }
                }
            }
        }
    }"##,
        BASE,
    );

    let node = "https://example.org/api/components/schemas/Node";
    let next = "https://example.org/api/components/schemas/Node/properties/next";

    let refs: Vec<_> = graph.with_predicate(api::REFERS_TO).collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].subject.as_str(), next);
    assert_eq!(refs[0].object, Term::Iri(iri(node)));

    assert_eq!(graph.with_predicate(api::SCHEMA_NAME).count(), 1);
    assert!(has(&graph, node, api::SCHEMA_NAME, Literal::string("Node")));
    assert!(has(&graph, BASE, api::HAS_SCHEMA_DEFINITION, iri(node)));
}

#[test]
fn test_mutually_recursive_schemas() {
    let graph = map_with_base(
        r##"{
        "swagger": "2.0",
        "paths": {},
        "definitions": {
            "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
            "B": {"properties": {"a": {"$ref": "#/definitions/A"}}}
        }
    }"##,
        BASE,
    );

    assert_eq!(graph.with_predicate(api::REFERS_TO).count(), 2);
    assert_eq!(graph.with_predicate(api::SCHEMA_NAME).count(), 2);
}

#[test]
fn test_shared_schema_is_mapped_once() {
    let json = r##"{
        "openapi": "3.0.0",
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {
                            "description": "ok",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
                        }
                    }
                },
                "post": {
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
                    },
                    "responses": {}
                }
            }
        },
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "id": {"type": "integer", "format": "int64"},
                        "name": {"type": "string"}
                    }
                }
            }
        }
    }"##;
    let graph = map_with_base(json, BASE);

    let pet = "https://example.org/api/components/schemas/Pet";
    let name = format!("{}/properties/name", pet);
    let id = format!("{}/properties/id", pet);

    assert_eq!(
        graph
            .iter()
            .filter(|t| t.subject.as_str() == pet && t.predicate.as_str() == api::HAS_PROPERTY)
            .count(),
        2
    );
    assert!(has(&graph, &name, api::REQUIRED, Literal::boolean(true)));
    assert!(has(&graph, &id, api::REQUIRED, Literal::boolean(false)));
    assert!(has(&graph, &id, api::DATATYPE, iri(xsd::LONG)));
    assert!(has(&graph, &name, api::POSITION, Literal::integer(1)));

    let body = "https://example.org/api/paths/%2Fpets/post/requestBody";
    let media = format!("{}/content/application%2Fjson", body);
    assert!(has(&graph, body, api::REQUIRED, Literal::boolean(true)));
    assert!(has(&graph, &media, api::MEDIA_TYPE_NAME, Literal::string("application/json")));
    assert!(has(
        &graph,
        &format!("{}/schema", media),
        api::REFERS_TO,
        iri(pet)
    ));

    assert_eq!(graph.with_predicate(api::REFERS_TO).count(), 2);
}

#[test]
fn test_unresolved_reference_is_mapping_error() {
    let loader = ApiLoader::from_json(
        r##"{
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {"$ref": "#/components/responses/Missing"}
                    }
                }
            }
        }
    }"##,
    )
    .unwrap();

    let err = loader.map(&MapperOptions::default()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Mapping);
    assert_eq!(err.location(), "#/paths/~1pets/get/responses/200");
    assert!(err.to_string().contains("#/components/responses/Missing"));
}

#[test]
fn test_external_reference_is_mapping_error() {
    let loader = ApiLoader::from_json(
        r#"{
        "paths": {},
        "definitions": {"Pet": {"$ref": "common.json#/definitions/Pet"}}
    }"#,
    )
    .unwrap();

    let err = loader.map(&MapperOptions::default()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Mapping);
    assert_eq!(err.location(), "#/definitions/Pet");
}

#[test]
fn test_swagger2_document() {
    let graph = map_with_base(
        r##"{
        "swagger": "2.0",
        "info": {
            "title": "Swagger Petstore",
            "version": "1.0.0",
            "contact": {"email": "apiteam@swagger.io"},
            "license": {"name": "Apache 2.0"}
        },
        "host": "petstore.swagger.io",
        "basePath": "/v2",
        "schemes": ["https", "http"],
        "consumes": ["application/json"],
        "tags": [{"name": "pet", "description": "Everything about your Pets"}],
        "paths": {
            "/pet/findByStatus": {
                "get": {
                    "tags": ["pet"],
                    "operationId": "findPetsByStatus",
                    "produces": ["application/xml"],
                    "parameters": [
                        {
                            "name": "status",
                            "in": "query",
                            "required": true,
                            "type": "array",
                            "items": {"type": "string", "enum": ["available", "sold"]},
                            "collectionFormat": "multi"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "successful operation",
                            "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}},
                            "headers": {"X-Rate-Limit": {"type": "integer", "format": "int32"}}
                        },
                        "400": {"description": "Invalid status value"}
                    }
                }
            }
        },
        "definitions": {
            "Pet": {"type": "object", "properties": {"name": {"type": "string", "example": "doggie"}}}
        }
    }"##,
        BASE,
    );

    assert!(has(&graph, BASE, api::SPEC_VERSION, Literal::string("2.0")));
    assert!(has(&graph, BASE, api::HOST, Literal::string("petstore.swagger.io")));
    assert!(has(&graph, BASE, api::BASE_PATH, Literal::string("/v2")));
    assert!(has(&graph, BASE, api::URI_SCHEME, Literal::string("https")));
    assert!(has(&graph, BASE, api::CONSUMES, Literal::string("application/json")));
    assert!(has(&graph, BASE, api::CONTACT_EMAIL, Literal::string("apiteam@swagger.io")));
    assert!(has(&graph, BASE, api::LICENSE_NAME, Literal::string("Apache 2.0")));

    let op = "https://example.org/api/paths/%2Fpet%2FfindByStatus/get";
    let tag = "https://example.org/api/tags/0";
    assert!(has(&graph, op, api::OPERATION_ID, Literal::string("findPetsByStatus")));
    assert!(has(&graph, op, api::TAG_LITERAL, Literal::string("pet")));
    assert!(has(&graph, op, api::HAS_TAG, iri(tag)));
    assert!(has(&graph, op, api::PRODUCES, Literal::string("application/xml")));

    let param = format!("{}/parameters/0", op);
    let param_schema = format!("{}/schema", param);
    assert!(has(&graph, &param, api::COLLECTION_FORMAT, Literal::string("multi")));
    assert!(has(&graph, &param_schema, api::SCHEMA_TYPE, Literal::string("array")));
    let enum_value = format!("{}/items/enum/1", param_schema);
    assert!(has(&graph, &enum_value, rdf::VALUE, Literal::string("sold")));
    assert!(has(&graph, &enum_value, api::POSITION, Literal::integer(1)));

    let ok = format!("{}/responses/200", op);
    let bad = format!("{}/responses/400", op);
    assert!(has(&graph, &bad, rdf::TYPE, iri(api::CLIENT_ERROR_RESPONSE)));
    assert!(has(
        &graph,
        &format!("{}/schema/items", ok),
        api::REFERS_TO,
        iri("https://example.org/api/definitions/Pet")
    ));
    let header = format!("{}/headers/X-Rate-Limit", ok);
    assert!(has(&graph, &header, api::HEADER_NAME, Literal::string("X-Rate-Limit")));
    assert!(has(
        &graph,
        &format!("{}/schema", header),
        api::DATATYPE,
        iri(xsd::INT)
    ));

    assert!(has(
        &graph,
        "https://example.org/api/definitions/Pet/properties/name",
        api::EXAMPLE,
        Literal::string("doggie")
    ));
}

#[test]
fn test_security_schemes_and_requirements() {
    let graph = map_with_base(
        r#"{
        "openapi": "3.0.0",
        "security": [{"petstore_auth": ["read:pets"]}],
        "paths": {
            "/health": {"get": {"security": [], "responses": {}}},
            "/pets": {"get": {"security": [{"api_key": []}, {}], "responses": {}}}
        },
        "components": {
            "securitySchemes": {
                "api_key": {"type": "apiKey", "name": "api_key", "in": "header"},
                "petstore_auth": {
                    "type": "oauth2",
                    "flows": {
                        "implicit": {
                            "authorizationUrl": "https://petstore.example/oauth/dialog",
                            "scopes": {"read:pets": "read your pets"}
                        }
                    }
                }
            }
        }
    }"#,
        BASE,
    );

    let api_key = "https://example.org/api/components/securitySchemes/api_key";
    let oauth = "https://example.org/api/components/securitySchemes/petstore_auth";
    assert!(has(&graph, BASE, api::HAS_SECURITY_SCHEME, iri(api_key)));
    assert!(has(&graph, api_key, api::SCHEME_TYPE, Literal::string("apiKey")));
    assert!(has(&graph, api_key, api::KEY_IN, Literal::string("header")));

    let flow = format!("{}/flows/implicit", oauth);
    let scope = format!("{}/scopes/read%3Apets", flow);
    assert!(has(&graph, oauth, api::HAS_FLOW, iri(&flow)));
    assert!(has(&graph, &flow, api::FLOW_TYPE, Literal::string("implicit")));
    assert!(has(&graph, &scope, api::SCOPE_NAME, Literal::string("read:pets")));

    let doc_requirement = "https://example.org/api/security/0";
    let doc_entry = format!("{}/petstore_auth", doc_requirement);
    assert!(has(&graph, BASE, api::HAS_SECURITY_REQUIREMENT, iri(doc_requirement)));
    assert!(has(&graph, &doc_entry, api::REFERS_TO, iri(oauth)));
    assert!(has(&graph, &doc_entry, api::SCOPE_LITERAL, Literal::string("read:pets")));

    let health = "https://example.org/api/paths/%2Fhealth/get";
    assert!(has(&graph, health, api::SECURITY_DISABLED, Literal::boolean(true)));

    let pets = "https://example.org/api/paths/%2Fpets/get";
    assert_eq!(
        graph
            .iter()
            .filter(|t| t.subject.as_str() == pets
                && t.predicate.as_str() == api::HAS_SECURITY_REQUIREMENT)
            .count(),
        2
    );
    assert!(has(
        &graph,
        &format!("{}/security/0/api_key", pets),
        api::REFERS_TO,
        iri(api_key)
    ));
}

#[test]
fn test_undeclared_security_scheme_is_mapping_error() {
    let loader = ApiLoader::from_json(
        r#"{"paths": {"/pets": {"get": {"security": [{"missing": []}], "responses": {}}}}}"#,
    )
    .unwrap();

    let err = loader.map(&MapperOptions::default()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Mapping);
    assert_eq!(err.location(), "#/paths/~1pets/get/security/0/missing");
}

#[test]
fn test_schema_keywords_and_composition() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.0.0",
        "paths": {},
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["petType"],
                    "discriminator": {"propertyName": "petType", "mapping": {"dog": "Dog"}},
                    "properties": {"petType": {"type": "string"}},
                    "x-entity": {"table": "pets"}
                },
                "Dog": {
                    "allOf": [
                        {"$ref": "#/components/schemas/Pet"},
                        {"type": "object", "properties": {"bark": {"type": "boolean"}}}
                    ],
                    "required": ["bark"],
                    "description": "A dog",
                    "minProperties": 1,
                    "additionalProperties": false
                },
                "Size": {"type": "string", "enum": ["S", "M", 3, null], "maxLength": 1.5}
            }
        }
    }"##,
        BASE,
    );

    let pet = "https://example.org/api/components/schemas/Pet";
    let dog = "https://example.org/api/components/schemas/Dog";
    let size = "https://example.org/api/components/schemas/Size";

    assert!(has(&graph, pet, api::DISCRIMINATOR_PROPERTY, Literal::string("petType")));
    let mapping = format!("{}/discriminator/mapping/dog", pet);
    assert!(has(&graph, &mapping, api::MAPPING_KEY, Literal::string("dog")));
    assert!(has(&graph, &mapping, api::REFERS_TO, iri(dog)));

    let extension = format!("{}/x-entity", pet);
    assert!(has(&graph, &extension, rdf::VALUE, Literal::json(r#"{"table":"pets"}"#)));

    assert!(has(&graph, dog, api::ALL_OF, iri(&format!("{}/allOf/0", dog))));
    assert!(has(&graph, &format!("{}/allOf/0", dog), api::REFERS_TO, iri(pet)));
    assert!(has(&graph, &format!("{}/allOf/1", dog), api::POSITION, Literal::integer(1)));
    assert!(has(&graph, dog, api::REQUIRED_PROPERTY, Literal::string("bark")));
    assert!(has(&graph, dog, api::DESCRIPTION, Literal::string("A dog")));
    assert!(has(&graph, dog, &api::annotation("minProperties"), Literal::integer(1)));
    assert!(has(&graph, dog, api::ADDITIONAL_PROPERTIES, Literal::boolean(false)));

    assert_eq!(
        graph
            .iter()
            .filter(|t| t.subject.as_str() == size && t.predicate.as_str() == api::HAS_ENUM_VALUE)
            .count(),
        4
    );
    assert!(has(&graph, &format!("{}/enum/2", size), rdf::VALUE, Literal::typed("3", xsd::INTEGER)));
    assert!(has(&graph, &format!("{}/enum/3", size), rdf::VALUE, Literal::json("null")));
    assert!(has(
        &graph,
        size,
        &api::annotation("maxLength"),
        Literal::typed("1.5", xsd::DOUBLE)
    ));
}

#[test]
fn test_component_parameter_reference() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.0.0",
        "paths": {
            "/pets": {
                "parameters": [{"$ref": "#/components/parameters/Limit"}],
                "get": {"parameters": [{"$ref": "#/components/parameters/Limit"}], "responses": {}}
            }
        },
        "components": {
            "parameters": {"Limit": {"name": "limit", "in": "query", "schema": {"type": "integer"}}}
        }
    }"##,
        BASE,
    );

    let limit = "https://example.org/api/components/parameters/Limit";
    assert!(has(&graph, BASE, api::HAS_COMPONENT, iri(limit)));
    assert!(has(&graph, limit, api::PARAMETER_NAME, Literal::string("limit")));
    assert_eq!(
        graph
            .iter()
            .filter(|t| t.subject.as_str() == limit && t.predicate.as_str() == api::PARAMETER_NAME)
            .count(),
        1
    );

    let slot = "https://example.org/api/paths/%2Fpets/get/parameters/0";
    assert!(has(&graph, slot, rdf::TYPE, iri(api::PARAMETER)));
    assert!(has(&graph, slot, api::REFERS_TO, iri(limit)));
    assert!(has(&graph, slot, api::POSITION, Literal::integer(0)));
}

#[test]
fn test_mapping_is_deterministic() {
    let json = r##"{
        "openapi": "3.0.0",
        "info": {"title": "Zoo", "version": "1"},
        "paths": {
            "/b": {"post": {"responses": {"201": {"description": "made"}}}},
            "/a": {"get": {"responses": {"default": {"description": "any"}}}}
        },
        "components": {"schemas": {"Z": {"type": "string"}, "A": {"type": "integer"}}}
    }"##;

    let first: Vec<String> = map(json).iter().map(|t| t.to_string()).collect();
    let second: Vec<String> = map(json).iter().map(|t| t.to_string()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_stats() {
    let graph = map(r#"{
        "openapi": "3.0.0",
        "paths": {"/a": {"get": {"responses": {"200": {"description": "ok"}}}, "put": {"responses": {}}}},
        "components": {"schemas": {"A": {"type": "string"}}}
    }"#);

    let stats = GraphStats::from_graph(&graph);
    assert_eq!(stats.paths, 1);
    assert_eq!(stats.operations, 2);
    assert_eq!(stats.responses, 1);
    assert_eq!(stats.schemas, 1);
    assert_eq!(stats.triples, graph.len());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"openapi": "3.0.0", "info": {{"title": "File API"}}, "paths": {{}}}}"#
    )
    .unwrap();

    let loader = ApiLoader::from_file(file.path()).unwrap();
    assert_eq!(loader.document().title(), Some("File API"));
    assert_eq!(loader.source(), file.path().display().to_string());
}

#[test]
fn test_malformed_file_reports_position() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\n  \"info\": {{}}\n}}").unwrap();

    let err = ApiLoader::from_file(file.path()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err
        .location()
        .starts_with(&format!("{}:", file.path().display())));
    assert!(err.to_string().contains("paths"));
}

#[test]
fn test_relative_base_is_mapping_error() {
    let loader = ApiLoader::from_json(r#"{"paths": {}}"#).unwrap();

    let err = loader
        .map(&MapperOptions::default().with_base_iri("my api"))
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Mapping);
    assert_eq!(err.location(), "my api/");
    assert!(err.to_string().contains("invalid base IRI"));
}

#[test]
fn test_components_members_become_extensions() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.0.3",
        "paths": {},
        "components": {
            "schemas": {"Pet": {"type": "object"}},
            "examples": {"cat": {"value": {"name": "Tom"}}},
            "links": {"owner": {"operationId": "getOwner"}},
            "x-internal": "keep-me"
        }
    }"##,
        BASE,
    );

    let components = "https://example.org/api/components";
    for name in ["examples", "links", "x-internal"] {
        let extension = format!("{}/{}", components, name);
        assert!(has(&graph, BASE, api::HAS_EXTENSION, iri(&extension)), "{}", name);
        assert!(has(&graph, &extension, api::EXTENSION_NAME, Literal::string(name)));
    }
    assert!(has(
        &graph,
        &format!("{}/x-internal", components),
        rdf::VALUE,
        Literal::json(r#""keep-me""#)
    ));
    assert!(has(
        &graph,
        &format!("{}/examples", components),
        rdf::VALUE,
        Literal::json(r#"{"cat":{"value":{"name":"Tom"}}}"#)
    ));
}

#[test]
fn test_contact_license_and_discriminator_extensions() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.1.0",
        "info": {
            "title": "Pets",
            "contact": {"name": "Ops", "x-team": "platform"},
            "license": {"name": "Apache 2.0", "identifier": "Apache-2.0"}
        },
        "paths": {},
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "discriminator": {"propertyName": "kind", "x-note": "legacy"}
                }
            }
        }
    }"##,
        BASE,
    );

    let team = "https://example.org/api/info/contact/x-team";
    assert!(has(&graph, BASE, api::CONTACT_NAME, Literal::string("Ops")));
    assert!(has(&graph, BASE, api::HAS_EXTENSION, iri(team)));
    assert!(has(&graph, team, rdf::VALUE, Literal::json(r#""platform""#)));

    let identifier = "https://example.org/api/info/license/identifier";
    assert!(has(&graph, BASE, api::HAS_EXTENSION, iri(identifier)));
    assert!(has(&graph, identifier, api::EXTENSION_NAME, Literal::string("identifier")));

    let pet = "https://example.org/api/components/schemas/Pet";
    let note = format!("{}/discriminator/x-note", pet);
    assert!(has(&graph, pet, api::DISCRIMINATOR_PROPERTY, Literal::string("kind")));
    assert!(has(&graph, pet, api::HAS_EXTENSION, iri(&note)));
    assert!(has(&graph, &note, rdf::VALUE, Literal::json(r#""legacy""#)));
}

#[test]
fn test_boolean_schemas() {
    let graph = map_with_base(
        r##"{
        "openapi": "3.1.0",
        "paths": {},
        "components": {
            "schemas": {
                "Anything": true,
                "Bag": {
                    "type": "array",
                    "properties": {"meta": true},
                    "items": false,
                    "additionalProperties": true
                }
            }
        }
    }"##,
        BASE,
    );

    let anything = "https://example.org/api/components/schemas/Anything";
    assert!(has(&graph, anything, rdf::TYPE, iri(api::SCHEMA)));
    assert!(has(&graph, anything, api::SCHEMA_NAME, Literal::string("Anything")));
    assert!(has(&graph, anything, api::BOOLEAN_SCHEMA, Literal::boolean(true)));

    let bag = "https://example.org/api/components/schemas/Bag";
    let meta = format!("{}/properties/meta", bag);
    let items = format!("{}/items", bag);
    assert!(has(&graph, bag, api::HAS_PROPERTY, iri(&meta)));
    assert!(has(&graph, &meta, api::PROPERTY_NAME, Literal::string("meta")));
    assert!(has(&graph, &meta, api::BOOLEAN_SCHEMA, Literal::boolean(true)));
    assert!(has(&graph, bag, api::HAS_ITEM_TYPE, iri(&items)));
    assert!(has(&graph, &items, api::BOOLEAN_SCHEMA, Literal::boolean(false)));
    assert!(has(&graph, bag, api::ADDITIONAL_PROPERTIES, Literal::boolean(true)));
}

#[test]
fn test_vocabulary_declarations() {
    let json = r##"{
        "openapi": "3.0.0",
        "info": {"title": "Pets", "version": "2"},
        "paths": {"/pets": {"get": {"responses": {"200": {"description": "ok"}}}}},
        "components": {"schemas": {"Code": {"type": "string", "pattern": "^[A-Z]+$"}}}
    }"##;
    let loader = ApiLoader::from_json(json).unwrap();

    let plain = loader.map(&MapperOptions::default()).unwrap();
    assert!(plain.instances_of(owl::CLASS).is_empty());

    let graph = loader
        .map(&MapperOptions::default().with_vocabulary(true))
        .unwrap();
    assert!(has(&graph, api::PATH, rdf::TYPE, iri(owl::CLASS)));
    assert!(has(&graph, api::PATH, rdfs::LABEL, Literal::string("Path")));
    assert!(has(&graph, api::HAS_OPERATION, rdf::TYPE, iri(owl::OBJECT_PROPERTY)));
    assert!(has(&graph, api::STATUS_CODE, rdf::TYPE, iri(owl::DATATYPE_PROPERTY)));
    assert!(has(
        &graph,
        &api::annotation("pattern"),
        rdf::TYPE,
        iri(owl::ANNOTATION_PROPERTY)
    ));

    // Only terms that occur are declared
    assert!(!graph.iter().any(|t| t.subject.as_str() == api::SECURITY_SCHEME));
    let declared: usize = [
        owl::CLASS,
        owl::OBJECT_PROPERTY,
        owl::DATATYPE_PROPERTY,
        owl::ANNOTATION_PROPERTY,
    ]
    .into_iter()
    .map(|kind| graph.instances_of(kind).len())
    .sum();
    assert_eq!(graph.len(), plain.len() + 2 * declared);
}

#[test]
fn test_upper_case_method_key_is_extension() {
    let graph = map_with_base(
        r#"{"paths": {"/pets": {"GET": {"responses": {}}, "post": {"responses": {}}}}}"#,
        BASE,
    );

    let path = "https://example.org/api/paths/%2Fpets";
    assert_eq!(graph.instances_of(api::OPERATION), vec![&iri(&format!("{}/post", path))]);

    let extension = format!("{}/GET", path);
    assert!(has(&graph, path, api::HAS_EXTENSION, iri(&extension)));
    assert!(has(&graph, &extension, api::EXTENSION_NAME, Literal::string("GET")));
}
