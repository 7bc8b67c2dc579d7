//! Summary counts of a mapped graph

use openapi_rdf_common::vocab::api;
use openapi_rdf_common::Graph;

/// Resource counts reported by `inspect` and verbose `convert`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub paths: usize,
    pub operations: usize,
    pub parameters: usize,
    pub request_bodies: usize,
    pub responses: usize,
    /// Named schema definitions
    pub schemas: usize,
    pub security_schemes: usize,
    pub tags: usize,
    pub resources: usize,
    pub triples: usize,
}

impl GraphStats {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            paths: graph.instances_of(api::PATH).len(),
            operations: graph.instances_of(api::OPERATION).len(),
            parameters: graph.instances_of(api::PARAMETER).len(),
            request_bodies: graph.instances_of(api::REQUEST_BODY).len(),
            responses: graph.instances_of(api::RESPONSE).len(),
            schemas: graph.with_predicate(api::SCHEMA_NAME).count(),
            security_schemes: graph.instances_of(api::SECURITY_SCHEME).len(),
            tags: graph.instances_of(api::TAG).len(),
            resources: graph.subjects().len(),
            triples: graph.len(),
        }
    }
}
