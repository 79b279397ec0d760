//! Endpoint strategies for the services the harness can target.
//!
//! The dispatch engine never hardcodes a route; it asks an
//! [`EndpointStrategy`] where a mutation or retrieval for a given record goes.

use std::fmt::{self, Display};

use clap::ValueEnum;
use serde_json::{Map, Value};

/// Where a retrieval puts the resource identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPlacement {
    /// Appended to the path as a single percent-encoded segment.
    PathSegment,
    /// Sent as a percent-encoded query parameter with the given name.
    Query(&'static str),
}

/// Route of a retrieval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalEndpoint {
    pub path: &'static str,
    pub id: IdPlacement,
}

/// Maps a test-case record to the endpoints its request goes to.
///
/// Implementations must be pure: the same record always yields the same
/// endpoints.
pub trait EndpointStrategy: Send + Sync {
    /// Heading written at the top of the report.
    fn title(&self) -> &'static str;

    fn mutation_endpoint(&self, record: &Map<String, Value>) -> &'static str;

    fn retrieval_endpoint(&self, record: &Map<String, Value>) -> RetrievalEndpoint;
}

/// The services shipped with the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Service {
    User,
    Product,
}

impl Service {
    pub fn default_input(self) -> &'static str {
        match self {
            Service::User => "user_testcases.json",
            Service::Product => "product_testcases.json",
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            Service::User => "results.txt",
            Service::Product => "product_results.txt",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Service::User => "user",
            Service::Product => "product",
        };
        write!(f, "{label}")
    }
}

impl EndpointStrategy for Service {
    fn title(&self) -> &'static str {
        match self {
            Service::User => "USER SERVICE TEST RUN RESULTS",
            Service::Product => "PRODUCT SERVICE TEST RUN RESULTS",
        }
    }

    fn mutation_endpoint(&self, _record: &Map<String, Value>) -> &'static str {
        match self {
            Service::User => "/edit",
            Service::Product => "/product",
        }
    }

    fn retrieval_endpoint(&self, _record: &Map<String, Value>) -> RetrievalEndpoint {
        match self {
            Service::User => RetrievalEndpoint {
                path: "/retrieve",
                id: IdPlacement::Query("id"),
            },
            Service::Product => RetrievalEndpoint {
                path: "/product",
                id: IdPlacement::PathSegment,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_routes() {
        let record = Map::new();
        assert_eq!(Service::User.mutation_endpoint(&record), "/edit");
        assert_eq!(
            Service::User.retrieval_endpoint(&record),
            RetrievalEndpoint {
                path: "/retrieve",
                id: IdPlacement::Query("id"),
            }
        );
    }

    #[test]
    fn product_routes() {
        let record = Map::new();
        assert_eq!(Service::Product.mutation_endpoint(&record), "/product");
        assert_eq!(
            Service::Product.retrieval_endpoint(&record).id,
            IdPlacement::PathSegment
        );
    }

    #[test]
    fn per_service_file_defaults() {
        assert_eq!(Service::User.default_input(), "user_testcases.json");
        assert_eq!(Service::User.default_output(), "results.txt");
        assert_eq!(Service::Product.default_input(), "product_testcases.json");
        assert_eq!(Service::Product.default_output(), "product_results.txt");
    }
}
