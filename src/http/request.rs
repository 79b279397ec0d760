use url::Url;

use super::body::canonical_json;
use super::method::HttpMethod;
use crate::environment::Environment;
use crate::services::EndpointStrategy;
use crate::testing::classify::{Category, SkipReason};

pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// A fully specified request, ready to hand to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInput {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

/// Turn a classified record into a request. Skipped records come back as
/// their skip reason; nothing is sent for them.
pub fn build_request(
    category: &Category<'_>,
    strategy: &dyn EndpointStrategy,
    environment: &Environment,
) -> Result<RequestInput, SkipReason> {
    match category {
        Category::Mutation { record, .. } => {
            let body = canonical_json(*record)
                .map_err(|e| SkipReason::InvalidRequest(e.to_string()))?;
            Ok(RequestInput {
                method: HttpMethod::Post,
                url: environment.endpoint(strategy.mutation_endpoint(record)),
                headers: vec![CONTENT_TYPE_JSON],
                body: Some(body),
            })
        }
        Category::Retrieval { record, id } => Ok(RequestInput {
            method: HttpMethod::Get,
            url: environment
                .retrieval(strategy.retrieval_endpoint(record), id)
                .map_err(SkipReason::InvalidRequest)?,
            headers: Vec::new(),
            body: None,
        }),
        Category::Skipped(reason) => Err(reason.clone()),
    }
}
