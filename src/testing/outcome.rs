use serde::Serialize;

use super::classify::SkipReason;
use crate::http::method::HttpMethod;
use crate::http::response::HttpResponse;

/// How one test case ended. Error statuses are outcomes, not failures of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Success { status: u16, body: String },
    HttpError { status: u16, body: String },
    TransportFailure { message: String },
    Skipped {
        #[serde(serialize_with = "serialize_reason")]
        reason: SkipReason,
    },
}

impl Outcome {
    pub fn from_exchange(exchange: Result<HttpResponse, String>) -> Self {
        match exchange {
            Ok(response) if response.is_error_status() => Outcome::HttpError {
                status: response.status,
                body: response.body,
            },
            Ok(response) => Outcome::Success {
                status: response.status,
                body: response.body,
            },
            Err(message) => Outcome::TransportFailure { message },
        }
    }
}

fn serialize_reason<S>(reason: &SkipReason, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(reason)
}

/// The request that was sent for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Mutation label, e.g. `create`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Everything recorded about one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<SentRequest>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Tally of outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub http_errors: usize,
    pub transport_failures: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Success { .. } => self.succeeded += 1,
            Outcome::HttpError { .. } => self.http_errors += 1,
            Outcome::TransportFailure { .. } => self.transport_failures += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
        }
    }
}
