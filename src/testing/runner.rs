use std::io::Write;

use serde_json::Value;
use tracing::{debug, info};

use super::classify::{Category, classify, display_value};
use super::outcome::{CaseResult, Outcome, RunSummary, SentRequest};
use crate::collections::TestCaseSet;
use crate::environment::Environment;
use crate::error::RunError;
use crate::http::client::send_request;
use crate::http::request::build_request;
use crate::report::{ReportWriter, progress_line};
use crate::services::EndpointStrategy;

/// Replays test cases one at a time against a single target.
///
/// Cases are strictly sequential: each request is awaited to completion and
/// its block written before the next case starts. There is no timeout beyond
/// the transport default, so a stalled service stalls the run.
pub struct Runner {
    client: reqwest::Client,
    environment: Environment,
    strategy: Box<dyn EndpointStrategy>,
}

impl Runner {
    pub fn new(environment: Environment, strategy: Box<dyn EndpointStrategy>) -> Self {
        Self {
            client: reqwest::Client::new(),
            environment,
            strategy,
        }
    }

    /// Classify, build, send and record a single test case. Never fails: every
    /// per-case problem ends up in the returned outcome.
    pub async fn dispatch(&self, name: &str, record: &Value) -> CaseResult {
        let category = classify(record);
        let command = match &category {
            Category::Mutation { command, .. } => Some(display_value(command)),
            _ => None,
        };

        let request = match build_request(&category, self.strategy.as_ref(), &self.environment) {
            Ok(request) => request,
            Err(reason) => {
                debug!(test = name, %reason, "skipping test case");
                return CaseResult {
                    name: name.to_string(),
                    request: None,
                    outcome: Outcome::Skipped { reason },
                };
            }
        };

        debug!(test = name, method = %request.method, url = %request.url, "sending request");
        let outcome = Outcome::from_exchange(send_request(&self.client, &request).await);

        CaseResult {
            name: name.to_string(),
            request: Some(SentRequest {
                method: request.method,
                url: request.url.to_string(),
                command,
                body: request.body,
            }),
            outcome,
        }
    }

    /// Run every case in input order, appending one report block and one
    /// progress line per case.
    pub async fn run<W: Write>(
        &self,
        cases: &TestCaseSet,
        report: &mut ReportWriter<W>,
        progress: &mut dyn Write,
    ) -> Result<RunSummary, RunError> {
        info!(
            total = cases.len(),
            base_url = self.environment.base_url(),
            "starting test run"
        );
        report.write_header(self.strategy.title(), self.environment.base_url(), cases.len())?;

        let mut summary = RunSummary::default();
        for (name, record) in cases.iter() {
            let result = self.dispatch(name, record).await;
            summary.record(&result.outcome);
            report.write_case(&result)?;
            writeln!(progress, "{}", progress_line(&result))?;
        }
        report.flush()?;

        info!(
            succeeded = summary.succeeded,
            http_errors = summary.http_errors,
            transport_failures = summary.transport_failures,
            skipped = summary.skipped,
            "test run finished"
        );
        Ok(summary)
    }
}
