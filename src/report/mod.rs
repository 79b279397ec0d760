//! Transcript of a run: a header, then one block per test case in input order.
//!
//! The writer is append-only; blocks are written as soon as a case finishes
//! and never revisited.

use std::io::{self, Write};

use clap::ValueEnum;
use serde_json::json;

use crate::http::method::HttpMethod;
use crate::testing::outcome::{CaseResult, Outcome};

const SEPARATOR_WIDTH: usize = 40;

/// Layout of the report file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable transcript.
    #[default]
    Text,
    /// JSON Lines: a header object, then one object per test case.
    Json,
}

pub struct ReportWriter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    pub fn write_header(&mut self, title: &str, base_url: &str, total: usize) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.out, "--- {title} ---")?;
                writeln!(self.out, "Base URL: {base_url}")?;
                writeln!(self.out, "Total Tests: {total}")?;
                writeln!(self.out)
            }
            ReportFormat::Json => {
                let header = json!({"title": title, "base_url": base_url, "total": total});
                serde_json::to_writer(&mut self.out, &header)?;
                writeln!(self.out)
            }
        }
    }

    pub fn write_case(&mut self, result: &CaseResult) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => self.write_text_block(result),
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.out, result)?;
                writeln!(self.out)
            }
        }
    }

    fn write_text_block(&mut self, result: &CaseResult) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "=== TEST: {} ===", result.name)?;

        if let Some(request) = &result.request {
            match (request.method, &request.command) {
                (HttpMethod::Post, Some(command)) => writeln!(out, "TYPE: POST ({command})")?,
                (method, _) => writeln!(out, "TYPE: {method}")?,
            }
            writeln!(out, "URL: {}", request.url)?;
            if let Some(body) = &request.body {
                writeln!(out, "SENT: {body}")?;
            }
        }

        match &result.outcome {
            Outcome::Success { status, body } => {
                writeln!(out, "STATUS: {status}")?;
                writeln!(out, "RECEIVED: {body}")?;
            }
            Outcome::HttpError { status, body } => {
                writeln!(out, "STATUS: {status}")?;
                writeln!(out, "ERROR BODY: {body}")?;
            }
            Outcome::TransportFailure { message } => {
                writeln!(out, "STATUS: CONNECTION FAILED")?;
                writeln!(out, "EXCEPTION: {message}")?;
            }
            Outcome::Skipped { reason } => writeln!(out, "SKIPPED: {reason}")?,
        }

        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One terse operator-facing line per case.
pub fn progress_line(result: &CaseResult) -> String {
    let name = &result.name;
    match &result.outcome {
        Outcome::Success { status, .. } => format!("[{name}] ✅ {status}"),
        Outcome::HttpError { status, .. } => format!("[{name}] ❌ {status}"),
        Outcome::TransportFailure { message } => format!("[{name}] 💥 Error: {message}"),
        Outcome::Skipped { reason } => format!("[{name}] SKIPPED ({reason})"),
    }
}
