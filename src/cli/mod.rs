//! Command-line surface. Flags can also come from `REPLAY_*` environment
//! variables; anything left unset falls back to the service's defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::environment::{DEFAULT_BASE_URL, Environment};
use crate::error::ConfigError;
use crate::report::ReportFormat;
use crate::services::Service;

/// Replay a JSON file of named test cases against a service and write a transcript.
#[derive(Debug, Parser)]
#[command(name = "api-replay", version)]
pub struct Cli {
    /// Service whose endpoints the test cases target.
    #[arg(long, value_enum, env = "REPLAY_SERVICE")]
    pub service: Service,

    /// Test case file (defaults to `<service>_testcases.json`).
    #[arg(long, env = "REPLAY_INPUT")]
    pub input: Option<PathBuf>,

    /// Report file, overwritten on every run.
    #[arg(long, env = "REPLAY_OUTPUT")]
    pub output: Option<PathBuf>,

    #[arg(long, env = "REPLAY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub service: Service,
    pub input_path: PathBuf,
    pub report_path: PathBuf,
    pub environment: Environment,
    pub output_format: ReportFormat,
}

impl Cli {
    pub fn into_config(self) -> Result<CliConfig, ConfigError> {
        let environment = Environment::parse(&self.base_url)?;
        Ok(CliConfig {
            input_path: self
                .input
                .unwrap_or_else(|| PathBuf::from(self.service.default_input())),
            report_path: self
                .output
                .unwrap_or_else(|| PathBuf::from(self.service.default_output())),
            service: self.service,
            environment,
            output_format: self.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("api-replay").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn product_defaults() {
        let config = parse(&["--service", "product"]).into_config().unwrap();

        assert_eq!(config.service, Service::Product);
        assert_eq!(config.input_path, PathBuf::from("product_testcases.json"));
        assert_eq!(config.report_path, PathBuf::from("product_results.txt"));
        assert_eq!(config.environment.base_url(), "http://localhost:8081");
        assert_eq!(config.output_format, ReportFormat::Text);
    }

    #[test]
    fn explicit_flags_win() {
        let config = parse(&[
            "--service",
            "user",
            "--input",
            "cases.json",
            "--output",
            "out.jsonl",
            "--base-url",
            "http://10.0.0.5:9000/",
            "--format",
            "json",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("cases.json"));
        assert_eq!(config.report_path, PathBuf::from("out.jsonl"));
        assert_eq!(config.environment.base_url(), "http://10.0.0.5:9000");
        assert_eq!(config.output_format, ReportFormat::Json);
    }

    #[test]
    fn unknown_service_is_rejected() {
        assert!(Cli::try_parse_from(["api-replay", "--service", "orders"]).is_err());
    }

    #[test]
    fn bad_base_url_is_a_config_error() {
        let err = parse(&["--service", "user", "--base-url", "localhost"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
