use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use crate::collections::TestCaseSet;
use crate::error::ConfigError;

pub fn load_test_cases(path: &Path) -> Result<TestCaseSet, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::InputRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document = serde_json::from_str(&raw).map_err(|source| ConfigError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;
    TestCaseSet::from_value(document)
}

/// Open the report for this run, truncating whatever a previous run left.
pub fn create_report_file(path: &Path) -> Result<BufWriter<File>, ConfigError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ConfigError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })
}
