//! The named, ordered set of test cases a run replays.

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Test name -> test-case record, in the order the input file lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCaseSet {
    cases: Map<String, Value>,
}

impl TestCaseSet {
    /// Accept a decoded document. Only an object root is a valid test case set;
    /// the individual records are validated later, per case.
    pub fn from_value(document: Value) -> Result<Self, ConfigError> {
        match document {
            Value::Object(cases) => Ok(Self { cases }),
            other => Err(ConfigError::InputNotObject {
                found: json_kind(&other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cases.iter().map(|(name, record)| (name.as_str(), record))
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_file_order() {
        let document: Value =
            serde_json::from_str(r#"{"zeta": {"id": 1}, "alpha": {"id": 2}, "mid": 3}"#).unwrap();
        let set = TestCaseSet::from_value(document).unwrap();

        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn duplicate_names_keep_last_value_in_first_position() {
        let document: Value =
            serde_json::from_str(r#"{"a": {"id": 1}, "b": {"id": 2}, "a": {"id": 3}}"#).unwrap();
        let set = TestCaseSet::from_value(document).unwrap();

        let cases: Vec<(&str, &Value)> = set.iter().collect();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0], ("a", &json!({"id": 3})));
        assert_eq!(cases[1].0, "b");
    }

    #[test]
    fn rejects_non_object_root() {
        let err = TestCaseSet::from_value(json!([{"id": 1}])).unwrap_err();
        assert!(matches!(err, ConfigError::InputNotObject { found: "an array" }));
    }

    #[test]
    fn empty_object_is_valid() {
        let set = TestCaseSet::from_value(json!({})).unwrap();
        assert!(set.is_empty());
    }
}
