use std::fmt::{self, Display};

use serde_json::{Map, Value};

/// What a single test-case record asks for. Decided before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category<'a> {
    Mutation {
        record: &'a Map<String, Value>,
        command: &'a Value,
    },
    Retrieval {
        record: &'a Map<String, Value>,
        id: String,
    },
    Skipped(SkipReason),
}

/// Why a record produced no request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    NoCommandNoId,
    BlankId,
    InvalidRequest(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "not an object"),
            SkipReason::NoCommandNoId => write!(f, "no command and no id"),
            SkipReason::BlankId => write!(f, "id is blank"),
            SkipReason::InvalidRequest(detail) => write!(f, "request could not be built: {detail}"),
        }
    }
}

pub fn classify(record: &Value) -> Category<'_> {
    let Value::Object(fields) = record else {
        return Category::Skipped(SkipReason::NotAnObject);
    };

    if let Some(command) = fields.get("command").filter(|command| is_truthy(command)) {
        return Category::Mutation {
            record: fields,
            command,
        };
    }

    let id = match fields.get("id") {
        None | Some(Value::Null) => return Category::Skipped(SkipReason::NoCommandNoId),
        Some(id) => display_value(id),
    };
    let id = id.trim();
    if id.is_empty() {
        return Category::Skipped(SkipReason::BlankId);
    }

    Category::Retrieval {
        record: fields,
        id: id.to_string(),
    }
}

/// Loose truthiness: null, false, zero, and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Strings render verbatim, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
