use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

const SOURCE_EXTENSION: &str = ".json";

/// Fields that wrap a single record inside an object document, in lookup order.
const WRAPPER_FIELDS: [&str; 3] = ["company", "employee", "data"];

/// One untyped record pulled out of a source document, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object()?.get(name)
    }
}

/// How a parsed document maps onto raw records.
#[derive(Debug, PartialEq)]
enum DocumentShape {
    /// Top-level array: one record per element.
    Sequence(Vec<Value>),
    /// Object whose `company`/`employee`/`data` field holds the record.
    Wrapped(Value),
    /// Object that is itself the record.
    Bare(Value),
    /// Anything else carries no records.
    Scalar,
}

impl DocumentShape {
    fn classify(document: Value) -> Self {
        match document {
            Value::Array(items) => Self::Sequence(items),
            Value::Object(mut fields) => {
                for name in WRAPPER_FIELDS {
                    if fields.get(name).is_some_and(is_truthy)
                        && let Some(inner) = fields.remove(name)
                    {
                        return Self::Wrapped(inner);
                    }
                }
                Self::Bare(Value::Object(fields))
            }
            _ => Self::Scalar,
        }
    }

    fn into_records(self) -> Vec<RawRecord> {
        match self {
            Self::Sequence(items) => items.into_iter().map(RawRecord).collect(),
            Self::Wrapped(record) | Self::Bare(record) => vec![RawRecord(record)],
            Self::Scalar => Vec::new(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        // A literal too large for f64 has no `as_f64` and is still non-zero.
        Value::Number(number) => number.as_f64().is_none_or(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Splits one parsed document into raw records.
pub fn extract_records(document: Value) -> Vec<RawRecord> {
    DocumentShape::classify(document).into_records()
}

/// Reads every `.json` file in `dir`, in file-name order.
///
/// A missing or unlistable directory yields no records. A file that cannot be
/// read or parsed is logged and skipped.
pub fn read_source_dir(dir: &Path) -> Vec<RawRecord> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(dir = %dir.display(), %error, "source directory unavailable");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_source_file(path))
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        match read_document(&path) {
            Ok(document) => records.extend(extract_records(document)),
            Err(error) => warn!(file = %path.display(), %error, "skipping invalid JSON"),
        }
    }
    records
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_EXTENSION))
}

fn read_document(path: &Path) -> Result<Value, String> {
    let text = fs::read_to_string(path).map_err(|error| format!("read source file: {error}"))?;
    serde_json::from_str(&text).map_err(|error| format!("parse source file: {error}"))
}
