//! # Response Schemas
//!
//! Shape checks for the two payloads the backend produces. Each validator walks a decoded
//! [`serde_json::Value`] field by field and either returns the fully typed structure or the
//! first violation it ran into. Nothing partially populated ever escapes.
//!
//! Objects are checked non-strictly: keys the schema does not mention are ignored.

use crate::model::{BookDetailsResponse, BookListResponse};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// The first place where a payload deviated from its schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: expected {expected}, found {found}")]
pub struct ValidationError {
    /// Location of the offending value, e.g. `$`, `books` or `words[2]`.
    pub path: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl ValidationError {
    fn new(path: impl Into<String>, expected: &'static str, value: Option<&Value>) -> Self {
        Self {
            path: path.into(),
            expected,
            found: value.map(json_type).unwrap_or("nothing"),
        }
    }
}

type Validated<T> = std::result::Result<T, ValidationError>;

/// Validates a `GET /books` payload: `{ books: string[], status: string }`.
pub fn validate_list_response(value: &Value) -> Validated<BookListResponse> {
    let obj = object(value)?;
    Ok(BookListResponse {
        books: string_array(obj, "books")?,
        status: string(obj, "status")?,
    })
}

/// Validates a `GET /books/{id}` payload:
/// `{ book_name: string, status: string, word_count: number, words: string[] }`.
pub fn validate_detail_response(value: &Value) -> Validated<BookDetailsResponse> {
    let obj = object(value)?;
    Ok(BookDetailsResponse {
        book_name: string(obj, "book_name")?,
        status: string(obj, "status")?,
        word_count: number(obj, "word_count")?,
        words: string_array(obj, "words")?,
    })
}

fn object(value: &Value) -> Validated<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new("$", "object", Some(value)))
}

fn string(obj: &Map<String, Value>, key: &str) -> Validated<String> {
    let value = obj.get(key);
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::new(key, "string", value))
}

fn number(obj: &Map<String, Value>, key: &str) -> Validated<Number> {
    let value = obj.get(key);
    match value {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err(ValidationError::new(key, "number", value)),
    }
}

fn string_array(obj: &Map<String, Value>, key: &str) -> Validated<Vec<String>> {
    let value = obj.get(key);
    let items = value
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new(key, "array", value))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ValidationError::new(format!("{}[{}]", key, i), "string", Some(item)))
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
