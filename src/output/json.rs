//! JSON response envelopes.
//!
//! Successful results are wrapped as `{"error": false, "result": ...}`,
//! subnet lists as `{"error": false, "subnets": [...]}`, failures as
//! `{"error": true, "kind": ..., "message": ...}`.

use crate::error::CalcError;
use crate::processing::NO_OVERLAPS;
use serde::Serialize;
use serde_json::{json, Value};

fn to_pretty(value: &Value) -> Result<String, CalcError> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| CalcError::Internal(format!("Error serializing JSON: {e}")))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, CalcError> {
    serde_json::to_value(value)
        .map_err(|e| CalcError::Internal(format!("Error serializing JSON: {e}")))
}

pub fn result<T: Serialize>(value: &T) -> Result<String, CalcError> {
    to_pretty(&json!({ "error": false, "result": to_value(value)? }))
}

pub fn subnets<T: Serialize>(subnets: &[T]) -> Result<String, CalcError> {
    to_pretty(&json!({ "error": false, "subnets": to_value(&subnets)? }))
}

pub fn overlaps(lines: &[String]) -> Result<String, CalcError> {
    let overlaps = if lines.is_empty() {
        json!(NO_OVERLAPS)
    } else {
        json!(lines)
    };
    to_pretty(&json!({ "error": false, "overlaps": overlaps }))
}

/// Summary fields sit at the top level of the envelope, next to `error`.
pub fn summary<T: Serialize>(summary: &T) -> Result<String, CalcError> {
    let mut body = to_value(summary)?;
    if let Value::Object(map) = &mut body {
        map.insert("error".to_string(), json!(false));
    }
    to_pretty(&body)
}

pub fn error(err: &CalcError) -> String {
    let body = json!({
        "error": true,
        "kind": err.kind(),
        "message": err.to_string(),
    });
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| err.to_string()) + "\n"
}
