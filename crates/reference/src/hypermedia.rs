//! Hypermedia document traversal
//!
//! The documentation API nests related collections under a fixed JSON:API
//! convention: a top-level `data` object whose `relationships` object holds
//! named relations, each with its own `data` array of entries. This module
//! implements the path descent once so every read operation shares the same
//! failure behavior: any missing key or wrong container kind is a
//! [`ReferenceError::MalformedHierarchy`] naming the path that failed.

use pco_poco_generator_common::{ReferenceError, Result};
use serde_json::Value;

/// Container kind expected at one descent step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Object,
    Array,
}

/// Follow a sequence of `(key, expected kind)` steps through nested objects.
///
/// Each step requires the current element to be an object containing the
/// key, and the value to be the expected container kind. Returns the element
/// reached by the final step.
pub fn descend<'a>(document: &'a Value, steps: &[(&str, Expect)]) -> Result<&'a Value> {
    let mut current = document;
    let mut walked: Vec<&str> = Vec::with_capacity(steps.len());

    for (key, expect) in steps {
        walked.push(*key);
        let child = current
            .as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| malformed(&walked))?;

        let kind_matches = match expect {
            Expect::Object => child.is_object(),
            Expect::Array => child.is_array(),
        };
        if !kind_matches {
            return Err(malformed(&walked));
        }
        current = child;
    }

    Ok(current)
}

/// Locate the entry array of a named relation: `data.relationships.{relation}.data`.
pub fn relation_entries<'a>(document: &'a Value, relation: &str) -> Result<&'a Vec<Value>> {
    let relation_object = descend(
        document,
        &[
            ("data", Expect::Object),
            ("relationships", Expect::Object),
            (relation, Expect::Object),
        ],
    )?;

    match relation_object.get("data") {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Err(ReferenceError::MalformedHierarchy {
            path: format!("data.relationships.{relation}.data"),
        }),
    }
}

/// Mandatory string field of an entry.
///
/// A missing key is a hierarchy fault; a key that is present but null,
/// empty, or not a string is a null-field fault. The distinction matters:
/// absence means our path assumptions no longer match the upstream schema,
/// while presence-with-null means the schema matches but the data is
/// unusable. `path` is the accumulated path of `entry`; both faults carry
/// the fully qualified `{path}.{key}` so same-named fields at different
/// depths stay distinguishable.
pub fn require_string(entry: &Value, key: &str, path: &str) -> Result<String> {
    let qualified = format!("{path}.{key}");
    let field = match entry.as_object().and_then(|object| object.get(key)) {
        Some(field) => field,
        None => return Err(ReferenceError::MalformedHierarchy { path: qualified }),
    };

    match field.as_str() {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ReferenceError::NullField { field: qualified }),
    }
}

/// Mandatory object field of an entry; absence or a non-object value is a
/// hierarchy fault.
pub fn require_object<'a>(entry: &'a Value, key: &str, path: &str) -> Result<&'a Value> {
    entry
        .as_object()
        .and_then(|object| object.get(key))
        .filter(|value| value.is_object())
        .ok_or_else(|| ReferenceError::MalformedHierarchy {
            path: format!("{path}.{key}"),
        })
}

/// Optional string field: the upstream value when it is a non-null string,
/// the fallback otherwise. Never fails.
pub fn string_or(entry: &Value, key: &str, fallback: &str) -> String {
    entry
        .as_object()
        .and_then(|object| object.get(key))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn malformed(walked: &[&str]) -> ReferenceError {
    ReferenceError::MalformedHierarchy {
        path: walked.join("."),
    }
}
