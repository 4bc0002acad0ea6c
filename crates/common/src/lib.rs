//! Common types and utilities for the Planning Center POCO generator
//!
//! This crate contains the shared error taxonomy, the field type
//! intermediate representation, and the metadata records produced by the
//! reference extraction engine.

mod metadata;

pub use metadata::{
    AttributeInfo, ResourceInfo, ATTRIBUTE_DESCRIPTION_FALLBACK, RESOURCE_DESCRIPTION_FALLBACK,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading the API reference
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The document parsed, but the expected key or container kind was
    /// missing at some step of the fixed hypermedia path.
    #[error("unexpected document hierarchy at `{path}`")]
    MalformedHierarchy { path: String },

    /// A mandatory field exists in the document but its value is null,
    /// empty, or not a string.
    #[error("mandatory field `{field}` is null or empty")]
    NullField { field: String },

    /// The resource's example payload is null, empty, or whitespace-only.
    #[error("resource example payload is empty")]
    EmptyExample,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for reference extraction operations
pub type Result<T> = std::result::Result<T, ReferenceError>;

/// Products documented by the Planning Center API reference.
///
/// Convenience list only; operations accept arbitrary product identifiers
/// and let unknown ones fail upstream.
pub const PRODUCTS: [&str; 7] = [
    "calendar",
    "check-ins",
    "giving",
    "groups",
    "people",
    "publishing",
    "services",
];

/// Represents a field type in the intermediate representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    Date,
    /// A value with no usable type annotation; kept as raw JSON.
    Json,
    List(Box<FieldType>),
}

impl FieldType {
    /// Concrete Rust type name for generated data objects
    pub fn rust_type(&self) -> String {
        match self {
            FieldType::String => "String".to_string(),
            FieldType::Integer => "i64".to_string(),
            FieldType::Float => "f64".to_string(),
            FieldType::Boolean => "bool".to_string(),
            FieldType::DateTime => "chrono::DateTime<chrono::Utc>".to_string(),
            FieldType::Date => "chrono::NaiveDate".to_string(),
            FieldType::Json => "serde_json::Value".to_string(),
            FieldType::List(inner) => format!("Vec<{}>", inner.rust_type()),
        }
    }
}
