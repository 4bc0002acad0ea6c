//! Metadata records extracted from the API reference
//!
//! These are the domain records the extraction engine assembles from
//! hypermedia documents. They are created fresh per query and carry no
//! identity beyond their fields.

use crate::FieldType;
use serde::{Deserialize, Serialize};

/// Fallback description for resources the upstream leaves undocumented
pub const RESOURCE_DESCRIPTION_FALLBACK: &str =
    "Planning Center does not provide a description for this resource.";

/// Fallback description for attributes the upstream leaves undocumented
pub const ATTRIBUTE_DESCRIPTION_FALLBACK: &str =
    "Planning Center does not provide a description for this attribute.";

/// One resource type exposed by a product at a given version (e.g. "Person")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    /// Upstream resource identifier
    pub id: String,
    /// Resource display name
    pub name: String,
    /// Upstream description, or [`RESOURCE_DESCRIPTION_FALLBACK`]
    pub description: String,
}

/// One field belonging to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInfo {
    /// Attribute name as published upstream
    pub name: String,
    /// Upstream description, or [`ATTRIBUTE_DESCRIPTION_FALLBACK`]
    pub description: String,
    /// The upstream type annotation, verbatim (e.g. "date_time")
    pub source_type: String,
    /// Target-language type mapped from the annotation
    pub mapped_type: FieldType,
}
