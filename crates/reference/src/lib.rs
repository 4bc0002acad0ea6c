//! Metadata extraction for the Planning Center API reference
//!
//! This crate reads the Planning Center documentation API (a JSON:API-style
//! hypermedia service) and assembles the metadata needed to generate
//! statically typed data objects: the versions of a product's documentation,
//! the resource types a version exposes, and the attributes of each resource.
//!
//! ## Extraction strategy
//!
//! Every read operation follows the same three stages:
//! - fetch one document over HTTP from a path built from product, version,
//!   and resource identifiers,
//! - descend the fixed hypermedia path
//!   (`data.relationships.{relation}.data`) to the entry collection,
//! - map each entry into a domain record, failing the whole operation on the
//!   first entry that deviates from the expected shape.
//!
//! There is no partial result: an operation returns a fully populated
//! collection or an error naming the step that failed.

pub mod client;
pub mod hypermedia;
mod type_mapper;

pub use client::ApiReferenceClient;
pub use type_mapper::TypeMapper;
