//! API reference client
//!
//! One client per base address; every operation is an independent
//! fetch → parse → descend → map unit of work, so calls may run
//! concurrently without coordination.

use crate::hypermedia::{self, Expect};
use crate::type_mapper::TypeMapper;
use pco_poco_generator_common::{
    AttributeInfo, ReferenceError, ResourceInfo, Result, ATTRIBUTE_DESCRIPTION_FALLBACK,
    RESOURCE_DESCRIPTION_FALLBACK,
};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Client for the Planning Center documentation API
///
/// Cheap to clone; the underlying HTTP client is reference-counted.
#[derive(Debug, Clone)]
pub struct ApiReferenceClient {
    http: reqwest::Client,
    base_address: Url,
}

impl ApiReferenceClient {
    /// Create a client against a base address, e.g.
    /// `https://api.planningcenteronline.com/`. The address should end with
    /// a trailing slash so relative paths join beneath it.
    pub fn new(base_address: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_address)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(http: reqwest::Client, base_address: Url) -> Self {
        Self { http, base_address }
    }

    /// List the documentation versions published for a product, in upstream
    /// order.
    pub async fn versions(&self, product: &str) -> Result<Vec<String>> {
        let document = self
            .fetch_document(&format!("{product}/v2/documentation"))
            .await?;
        let entries = hypermedia::relation_entries(&document, "versions")?;

        entries
            .iter()
            .map(|entry| hypermedia::require_string(entry, "id", "data.relationships.versions.data"))
            .collect()
    }

    /// Most recent documentation version for a product.
    ///
    /// Upstream lists versions oldest-first, so this is the final entry.
    /// A well-formed but empty version list is a null-field fault: the
    /// hierarchy matched, there is simply no version to return.
    pub async fn latest_version(&self, product: &str) -> Result<String> {
        let versions = self.versions(product).await?;
        versions
            .into_iter()
            .next_back()
            .ok_or_else(|| ReferenceError::NullField {
                field: "data.relationships.versions.data".to_string(),
            })
    }

    /// List the resource types a product exposes at a version, in upstream
    /// order.
    pub async fn resources(&self, product: &str, version: &str) -> Result<Vec<ResourceInfo>> {
        let document = self
            .fetch_document(&format!("{product}/v2/documentation/{version}"))
            .await?;
        let entries = hypermedia::relation_entries(&document, "vertices")?;
        let path = "data.relationships.vertices.data";

        entries
            .iter()
            .map(|entry| {
                let id = hypermedia::require_string(entry, "id", path)?;
                let attributes = hypermedia::require_object(entry, "attributes", path)?;
                let name =
                    hypermedia::require_string(attributes, "name", &format!("{path}.attributes"))?;
                let description =
                    hypermedia::string_or(attributes, "description", RESOURCE_DESCRIPTION_FALLBACK);

                Ok(ResourceInfo {
                    id,
                    name,
                    description,
                })
            })
            .collect()
    }

    /// List the attributes of one resource, in upstream order, with each
    /// type annotation mapped into the intermediate representation.
    pub async fn attributes(
        &self,
        product: &str,
        version: &str,
        resource: &str,
    ) -> Result<Vec<AttributeInfo>> {
        let document = self.fetch_resource_document(product, version, resource).await?;
        let entries = hypermedia::relation_entries(&document, "attributes")?;
        let path = "data.relationships.attributes.data";

        entries
            .iter()
            .map(|entry| {
                let attributes = hypermedia::require_object(entry, "attributes", path)?;
                let entry_path = format!("{path}.attributes");
                let name = hypermedia::require_string(attributes, "name", &entry_path)?;
                let annotation =
                    hypermedia::require_object(attributes, "type_annotation", &entry_path)?;
                let source_type = hypermedia::require_string(
                    annotation,
                    "name",
                    &format!("{entry_path}.type_annotation"),
                )?;
                let description = hypermedia::string_or(
                    attributes,
                    "description",
                    ATTRIBUTE_DESCRIPTION_FALLBACK,
                );
                let mapped_type = TypeMapper::map_type(&source_type);

                Ok(AttributeInfo {
                    name,
                    description,
                    source_type,
                    mapped_type,
                })
            })
            .collect()
    }

    /// Fetch and decode a resource's example payload.
    ///
    /// The upstream stores the example as a JSON-encoded string under
    /// `data.attributes.example`, so this is a two-stage parse: outer
    /// document first, then the embedded string as an independent document.
    pub async fn example(&self, product: &str, version: &str, resource: &str) -> Result<Value> {
        let document = self.fetch_resource_document(product, version, resource).await?;
        let attributes = hypermedia::descend(
            &document,
            &[("data", Expect::Object), ("attributes", Expect::Object)],
        )?;

        let raw = match attributes.get("example") {
            Some(Value::String(raw)) => raw,
            Some(Value::Null) => return Err(ReferenceError::EmptyExample),
            _ => {
                return Err(ReferenceError::MalformedHierarchy {
                    path: "data.attributes.example".to_string(),
                })
            }
        };
        if raw.trim().is_empty() {
            return Err(ReferenceError::EmptyExample);
        }

        Ok(serde_json::from_str(raw)?)
    }

    async fn fetch_resource_document(
        &self,
        product: &str,
        version: &str,
        resource: &str,
    ) -> Result<Value> {
        self.fetch_document(&format!(
            "{product}/v2/documentation/{version}/vertices/{resource}"
        ))
        .await
    }

    async fn fetch_document(&self, path: &str) -> Result<Value> {
        let url = self.base_address.join(path)?;
        debug!(%url, "fetching reference document");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
