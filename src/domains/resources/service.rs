//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Resources are
//! defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::tools::definitions::ThsrStationsTool;
use crate::tdx::TdxClient;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Client used to resolve dynamic resources.
    client: Arc<TdxClient>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Content fetched when the resource is read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// THSR station list from TDX.
    Stations,
}

impl ResourceService {
    /// Create a new ResourceService backed by the given client.
    pub fn new(client: Arc<TdxClient>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            client,
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(dynamic_type).await?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }

    /// Resolve dynamic resource content to text.
    async fn resolve_dynamic_content(
        &self,
        dynamic_type: &DynamicResourceType,
    ) -> Result<String, ResourceError> {
        match dynamic_type {
            DynamicResourceType::Stations => {
                let stations = ThsrStationsTool::fetch(&self.client).await?;
                Ok(stations.to_string())
            }
        }
    }
}
