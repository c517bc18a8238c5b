//! THSR station list resource.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Station list, fetched from TDX on every read.
pub struct ThsrStationsResource;

impl ResourceDefinition for ThsrStationsResource {
    const URI: &'static str = "thsr://stations";
    const NAME: &'static str = "THSR Stations";
    const DESCRIPTION: &'static str = "All Taiwan High Speed Rail stations and their details";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stations_metadata() {
        assert_eq!(ThsrStationsResource::URI, "thsr://stations");
        assert_eq!(ThsrStationsResource::MIME_TYPE, "application/json");
        assert!(matches!(
            ThsrStationsResource::content(),
            ResourceContent::Dynamic(DynamicResourceType::Stations)
        ));
    }
}
