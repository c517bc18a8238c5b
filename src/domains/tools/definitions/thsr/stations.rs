//! THSR station list tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::ThsrEndpointTool;
use crate::tdx::{TdxClient, TdxResult};

/// The station list takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ThsrStationsParams {}

/// Lists every THSR station with its code, names and position.
#[derive(Debug, Clone)]
pub struct ThsrStationsTool;

impl ThsrStationsTool {
    /// Fetch the station list.
    ///
    /// Shared by the tool route and the `thsr://stations` resource.
    pub async fn fetch(client: &TdxClient) -> TdxResult<Value> {
        client
            .request(&Self::endpoint(&ThsrStationsParams::default()), &[])
            .await
    }
}

impl ThsrEndpointTool for ThsrStationsTool {
    const NAME: &'static str = "get_thsr_stations";
    const DESCRIPTION: &'static str = "List all Taiwan High Speed Rail stations. \
         Returns the raw TDX JSON including station IDs (e.g. 1000 Taipei, 1070 Zuoying), \
         Chinese and English names, addresses and coordinates.";

    type Params = ThsrStationsParams;

    fn endpoint(_params: &Self::Params) -> String {
        "Rail/THSR/Station".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tdx::test_support::mock_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[test]
    fn test_stations_endpoint() {
        assert_eq!(
            ThsrStationsTool::endpoint(&ThsrStationsParams::default()),
            "Rail/THSR/Station"
        );
    }

    #[test]
    fn test_stations_accepts_empty_arguments() {
        assert!(ThsrStationsTool::parse_params(serde_json::Map::new()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_upstream_json() {
        let (server, client) = mock_client().await;
        let stations = json!([
            { "StationID": "1000", "StationName": { "Zh_tw": "台北", "En": "Taipei" } },
            { "StationID": "1070", "StationName": { "Zh_tw": "左營", "En": "Zuoying" } }
        ]);
        Mock::given(method("GET"))
            .and(path("/api/Rail/THSR/Station"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stations.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let value = ThsrStationsTool::fetch(&client).await.unwrap();
        assert_eq!(value, stations);
    }
}
