//! Seat availability for every train between two stations.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::ThsrEndpointTool;

/// Parameters for an origin/destination seat availability query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThsrAvailableSeatsParams {
    #[schemars(description = "Origin station ID (e.g. 1000 Taipei, 1070 Zuoying)")]
    pub origin_station_id: String,

    #[schemars(description = "Destination station ID")]
    pub destination_station_id: String,

    #[schemars(description = "Train date (YYYY-MM-DD)")]
    pub train_date: String,
}

#[derive(Debug, Clone)]
pub struct ThsrAvailableSeatsTool;

impl ThsrEndpointTool for ThsrAvailableSeatsTool {
    const NAME: &'static str = "get_thsr_available_seats";
    const DESCRIPTION: &'static str = "Find THSR trains with available seats between an origin \
         and a destination station on a given date.";

    type Params = ThsrAvailableSeatsParams;

    fn endpoint(params: &Self::Params) -> String {
        format!(
            "Rail/THSR/AvailableSeatStatus/Train/OD/{}/to/{}/TrainDate/{}",
            params.origin_station_id, params.destination_station_id, params.train_date
        )
    }
}
