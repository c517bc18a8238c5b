//! Seat status of one train between two stations.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::ThsrEndpointTool;

/// Parameters for a single-train seat status query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThsrTrainSeatStatusParams {
    #[schemars(description = "Origin station ID (e.g. 1000 Taipei, 1070 Zuoying)")]
    pub origin_station_id: String,

    #[schemars(description = "Destination station ID")]
    pub destination_station_id: String,

    #[schemars(description = "Train date (YYYY-MM-DD)")]
    pub train_date: String,

    #[schemars(description = "Train number (e.g. 823)")]
    pub train_no: String,
}

#[derive(Debug, Clone)]
pub struct ThsrTrainSeatStatusTool;

impl ThsrEndpointTool for ThsrTrainSeatStatusTool {
    const NAME: &'static str = "get_thsr_train_seat_status";
    const DESCRIPTION: &'static str = "Get the standard and business class seat status of one \
         THSR train between an origin and a destination station on a given date.";

    type Params = ThsrTrainSeatStatusParams;

    fn endpoint(params: &Self::Params) -> String {
        format!(
            "Rail/THSR/AvailableSeatStatus/Train/OD/{}/to/{}/TrainDate/{}/TrainNo/{}",
            params.origin_station_id,
            params.destination_station_id,
            params.train_date,
            params.train_no
        )
    }
}
