//! Live departure board for one station.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::ThsrEndpointTool;

/// Parameters for a station live board query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThsrLiveScheduleParams {
    #[schemars(description = "Station ID (e.g. 1000 Taipei)")]
    pub station_id: String,
}

#[derive(Debug, Clone)]
pub struct ThsrLiveScheduleTool;

impl ThsrEndpointTool for ThsrLiveScheduleTool {
    const NAME: &'static str = "get_thsr_live_schedule";
    const DESCRIPTION: &'static str =
        "Get the real-time departure board of a THSR station, including delays.";

    type Params = ThsrLiveScheduleParams;

    fn endpoint(params: &Self::Params) -> String {
        format!("Rail/THSR/LiveBoard/Station/{}", params.station_id)
    }
}
