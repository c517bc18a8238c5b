//! Daily timetable between two stations.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::ThsrEndpointTool;

/// Parameters for an origin/destination timetable query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThsrTimetableParams {
    #[schemars(description = "Origin station ID (e.g. 1000 Taipei, 1070 Zuoying)")]
    pub origin_station_id: String,

    #[schemars(description = "Destination station ID")]
    pub destination_station_id: String,

    #[schemars(description = "Travel date (YYYY-MM-DD)")]
    pub travel_date: String,
}

#[derive(Debug, Clone)]
pub struct ThsrTimetableTool;

impl ThsrEndpointTool for ThsrTimetableTool {
    const NAME: &'static str = "get_thsr_timetable";
    const DESCRIPTION: &'static str = "Get the THSR timetable between an origin and a destination \
         station on a given date. Returns every train serving the pair with departure and arrival times.";

    type Params = ThsrTimetableParams;

    fn endpoint(params: &Self::Params) -> String {
        format!(
            "Rail/THSR/DailyTimetable/OD/{}/to/{}/{}",
            params.origin_station_id, params.destination_station_id, params.travel_date
        )
    }
}
