//! Timetable of a single train.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::ThsrEndpointTool;

/// Parameters for a train number query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThsrTrainInfoParams {
    #[schemars(description = "Train number (e.g. 823)")]
    pub train_no: String,

    #[schemars(description = "Travel date (YYYY-MM-DD)")]
    pub travel_date: String,
}

#[derive(Debug, Clone)]
pub struct ThsrTrainInfoTool;

impl ThsrEndpointTool for ThsrTrainInfoTool {
    const NAME: &'static str = "get_thsr_train_info";
    const DESCRIPTION: &'static str = "Get the stops and times of a specific THSR train on a given date.";

    type Params = ThsrTrainInfoParams;

    fn endpoint(params: &Self::Params) -> String {
        format!(
            "Rail/THSR/DailyTimetable/TrainNo/{}/{}",
            params.train_no, params.travel_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tdx::test_support::{TEST_TOKEN, mock_client};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[test]
    fn test_train_info_endpoint() {
        let params = ThsrTrainInfoParams {
            train_no: "823".to_string(),
            travel_date: "2024-01-01".to_string(),
        };
        assert_eq!(
            ThsrTrainInfoTool::endpoint(&params),
            "Rail/THSR/DailyTimetable/TrainNo/823/2024-01-01"
        );
    }

    #[test]
    fn test_train_info_params_parse_from_arguments() {
        let args = json!({ "train_no": "823", "travel_date": "2024-01-01" });
        let params = ThsrTrainInfoTool::parse_params(args.as_object().unwrap().clone()).unwrap();
        assert_eq!(params.train_no, "823");
        assert_eq!(params.travel_date, "2024-01-01");
    }

    #[tokio::test]
    async fn test_train_info_request_is_forwarded() {
        let (server, client) = mock_client().await;
        let body = json!([{ "DailyTrainInfo": { "TrainNo": "823" } }]);
        Mock::given(method("GET"))
            .and(path("/api/Rail/THSR/DailyTimetable/TrainNo/823/2024-01-01"))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let params = ThsrTrainInfoParams {
            train_no: "823".to_string(),
            travel_date: "2024-01-01".to_string(),
        };
        let value = client
            .request(&ThsrTrainInfoTool::endpoint(&params), &[])
            .await
            .unwrap();
        assert_eq!(value, body);
    }
}
