//! Fetch routes from the campus routing backend's find_route endpoint
use super::{RoutePlanningService, RouteResult};
use crate::config::ServiceConfig;
use crate::{Error, Location};
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct RouteRequest {
    start: Location,
    end: Location,
}

#[derive(Debug, Deserialize)]
struct SuccessResponse {
    route: Option<Vec<Location>>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, Debug)]
/// Defines the connection parameters to request routes from the campus backend
pub struct CampusRouteApi {
    base_url: String,
}

impl CampusRouteApi {
    /// Create a new routing handler against the given backend base URL
    pub fn new(base_url: String) -> Self {
        CampusRouteApi { base_url }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, Error> {
        let mut base = Self::default();
        for key in config.parameters() {
            match key.as_ref() {
                "base_url" => {
                    if let Some(val) = config.get_parameter_as_string(key) {
                        base.base_url = val?
                    };
                }
                _ => warn!(
                    "unknown configuration parameter for CampusRouteApi: {}={:?}",
                    key,
                    config.get_parameter(key)
                ),
            }
        }
        Ok(base)
    }

    fn request_url(&self) -> String {
        format!("{}/find_route", self.base_url)
    }
}

impl Default for CampusRouteApi {
    fn default() -> Self {
        CampusRouteApi {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl RoutePlanningService for CampusRouteApi {
    fn plan_route(
        &self,
        start: Location,
        end: Location,
    ) -> Result<RouteResult, Box<dyn std::error::Error>> {
        let client = Client::new();
        let payload = RouteRequest { start, end };
        debug!("Requesting route from: {}", self.request_url());
        let resp = client.post(&self.request_url()).json(&payload).send()?;
        if resp.status().is_success() {
            let json: SuccessResponse = resp.json()?;
            Ok(route_result(json))
        } else {
            // parse error response to get reason why the request failed
            let code = resp.status();
            let msg = match resp.json::<ErrorResponse>() {
                Ok(json) => json.error,
                Err(_) => "no error detail provided".to_string(),
            };
            Err(Box::new(Error::RouteRequestError(code, msg)))
        }
    }
}

/// Shape a successful response body into a route result, an absent or empty
/// route field means no path exists
fn route_result(resp: SuccessResponse) -> RouteResult {
    match resp.route {
        Some(points) if !points.is_empty() => RouteResult::Route(points),
        _ => RouteResult::NoRoute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_uses_coordinate_arrays() {
        let payload = RouteRequest {
            start: Location::new(-7.28, 112.79),
            end: Location::new(-7.29, 112.80),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": [-7.28, 112.79], "end": [-7.29, 112.80]})
        );
    }

    #[test]
    fn present_route_field_becomes_an_ordered_route() {
        let resp: SuccessResponse =
            serde_json::from_str(r#"{"route": [[1.0, 2.0], [3.0, 4.0]]}"#).unwrap();
        assert_eq!(
            route_result(resp),
            RouteResult::Route(vec![Location::new(1.0, 2.0), Location::new(3.0, 4.0)])
        );
    }

    #[test]
    fn absent_null_or_empty_route_means_no_route() {
        for body in &[r#"{}"#, r#"{"route": null}"#, r#"{"route": []}"#] {
            let resp: SuccessResponse = serde_json::from_str(body).unwrap();
            assert_eq!(route_result(resp), RouteResult::NoRoute);
        }
    }

    #[test]
    fn request_url_appends_the_endpoint_path() {
        let api = CampusRouteApi::new("http://campus.example".to_string());
        assert_eq!(api.request_url(), "http://campus.example/find_route");
    }
}
