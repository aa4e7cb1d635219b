//! Request walking routes between two coordinate pairs from an external service
use crate::config::ServiceConfig;
use crate::{Error, Location};

mod campus_api;
pub use campus_api::CampusRouteApi;

/// Outcome of a completed route request
///
/// "No route found" comes back on a successful response whose route field is
/// absent or empty, it is deliberately distinct from transport and server
/// errors so the caller can surface it differently.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteResult {
    /// Ordered sequence of coordinates describing the path
    Route(Vec<Location>),
    /// The service answered but no path exists between the endpoints
    NoRoute,
}

/// trait that defines how a pair of endpoints becomes a route
pub trait RoutePlanningService {
    /// Request a route between the two endpoints, blocking until the service
    /// responds
    fn plan_route(
        &self,
        start: Location,
        end: Location,
    ) -> Result<RouteResult, Box<dyn std::error::Error>>;
}

/// Create a boxed routing handler from the service configuration
pub fn new_routing_handler(
    config: &ServiceConfig,
) -> Result<Box<dyn RoutePlanningService>, Error> {
    match config.handler() {
        "campus_api" => Ok(Box::new(CampusRouteApi::from_config(config)?)),
        _ => Err(Error::UnknownServiceHandler(format!(
            "no known routing handler named: {}",
            config.handler()
        ))),
    }
}
