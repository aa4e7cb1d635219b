//! Session controller tying the selector, routing service and map together
//!
//! Explicitly owns the endpoint selections and the map view so nothing else
//! can mutate them behind the session's back. Every route request carries a
//! sequence number and a response is only applied while its number is still
//! the latest issued, a response that arrives after a newer request has gone
//! out is discarded instead of clobbering the map.
use crate::catalog::PlaceCatalog;
use crate::map::MapView;
use crate::services::routing::{RoutePlanningService, RouteResult};
use crate::services::selector::{PlaceSelector, Selection};
use crate::{Error, Location};
use log::{debug, info};

/// What the user should be told after a completed route request
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
    /// A route with this many points was drawn on the map
    RouteDrawn(usize),
    /// The service answered but no path exists, markers stay placed
    NoRouteFound,
    /// The response was stale and left the map untouched
    Superseded,
}

/// Owns selections, the map view and the route request lifecycle
pub struct RouteSession {
    selector: Box<dyn PlaceSelector>,
    routing: Box<dyn RoutePlanningService>,
    map: MapView,
    start: Option<Selection>,
    end: Option<Selection>,
    issued_seq: u64,
}

impl RouteSession {
    /// Create a session, populating the selector from the catalog
    pub fn new(
        catalog: &PlaceCatalog,
        mut selector: Box<dyn PlaceSelector>,
        routing: Box<dyn RoutePlanningService>,
        map: MapView,
    ) -> Self {
        selector.populate(catalog);
        RouteSession {
            selector,
            routing,
            map,
            start: None,
            end: None,
            issued_seq: 0,
        }
    }

    /// Resolve the start endpoint, an unresolvable query leaves any prior
    /// selection intact
    pub fn select_start(&mut self, query: &str) -> Result<(), Error> {
        let selection = self
            .selector
            .resolve(query)
            .ok_or_else(|| Error::UnknownPlace(query.to_string()))?;
        info!(
            "Start point set to '{}' at [{}, {}]",
            selection.name(),
            selection.coordinates().latitude(),
            selection.coordinates().longitude()
        );
        self.start = Some(selection);
        Ok(())
    }

    /// Resolve the end endpoint, an unresolvable query leaves any prior
    /// selection intact
    pub fn select_end(&mut self, query: &str) -> Result<(), Error> {
        let selection = self
            .selector
            .resolve(query)
            .ok_or_else(|| Error::UnknownPlace(query.to_string()))?;
        info!(
            "End point set to '{}' at [{}, {}]",
            selection.name(),
            selection.coordinates().latitude(),
            selection.coordinates().longitude()
        );
        self.end = Some(selection);
        Ok(())
    }

    /// Return suggestion names for a query to help the user pick a place
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.selector.suggestions(query)
    }

    /// Request a route for the current selections and update the map
    ///
    /// Both endpoints must be resolved before any network request goes out,
    /// otherwise the request is rejected locally. A failed request leaves
    /// the entire map state, including any previously drawn route line,
    /// untouched.
    pub fn find_route(&mut self) -> Result<RouteOutcome, Box<dyn std::error::Error>> {
        let (start, end) = self.resolved_endpoints()?;
        let seq = self.issue_request();
        let result = self.routing.plan_route(start, end)?;
        Ok(self.apply_response(seq, start, end, result))
    }

    /// Close the endpoint marker popups, e.g. to unclutter the rendered map
    pub fn close_popups(&mut self) {
        self.map.close_popups();
    }

    /// Return the map view for rendering
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Return the current start selection
    pub fn start(&self) -> Option<&Selection> {
        self.start.as_ref()
    }

    /// Return the current end selection
    pub fn end(&self) -> Option<&Selection> {
        self.end.as_ref()
    }

    fn resolved_endpoints(&self) -> Result<(Location, Location), Error> {
        let start = self
            .start
            .as_ref()
            .ok_or(Error::IncompleteSelection("start"))?;
        let end = self.end.as_ref().ok_or(Error::IncompleteSelection("end"))?;
        Ok((start.coordinates(), end.coordinates()))
    }

    fn issue_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    fn apply_response(
        &mut self,
        seq: u64,
        start: Location,
        end: Location,
        result: RouteResult,
    ) -> RouteOutcome {
        if seq != self.issued_seq {
            debug!(
                "Discarding stale route response, request {} was superseded by {}",
                seq, self.issued_seq
            );
            return RouteOutcome::Superseded;
        }

        // markers are placed for valid endpoints whether or not a path exists
        self.map.set_endpoints(start, end);
        match result {
            RouteResult::Route(points) => {
                let count = points.len();
                self.map.draw_route(points);
                RouteOutcome::RouteDrawn(count)
            }
            RouteResult::NoRoute => RouteOutcome::NoRouteFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlaceCatalog;
    use crate::services::selector::Autocomplete;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubRouting {
        result: Option<RouteResult>,
        calls: Rc<Cell<usize>>,
    }

    impl RoutePlanningService for StubRouting {
        fn plan_route(
            &self,
            _start: Location,
            _end: Location,
        ) -> Result<RouteResult, Box<dyn std::error::Error>> {
            self.calls.set(self.calls.get() + 1);
            match &self.result {
                Some(result) => Ok(result.clone()),
                None => Err(Box::new(Error::RouteRequestError(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    "boom".to_string(),
                ))),
            }
        }
    }

    fn catalog() -> PlaceCatalog {
        serde_json::from_str(
            r#"{"places": [
                {"name": "Main Gate", "coordinates": [-7.28, 112.79]},
                {"name": "Library", "coordinates": [-7.29, 112.80]}
            ]}"#,
        )
        .unwrap()
    }

    fn session(result: Option<RouteResult>) -> (RouteSession, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let routing = StubRouting {
            result,
            calls: Rc::clone(&calls),
        };
        let session = RouteSession::new(
            &catalog(),
            Box::new(Autocomplete::default()),
            Box::new(routing),
            MapView::new(Location::new(-7.2819, 112.7945), 16),
        );
        (session, calls)
    }

    #[test]
    fn unresolved_endpoints_reject_the_request_without_network_io() {
        let (mut session, calls) = session(Some(RouteResult::NoRoute));
        session.select_start("Main Gate").unwrap();

        let err = session.find_route().unwrap_err();
        match err.downcast_ref::<Error>().unwrap() {
            Error::IncompleteSelection(endpoint) => assert_eq!(*endpoint, "end"),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(calls.get(), 0);
        assert!(session.map().start_marker().is_none());
    }

    #[test]
    fn unknown_queries_leave_the_previous_selection_intact() {
        let (mut session, _) = session(Some(RouteResult::NoRoute));
        session.select_start("Main Gate").unwrap();
        assert!(session.select_start("warehouse").is_err());
        assert_eq!(session.start().unwrap().name(), "Main Gate");
    }

    #[test]
    fn a_found_route_places_markers_and_draws_the_line() {
        let route = vec![Location::new(1.0, 2.0), Location::new(3.0, 4.0)];
        let (mut session, calls) = session(Some(RouteResult::Route(route.clone())));
        session.select_start("Main Gate").unwrap();
        session.select_end("Library").unwrap();

        let outcome = session.find_route().unwrap();
        assert_eq!(outcome, RouteOutcome::RouteDrawn(2));
        assert_eq!(calls.get(), 1);
        assert_eq!(session.map().route_line().unwrap(), route.as_slice());
        assert_eq!(
            session.map().start_marker().unwrap().location(),
            Location::new(-7.28, 112.79)
        );
        assert_eq!(
            session.map().end_marker().unwrap().location(),
            Location::new(-7.29, 112.80)
        );
    }

    #[test]
    fn no_route_still_places_markers_but_draws_nothing() {
        let (mut session, _) = session(Some(RouteResult::NoRoute));
        session.select_start("Main Gate").unwrap();
        session.select_end("Library").unwrap();

        let outcome = session.find_route().unwrap();
        assert_eq!(outcome, RouteOutcome::NoRouteFound);
        assert!(session.map().route_line().is_none());
        assert!(session.map().start_marker().is_some());
        assert!(session.map().end_marker().is_some());
    }

    #[test]
    fn a_failed_request_leaves_the_previous_route_in_place() {
        let route = vec![Location::new(1.0, 2.0), Location::new(3.0, 4.0)];
        let (mut session, _) = session(Some(RouteResult::Route(route.clone())));
        session.select_start("Main Gate").unwrap();
        session.select_end("Library").unwrap();
        session.find_route().unwrap();

        // swap in a failing handler and try again
        session.routing = Box::new(StubRouting {
            result: None,
            calls: Rc::new(Cell::new(0)),
        });
        assert!(session.find_route().is_err());
        assert_eq!(session.map().route_line().unwrap(), route.as_slice());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let (mut session, _) = session(Some(RouteResult::NoRoute));
        session.select_start("Main Gate").unwrap();
        session.select_end("Library").unwrap();

        let stale = session.issue_request();
        let latest = session.issue_request();
        let start = Location::new(-7.28, 112.79);
        let end = Location::new(-7.29, 112.80);

        let outcome = session.apply_response(
            stale,
            start,
            end,
            RouteResult::Route(vec![start, end]),
        );
        assert_eq!(outcome, RouteOutcome::Superseded);
        assert!(session.map().start_marker().is_none());

        let outcome = session.apply_response(latest, start, end, RouteResult::NoRoute);
        assert_eq!(outcome, RouteOutcome::NoRouteFound);
        assert!(session.map().start_marker().is_some());
    }
}
