//! Service module that exports interfaces to external applications, APIs, etc.

pub mod rendering;
pub mod routing;
pub mod selector;

// rexport some traits and utilty functions
pub use rendering::{new_map_rendering_handler, MapRenderer};
pub use routing::{new_routing_handler, RoutePlanningService, RouteResult};
pub use selector::{new_place_selector_handler, PlaceSelector, Selection};
