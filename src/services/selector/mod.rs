//! Resolve a user's chosen place name into a coordinate pair
//!
//! Two interchangeable handlers exist: free text autocomplete and a fixed
//! dropdown of catalog entries. Which one is active comes from the
//! `place_selector` block of the service configuration.
use crate::catalog::PlaceCatalog;
use crate::config::ServiceConfig;
use crate::{Error, Location};

mod autocomplete;
pub use autocomplete::Autocomplete;
mod dropdown;
pub use dropdown::Dropdown;

/// An explicit association between a chosen place and its coordinates
///
/// Passed directly between components instead of being stashed as string
/// encoded attributes on the input surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    name: String,
    coordinates: Location,
}

impl Selection {
    /// Create a selection for a resolved place
    pub fn new(name: String, coordinates: Location) -> Self {
        Selection { name, coordinates }
    }

    /// Return the selected place's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the selected place's coordinates
    pub fn coordinates(&self) -> Location {
        self.coordinates
    }
}

/// trait that defines how a user's place query becomes a coordinate pair
pub trait PlaceSelector {
    /// Load the selector's entries from the place catalog
    fn populate(&mut self, catalog: &PlaceCatalog);

    /// Return the candidate place names offered for a query
    fn suggestions(&self, query: &str) -> Vec<String>;

    /// Resolve a query into a selection, or None when nothing matches
    fn resolve(&self, query: &str) -> Option<Selection>;
}

/// Create a boxed place selector from the service configuration
pub fn new_place_selector_handler(
    config: &ServiceConfig,
) -> Result<Box<dyn PlaceSelector>, Error> {
    match config.handler() {
        "autocomplete" => Ok(Box::new(Autocomplete::from_config(config)?)),
        "dropdown" => Ok(Box::new(Dropdown::from_config(config)?)),
        _ => Err(Error::UnknownServiceHandler(format!(
            "no known place selector handler named: {}",
            config.handler()
        ))),
    }
}
