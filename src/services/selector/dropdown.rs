//! Fixed dropdown place selection populated once from the catalog
use super::{PlaceSelector, Selection};
use crate::catalog::{Place, PlaceCatalog};
use crate::config::ServiceConfig;
use crate::Error;
use log::warn;

/// Offers one option per catalog place with a default entry
///
/// The first catalog entry acts as the dropdown's default, so as long as the
/// catalog is non-empty an endpoint can never be left unresolved: a query
/// that matches no option falls back to the default entry.
#[derive(Debug, Default)]
pub struct Dropdown {
    options: Vec<Place>,
}

impl Dropdown {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, Error> {
        let base = Self::default();
        for key in config.parameters() {
            warn!(
                "unknown configuration parameter for Dropdown: {}={:?}",
                key,
                config.get_parameter(key)
            );
        }
        Ok(base)
    }
}

impl PlaceSelector for Dropdown {
    fn populate(&mut self, catalog: &PlaceCatalog) {
        self.options = catalog.places().to_vec();
    }

    fn suggestions(&self, _query: &str) -> Vec<String> {
        // a dropdown always shows its full option list
        self.options.iter().map(|p| p.name().to_string()).collect()
    }

    fn resolve(&self, query: &str) -> Option<Selection> {
        self.options
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(query.trim()))
            .or_else(|| self.options.first())
            .map(|p| Selection::new(p.name().to_string(), p.coordinates()))
    }
}
