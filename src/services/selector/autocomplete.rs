//! Free text place selection with substring suggestion matching
use super::{PlaceSelector, Selection};
use crate::catalog::{Place, PlaceCatalog};
use crate::config::ServiceConfig;
use crate::Error;
use log::warn;

/// Matches free text queries against catalog names
///
/// Suggestions use case insensitive substring matching, resolution requires
/// an exact (case insensitive) name, the equivalent of clicking through a
/// suggestion rather than leaving loose text in the input.
#[derive(Debug, Default)]
pub struct Autocomplete {
    places: Vec<Place>,
}

impl Autocomplete {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, Error> {
        let base = Self::default();
        for key in config.parameters() {
            warn!(
                "unknown configuration parameter for Autocomplete: {}={:?}",
                key,
                config.get_parameter(key)
            );
        }
        Ok(base)
    }
}

impl PlaceSelector for Autocomplete {
    fn populate(&mut self, catalog: &PlaceCatalog) {
        self.places = catalog.places().to_vec();
    }

    fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            // an empty query shows nothing, not the whole catalog
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&query))
            .map(|p| p.name().to_string())
            .collect()
    }

    fn resolve(&self, query: &str) -> Option<Selection> {
        self.places
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(query.trim()))
            .map(|p| Selection::new(p.name().to_string(), p.coordinates()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    fn selector() -> Autocomplete {
        let catalog: PlaceCatalog = serde_json::from_str(
            r#"{"places": [
                {"name": "Main Gate", "coordinates": [-7.28, 112.79]},
                {"name": "Library", "coordinates": [-7.29, 112.80]}
            ]}"#,
        )
        .unwrap();
        let mut selector = Autocomplete::default();
        selector.populate(&catalog);
        selector
    }

    #[test]
    fn suggestions_are_case_insensitive_substring_matches() {
        let selector = selector();
        assert_eq!(selector.suggestions("lib"), vec!["Library".to_string()]);
        assert_eq!(selector.suggestions("GATE"), vec!["Main Gate".to_string()]);
        assert_eq!(selector.suggestions("a").len(), 2);
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        let selector = selector();
        assert!(selector.suggestions("").is_empty());
        assert!(selector.suggestions("  ").is_empty());
    }

    #[test]
    fn resolving_a_suggestion_returns_the_catalog_coordinates() {
        let selector = selector();
        let suggestions = selector.suggestions("lib");
        let selection = selector.resolve(&suggestions[0]).unwrap();
        assert_eq!(selection.name(), "Library");
        assert_eq!(selection.coordinates(), Location::new(-7.29, 112.80));
    }

    #[test]
    fn loose_text_does_not_resolve() {
        let selector = selector();
        assert!(selector.resolve("lib").is_none());
        assert!(selector.resolve("somewhere else").is_none());
        // exact name matches ignore case, like the click-through did
        assert!(selector.resolve("library").is_some());
    }
}
