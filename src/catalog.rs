//! Load and query the static catalog of named campus places
use crate::{Error, Location};
use log::{debug, error};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// A named point of interest with fixed geographic coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    name: String,
    coordinates: Location,
}

impl Place {
    /// Create a place from a name and its coordinates
    pub fn new(name: String, coordinates: Location) -> Self {
        Place { name, coordinates }
    }

    /// Return the place's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the place's coordinates
    pub fn coordinates(&self) -> Location {
        self.coordinates
    }
}

/// The static collection of known places available for selection
///
/// Loaded once per session, either from the routing backend's static resource
/// path or from a local file. A failed load leaves the catalog empty, there is
/// no retry and no fallback data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Load the catalog from an http(s) URL or a filesystem path
    ///
    /// A malformed body is a total load failure no matter where the catalog
    /// came from, so file parse errors surface the same way fetch errors do.
    pub fn load(source: &str) -> Result<Self, Error> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source)
        } else {
            let fp = File::open(source)?;
            let catalog = serde_json::from_reader(BufReader::new(fp))
                .map_err(|e| Error::CatalogLoadError(e.to_string()))?;
            Ok(catalog)
        }
    }

    /// Load the catalog, logging any failure and returning an empty catalog
    /// instead so the rest of the session can keep running
    pub fn load_or_empty(source: &str) -> Self {
        match Self::load(source) {
            Ok(catalog) => {
                debug!("Loaded {} places from: {}", catalog.len(), source);
                catalog
            }
            Err(e) => {
                error!("Failed to load places from {}: {}", source, e);
                PlaceCatalog::default()
            }
        }
    }

    fn fetch(url: &str) -> Result<Self, Error> {
        let client = Client::new();
        let resp = client
            .get(url)
            .send()
            .map_err(|e| Error::CatalogLoadError(e.to_string()))?;
        if resp.status().is_success() {
            resp.json()
                .map_err(|e| Error::CatalogLoadError(e.to_string()))
        } else {
            Err(Error::CatalogLoadError(format!(
                "catalog request failed with code: {}",
                resp.status()
            )))
        }
    }

    /// Return all places in catalog order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Return the number of places in the catalog
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Return true when the catalog holds no places
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Return every place whose name contains the query, matched case
    /// insensitively. An empty or whitespace query matches nothing rather
    /// than everything.
    pub fn matching(&self, query: &str) -> Vec<&Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Return the place whose name matches exactly, ignoring case
    pub fn find(&self, name: &str) -> Option<&Place> {
        self.places
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> PlaceCatalog {
        serde_json::from_str(
            r#"{"places": [
                {"name": "Main Gate", "coordinates": [-7.28, 112.79]},
                {"name": "Library", "coordinates": [-7.29, 112.80]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn catalog_parses_from_wire_format() {
        let catalog = test_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.places()[0].name(), "Main Gate");
        assert_eq!(
            catalog.places()[1].coordinates(),
            Location::new(-7.29, 112.80)
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let catalog = test_catalog();
        let names: Vec<&str> = catalog.matching("lib").iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Library"]);
        assert_eq!(catalog.matching("GATE").len(), 1);
        assert_eq!(catalog.matching("a").len(), 2);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = test_catalog();
        assert!(catalog.matching("").is_empty());
        assert!(catalog.matching("   ").is_empty());
    }

    #[test]
    fn find_requires_an_exact_name() {
        let catalog = test_catalog();
        assert_eq!(catalog.find("library").unwrap().name(), "Library");
        assert!(catalog.find("lib").is_none());
    }

    #[test]
    fn failed_loads_leave_the_catalog_empty() {
        let catalog = PlaceCatalog::load_or_empty("/no/such/path/places.json");
        assert!(catalog.is_empty());

        let path = std::env::temp_dir().join("campus-route-viewer-bad-catalog.json");
        std::fs::write(&path, "not json at all").unwrap();
        let catalog = PlaceCatalog::load_or_empty(path.to_str().unwrap());
        assert!(catalog.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_catalog_files_report_a_load_error() {
        let path = std::env::temp_dir().join("campus-route-viewer-wrong-shape.json");
        std::fs::write(&path, r#"{"places": 12}"#).unwrap();
        match PlaceCatalog::load(path.to_str().unwrap()) {
            Err(Error::CatalogLoadError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        std::fs::remove_file(&path).ok();
    }
}
