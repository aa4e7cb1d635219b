//! Store application configuration that gets read from disk
use crate::geo::Location;
use crate::services::{
    new_map_rendering_handler, new_place_selector_handler, new_routing_handler, MapRenderer,
    PlaceSelector, RoutePlanningService,
};
use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Value;
use simplelog::LevelFilter;
use std::collections::HashMap;
use std::io::prelude::*;
use std::iter::Iterator;
use std::path::PathBuf;
use std::str::FromStr;

static CONFIG_NAME: &str = "campus-route-viewer.yml";

/// Location of the application's YAML configuration file
pub fn config_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(PathBuf::new).join(CONFIG_NAME)
}

/// Defines the allowed keys under the services map
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    MapRendering,
    PlaceSelector,
    Routing,
}

/// Type alias for clarity
pub type ServiceParameters = HashMap<String, Value>;

/// Configuration options for a single service of any type
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    handler: String,
    #[serde(default)]
    configuration: ServiceParameters,
}

impl ServiceConfig {
    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn parameters(&self) -> impl Iterator<Item = &String> + '_ {
        self.configuration.keys()
    }

    pub fn get_parameter(&self, key: &str) -> Option<&Value> {
        self.configuration.get(key)
    }

    pub fn get_parameter_as_string(&self, key: &str) -> Option<Result<String, Error>> {
        if let Some(value) = self.configuration.get(key) {
            let value = value
                .as_str()
                .ok_or_else(|| {
                    Error::InvalidConfigurationValue(format!(
                        "invalid value for {}.{}, expected a string: {:?}",
                        &self.handler, key, value
                    ))
                })
                .map(|v| v.to_string());
            Some(value)
        } else {
            None
        }
    }

    pub fn get_parameter_as_i64(&self, key: &str) -> Option<Result<i64, Error>> {
        if let Some(value) = self.configuration.get(key) {
            let value = value.as_i64().ok_or_else(|| {
                Error::InvalidConfigurationValue(format!(
                    "invalid value for {}.{}, expected an integer: {:?}",
                    &self.handler, key, value
                ))
            });
            Some(value)
        } else {
            None
        }
    }

    pub fn get_parameter_as_f64(&self, key: &str) -> Option<Result<f64, Error>> {
        if let Some(value) = self.configuration.get(key) {
            let value = value.as_f64().ok_or_else(|| {
                Error::InvalidConfigurationValue(format!(
                    "invalid value for {}.{}, expected a floating point value: {:?}",
                    &self.handler, key, value
                ))
            });
            Some(value)
        } else {
            None
        }
    }
}

/// Configuration struct that we can create from the config file used
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_catalog_url")]
    catalog_url: String,
    #[serde(default = "default_center")]
    default_center: Location,
    #[serde(default = "default_zoom")]
    default_zoom: u8,
    #[serde(
        deserialize_with = "deserialize_level_filter",
        serialize_with = "serialize_level_filter",
        default = "default_level_filter"
    )]
    log_level: LevelFilter,
    #[serde(default)]
    services: HashMap<ServiceType, ServiceConfig>,
}

impl Config {
    pub fn load<T: Read>(source: &mut T) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(source)
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn default_center(&self) -> Location {
        self.default_center
    }

    pub fn default_zoom(&self) -> u8 {
        self.default_zoom
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn get_place_selector_handler(&self) -> Result<Box<dyn PlaceSelector>, Error> {
        match self.services.get(&ServiceType::PlaceSelector) {
            Some(cfg) => new_place_selector_handler(cfg),
            None => {
                // autocomplete mirrors the original selection surface so use
                // it when nothing was configured
                new_place_selector_handler(&ServiceConfig {
                    handler: "autocomplete".to_string(),
                    configuration: HashMap::new(),
                })
            }
        }
    }

    pub fn get_routing_handler(&self) -> Result<Box<dyn RoutePlanningService>, Error> {
        match self.services.get(&ServiceType::Routing) {
            Some(cfg) => new_routing_handler(cfg),
            None => new_routing_handler(&ServiceConfig {
                handler: "campus_api".to_string(),
                configuration: HashMap::new(),
            }),
        }
    }

    pub fn get_map_rendering_handler(&self) -> Result<Box<dyn MapRenderer>, Error> {
        match self.services.get(&ServiceType::MapRendering) {
            Some(cfg) => new_map_rendering_handler(cfg),
            None => {
                // use the terminal as the default renderer since we always have that
                new_map_rendering_handler(&ServiceConfig {
                    handler: "terminal".to_string(),
                    configuration: HashMap::new(),
                })
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_url: default_catalog_url(),
            default_center: default_center(),
            default_zoom: default_zoom(),
            log_level: default_level_filter(),
            services: HashMap::new(),
        }
    }
}

fn default_catalog_url() -> String {
    "http://127.0.0.1:5000/static/js/places.json".to_string()
}

fn default_center() -> Location {
    // campus main gate
    Location::new(-7.2819, 112.7945)
}

fn default_zoom() -> u8 {
    16
}

fn deserialize_level_filter<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let buf = String::deserialize(deserializer)?;
    LevelFilter::from_str(&buf)
        .map_err(|_| serde::de::Error::custom(format!("invalid level value: {}", buf)))
}

fn serialize_level_filter<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&level.to_string())
}

fn default_level_filter() -> LevelFilter {
    LevelFilter::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE_CONFIG: &str = "\
catalog_url: http://campus.example/places.json
default_center: [-7.2819, 112.7945]
default_zoom: 17
log_level: debug
services:
  place_selector:
    handler: dropdown
    configuration: {}
  routing:
    handler: campus_api
    configuration:
      base_url: http://campus.example
";

    #[test]
    fn config_parses_from_yaml() {
        let config = Config::load(&mut SAMPLE_CONFIG.as_bytes()).unwrap();
        assert_eq!(config.catalog_url(), "http://campus.example/places.json");
        assert_eq!(config.default_center(), Location::new(-7.2819, 112.7945));
        assert_eq!(config.default_zoom(), 17);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        let routing = config.services.get(&ServiceType::Routing).unwrap();
        assert_eq!(routing.handler(), "campus_api");
        assert_eq!(
            routing.get_parameter_as_string("base_url").unwrap().unwrap(),
            "http://campus.example"
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::load(&mut "{}".as_bytes()).unwrap();
        assert_eq!(config.default_zoom(), 16);
        assert_eq!(config.log_level(), LevelFilter::Info);
        assert!(config.services.is_empty());
    }

    #[test]
    fn parameter_type_mismatches_are_reported() {
        let cfg: ServiceConfig = serde_yaml::from_str(
            "handler: campus_api\nconfiguration:\n  base_url: 12\n",
        )
        .unwrap();
        assert!(cfg.get_parameter_as_string("base_url").unwrap().is_err());
        assert_eq!(cfg.get_parameter_as_i64("base_url").unwrap().unwrap(), 12);
        assert_eq!(
            cfg.get_parameter_as_f64("base_url").unwrap().unwrap(),
            12.0
        );
        assert!(cfg.get_parameter("missing").is_none());
    }

    #[test]
    fn unknown_handler_names_are_rejected() {
        let cfg: ServiceConfig = serde_yaml::from_str("handler: nonesuch\n").unwrap();
        assert!(new_routing_handler(&cfg).is_err());
        assert!(new_place_selector_handler(&cfg).is_err());
        assert!(new_map_rendering_handler(&cfg).is_err());
    }
}
