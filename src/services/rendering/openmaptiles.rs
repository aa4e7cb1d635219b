//! Use an instance of open map tiles to draw the selected route as an image
use super::MapRenderer;
use crate::config::ServiceConfig;
use crate::geo::Bounds;
use crate::map::MapView;
use crate::Error;
use log::warn;
use reqwest::blocking::Client;
use std::iter::FromIterator;

/// Defines connection parameters to request map images from an OpenMapTiles server
#[derive(Debug)]
pub struct OpenMapTiles {
    base_url: String,
    style: String,
    image_width: u32,
    image_height: u32,
    image_format: String,
    stroke_color: String,
    stroke_width: u32,
    padding: f64,
}

impl OpenMapTiles {
    pub fn new(base_url: String, style: String) -> Self {
        let mut omt: OpenMapTiles = Default::default();
        omt.base_url = base_url;
        omt.style = style;
        omt
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
                "style" => {
                    if let Some(val) = config.get_parameter_as_string(key) {
                        base.style = val?
                    };
                }
                "image_width" => {
                    if let Some(val) = config.get_parameter_as_i64(key) {
                        base.image_width = val? as u32
                    };
                }
                "image_height" => {
                    if let Some(val) = config.get_parameter_as_i64(key) {
                        base.image_height = val? as u32
                    };
                }
                "image_format" => {
                    if let Some(val) = config.get_parameter_as_string(key) {
                        base.image_format = val?
                    };
                }
                "stroke_color" => {
                    if let Some(val) = config.get_parameter_as_string(key) {
                        base.stroke_color = val?
                    };
                }
                "stroke_width" => {
                    if let Some(val) = config.get_parameter_as_i64(key) {
                        base.stroke_width = val? as u32
                    };
                }
                "padding" => {
                    if let Some(val) = config.get_parameter_as_f64(key) {
                        base.padding = val?
                    };
                }
                _ => warn!(
                    "unknown configuration parameter for OpenMapTiles: {}={:?}",
                    key,
                    config.get_parameter(key)
                ),
            }
        }

        Ok(base)
    }

    fn request_url(&self, bounds: &Bounds) -> String {
        // Ex.: http://localhost:8080/styles/osm-bright/static/112.79,-7.29,112.80,-7.28/1800x1200.png
        format!(
            "{}/styles/{}/static/{},{},{},{}/{}x{}.{}",
            self.base_url,
            self.style,
            bounds.west(),
            bounds.south(),
            bounds.east(),
            bounds.north(),
            self.image_width,
            self.image_height,
            self.image_format
        )
    }
}

impl Default for OpenMapTiles {
    fn default() -> Self {
        OpenMapTiles {
            base_url: "http://localhost:8080".to_string(),
            style: "osm-bright".to_string(),
            image_width: 1800,
            image_height: 1200,
            image_format: "png".to_string(), // other formats are available but the list is short,
            stroke_color: "blue".to_string(),
            stroke_width: 3,
            // fraction of the bounds span kept clear around the endpoints
            padding: 0.05,
        }
    }
}

impl MapRenderer for OpenMapTiles {
    fn render(&self, view: &MapView) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let bounds = view
            .bounds()
            .unwrap_or_else(|| Bounds::around(view.center(), 0.005))
            .padded(self.padding);

        // build the path and marker query values from the current map state
        let mut request = Client::new()
            .get(&self.request_url(&bounds))
            .query(&[("stroke", self.stroke_color.as_str())])
            .query(&[("width", self.stroke_width)]);
        if let Some(route) = view.route_line() {
            let path: String = route
                .iter()
                .map(|l| format!("{},{}", l.longitude(), l.latitude()))
                .collect::<Vec<String>>()
                .join("|");
            request = request.query(&[("path", &path)]);
        }
        let markers: Vec<String> = view
            .start_marker()
            .iter()
            .chain(view.end_marker().iter())
            .map(|m| format!("{},{}", m.location().longitude(), m.location().latitude()))
            .collect();
        if !markers.is_empty() {
            request = request.query(&[("markers", &markers.join("|"))]);
        }

        // request image data
        let resp = request.send()?;
        if resp.status().is_success() {
            // return image data
            match resp.bytes() {
                Ok(data) => Ok(Vec::from_iter(data.into_iter())),
                Err(e) => Err(Box::new(e)),
            }
        } else {
            let code = resp.status();
            Err(Box::new(Error::Other(format!(
                "OpenMapTiles drawing failed with code: {}",
                code
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    #[test]
    fn request_url_embeds_bounds_and_image_parameters() {
        let omt = OpenMapTiles::new(
            "http://tiles.example".to_string(),
            "osm-bright".to_string(),
        );
        let bounds = Bounds::fit(&[
            Location::new(-7.29, 112.79),
            Location::new(-7.28, 112.80),
        ])
        .unwrap();
        assert_eq!(
            omt.request_url(&bounds),
            "http://tiles.example/styles/osm-bright/static/112.79,-7.29,112.8,-7.28/1800x1200.png"
        );
    }

    #[test]
    fn padding_is_configurable() {
        let cfg: crate::config::ServiceConfig = serde_yaml::from_str(
            "handler: openmaptiles\nconfiguration:\n  padding: 0.1\n",
        )
        .unwrap();
        let omt = OpenMapTiles::from_config(&cfg).unwrap();
        assert_eq!(omt.padding, 0.1);
        assert_eq!(OpenMapTiles::default().padding, 0.05);
    }
}
