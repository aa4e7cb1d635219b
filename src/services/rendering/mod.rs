//! Render the current map view for the user using a mapping source
use crate::config::ServiceConfig;
use crate::map::MapView;
use crate::Error;

mod openmaptiles;
pub use openmaptiles::OpenMapTiles;
mod terminal;
pub use terminal::TerminalMap;

/// trait that defines how the map viewport, markers and route line become
/// displayable output bytes
pub trait MapRenderer {
    /// Render the view, text for terminal handlers or image data otherwise
    fn render(&self, view: &MapView) -> Result<Vec<u8>, Box<dyn std::error::Error>>;
}

/// Create a boxed map renderer from the service configuration
pub fn new_map_rendering_handler(config: &ServiceConfig) -> Result<Box<dyn MapRenderer>, Error> {
    match config.handler() {
        "openmaptiles" => Ok(Box::new(OpenMapTiles::from_config(config)?)),
        "terminal" => Ok(Box::new(TerminalMap::from_config(config)?)),
        _ => Err(Error::UnknownServiceHandler(format!(
            "no known map rendering handler named: {}",
            config.handler()
        ))),
    }
}
