//! Define the list-places subcommand
use crate::catalog::{Place, PlaceCatalog};
use crate::config::Config;
use structopt::StructOpt;

/// List all places available in the campus catalog
#[derive(Debug, StructOpt)]
pub struct ListPlacesOpts {
    /// Only list places whose name contains this text (case-insensitive)
    #[structopt(name = "QUERY")]
    query: Option<String>,
}

pub fn list_places_command(
    config: Config,
    opts: ListPlacesOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PlaceCatalog::load_or_empty(config.catalog_url());
    let places: Vec<&Place> = match &opts.query {
        Some(query) => catalog.matching(query),
        None => catalog.places().iter().collect(),
    };

    println!("Name, Latitude, Longitude");
    for place in places {
        println!(
            "{} ({:.6}, {:.6})",
            place.name(),
            place.coordinates().latitude(),
            place.coordinates().longitude()
        );
    }

    Ok(())
}
