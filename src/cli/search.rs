//! Define the search subcommand
use crate::catalog::PlaceCatalog;
use crate::config::Config;
use structopt::StructOpt;

/// Show place suggestions for a query, the way the selection box would
#[derive(Debug, StructOpt)]
pub struct SearchOpts {
    /// Text to match against place names
    #[structopt(name = "QUERY")]
    query: String,
}

pub fn search_command(config: Config, opts: SearchOpts) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PlaceCatalog::load_or_empty(config.catalog_url());
    let mut selector = config.get_place_selector_handler()?;
    selector.populate(&catalog);

    let suggestions = selector.suggestions(&opts.query);
    if suggestions.is_empty() {
        println!("No places match '{}'", opts.query);
    } else {
        for name in suggestions {
            println!("{}", name);
        }
    }

    Ok(())
}
