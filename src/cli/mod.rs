//! Define the application's command line interface
use crate::config::Config;
use simplelog::LevelFilter;
use structopt::StructOpt;

mod find_route;
use find_route::{find_route_command, FindRouteOpts};
mod list_places;
use list_places::{list_places_command, ListPlacesOpts};
mod search;
use search::{search_command, SearchOpts};

/// Locate campus places and view walking routes between them
#[derive(Debug, StructOpt)]
pub struct Cli {
    /// Set logging level to debug, use a second time (e.g. -vv) to set logging to trace
    #[structopt(short, long, parse(from_occurrences))]
    verbose: i32,
    /// Suppress info logging messages use a second time (e.g. -qq) to hide warnings
    #[structopt(short, long, parse(from_occurrences))]
    quiet: i32,
    /// Commands for querying places and routes
    #[structopt(subcommand)]
    cmd: Command,
}

impl Cli {
    /// Return the verbose flag counts as a log level filter
    pub fn verbosity(&self, default: LevelFilter) -> LevelFilter {
        if self.quiet == 1 {
            LevelFilter::Warn
        } else if self.quiet > 1 {
            LevelFilter::Error
        } else if self.verbose == 1 {
            LevelFilter::Debug
        } else if self.verbose > 1 {
            LevelFilter::Trace
        } else {
            default
        }
    }

    /// Consume options struct and return the result of subcommand execution
    pub fn execute_subcommand(self, config: Config) -> Result<(), Box<dyn std::error::Error>> {
        self.cmd.execute(config)
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Find a route between two places and render it on the map
    #[structopt(name = "find-route")]
    FindRoute(FindRouteOpts),
    /// List places available in the campus catalog
    #[structopt(name = "list-places")]
    ListPlaces(ListPlacesOpts),
    /// Show place suggestions matching a query
    #[structopt(name = "search")]
    Search(SearchOpts),
}

impl Command {
    /// Consume enum variant and return the result of the command's execution
    fn execute(self, config: Config) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Command::FindRoute(opts) => find_route_command(config, opts),
            Command::ListPlaces(opts) => list_places_command(config, opts),
            Command::Search(opts) => search_command(config, opts),
        }
    }
}
