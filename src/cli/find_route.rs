//! Define the find-route subcommand
use crate::app::{RouteOutcome, RouteSession};
use crate::catalog::PlaceCatalog;
use crate::config::Config;
use crate::map::MapView;
use crate::Error;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

/// Find a route between two places and render it on the map
#[derive(Debug, StructOpt)]
pub struct FindRouteOpts {
    /// Name of the start place (use the search command to see suggestions)
    #[structopt(name = "START")]
    start: String,
    /// Name of the end place
    #[structopt(name = "END")]
    end: String,
    /// name of file to output the rendered map to, if "-" is used we will write to stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Hide the marker popup labels so only the marker glyphs are drawn
    #[structopt(long)]
    no_popups: bool,
}

pub fn find_route_command(
    config: Config,
    opts: FindRouteOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = PlaceCatalog::load_or_empty(config.catalog_url());
    let selector = config.get_place_selector_handler()?;
    let routing = config.get_routing_handler()?;
    let renderer = config.get_map_rendering_handler()?;
    let map = MapView::new(config.default_center(), config.default_zoom());
    let mut session = RouteSession::new(&catalog, selector, routing, map);

    if let Err(e) = session.select_start(&opts.start) {
        print_suggestions(&session, &opts.start);
        return Err(Box::new(e));
    }
    if let Err(e) = session.select_end(&opts.end) {
        print_suggestions(&session, &opts.end);
        return Err(Box::new(e));
    }

    let outcome = match session.find_route() {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to fetch a route from the routing service");
            return Err(e);
        }
    };
    match outcome {
        RouteOutcome::RouteDrawn(count) => {
            info!(
                "Found a route from '{}' to '{}' with {} points",
                opts.start, opts.end, count
            )
        }
        RouteOutcome::NoRouteFound => {
            warn!("No route found between '{}' and '{}'", opts.start, opts.end)
        }
        RouteOutcome::Superseded => debug!("Route response was superseded"),
    }

    if opts.no_popups {
        session.close_popups();
    }
    let map_data = renderer.render(session.map())?;
    if let Some(path) = opts.output {
        if path.to_string_lossy() == "-" {
            write_to_stdout(&map_data)?
        } else {
            let mut fp = File::create(path)?;
            fp.write_all(&map_data)?
        }
    } else {
        write_to_stdout(&map_data)?
    }

    Ok(())
}

fn print_suggestions(session: &RouteSession, query: &str) {
    let suggestions = session.suggestions(query);
    if suggestions.is_empty() {
        warn!("{}", Error::UnknownPlace(query.to_string()));
    } else {
        warn!(
            "'{}' did not resolve to a place, did you mean one of: {}?",
            query,
            suggestions.join(", ")
        );
    }
}

fn write_to_stdout(data: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(data)
}
