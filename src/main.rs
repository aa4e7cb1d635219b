use campus_route_viewer::cli::Cli;
use campus_route_viewer::config::{config_path, Config};
use simplelog::{Config as LoggerConfig, TermLogger, TerminalMode};
use std::fs::File;
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Cli::from_args();

    // read the config file if one exists, otherwise run with the defaults
    let config_file = config_path();
    let config = if config_file.exists() {
        let mut fp = File::open(&config_file)?;
        Config::load(&mut fp)?
    } else {
        Config::default()
    };

    let level_filter = opt.verbosity(config.log_level());
    TermLogger::init(level_filter, LoggerConfig::default(), TerminalMode::Mixed)?;

    // execute the requested subcommand
    opt.execute_subcommand(config)
}
