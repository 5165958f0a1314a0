use std::process;

use anyhow::Error;
use clap::ArgMatches;
use log::debug;
use tracing::Level;

use pacsearch::{app, read_layout, run, Config, Report};

fn main() {
    let matches = app().get_matches();

    tracing_subscriber::fmt()
        .with_max_level(level(matches.occurrences_of("verbose")))
        .with_writer(std::io::stderr)
        .init();

    match driver(&matches) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn driver(matches: &ArgMatches) -> Result<Report, Error> {
    let config = Config::from_matches(matches)?;
    debug!("configured {:?}", config);

    let layout = read_layout(&config.layout)?;
    debug!(
        "loaded {}x{} layout {}",
        layout.width(),
        layout.height(),
        config.layout
    );

    run(&config, &layout)
}
