#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::if_then_some_else_none)]

use log::LevelFilter;

use mapgen::{
    error::{MappingsError, INPUT_EXIT_CODE},
    Pipeline,
};
use mapgen_config::{logging::LoggingConfig, LoadTomlConfiguration, MappingsConfiguration};
use std::time::Instant;

fn init_logger(config: &LoggingConfig) {
    if config.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !config.timestamp {
            logger = logger.without_timestamps();
        }

        logger = logger.with_level(convert_logger_filter(config.level));

        if config.env {
            logger = logger.env();
        }

        logger = logger.with_colors(config.color);
        logger = logger.with_threads(config.threads);
        if let Err(err) = logger.init() {
            eprintln!("Couldn't initialize logger: {err}");
        }
    }
}

const fn convert_logger_filter(level: mapgen_config::logging::LevelFilter) -> LevelFilter {
    match level {
        mapgen_config::logging::LevelFilter::Off => LevelFilter::Off,
        mapgen_config::logging::LevelFilter::Error => LevelFilter::Error,
        mapgen_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        mapgen_config::logging::LevelFilter::Info => LevelFilter::Info,
        mapgen_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        mapgen_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_VERSION: &str = env!("GIT_VERSION");

fn main() {
    let time = Instant::now();

    // the logger is configured by the config, so config errors can only go to stderr
    let config = match MappingsConfiguration::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(INPUT_EXIT_CODE);
        }
    };
    init_logger(&config.logging);

    log::info!("Starting mapgen {CARGO_PKG_VERSION} ({GIT_VERSION})");

    match Pipeline::new(&config).run() {
        Ok(summary) => {
            log::info!(
                "Mapped {} of {} Java items and {} of {} Java blocks ({} + {} records)",
                summary.mapped_items,
                summary.java_items,
                summary.mapped_blocks,
                summary.java_blocks,
                summary.item_mappings,
                summary.block_mappings,
            );
            log::info!("Done ({}ms)", time.elapsed().as_millis());
        }
        Err(err) => {
            err.log();
            std::process::exit(err.exit_code());
        }
    }
}
