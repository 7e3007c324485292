//! Logger setup for the CLI.
//!
//! `-v` raises the level to debug, `-vv` to trace. `RUST_LOG` overrides both.

use log::LevelFilter;

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
