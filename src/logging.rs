//! Terminal logging for the `strplus` binary.
//!
//! Records go to stderr so they never mix with results printed on stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. A second call is a no-op.
pub fn init(verbosity: u8) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    // Ignore the error if a logger was already set.
    let _ = TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
