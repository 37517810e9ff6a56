//! Logger setup for the command-line tool

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Level used when neither `RUST_LOG` nor a flag says otherwise
pub const fn level_for(quiet: bool, debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install a message-only logger on stderr
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the second logger is simply not installed.
pub fn init_logging(level: LevelFilter) {
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
