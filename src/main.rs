//! CLI entry point for turning images into block building plans

use blockplan::io::cli::{Cli, FileProcessor};
use blockplan::io::logging::{init_logging, level_for};
use clap::Parser;

fn main() -> blockplan::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for(cli.quiet, cli.debug));
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
