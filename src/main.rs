//! CLI entry point for the color cubes renderer

use clap::Parser;
use colorcubes::io::cli::{Cli, RenderJob};
use colorcubes::io::logging::{init_logging, log_directive};

fn main() -> colorcubes::Result<()> {
    let cli = Cli::parse();
    init_logging(log_directive(cli.quiet, cli.verbose));
    RenderJob::new(cli).run().map(|_| ())
}
