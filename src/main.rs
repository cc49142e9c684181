//! CLI entry point for the Mondrian painting generator

use clap::Parser;
use mondrian::io::cli::{BatchGenerator, Cli};
use mondrian::io::logging::init_logging;

fn main() -> mondrian::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut generator = BatchGenerator::new(cli);
    generator.process()?;
    Ok(())
}
