//! CLI entry point for the grid-based word cloud layout tool

use clap::Parser;
use wordgrid::io::cli::{Cli, FileProcessor};

fn main() -> wordgrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
