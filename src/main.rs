//! CLI entry point for the organic line pattern generator

use clap::Parser;
use isolines::io::cli::{Cli, DocumentWriter};

fn main() -> isolines::Result<()> {
    let cli = Cli::parse();
    let writer = DocumentWriter::new(cli);
    writer.write()
}
