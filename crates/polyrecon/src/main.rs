use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use polyrecon::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for the result.
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();

    let stdout = io::stdout().lock();
    match cli.input.as_ref().filter(|_| !cli.reads_stdin()) {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run(&cli, BufReader::new(file), stdout)
        }
        None => run(&cli, io::stdin().lock(), stdout),
    }
}
