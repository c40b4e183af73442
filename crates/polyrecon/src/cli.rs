//! Command line front end.
//!
//! The binary reads one input document, reconstructs the polynomial through
//! its first `k` records, and writes the constant term to stdout. Logs go to
//! stderr, filtered by `RUST_LOG`.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use polyrecon_interp::{check_surplus, reconstruct, ShareSet, Strategy};
use tracing::{debug, info, instrument};

/// Recover a polynomial's constant term from radix-encoded samples.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input document; reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// How to recover the polynomial.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Elimination)]
    pub strategy: StrategyArg,

    /// Print every coefficient, constant term first, one per line.
    #[arg(short, long)]
    pub coefficients: bool,

    /// Cross-check the records after `k` against the reconstruction.
    #[arg(long)]
    pub check: bool,
}

/// Command line spelling of [`Strategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fraction-free elimination for integer coefficients.
    Elimination,
    /// Exact Lagrange evaluation at zero.
    Lagrange,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Elimination => Strategy::Elimination,
            StrategyArg::Lagrange => Strategy::Lagrange,
        }
    }
}

impl Cli {
    /// Returns true when the input should come from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        !matches!(&self.input, Some(path) if path.as_os_str() != "-")
    }
}

/// Runs one reconstruction, reading the document from `input` and writing
/// the result to `out`.
///
/// # Errors
///
/// Fails if the document is malformed, a value does not decode, or the
/// polynomial cannot be recovered exactly.
#[instrument(skip_all, fields(strategy = ?cli.strategy))]
pub fn run(cli: &Cli, input: impl Read, mut out: impl Write) -> anyhow::Result<()> {
    if cli.coefficients && cli.strategy == StrategyArg::Lagrange {
        bail!("--coefficients needs the elimination strategy");
    }

    let set = ShareSet::from_reader(input).context("reading input document")?;
    let keys = set.keys();
    debug!(n = keys.n, k = keys.k, "loaded document");

    let samples = set.threshold_samples()?;
    let reconstruction = reconstruct(&samples, cli.strategy.into())
        .with_context(|| format!("reconstructing from the first {} records", keys.k))?;

    if cli.check {
        let surplus = set.surplus_samples()?;
        let mismatches = check_surplus(&reconstruction, &surplus)?;
        if mismatches.is_empty() {
            info!(checked = surplus.len(), "all surplus records agree");
        }
    }

    match reconstruction.coefficients() {
        Some(coefficients) if cli.coefficients => {
            for c in coefficients.as_slice() {
                writeln!(out, "{c}")?;
            }
        }
        _ => writeln!(out, "{}", reconstruction.constant_term()?)?,
    }
    Ok(())
}
