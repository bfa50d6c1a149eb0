use std::path::PathBuf;

use clap::Parser;

pub mod defaults {
    pub const INPUT: &str = "instances/small-sat.in";
    pub const OUTPUT: &str = "formula.cnf";
    pub const SOLVER: &str = "glucose";
    pub const VERBOSITY: u8 = 1;
}

#[derive(Debug, Parser)]
#[command(name = "set-splitting", version)]
#[command(about = "Decides Set Splitting instances with an external SAT solver")]
pub struct Config {
    /// The instance file.
    #[arg(short, long, default_value = defaults::INPUT)]
    pub input: PathBuf,

    /// Output file for the DIMACS format (i.e. the CNF formula).
    #[arg(short, long, default_value = defaults::OUTPUT)]
    pub output: PathBuf,

    /// The SAT solver to be used.
    #[arg(short, long, default_value = defaults::SOLVER)]
    pub solver: String,

    /// Verbosity of the SAT solver used.
    #[arg(
        short,
        long = "verb",
        default_value_t = defaults::VERBOSITY,
        value_parser = clap::value_parser!(u8).range(0..=1)
    )]
    pub verbosity: u8,
}
