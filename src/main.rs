use std::{fs::File, io::Write, process::ExitCode};

use clap::Parser;
use log::warn;

use set_splitting::{
    config::Config,
    decoder::{self, Outcome},
    encoder,
    error::{Error, Result},
    io,
    oracle::{ExternalSolver, Oracle},
};

fn run(config: &Config) -> Result<()> {
    let mut input = File::open(&config.input).map_err(|source| Error::Open {
        path: config.input.clone(),
        source,
    })?;
    let instance = io::instance::read_instance(&mut input)?;

    let problem = encoder::encode(&instance);
    let response = ExternalSolver::from_config(config).solve(&problem)?;

    let mut output = std::io::stdout().lock();
    for line in response.output.split('\n') {
        writeln!(output, "{line}")?;
    }

    let outcome = decoder::decode(&response)?;
    if let Outcome::Split { model, partition } = &outcome {
        if !decoder::verify(&problem, model) {
            warn!("solver model does not satisfy the formula");
        }
        if !partition.splits(&instance) {
            warn!("partition leaves some set on one side");
        }
    }

    io::write_report(&mut output, &outcome)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
