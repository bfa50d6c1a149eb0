//! The SAT solver seen from the outside: a formula goes in, an exit status and some text come out.

use std::{
    fs::File,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::info;

use crate::{
    config::Config,
    error::{Error, Result},
    io,
    types::Problem,
};

/// What a solver run produced. `status` is `None` if the process died without an exit code.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: Option<i32>,
    pub output: String,
}

pub trait Oracle {
    fn solve(&self, problem: &Problem) -> Result<Response>;
}

/// A solver binary run as a child process on a DIMACS file.
pub struct ExternalSolver {
    solver: PathBuf,
    cnf_path: PathBuf,
    verbosity: u8,
}

/// Bare names refer to the current directory, not to `PATH`.
fn solver_path(name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_relative() && path.components().count() == 1 {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

impl ExternalSolver {
    pub fn new(solver: &str, cnf_path: impl Into<PathBuf>, verbosity: u8) -> Self {
        Self {
            solver: solver_path(solver),
            cnf_path: cnf_path.into(),
            verbosity,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.solver, config.output.clone(), config.verbosity)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.solver);
        command
            .arg("-model")
            .arg(format!("-verb={}", self.verbosity))
            .arg(&self.cnf_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        command
    }
}

impl Oracle for ExternalSolver {
    fn solve(&self, problem: &Problem) -> Result<Response> {
        {
            let mut file = File::create(&self.cnf_path).map_err(|source| Error::Open {
                path: self.cnf_path.clone(),
                source,
            })?;
            io::write_problem(&mut file, problem)?;
        }

        info!("running {:?}", self.command());
        let output = self.command().output().map_err(|source| Error::Launch {
            solver: self.solver.clone(),
            source,
        })?;
        info!("solver exited with {}", output.status);

        Ok(Response {
            status: output.status.code(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
