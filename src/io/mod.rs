pub mod instance;
pub mod model;

use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use crate::{
    decoder::Outcome,
    error::{Error, Result},
    types::{to_var, Lit, Problem},
};

fn parse_count(word: &str) -> Result<usize> {
    word.parse::<usize>()
        .map_err(|_| Error::Dimacs(format!("invalid count {word:?}")))
}

pub fn read_problem(reader: &mut impl Read) -> Result<Problem> {
    let mut lines = BufReader::new(reader).lines();

    let (var_count, clause_count) = loop {
        let Some(line) = lines.next() else {
            return Err(Error::Dimacs("missing problem line".to_owned()));
        };
        let line = line?;

        if line.starts_with('c') || line.trim().is_empty() {
            // comment line
            continue;
        }

        // problem line
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            ["p", "cnf", vars, clauses] => break (parse_count(vars)?, parse_count(clauses)?),
            _ => return Err(Error::Dimacs(format!("invalid problem line {line:?}"))),
        }
    };

    let mut clauses = vec![];
    let mut clause = vec![];

    for line in lines {
        let line = line?;
        if line.starts_with('c') {
            continue;
        }

        for word in line.split_whitespace() {
            let lit = word
                .parse::<Lit>()
                .map_err(|_| Error::Dimacs(format!("invalid literal {word:?}")))?;
            match lit {
                0 => {
                    clauses.push(clause.clone());
                    clause.clear();
                }
                _ => {
                    clause.push(lit);
                }
            }
        }
    }

    if !clause.is_empty() {
        return Err(Error::Dimacs("last clause is not terminated by 0".to_owned()));
    }
    if clause_count != clauses.len() {
        return Err(Error::Dimacs(format!(
            "header declares {clause_count} clauses, found {}",
            clauses.len()
        )));
    }
    if let Some(&lit) = clauses
        .iter()
        .flatten()
        .find(|&&lit| !(1..=var_count).contains(&to_var(lit)))
    {
        return Err(Error::Dimacs(format!(
            "literal {lit} out of range for {var_count} variables"
        )));
    }

    Ok(Problem { var_count, clauses })
}

/// Writes `problem` in DIMACS CNF, the format handed to the solver.
pub fn write_problem(writer: &mut impl Write, problem: &Problem) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "p cnf {} {}", problem.var_count, problem.clauses.len())?;

    for clause in &problem.clauses {
        let lits: Vec<String> = clause.iter().map(|lit| lit.to_string()).collect();
        writeln!(writer, "{} 0", lits.join(" "))?;
    }
    writer.flush()
}

const BANNER: [&str; 3] = [
    "##################################################################",
    "###########[ Human readable result of Set Splitting ]#############",
    "##################################################################",
];

pub fn write_report(writer: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    match outcome {
        Outcome::Split { partition, .. } => {
            writeln!(writer)?;
            for line in BANNER {
                writeln!(writer, "{line}")?;
            }
            writeln!(writer)?;
            writeln!(writer, "S1 = {:?}", partition.s1)?;
            writeln!(writer, "S2 = {:?}", partition.s2)?;
        }
        Outcome::Unsat => {
            writeln!(writer, "No splitting exists: the formula is unsatisfiable.")?;
        }
        Outcome::Unknown { status: Some(code) } => {
            writeln!(writer, "Solver exited with unrecognised status {code}, no partition produced.")?;
        }
        Outcome::Unknown { status: None } => {
            writeln!(writer, "Solver was terminated without an exit status, no partition produced.")?;
        }
    }
    writer.flush()
}
