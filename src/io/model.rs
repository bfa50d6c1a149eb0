//! Solver output in the competition style.
//!
//! `c` lines are comments, an `s` line states the verdict and `v` lines list the model,
//! closed by a `0` literal. Anything else is a solver banner and is skipped.

use crate::{
    error::{Error, Result},
    types::{Lit, Model},
};

enum Line<'a> {
    Comment,
    Status(&'a str),
    Values(std::str::SplitWhitespace<'a>),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("c") => Line::Comment,
        Some("s") => Line::Status(line.trim_start()[1..].trim()),
        Some("v") => Line::Values(words),
        _ => Line::Other,
    }
}

/// The text of the first `s` line, if any.
pub fn read_status(output: &str) -> Option<&str> {
    output.lines().find_map(|line| match classify(line) {
        Line::Status(status) => Some(status),
        _ => None,
    })
}

/// Collects the literals of every `v` line. `0` sentinels are dropped wherever they appear.
pub fn read_model(output: &str) -> Result<Model> {
    let mut lits = vec![];

    for line in output.lines() {
        let words = match classify(line) {
            Line::Values(words) => words,
            Line::Comment | Line::Status(_) | Line::Other => continue,
        };

        for word in words {
            // Lit::MIN has no negation, so it names no variable
            let lit = match word.parse::<Lit>() {
                Ok(lit) if lit != Lit::MIN => lit,
                _ => {
                    return Err(Error::ModelLiteral {
                        token: word.to_owned(),
                    })
                }
            };
            if lit != 0 {
                lits.push(lit);
            }
        }
    }

    Ok(Model::new(lits))
}
