//! Set Splitting instances in plain text.
//!
//! Blank lines and lines starting with `#` are ignored. The first remaining line holds `n m`,
//! each of the following `m` lines lists the elements of one set.

use std::io::{BufRead, BufReader, Read};

use log::{info, warn};

use crate::{
    error::{Error, Result},
    types::{Instance, Lit, Var, MAX_VAR},
};

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [n, m] = parts[..] else {
        return Err(Error::Header(format!("expected `n m`, found {line:?}")));
    };
    let parse = |word: &str| {
        word.parse::<usize>()
            .map_err(|_| Error::Header(format!("invalid count {word:?}")))
    };
    let (n, m) = (parse(n)?, parse(m)?);
    if n > MAX_VAR {
        return Err(Error::Header(format!(
            "{n} elements exceed the {MAX_VAR} variables DIMACS can name"
        )));
    }
    Ok((n, m))
}

/// Elements must be literals too, so anything past `Lit::MAX` is rejected here.
fn parse_set(number: usize, line: &str) -> Result<Vec<Var>> {
    line.split_whitespace()
        .map(|word| match word.parse::<Lit>() {
            Ok(element) if element > 0 => Ok(element as Var),
            _ => Err(Error::Element {
                line: number,
                token: word.to_owned(),
            }),
        })
        .collect()
}

pub fn read_instance(reader: &mut impl Read) -> Result<Instance> {
    let mut significant = vec![];
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        significant.push((i + 1, line.to_owned()));
    }

    let mut significant = significant.into_iter();
    let Some((_, header)) = significant.next() else {
        return Err(Error::Header("instance is empty".to_owned()));
    };
    let (element_count, set_count) = parse_header(&header)?;

    let sets = significant
        .map(|(number, line)| parse_set(number, &line))
        .collect::<Result<Vec<_>>>()?;

    if sets.len() != set_count {
        return Err(Error::SubsetCount {
            declared: set_count,
            found: sets.len(),
        });
    }

    if let Some(&element) = sets.iter().flatten().find(|&&x| x > element_count) {
        warn!("element {element} lies outside the ground set 1..={element_count}");
    }

    info!("read instance with {element_count} elements and {set_count} sets");
    Ok(Instance {
        element_count,
        sets,
    })
}
