//! Turns the solver's answer back into a partition of the ground set.

use log::{debug, warn};

use crate::{
    error::Result,
    io::model::{read_model, read_status},
    oracle::Response,
    types::{to_var, Instance, Model, Problem, Var, Verdict},
};

/// Polarity given to a variable the model does not mention, which puts its element in S2.
pub const UNSET_POLARITY: bool = false;

/// Whether `var` is true under `model`, falling back to [`UNSET_POLARITY`].
pub fn polarity(model: &Model, var: Var) -> bool {
    model.value(var).unwrap_or(UNSET_POLARITY)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    pub s1: Vec<Var>,
    pub s2: Vec<Var>,
}

impl Partition {
    /// Checks that every set of `instance` has an element on each side.
    pub fn splits(&self, instance: &Instance) -> bool {
        instance.sets.iter().all(|set| {
            set.iter().any(|x| self.s1.binary_search(x).is_ok())
                && set.iter().any(|x| self.s2.binary_search(x).is_ok())
        })
    }
}

/// Splits `1..=max_var` by polarity: true goes to S1, everything else to S2.
pub fn partition(model: &Model) -> Partition {
    let (s1, s2): (Vec<Var>, Vec<Var>) = (1..=model.max_var()).partition(|&var| polarity(model, var));
    Partition { s1, s2 }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Split { model: Model, partition: Partition },
    Unsat,
    Unknown { status: Option<i32> },
}

pub fn decode(response: &Response) -> Result<Outcome> {
    match Verdict::from_status(response.status) {
        Verdict::Unsat => Ok(Outcome::Unsat),
        Verdict::Unknown => {
            warn!(
                "unrecognised solver status {:?} (status line {:?})",
                response.status,
                read_status(&response.output)
            );
            Ok(Outcome::Unknown {
                status: response.status,
            })
        }
        Verdict::Sat => {
            let model = read_model(&response.output)?;
            debug!("model has {} literals", model.lits().len());
            let partition = partition(&model);
            Ok(Outcome::Split { model, partition })
        }
    }
}

/// Checks `model` against every clause, reading unmentioned variables with [`UNSET_POLARITY`].
pub fn verify(problem: &Problem, model: &Model) -> bool {
    problem.clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|&lit| polarity(model, to_var(lit)) == lit.is_positive())
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error,
        oracle::Response,
        types::{Instance, Model, Problem},
    };

    use super::{decode, partition, verify, Outcome, Partition};

    fn response(status: i32, output: &str) -> Response {
        Response {
            status: Some(status),
            output: output.to_owned(),
        }
    }

    #[test]
    fn sat() {
        let outcome = decode(&response(10, "c banner\ns SATISFIABLE\nv 1 -2 3 0\n")).unwrap();
        let Outcome::Split { partition, .. } = outcome else {
            panic!("expected a partition");
        };
        assert_eq!(partition.s1, vec![1, 3]);
        assert_eq!(partition.s2, vec![2]);
    }

    #[test]
    fn unsat_skips_model() {
        let outcome = decode(&response(20, "s UNSATISFIABLE\nv garbage\n")).unwrap();
        assert_eq!(outcome, Outcome::Unsat);
    }

    #[test]
    fn unknown_skips_model() {
        let outcome = decode(&response(0, "v 1 0\n")).unwrap();
        assert_eq!(outcome, Outcome::Unknown { status: Some(0) });

        let killed = Response {
            status: None,
            output: String::new(),
        };
        assert_eq!(decode(&killed).unwrap(), Outcome::Unknown { status: None });
    }

    #[test]
    fn malformed_model() {
        let result = decode(&response(10, "v 1 x 0\n"));
        assert!(matches!(result, Err(Error::ModelLiteral { .. })));
    }

    #[test]
    /// Variables the model leaves out land in S2.
    fn unset_defaults_to_s2() {
        let model = Model::new(vec![2, -5]);
        let partition = partition(&model);
        assert_eq!(partition.s1, vec![2]);
        assert_eq!(partition.s2, vec![1, 3, 4, 5]);
    }

    #[test]
    fn empty_model() {
        let outcome = decode(&response(10, "s SATISFIABLE\nv 0\n")).unwrap();
        let Outcome::Split { partition, .. } = outcome else {
            panic!("expected a partition");
        };
        assert!(partition.s1.is_empty());
        assert!(partition.s2.is_empty());
    }

    #[test]
    fn deterministic() {
        let output = "v 4 -1 0\nv -3 2 0\n";
        let first = decode(&response(10, output)).unwrap();
        let second = decode(&response(10, output)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exact_partition() {
        let model = Model::new(vec![-7, 1, 3, -2, 6, -4]);
        let Partition { s1, s2 } = partition(&model);
        let mut all: Vec<usize> = s1.iter().chain(&s2).copied().collect();
        all.sort();
        assert_eq!(all, (1..=7).collect::<Vec<_>>());
        assert!(s1.iter().all(|x| !s2.contains(x)));
        assert!(s1.windows(2).all(|w| w[0] < w[1]));
        assert!(s2.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn splitting_check() {
        let instance = Instance {
            element_count: 4,
            sets: vec![vec![1, 2], vec![3, 4]],
        };
        let good = Partition {
            s1: vec![1, 3],
            s2: vec![2, 4],
        };
        let bad = Partition {
            s1: vec![1, 2],
            s2: vec![3, 4],
        };
        assert!(good.splits(&instance));
        assert!(!bad.splits(&instance));
    }

    #[test]
    fn verification() {
        let problem = Problem {
            var_count: 3,
            clauses: vec![vec![-1, -2, -3], vec![1, 2, 3]],
        };
        assert!(verify(&problem, &Model::new(vec![1, -2, 3])));
        assert!(!verify(&problem, &Model::new(vec![1, 2, 3])));
        // 3 is unset and read as false
        assert!(verify(&problem, &Model::new(vec![1, 2])));
        assert!(!verify(&problem, &Model::new(vec![])));
    }
}
