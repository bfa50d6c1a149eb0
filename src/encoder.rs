use log::debug;

use crate::types::{Clause, Instance, Lit, Problem};

/// Reduces a Set Splitting instance to CNF.
///
/// Variable `i` is true iff element `i` goes to S1. Each set contributes one clause
/// forbidding it to lie wholly in S1 and one forbidding it to lie wholly in S2.
/// Elements are expected in `1..=MAX_VAR`, which [`read_instance`] enforces.
///
/// [`read_instance`]: crate::io::instance::read_instance
pub fn encode(instance: &Instance) -> Problem {
    let mut clauses: Vec<Clause> = Vec::with_capacity(2 * instance.sets.len());

    for set in &instance.sets {
        // not all in S1
        clauses.push(set.iter().map(|&x| -(x as Lit)).collect());
        // not all in S2
        clauses.push(set.iter().map(|&x| x as Lit).collect());
    }

    debug!(
        "encoded {} sets into {} clauses over {} variables",
        instance.sets.len(),
        clauses.len(),
        instance.element_count
    );

    Problem {
        var_count: instance.element_count,
        clauses,
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Instance, Lit, Var, MAX_VAR};

    use super::encode;

    fn instance(element_count: usize, sets: Vec<Vec<Var>>) -> Instance {
        Instance {
            element_count,
            sets,
        }
    }

    #[test]
    fn single_set() {
        let problem = encode(&instance(3, vec![vec![1, 2, 3]]));
        assert_eq!(problem.var_count, 3);
        assert_eq!(problem.clauses, vec![vec![-1, -2, -3], vec![1, 2, 3]]);
    }

    #[test]
    fn two_pairs() {
        let problem = encode(&instance(4, vec![vec![1, 2], vec![3, 4]]));
        assert_eq!(problem.var_count, 4);
        assert_eq!(
            problem.clauses,
            vec![vec![-1, -2], vec![1, 2], vec![-3, -4], vec![3, 4]]
        );
    }

    #[test]
    /// A singleton can never be split, so its clauses contradict each other.
    fn singleton() {
        let problem = encode(&instance(1, vec![vec![1]]));
        assert_eq!(problem.clauses, vec![vec![-1], vec![1]]);
    }

    #[test]
    fn largest_element() {
        let problem = encode(&instance(MAX_VAR, vec![vec![1, MAX_VAR]]));
        assert_eq!(problem.var_count, MAX_VAR);
        assert_eq!(problem.clauses, vec![vec![-1, -Lit::MAX], vec![1, Lit::MAX]]);
    }

    #[test]
    fn degenerate_sets_kept() {
        let problem = encode(&instance(2, vec![vec![], vec![2, 2]]));
        assert_eq!(problem.clauses, vec![vec![], vec![], vec![-2, -2], vec![2, 2]]);
    }

    #[test]
    /// Both clauses of a set hold exactly when the set is not monochromatic.
    fn not_monochromatic() {
        let sets = vec![vec![1, 2, 3], vec![2, 4], vec![1, 3, 4, 5]];
        let problem = encode(&instance(5, sets.clone()));
        assert_eq!(problem.clauses.len(), 2 * sets.len());

        for bits in 0u32..(1 << 5) {
            let value = |var: Var| bits & (1 << (var - 1)) != 0;
            for (set, pair) in sets.iter().zip(problem.clauses.chunks(2)) {
                let satisfied = pair.iter().all(|clause| {
                    clause
                        .iter()
                        .any(|&lit: &Lit| value(lit.unsigned_abs() as Var) == lit.is_positive())
                });
                let in_s1 = set.iter().any(|&x| value(x));
                let in_s2 = set.iter().any(|&x| !value(x));
                assert_eq!(satisfied, in_s1 && in_s2);
            }
        }
    }
}
