pub type Lit = i32;

pub type Var = usize;

/// The largest variable a literal can name.
pub const MAX_VAR: Var = Lit::MAX as Var;

pub fn to_var(lit: Lit) -> Var {
    lit.unsigned_abs() as Var
}

pub type Clause = Vec<Lit>;

/// A formula in conjunctive normal form over variables `1..=var_count`.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub var_count: usize,
    pub clauses: Vec<Clause>,
}

/// A Set Splitting instance over the ground set `1..=element_count`.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub element_count: usize,
    pub sets: Vec<Vec<Var>>,
}

/// The literals a solver reported true, sorted and without duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    lits: Vec<Lit>,
}

impl Model {
    pub fn new(mut lits: Vec<Lit>) -> Self {
        lits.sort();
        lits.dedup();
        Self { lits }
    }

    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// The value the model gives `var`, or `None` if it mentions neither polarity.
    /// A model naming both polarities counts as positive.
    pub fn value(&self, var: Var) -> Option<bool> {
        let lit = Lit::try_from(var).ok()?;
        if self.lits.binary_search(&lit).is_ok() {
            Some(true)
        } else if self.lits.binary_search(&-lit).is_ok() {
            Some(false)
        } else {
            None
        }
    }

    pub fn max_var(&self) -> Var {
        self.lits.iter().map(|&lit| to_var(lit)).max().unwrap_or(0)
    }
}

pub const SAT_STATUS: i32 = 10;
pub const UNSAT_STATUS: i32 = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Sat,
    Unsat,
    Unknown,
}

impl Verdict {
    /// Reads the verdict off a solver exit status.
    /// `None` means the process was terminated without one.
    pub fn from_status(status: Option<i32>) -> Self {
        match status {
            Some(SAT_STATUS) => Verdict::Sat,
            Some(UNSAT_STATUS) => Verdict::Unsat,
            _ => Verdict::Unknown,
        }
    }
}
