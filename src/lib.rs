mod error;
pub mod eval;
pub mod formula;
pub mod input;
mod literals;
mod solver;

#[cfg(test)]
mod brute_force;

use std::fmt::{self, Display, Formatter};

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Assignment),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Assignment> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            SatResult::Unsatisfiable => None,
        }
    }
}

impl Display for SatResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SatResult::Satisfiable(model) => write!(f, "Satisfied with {}", model),
            SatResult::Unsatisfiable => f.write_str("Unstatisfied"),
        }
    }
}

pub use error::{FormulaError, InputError};
pub use formula::{Formula, Literal, Token, Variable};
pub use literals::{Assignment, LiteralUniverse};
pub use solver::{SolveStats, Solver};
