use crate::error::FormulaError;
use crate::eval;
use crate::formula::{Formula, Variable};
use crate::literals::Assignment;
use crate::SatResult;
use log::{debug, trace};
use std::rc::Rc;

/// Diagnostic counters from one solve. Not part of the result.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SolveStats {
    /// Number of `expr` productions evaluated, nested ones included
    pub evaluations: u64,
    /// Number of literal values read
    pub lookups: u64,
    /// Deepest search recursion reached; the top-level evaluation is depth 0
    pub max_depth: usize,
}

/// Exhaustive backtracking search over a formula's literals.
///
/// Literals are frozen in discovery order, each tried `true` before `false`, and the formula is
/// re-evaluated from scratch at every node of the search. The first satisfying assignment found
/// is therefore deterministic.
pub struct Solver {
    formula: Formula,
    stats: SolveStats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            stats: SolveStats::default(),
        }
    }

    pub fn solve(&mut self) -> Result<SatResult, FormulaError> {
        self.stats = SolveStats::default();

        let assignment = Assignment::new(Rc::clone(self.formula.literals()));
        self.check_syntax(&assignment)?;

        let result = self.search(assignment, 0)?;
        debug!(
            "{} after {} evaluations, max depth {}",
            if result.is_satisfiable() { "satisfiable" } else { "unsatisfiable" },
            self.stats.evaluations,
            self.stats.max_depth
        );
        Ok(result)
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Counters from the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    // One evaluation against the all-false assignment reports a malformed formula before the
    // search starts branching on it.
    fn check_syntax(&mut self, assignment: &Assignment) -> Result<(), FormulaError> {
        match eval::evaluate(self.formula.tokens(), assignment, &mut self.stats) {
            Ok(_) => Ok(()),
            Err(e) => {
                debug!("syntax check failed: {}", e);
                Err(e)
            }
        }
    }

    fn search(&mut self, assignment: Assignment, depth: usize) -> Result<SatResult, FormulaError> {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if eval::evaluate(self.formula.tokens(), &assignment, &mut self.stats)? {
            return Ok(SatResult::Satisfiable(assignment));
        }
        if assignment.num_thawed() == 0 {
            return Ok(SatResult::Unsatisfiable);
        }

        let variable = Variable(assignment.num_frozen());
        for &value in &[true, false] {
            let next = assignment.freeze_next(value);
            trace!(
                "decide {}={} at depth {}",
                self.formula.literals().name(variable),
                value,
                depth + 1
            );
            if let SatResult::Satisfiable(model) = self.search(next, depth + 1)? {
                return Ok(SatResult::Satisfiable(model));
            }
        }

        trace!("backtrack from depth {}", depth);
        Ok(SatResult::Unsatisfiable)
    }
}
