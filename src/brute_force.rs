use crate::*;
use std::rc::Rc;

// Enumerates every assignment in order, for use as a proptest oracle
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let num_literals = f.num_literals();
    assert!(num_literals <= 15); // just for safety

    fn assignment_for(assignment: u32, x: usize) -> bool {
        assignment & (1 << x) != 0
    }

    for assignment in 0..2u32.pow(num_literals as u32) {
        let values = (0..num_literals).map(|x| assignment_for(assignment, x)).collect();
        let assignment = Assignment::with_values(Rc::clone(f.literals()), values);
        if f.evaluate(&assignment).expect("brute force needs a well-formed formula") {
            return SatResult::Satisfiable(assignment);
        }
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(text: &str) -> SatResult {
        solve_brute_force(&Formula::parse(text).unwrap())
    }

    #[test]
    fn brute_force_sat() {
        let result = brute_force("a & ~b");
        assert_eq!(result.model().unwrap().to_string(), "a=True b=False");
    }

    #[test]
    fn brute_force_unsat() {
        assert_eq!(brute_force("x & ~x"), SatResult::Unsatisfiable);
        assert_eq!(brute_force("(a | b) & ~a & ~b"), SatResult::Unsatisfiable);
    }

    #[test]
    fn brute_force_needs_every_literal() {
        let result = brute_force("a & b & c & ~d");
        assert_eq!(result.model().unwrap().to_string(), "a=True b=True c=True d=False");
    }
}
