//! Recursive-descent evaluation of a token sequence.
//!
//! Parsing and evaluation happen in one walk over the tokens; no syntax tree is built. Because the
//! walk visits every token, evaluating once is also how a formula's syntax gets checked.
//!
//! ```text
//!   expr := clause ( ('&' | '|') clause )*
//! clause := '~' clause
//!         | literal
//!         | '(' expr ')'
//! ```
//!
//! `&` and `|` share a precedence level and fold left to right; `~` binds tighter than both.

use crate::error::FormulaError;
use crate::formula::{Literal, Token};
use crate::literals::Assignment;
use crate::solver::SolveStats;

/// Evaluates `tokens` under `assignment`, counting evaluations and lookups in `stats`.
pub fn evaluate(
    tokens: &[Token],
    assignment: &Assignment,
    stats: &mut SolveStats,
) -> Result<bool, FormulaError> {
    if tokens.is_empty() {
        return Err(FormulaError::NoTokens);
    }

    let mut evaluator = Evaluator {
        tokens,
        position: 0,
        assignment,
        stats,
    };
    let value = evaluator.expr()?;

    // expr only stops before the end after ungetting a close bracket
    match evaluator.next() {
        None => Ok(value),
        Some(_) => Err(FormulaError::UnexpectedCloseBracket),
    }
}

struct Evaluator<'a> {
    tokens: &'a [Token],
    position: usize,
    assignment: &'a Assignment,
    stats: &'a mut SolveStats,
}

impl<'a> Evaluator<'a> {
    /// Consumes the next token; `None` is the end of input.
    fn next(&mut self) -> Option<&'a Token> {
        let tokens = self.tokens;
        let token = tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Ungets the token most recently returned by [`Evaluator::next`].
    fn retreat(&mut self) {
        debug_assert!(self.position > 0);
        self.position -= 1;
    }

    fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn expr(&mut self) -> Result<bool, FormulaError> {
        self.stats.evaluations += 1;

        let mut value = self.clause()?;
        loop {
            let connector = match self.next() {
                None => return Ok(value),
                Some(token) => token,
            };
            match connector {
                Token::CloseBracket => {
                    // leave it for the enclosing bracket to match
                    self.retreat();
                    return Ok(value);
                }
                Token::And | Token::Or => {
                    if self.at_end() {
                        return Err(FormulaError::ExpectedAfterConnector);
                    }
                    // no short circuit: an error on the right must still surface
                    let right = self.clause()?;
                    value = match connector {
                        Token::And => value && right,
                        _ => value || right,
                    };
                }
                other => return Err(FormulaError::UnexpectedConnector(other.to_string())),
            }
        }
    }

    fn clause(&mut self) -> Result<bool, FormulaError> {
        match self.next() {
            None => Err(FormulaError::UnexpectedEof),
            Some(Token::Not) => {
                if self.at_end() {
                    return Err(FormulaError::ExpectedAfterNot);
                }
                Ok(!self.clause()?)
            }
            Some(Token::Literal(literal)) => self.lookup(literal),
            Some(Token::OpenBracket) => {
                if self.at_end() {
                    return Err(FormulaError::ExpectedAfterOpenBracket);
                }
                let value = self.expr()?;
                match self.next() {
                    Some(Token::CloseBracket) => Ok(value),
                    _ => Err(FormulaError::ExpectedCloseBracket),
                }
            }
            Some(Token::And) => Err(FormulaError::ClauseBeginsWithAnd),
            Some(Token::Or) => Err(FormulaError::ClauseBeginsWithOr),
            Some(Token::CloseBracket) => Err(FormulaError::UnexpectedCloseBracket),
            Some(Token::Unknown(c)) => Err(FormulaError::UnknownToken(*c)),
        }
    }

    fn lookup(&mut self, literal: &Literal) -> Result<bool, FormulaError> {
        self.stats.lookups += 1;
        literal
            .variable()
            .and_then(|variable| self.assignment.value(variable))
            .ok_or_else(|| FormulaError::UnknownLiteral(literal.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;
    use std::rc::Rc;

    /// Evaluates `text` with its literals set to `values`, in discovery order.
    fn eval_with(text: &str, values: &[bool]) -> Result<bool, FormulaError> {
        let f = Formula::parse(text).unwrap();
        let assignment = Assignment::with_values(Rc::clone(f.literals()), values.to_vec());
        f.evaluate(&assignment)
    }

    fn syntax_error(text: &str) -> FormulaError {
        let f = Formula::parse(text).unwrap();
        f.evaluate(&Assignment::new(Rc::clone(f.literals()))).unwrap_err()
    }

    #[test]
    fn eval_literals_and_not() {
        assert_eq!(eval_with("a", &[true]), Ok(true));
        assert_eq!(eval_with("~a", &[true]), Ok(false));
        assert_eq!(eval_with("~~a", &[false]), Ok(false));
        assert_eq!(eval_with("~ ~ ~a", &[false]), Ok(true));
    }

    #[test]
    fn eval_connectors() {
        assert_eq!(eval_with("a & b", &[true, false]), Ok(false));
        assert_eq!(eval_with("a & b", &[true, true]), Ok(true));
        assert_eq!(eval_with("a | b", &[false, true]), Ok(true));
        assert_eq!(eval_with("a | b", &[false, false]), Ok(false));
        assert_eq!(eval_with("a & ~b", &[true, false]), Ok(true));
    }

    #[test]
    fn eval_folds_left_to_right() {
        // (a | b) & c, not a | (b & c)
        assert_eq!(eval_with("a | b & c", &[true, false, false]), Ok(false));
        assert_eq!(eval_with("a | (b & c)", &[true, false, false]), Ok(true));
        // ~ only applies to the clause right after it
        assert_eq!(eval_with("~a & b", &[false, false]), Ok(false));
        assert_eq!(eval_with("~(a & b)", &[false, false]), Ok(true));
    }

    #[test]
    fn eval_nested_brackets() {
        assert_eq!(eval_with("((a))", &[true]), Ok(true));
        assert_eq!(eval_with("~(mike & sally) & ~peter", &[true, true, false]), Ok(false));
        assert_eq!(eval_with("~(mike & sally) & ~peter", &[true, false, false]), Ok(true));
        assert_eq!(eval_with("(a | (b & ~(c | a))) & d", &[false, true, false, true]), Ok(true));
    }

    #[test]
    fn eval_clause_errors() {
        assert_eq!(syntax_error("& a"), FormulaError::ClauseBeginsWithAnd);
        assert_eq!(syntax_error("a & | b"), FormulaError::ClauseBeginsWithOr);
        assert_eq!(syntax_error("a & & b"), FormulaError::ClauseBeginsWithAnd);
        assert_eq!(syntax_error("a & ) b"), FormulaError::UnexpectedCloseBracket);
        assert_eq!(syntax_error("a & $"), FormulaError::UnknownToken('$'));
        assert_eq!(syntax_error("a & ~"), FormulaError::ExpectedAfterNot);
        assert_eq!(syntax_error("a | ("), FormulaError::ExpectedAfterOpenBracket);
        assert_eq!(syntax_error("()a"), FormulaError::UnexpectedCloseBracket);
    }

    #[test]
    fn eval_connector_errors() {
        assert_eq!(syntax_error("a &"), FormulaError::ExpectedAfterConnector);
        assert_eq!(syntax_error("a b"), FormulaError::UnexpectedConnector("b".into()));
        assert_eq!(syntax_error("a ~b"), FormulaError::UnexpectedConnector("~".into()));
        assert_eq!(syntax_error("a (b)"), FormulaError::UnexpectedConnector("(".into()));
    }

    #[test]
    fn eval_bracket_errors() {
        assert_eq!(syntax_error("(a & b"), FormulaError::ExpectedCloseBracket);
        assert_eq!(syntax_error("((a) & b"), FormulaError::ExpectedCloseBracket);
        assert_eq!(syntax_error("a )"), FormulaError::UnexpectedCloseBracket);
        assert_eq!(syntax_error("(a)) & b"), FormulaError::UnexpectedCloseBracket);
    }

    #[test]
    fn eval_first_error_wins() {
        // the inner error is reported even though the bracket is also unclosed
        assert_eq!(syntax_error("(a & $"), FormulaError::UnknownToken('$'));
        assert_eq!(syntax_error("~(a | & b) c"), FormulaError::ClauseBeginsWithAnd);
    }

    #[test]
    fn eval_unknown_literal() {
        let f = Formula::parse("a & b").unwrap();
        let other = Formula::parse("a").unwrap();
        let assignment = Assignment::new(Rc::clone(other.literals()));
        assert_eq!(
            f.evaluate(&assignment),
            Err(FormulaError::UnknownLiteral("b".into()))
        );

        let unresolved = crate::formula::tokenize("a");
        assert_eq!(
            evaluate(&unresolved, &assignment, &mut SolveStats::default()),
            Err(FormulaError::UnknownLiteral("a".into()))
        );
    }

    #[test]
    fn eval_empty_token_sequence() {
        let f = Formula::parse("a").unwrap();
        let assignment = Assignment::new(Rc::clone(f.literals()));
        assert_eq!(
            evaluate(&[], &assignment, &mut SolveStats::default()),
            Err(FormulaError::NoTokens)
        );
    }

    #[test]
    fn eval_counts_evaluations_and_lookups() {
        let f = Formula::parse("(a & b) | ~(c)").unwrap();
        let assignment = Assignment::new(Rc::clone(f.literals()));
        let mut stats = SolveStats::default();
        assert_eq!(evaluate(f.tokens(), &assignment, &mut stats), Ok(true));
        // one top-level expr plus one per bracket
        assert_eq!(stats.evaluations, 3);
        assert_eq!(stats.lookups, 3);
    }
}
