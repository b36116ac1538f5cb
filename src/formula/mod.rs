pub mod tokenizer;

use crate::error::FormulaError;
use crate::eval;
use crate::literals::{Assignment, LiteralUniverse};
use crate::solver::SolveStats;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

pub use tokenizer::tokenize;

/// Index of a literal in its formula's [`LiteralUniverse`].
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

/// A named literal as it appears in the formula text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Literal {
    name: String,
    variable: Option<Variable>,
}

impl Literal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal's index, once the formula's literals have been resolved.
    pub fn variable(&self) -> Option<Variable> {
        self.variable
    }

    pub(crate) fn resolve(&mut self, variable: Option<Variable>) {
        self.variable = variable;
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    And,
    Or,
    Not,
    OpenBracket,
    CloseBracket,
    Literal(Literal),
    Unknown(char),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::And => f.write_str("&"),
            Token::Or => f.write_str("|"),
            Token::Not => f.write_str("~"),
            Token::OpenBracket => f.write_str("("),
            Token::CloseBracket => f.write_str(")"),
            Token::Literal(literal) => f.write_str(literal.name()),
            Token::Unknown(c) => write!(f, "{}", c),
        }
    }
}

/// Joins the text form of each token with single spaces.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>().join(" ")
}

/// A tokenized formula together with the literals it mentions.
#[derive(Clone, Debug)]
pub struct Formula {
    tokens: Vec<Token>,
    literals: Rc<LiteralUniverse>,
}

impl Formula {
    /// Tokenizes `text` and resolves its literals.
    ///
    /// Only the formula's shape is checked here (something to tokenize, at least one literal).
    /// Syntax errors surface when the formula is first evaluated.
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        if text.is_empty() {
            return Err(FormulaError::EmptyContents);
        }

        let mut tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(FormulaError::NoTokens);
        }

        let literals = LiteralUniverse::collect(&tokens);
        if literals.is_empty() {
            return Err(FormulaError::NoLiterals);
        }
        literals.resolve(&mut tokens);

        Ok(Self {
            tokens,
            literals: Rc::new(literals),
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn literals(&self) -> &Rc<LiteralUniverse> {
        &self.literals
    }

    pub fn num_literals(&self) -> usize {
        self.literals.len()
    }

    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, FormulaError> {
        eval::evaluate(&self.tokens, assignment, &mut SolveStats::default())
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&render(&self.tokens))
    }
}

/// Well-formed formulas over at most six literals.
#[cfg(test)]
pub(crate) fn formula_strategy() -> impl proptest::strategy::Strategy<Value = String> {
    use proptest::prelude::*;

    let leaf = prop::sample::select(vec!["a", "b", "c", "d", "x1", "y2"]).prop_map(|name| name.to_string());
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("~{}", e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} & {}", l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| format!("{} | {}", l, r)),
        ]
    })
}
