use thiserror::Error;

/// Everything that can go wrong between reading a formula and finishing a solve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    // Configuration: the formula is rejected before any evaluation
    #[error("contents is empty -- cannot solve")]
    EmptyContents,
    #[error("no tokens found -- cannot solve")]
    NoTokens,
    #[error("there are no literals -- nothing to solve")]
    NoLiterals,

    // Syntax/semantics: found by the evaluator
    #[error("encountered unknown token `{0}`")]
    UnknownToken(char),
    #[error("a clause cannot begin with &")]
    ClauseBeginsWithAnd,
    #[error("a clause cannot begin with |")]
    ClauseBeginsWithOr,
    #[error("expected something after a not")]
    ExpectedAfterNot,
    #[error("expected something after an open bracket")]
    ExpectedAfterOpenBracket,
    #[error("expected something after an and/or")]
    ExpectedAfterConnector,
    #[error("expected close bracket")]
    ExpectedCloseBracket,
    #[error("unexpected close bracket")]
    UnexpectedCloseBracket,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected `{0}` -- only and/or can connect clauses")]
    UnexpectedConnector(String),
    #[error("unknown literal `{0}`")]
    UnknownLiteral(String),
}

/// Failure to get the formula's text in the first place.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
}

impl FormulaError {
    /// True for errors the evaluator reports, false for formulas rejected up front.
    pub fn is_syntax(&self) -> bool {
        !matches!(
            self,
            FormulaError::EmptyContents | FormulaError::NoTokens | FormulaError::NoLiterals
        )
    }
}
