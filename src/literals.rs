use crate::formula::{Token, Variable};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// The distinct literal names of a formula, in order of first occurrence.
///
/// Built once per formula and shared read-only (through an `Rc`) by every [`Assignment`] derived
/// during a search.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LiteralUniverse {
    names: Vec<String>,
    variables: HashMap<String, Variable>,
}

impl LiteralUniverse {
    pub fn collect<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut universe = Self::default();
        for token in tokens {
            if let Token::Literal(literal) = token {
                universe.insert(literal.name());
            }
        }
        universe
    }

    fn insert(&mut self, name: &str) -> Variable {
        if let Some(&variable) = self.variables.get(name) {
            return variable;
        }
        let variable = Variable(self.names.len());
        self.names.push(name.to_string());
        self.variables.insert(name.to_string(), variable);
        variable
    }

    /// Attaches an index to every literal token; names not in the universe stay unresolved.
    pub fn resolve(&self, tokens: &mut [Token]) {
        for token in tokens {
            if let Token::Literal(literal) = token {
                let variable = self.variable(literal.name());
                literal.resolve(variable);
            }
        }
    }

    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.variables.get(name).copied()
    }

    pub fn name(&self, variable: Variable) -> &str {
        &self.names[variable.0]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Display for LiteralUniverse {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

/// Truth values for every literal of a formula.
///
/// Variables below the frozen boundary have been decided by the search; the rest are thawed and
/// hold a placeholder `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    literals: Rc<LiteralUniverse>,
    values: Vec<bool>,
    frozen: usize,
}

impl Assignment {
    /// An assignment with every literal thawed.
    pub fn new(literals: Rc<LiteralUniverse>) -> Self {
        let values = vec![false; literals.len()];
        Self {
            literals,
            values,
            frozen: 0,
        }
    }

    /// A fully frozen assignment with the given values, in universe order.
    pub fn with_values(literals: Rc<LiteralUniverse>, values: Vec<bool>) -> Self {
        assert_eq!(literals.len(), values.len(), "one value per literal");
        let frozen = values.len();
        Self {
            literals,
            values,
            frozen,
        }
    }

    /// Copies this assignment and freezes its first thawed variable to `value`.
    pub fn freeze_next(&self, value: bool) -> Self {
        assert!(self.num_thawed() > 0, "no thawed literals left to freeze");
        let mut values = self.values.clone();
        values[self.frozen] = value;
        Self {
            literals: Rc::clone(&self.literals),
            values,
            frozen: self.frozen + 1,
        }
    }

    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(variable.0).copied()
    }

    /// Looks a literal up by name. Slower than [`Assignment::value`].
    pub fn get(&self, name: &str) -> Option<bool> {
        self.literals.variable(name).and_then(|variable| self.value(variable))
    }

    pub fn is_frozen(&self, variable: Variable) -> bool {
        variable.0 < self.frozen
    }

    pub fn num_frozen(&self) -> usize {
        self.frozen
    }

    pub fn num_thawed(&self) -> usize {
        self.values.len() - self.frozen
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn literals(&self) -> &Rc<LiteralUniverse> {
        &self.literals
    }

    /// `(name, value)` pairs in literal discovery order, thawed literals included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.literals.names().zip(self.values.iter().copied())
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", name, if value { "True" } else { "False" })?;
        }
        Ok(())
    }
}
