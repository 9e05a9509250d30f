//! Extracted literals and the ordered sequence they form

use crate::table::error::{Result, TableError};

/// A decimal literal as it appeared in the source text
///
/// Digits are kept verbatim so magnitude is checked only when the value is
/// needed. Leading zeros are allowed and do not change the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    digits: String,
    line: usize,
}

impl Literal {
    /// Create a literal from a run of ASCII digits found on `line` (1-based)
    pub fn new(digits: impl Into<String>, line: usize) -> Self {
        Self {
            digits: digits.into(),
            line,
        }
    }

    /// The literal's digits
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// 1-based source line the literal was found on
    pub fn line(&self) -> usize {
        self.line
    }

    /// The literal's value, or `None` if it is 2^128 or larger
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.parse::<u128>().ok()
    }
}

/// The ordered literals of one table declaration
///
/// Index in the sequence is the lookup key consumers use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSequence {
    name: String,
    literals: Vec<Literal>,
}

impl ValueSequence {
    /// Create a sequence for table `name`
    pub fn new(name: impl Into<String>, literals: Vec<Literal>) -> Self {
        Self {
            name: name.into(),
            literals,
        }
    }

    /// Build a sequence from already-typed values
    ///
    /// Literals get line 0 since they have no source position.
    pub fn from_values(name: impl Into<String>, values: &[u128]) -> Self {
        let literals = values
            .iter()
            .map(|v| Literal::new(v.to_string(), 0))
            .collect();
        Self::new(name, literals)
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the declaration held no literals
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literals in source order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Convert every literal to u128, failing on the first one that overflows
    pub fn to_values(&self) -> Result<Vec<u128>> {
        self.literals
            .iter()
            .enumerate()
            .map(|(index, literal)| {
                literal.to_u128().ok_or_else(|| TableError::Overflow {
                    table: self.name.clone(),
                    index,
                    line: literal.line(),
                    literal: literal.digits().to_string(),
                })
            })
            .collect()
    }
}
