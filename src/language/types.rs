//! Symbols, character classes, and the outcome of checking a line

use std::fmt;

use crate::parsing::SyntaxViolation;

/// How the end marker is shown to humans.
pub const END_MARKER: char = 'ε';

pub const OPERATORS: &[char] = &['+', '-', ':', '*', '^'];

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const SEMICOLON: &[char] = &[';'];

pub const LEFT_PARENTHESIS: &[char] = &['('];

/// Digits, then the opening parenthesis.
pub const LEFT_FORM_START: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '(',
];

/// Everything a statement body may begin with: operators, digits, then the
/// opening parenthesis.
pub const STATEMENT_START: &[char] = &[
    '+', '-', ':', '*', '^', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '(',
];

/// One character of input, or the marker returned once input is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    pub fn is_digit(&self) -> bool {
        matches!(self, Symbol::Char(c) if DIGITS.contains(c))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Symbol::Char(c) if OPERATORS.contains(c))
    }

    pub fn is_end(&self) -> bool {
        *self == Symbol::End
    }

    pub fn is(&self, c: char) -> bool {
        *self == Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::End => write!(f, "{}", END_MARKER),
        }
    }
}

/// Every symbol the cursor has handed out, in order, including the end
/// marker if it was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consumed(pub Vec<Symbol>);

impl Consumed {
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }

    pub fn last(&self) -> Option<Symbol> {
        self.0
            .last()
            .copied()
    }
}

impl fmt::Display for Consumed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(SyntaxViolation),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn violation(&self) -> Option<&SyntaxViolation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(violation),
        }
    }
}

/// The result of checking one line: the verdict, together with what was
/// read to arrive at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub consumed: Consumed,
    pub verdict: Verdict,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.verdict
            .is_valid()
    }
}
