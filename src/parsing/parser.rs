use std::fmt;

use tracing::{debug, trace};

use crate::language::*;
use crate::parsing::cursor::Cursor;

/// The one way checking a line can fail: the symbol found where it was, and
/// the characters that would have been acceptable there instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxViolation {
    pub offset: usize,
    pub found: Symbol,
    pub expected: &'static [char],
}

impl SyntaxViolation {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn expected_list(&self) -> String {
        self.expected
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "provided {}, expected one of [{}]",
            self.found,
            self.expected_list()
        )
    }
}

impl std::error::Error for SyntaxViolation {}

/// Whether a rule merely matched its production, opened a group whose
/// statements follow, or whether the line has been completely accepted and
/// nothing further is to be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Matched,
    Nested,
    Finished,
}

#[derive(Debug)]
pub struct Parser<'i> {
    cursor: Cursor<'i>,
}

impl<'i> Parser<'i> {
    pub fn new(line: &'i str) -> Parser<'i> {
        Parser {
            cursor: Cursor::new(line),
        }
    }

    pub fn parse_from_start(&mut self) -> Result<(), SyntaxViolation> {
        self.cursor
            .advance();
        self.read_statements()?;
        Ok(())
    }

    pub fn into_consumed(self) -> Consumed {
        self.cursor
            .into_consumed()
    }

    fn current(&self) -> Symbol {
        self.cursor
            .current()
    }

    fn advance(&mut self) -> Symbol {
        let symbol = self
            .cursor
            .advance();
        trace!(%symbol, "advance");
        symbol
    }

    fn violation(&self, expected: &'static [char]) -> SyntaxViolation {
        let violation = SyntaxViolation {
            offset: self
                .cursor
                .offset(),
            found: self.current(),
            expected,
        };
        debug!(%violation);
        violation
    }

    /// One or more statements, each terminated by a semicolon. The end marker
    /// immediately after a semicolon accepts the whole line, however deeply
    /// nested the statement being read is.
    ///
    /// Statements inside a group can only end by finishing the line or by a
    /// violation, so they are read by this same loop rather than by
    /// recursion; nesting depth costs no stack.
    pub fn read_statements(&mut self) -> Result<Progress, SyntaxViolation> {
        loop {
            match self.read_statement_body()? {
                Progress::Finished => return Ok(Progress::Finished),
                Progress::Nested => continue,
                Progress::Matched => {}
            }

            if !self
                .current()
                .is(';')
            {
                return Err(self.violation(SEMICOLON));
            }

            if self
                .advance()
                .is_end()
            {
                return Ok(Progress::Finished);
            }
        }
    }

    pub fn read_statement_body(&mut self) -> Result<Progress, SyntaxViolation> {
        let symbol = self.current();
        trace!(%symbol, "statement body");

        if symbol.is_digit() || symbol.is('(') {
            self.read_left_form()
        } else if symbol.is_operator() {
            self.read_right_form()
        } else {
            Err(self.violation(STATEMENT_START))
        }
    }

    pub fn read_left_form(&mut self) -> Result<Progress, SyntaxViolation> {
        let symbol = self.current();

        if symbol.is('(') {
            self.read_group()
        } else if symbol.is_digit() {
            self.read_number()
        } else {
            Err(self.violation(LEFT_FORM_START))
        }
    }

    pub fn read_right_form(&mut self) -> Result<Progress, SyntaxViolation> {
        if self
            .current()
            .is_operator()
        {
            self.read_operator()
        } else {
            Err(self.violation(OPERATORS))
        }
    }

    /// An opening parenthesis followed either directly by its closing one,
    /// or by nested statements. A closing parenthesis is not required after
    /// nested statements. In the latter case the current symbol is left at
    /// the start of the first nested statement for the caller to read.
    pub fn read_group(&mut self) -> Result<Progress, SyntaxViolation> {
        if !self
            .current()
            .is('(')
        {
            return Err(self.violation(LEFT_PARENTHESIS));
        }

        if self
            .advance()
            .is(')')
        {
            self.advance();
            Ok(Progress::Matched)
        } else {
            Ok(Progress::Nested)
        }
    }

    pub fn read_number(&mut self) -> Result<Progress, SyntaxViolation> {
        if !self
            .current()
            .is_digit()
        {
            return Err(self.violation(DIGITS));
        }

        self.read_digits()?;
        self.read_dot()
    }

    /// A maximal run of digits. The first symbol which is not a digit is left
    /// as the current one.
    pub fn read_digits(&mut self) -> Result<Progress, SyntaxViolation> {
        if !self
            .current()
            .is_digit()
        {
            return Err(self.violation(DIGITS));
        }

        while self
            .advance()
            .is_digit()
        {}

        Ok(Progress::Matched)
    }

    /// An optional decimal point. Digits after it are not part of the number.
    pub fn read_dot(&mut self) -> Result<Progress, SyntaxViolation> {
        if self
            .current()
            .is('.')
        {
            self.advance();
        }
        Ok(Progress::Matched)
    }

    pub fn read_operator(&mut self) -> Result<Progress, SyntaxViolation> {
        if !self
            .current()
            .is_operator()
        {
            return Err(self.violation(OPERATORS));
        }

        self.advance();
        Ok(Progress::Matched)
    }
}
