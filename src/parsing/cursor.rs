//! Pull-based reader over one line of input

use std::str::Chars;

use crate::language::{Consumed, Symbol};

/// Hands out the characters of a line one at a time, followed by the end
/// marker forever after. Everything handed out is kept in the consumed log.
#[derive(Debug)]
pub struct Cursor<'i> {
    chars: Chars<'i>,
    consumed: Vec<Symbol>,
}

impl<'i> Cursor<'i> {
    pub fn new(line: &'i str) -> Cursor<'i> {
        Cursor {
            chars: line.chars(),
            consumed: Vec::new(),
        }
    }

    pub fn advance(&mut self) -> Symbol {
        let symbol = match self
            .chars
            .next()
        {
            Some(c) => Symbol::Char(c),
            None => Symbol::End,
        };
        self.consumed
            .push(symbol);
        symbol
    }

    /// The symbol most recently returned by advance().
    ///
    /// # Panics
    ///
    /// If advance() has never been called.
    pub fn current(&self) -> Symbol {
        match self
            .consumed
            .last()
        {
            Some(symbol) => *symbol,
            None => panic!("cursor read before first advance"),
        }
    }

    /// Character offset of the current symbol within the line.
    pub fn offset(&self) -> usize {
        self.consumed
            .len()
            .saturating_sub(1)
    }

    pub fn consumed(&self) -> &[Symbol] {
        &self.consumed
    }

    pub fn into_consumed(self) -> Consumed {
        Consumed(self.consumed)
    }
}
