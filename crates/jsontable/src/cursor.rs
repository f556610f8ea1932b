//! Character cursor over the input text.
//!
//! The cursor owns the full input and a read position, and exposes the small
//! set of operations the grammar states need: peek the next character,
//! advance by one, match-and-consume an exact literal, skip contiguous JSON
//! whitespace, and scan a run of four hex digits. It is the only shared
//! mutable resource of a parse; recursive frames advance a single cursor
//! monotonically forward.
//!
//! Positions are tracked both as a byte index (for slicing the `&str`) and
//! as a character offset (the unit reported in [`ParseError::offset`]).
//!
//! [`ParseError::offset`]: crate::ParseError

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    byte: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            byte: 0,
            offset: 0,
        }
    }

    /// Character offset of the read position from the start of the input.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// The next character, without consuming it. `None` at end of input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.byte..].chars().next()
    }

    /// Consumes one character. No-op at end of input.
    pub(crate) fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.byte += c.len_utf8();
            self.offset += 1;
        }
    }

    /// Consumes `literal` if the input continues with it exactly.
    ///
    /// Returns `false`, consuming nothing, otherwise.
    pub(crate) fn eat_str(&mut self, literal: &str) -> bool {
        if self.input[self.byte..].starts_with(literal) {
            self.byte += literal.len();
            self.offset += literal.chars().count();
            true
        } else {
            false
        }
    }

    /// Discards contiguous JSON whitespace: space, tab, line feed, carriage
    /// return.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.bump();
        }
    }

    /// Scans exactly four hex digits and returns them as a 16-bit unit.
    ///
    /// On failure returns `None`; any valid digits before the offending
    /// character have been consumed, leaving the cursor on it.
    pub(crate) fn eat_hex4(&mut self) -> Option<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let digit = self.peek().and_then(|c| c.to_digit(16))?;
            unit = (unit << 4) | u16::try_from(digit).ok()?;
            self.bump();
        }
        Some(unit)
    }

    /// Whether the whole input has been consumed.
    pub(crate) fn at_end(&self) -> bool {
        self.byte == self.input.len()
    }
}
