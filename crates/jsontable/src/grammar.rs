//! The JSON grammar as a table of named states.
//!
//! Parsing is organized around an enumerated set of grammar states. Each
//! state declares up to five pieces of behavior:
//!
//! - an optional pre-action, run once on entry (value-slot setup, nested
//!   sub-parses, number conversion);
//! - a whitespace-skip flag: if set, leading whitespace is discarded before
//!   anything else happens in the state;
//! - an ordered list of acceptors tried against the next character, where
//!   the first acceptor that yields a next state wins;
//! - a default error code, reported when no acceptor matches;
//! - a finality flag; reaching a final state ends the active frame.
//!
//! This module holds the state names, the per-state flag tables, and the
//! lexical helpers shared by the string states. The pre-actions and the
//! ordered acceptors themselves live in [`crate::parser`] as `match`
//! dispatch over the lookahead character, one arm per acceptor in table
//! order.

/// A named position in the JSON grammar's recognition process.
///
/// Exactly one state is active at a time per parse frame. Composite values
/// do not enlarge this set: object members and array elements are parsed by
/// recursively running a nested frame from `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Start,
    Value,
    BeginObject,
    Member,
    NextMember,
    MemberName,
    MemberValue,
    EndObject,
    BeginArray,
    ArrayElement,
    EndArray,
    BeginString,
    StringChar,
    StringEscapedChar,
    StringUnicodeChar,
    StringHighSurrogate,
    EndString,
    BeginNumber,
    Number,
    NumberStartingZero,
    NumberInteger,
    BeginNumberFraction,
    NumberFraction,
    BeginNumberExponent,
    BeginNumberExponentDigits,
    NumberExponentDigits,
    EndNumber,
    EndLiteral,
}

impl State {
    /// Whether leading whitespace is discarded on entry, before the
    /// pre-action runs and acceptors are tried.
    ///
    /// Whitespace never appears inside a string or number token, so none of
    /// the interior token states skip.
    pub(crate) fn skips_whitespace(self) -> bool {
        matches!(
            self,
            Self::Value
                | Self::BeginObject
                | Self::EndObject
                | Self::Member
                | Self::NextMember
                | Self::BeginArray
                | Self::EndArray
                | Self::EndString
                | Self::EndNumber
                | Self::EndLiteral
        )
    }

    /// Whether reaching this state completes the active frame's value.
    ///
    /// Final states carry no acceptors.
    pub(crate) fn is_final(self) -> bool {
        matches!(
            self,
            Self::EndObject | Self::EndArray | Self::EndString | Self::EndNumber | Self::EndLiteral
        )
    }
}

/// Decoded value of a single-character string escape, if `c` is one.
///
/// `\u` is not in this table; it introduces a four-hex-digit escape and is
/// handled by its own state.
pub(crate) fn decode_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        _ => None,
    }
}

/// Whether `unit` lies in `0xD800..=0xDBFF`, the range a `\u` escape must
/// pair with a following trail-range escape.
pub(crate) fn is_lead_surrogate_unit(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Whether `unit` lies in `0xDC00..=0xDFFF`, the range accepted as the
/// second half of an escaped surrogate pair.
pub(crate) fn is_trail_surrogate_unit(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}
