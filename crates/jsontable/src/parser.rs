//! The traversal engine and per-state semantic actions.
//!
//! A parse starts at [`State::Start`] and, on each step: discards leading
//! whitespace if the active state asks for it, runs the state's pre-action
//! once on entry, then tries the state's acceptors against the next input
//! character in declaration order; the first acceptor that yields a next
//! state wins. Reaching a final state ends the frame with the value built in
//! its slot; a state with no matching acceptor fails with that state's error
//! code. End of input peeks as "no character": acceptors that inspect the
//! character decline, while unconditional fall-through acceptors (such as
//! the digit states falling through to `EndNumber`) still fire.
//!
//! Composite states recurse: the `MemberName`, `MemberValue` and
//! `ArrayElement` pre-actions each run a nested frame over the same cursor
//! and thread the sub-result back into the parent's slot. Recursion depth
//! therefore equals JSON nesting depth, and is bounded by
//! [`ParserOptions::max_depth`] so that pathological nesting reports
//! [`ErrorCode::MaximumNestingDepth`] instead of exhausting the call stack.

use crate::cursor::Cursor;
use crate::error::{ErrorCode, ParseError};
use crate::grammar::{self, State};
use crate::value::{Map, Value};

const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`Parser`].
///
/// # Examples
///
/// ```rust
/// use jsontable::{Parser, ParserOptions};
///
/// let options = ParserOptions { max_depth: 8 };
/// let mut parser = Parser::with_options("[[[1]]]", options);
/// assert!(parser.parse_value().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum nesting depth of objects and arrays.
    ///
    /// Each object member value and array element runs in a nested parse
    /// frame; input nested deeper than this fails with
    /// [`ErrorCode::MaximumNestingDepth`] rather than risking call-stack
    /// exhaustion.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The value under construction at one nesting level.
///
/// Strings accumulate as 16-bit code units, matching the `\u` escape
/// grammar, which appends surrogate halves as separate units; the units are
/// materialized into a `String` only when the string's final state is
/// reached. Numbers accumulate their sign/digit text and are converted once
/// the number's final state is reached.
#[derive(Debug)]
enum Slot {
    Empty,
    Finished(Value),
    Object {
        members: Map,
        /// The member name declared but not yet assigned. At most one
        /// member is in this state at any time, because name and value
        /// parsing alternate strictly.
        pending_name: Option<String>,
    },
    Array(Vec<Value>),
    StringUnits(Vec<u16>),
    NumberText(String),
}

impl Slot {
    fn push_char(&mut self, c: char) {
        if let Slot::StringUnits(units) = self {
            let mut buf = [0u16; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
        }
    }

    fn push_unit(&mut self, unit: u16) {
        if let Slot::StringUnits(units) = self {
            units.push(unit);
        }
    }

    fn push_number_char(&mut self, c: char) {
        if let Slot::NumberText(text) = self {
            text.push(c);
        }
    }

    fn into_value(self) -> Result<Value, ErrorCode> {
        match self {
            Slot::Finished(value) => Ok(value),
            Slot::Object { members, .. } => Ok(Value::Object(members)),
            Slot::Array(elements) => Ok(Value::Array(elements)),
            Slot::StringUnits(units) => Ok(Value::String(String::from_utf16_lossy(&units))),
            Slot::NumberText(_) | Slot::Empty => Err(ErrorCode::MissingValue),
        }
    }
}

/// A recursive descent JSON parser over a borrowed input string.
///
/// [`Parser::parse_value`] parses exactly one value and leaves the cursor
/// after it (and after any trailing whitespace), so an embedding caller can
/// parse concatenated values or detect leftover input via
/// [`Parser::offset`]. The free function [`parse`] is the document-level
/// entry that additionally rejects leftover input.
///
/// # Examples
///
/// ```rust
/// use jsontable::{Parser, Value};
///
/// let mut parser = Parser::new("1 2 3");
/// assert_eq!(parser.parse_value(), Ok(Value::Number(1.0)));
/// assert_eq!(parser.parse_value(), Ok(Value::Number(2.0)));
/// assert_eq!(parser.parse_value(), Ok(Value::Number(3.0)));
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser over `input` with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
        }
    }

    /// Character offset of the read position from the start of the input.
    ///
    /// After a failed parse this is the position at the moment of failure,
    /// the same value carried in [`ParseError::offset`].
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Parses one JSON value starting at the current position.
    ///
    /// Leading and trailing whitespace around the value is consumed; input
    /// after it is left untouched. The first error encountered anywhere in
    /// the descent is returned, and parsing stops there; no partial value
    /// is produced alongside an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the failure's [`ErrorCode`] and
    /// character offset.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.parse_frame(0).map_err(|code| ParseError {
            code,
            offset: self.cursor.offset(),
        })
    }

    /// Parses one JSON value and requires that nothing but the whitespace
    /// already consumed by the value's final state follows it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`]; leftover input after the first value fails
    /// with [`ErrorCode::UnexpectedTrailingCharacters`] at the offset of the
    /// first leftover character.
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        if self.cursor.at_end() {
            Ok(value)
        } else {
            Err(ParseError {
                code: ErrorCode::UnexpectedTrailingCharacters,
                offset: self.cursor.offset(),
            })
        }
    }

    /// One frame of the traversal: drives the state table until a final
    /// state or an error.
    fn parse_frame(&mut self, depth: usize) -> Result<Value, ErrorCode> {
        if depth > self.options.max_depth {
            return Err(ErrorCode::MaximumNestingDepth);
        }
        let mut slot = Slot::Empty;
        let mut state = State::Start;
        loop {
            if state.skips_whitespace() {
                self.cursor.skip_whitespace();
            }
            self.enter(state, &mut slot, depth)?;
            if state.is_final() {
                return slot.into_value();
            }
            state = self.accept(state, &mut slot)?;
        }
    }

    /// Pre-actions: run once on entry to a state, before its acceptors.
    ///
    /// Re-entering a state (e.g. `ArrayElement` after a comma) runs its
    /// pre-action again; that is what advances composite values one
    /// member or element at a time.
    fn enter(&mut self, state: State, slot: &mut Slot, depth: usize) -> Result<(), ErrorCode> {
        match state {
            State::BeginObject => {
                *slot = Slot::Object {
                    members: Map::new(),
                    pending_name: None,
                };
            }
            State::BeginArray => *slot = Slot::Array(Vec::new()),
            State::BeginString => *slot = Slot::StringUnits(Vec::new()),
            State::BeginNumber => *slot = Slot::NumberText(String::new()),
            State::MemberName => {
                // A string must be present as the member name. Any failure
                // of the name sub-parse is reported as INVALID_MEMBER_NAME;
                // the child's own code is not propagated here. Exceeding the
                // depth limit is the one exception: it is a resource limit,
                // not a name problem.
                let name = match self.parse_frame(depth + 1) {
                    Ok(Value::String(name)) => name,
                    Err(code @ ErrorCode::MaximumNestingDepth) => return Err(code),
                    Ok(_) | Err(_) => return Err(ErrorCode::InvalidMemberName),
                };
                let Slot::Object { pending_name, .. } = slot else {
                    return Err(ErrorCode::InvalidObject);
                };
                *pending_name = Some(name);
            }
            State::MemberValue => {
                // A value must be present as the member value; its failure
                // code passes through unchanged.
                let value = self.parse_frame(depth + 1)?;
                let Slot::Object {
                    members,
                    pending_name,
                } = slot
                else {
                    return Err(ErrorCode::InvalidObject);
                };
                let Some(name) = pending_name.take() else {
                    return Err(ErrorCode::InvalidObject);
                };
                // First declaration fixes the member's position; a repeated
                // name overwrites the earlier value in place.
                members.insert(name, value);
            }
            State::ArrayElement => {
                let value = self.parse_frame(depth + 1)?;
                let Slot::Array(elements) = slot else {
                    return Err(ErrorCode::InvalidArray);
                };
                elements.push(value);
            }
            State::NumberStartingZero => {
                self.cursor.bump();
                slot.push_number_char('0');
            }
            State::EndNumber => {
                if let Slot::NumberText(text) = slot {
                    let number: f64 = text.parse().map_err(|_| ErrorCode::InvalidNumber)?;
                    *slot = Slot::Finished(Value::Number(number));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Acceptors: ordered dispatch on the lookahead character.
    ///
    /// Each `match` arm is one acceptor, in table order; the `_` arm is the
    /// state's default error code. An accepting arm consumes zero or more
    /// characters and names the next state.
    #[expect(clippy::too_many_lines, reason = "one arm per grammar acceptor")]
    fn accept(&mut self, state: State, slot: &mut Slot) -> Result<State, ErrorCode> {
        let lookahead = self.cursor.peek();
        let next = match state {
            State::Start => State::Value,
            State::Value => match lookahead {
                Some('{') => {
                    self.cursor.bump();
                    State::BeginObject
                }
                Some('[') => {
                    self.cursor.bump();
                    State::BeginArray
                }
                Some('"') => {
                    self.cursor.bump();
                    State::BeginString
                }
                Some(c) if c == '-' || c.is_ascii_digit() => State::BeginNumber,
                Some('t') if self.cursor.eat_str("true") => {
                    *slot = Slot::Finished(Value::Boolean(true));
                    State::EndLiteral
                }
                Some('f') if self.cursor.eat_str("false") => {
                    *slot = Slot::Finished(Value::Boolean(false));
                    State::EndLiteral
                }
                Some('n') if self.cursor.eat_str("null") => {
                    *slot = Slot::Finished(Value::Null);
                    State::EndLiteral
                }
                _ => return Err(ErrorCode::MissingValue),
            },
            State::BeginObject => State::Member,
            State::Member => match lookahead {
                Some('}') => {
                    self.cursor.bump();
                    State::EndObject
                }
                // The quote is not consumed; the name sub-parse re-reads it.
                Some('"') => State::MemberName,
                _ => return Err(ErrorCode::MissingMemberName),
            },
            // After a comma a member name is mandatory; a close brace here
            // would be a trailing comma.
            State::NextMember => match lookahead {
                Some('"') => State::MemberName,
                _ => return Err(ErrorCode::MissingMemberName),
            },
            State::MemberName => match lookahead {
                Some(':') => {
                    self.cursor.bump();
                    State::MemberValue
                }
                _ => return Err(ErrorCode::MissingColon),
            },
            State::MemberValue => match lookahead {
                Some('}') => {
                    self.cursor.bump();
                    State::EndObject
                }
                Some(',') => {
                    self.cursor.bump();
                    State::NextMember
                }
                _ => return Err(ErrorCode::InvalidObject),
            },
            State::BeginArray => match lookahead {
                Some(']') => {
                    self.cursor.bump();
                    State::EndArray
                }
                _ => State::ArrayElement,
            },
            State::ArrayElement => match lookahead {
                Some(']') => {
                    self.cursor.bump();
                    State::EndArray
                }
                Some(',') => {
                    self.cursor.bump();
                    State::ArrayElement
                }
                _ => return Err(ErrorCode::InvalidArray),
            },
            State::BeginString => State::StringChar,
            State::StringChar => match lookahead {
                Some('"') => {
                    self.cursor.bump();
                    State::EndString
                }
                Some('\\') => {
                    self.cursor.bump();
                    State::StringEscapedChar
                }
                // Control characters 0x00..=0x1F may not appear unescaped.
                Some(c) if c > '\u{1F}' => {
                    self.cursor.bump();
                    slot.push_char(c);
                    State::StringChar
                }
                _ => return Err(ErrorCode::InvalidString),
            },
            State::StringEscapedChar => match lookahead {
                Some('u') => {
                    self.cursor.bump();
                    State::StringUnicodeChar
                }
                Some(c) => match grammar::decode_escape(c) {
                    Some(decoded) => {
                        self.cursor.bump();
                        slot.push_char(decoded);
                        State::StringChar
                    }
                    None => return Err(ErrorCode::InvalidEscapeChar),
                },
                None => return Err(ErrorCode::InvalidEscapeChar),
            },
            State::StringUnicodeChar => match self.cursor.eat_hex4() {
                Some(unit) => {
                    slot.push_unit(unit);
                    if grammar::is_lead_surrogate_unit(unit) {
                        State::StringHighSurrogate
                    } else {
                        State::StringChar
                    }
                }
                None => return Err(ErrorCode::InvalidUnicodeHexString),
            },
            State::StringHighSurrogate => {
                // The preceding escape produced a lead-range unit; exactly
                // `\u` plus four hex digits in the trail range must follow.
                let unit = if self.cursor.eat_str("\\u") {
                    self.cursor.eat_hex4()
                } else {
                    None
                };
                match unit {
                    Some(unit) if grammar::is_trail_surrogate_unit(unit) => {
                        slot.push_unit(unit);
                        State::StringChar
                    }
                    _ => return Err(ErrorCode::MissingHighSurrogate),
                }
            }
            State::BeginNumber => match lookahead {
                Some('-') => {
                    self.cursor.bump();
                    slot.push_number_char('-');
                    State::Number
                }
                _ => State::Number,
            },
            State::Number => match lookahead {
                // The zero is consumed by NumberStartingZero's pre-action.
                Some('0') => State::NumberStartingZero,
                Some('1'..='9') => State::NumberInteger,
                _ => return Err(ErrorCode::InvalidNumber),
            },
            State::NumberStartingZero => match lookahead {
                Some('.') => {
                    self.cursor.bump();
                    slot.push_number_char('.');
                    State::BeginNumberFraction
                }
                Some(c @ ('e' | 'E')) => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::BeginNumberExponent
                }
                // A leading zero may not be followed by further integer
                // digits; anything else ends the number.
                _ => State::EndNumber,
            },
            State::NumberInteger => match lookahead {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::NumberInteger
                }
                Some('.') => {
                    self.cursor.bump();
                    slot.push_number_char('.');
                    State::BeginNumberFraction
                }
                Some(c @ ('e' | 'E')) => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::BeginNumberExponent
                }
                _ => State::EndNumber,
            },
            State::BeginNumberFraction => match lookahead {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::NumberFraction
                }
                _ => return Err(ErrorCode::InvalidNumberFraction),
            },
            State::NumberFraction => match lookahead {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::NumberFraction
                }
                Some(c @ ('e' | 'E')) => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::BeginNumberExponent
                }
                _ => State::EndNumber,
            },
            State::BeginNumberExponent => match lookahead {
                Some(c @ ('-' | '+')) => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::BeginNumberExponentDigits
                }
                // The digit is consumed by NumberExponentDigits' self-loop.
                Some(c) if c.is_ascii_digit() => State::NumberExponentDigits,
                _ => return Err(ErrorCode::InvalidNumberExponent),
            },
            State::BeginNumberExponentDigits => match lookahead {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::NumberExponentDigits
                }
                _ => return Err(ErrorCode::InvalidNumberExponent),
            },
            State::NumberExponentDigits => match lookahead {
                Some(c) if c.is_ascii_digit() => {
                    self.cursor.bump();
                    slot.push_number_char(c);
                    State::NumberExponentDigits
                }
                _ => State::EndNumber,
            },
            State::EndObject
            | State::EndArray
            | State::EndString
            | State::EndNumber
            | State::EndLiteral => {
                unreachable!("final states carry no acceptors")
            }
        };
        Ok(next)
    }
}

/// Parses a complete JSON document.
///
/// Exactly one value must be present; leftover input after it (and after
/// trailing whitespace) fails with
/// [`ErrorCode::UnexpectedTrailingCharacters`]. Use [`Parser`] directly to
/// parse a value out of a larger input.
///
/// # Examples
///
/// ```rust
/// use jsontable::{parse, Value};
///
/// let value = parse(r#"{"ok": true}"#).unwrap();
/// assert_eq!(value.as_object().unwrap()["ok"], Value::Boolean(true));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] carrying a stable [`ErrorCode`] and the
/// character offset at which parsing stopped.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse_document()
}
