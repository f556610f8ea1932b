//! A table-driven recursive descent parser for the JSON text grammar
//! ([RFC 8259]).
//!
//! The grammar is expressed as an enumerated table of named states, each
//! with an optional entry action, a whitespace-skip flag, an ordered list of
//! acceptors and a default error code, driven by a character cursor over
//! the input. The parser builds a [`Value`] tree in a single left-to-right
//! pass; the first error anywhere in the descent stops parsing and is
//! reported as a stable [`ErrorCode`] identifier together with the character
//! offset at which the cursor stopped.
//!
//! Objects preserve the order in which member names first appear; a repeated
//! name overwrites the earlier value without moving the entry. Nesting depth
//! is bounded ([`ParserOptions::max_depth`]) so that deeply nested input
//! fails cleanly instead of exhausting the call stack.
//!
//! # Examples
//!
//! ```rust
//! use jsontable::{parse, ErrorCode, Value};
//!
//! let value = parse(r#"{"size": 3, "tags": ["a", "b"]}"#).unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object["size"], Value::Number(3.0));
//!
//! let err = parse("[1, 2,]").unwrap_err();
//! assert_eq!(err.code, ErrorCode::MissingValue);
//! assert_eq!(err.offset, 6);
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

mod cursor;
mod error;
mod grammar;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, ParseError};
pub use parser::{Parser, ParserOptions, parse};
pub use value::{Array, Map, Value};
