//! Parse failure types.
//!
//! Every failure surfaces as a short, stable [`ErrorCode`] identifier rather
//! than a prose message, paired with the character offset of the read cursor
//! at the moment parsing stopped. Composing human-readable messages, or
//! deriving a line and column from the offset, is left to the caller.

use thiserror::Error;

/// Stable identifier for a parse failure.
///
/// The identifier string of each code is available through
/// [`ErrorCode::as_str`] and is also the `Display` form, e.g.
/// `MISSING_VALUE`. These strings are part of the crate's contract and do
/// not change between releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// No value was found where the grammar requires one.
    MissingValue,
    /// An object member did not start with a quoted name (or the object was
    /// not closed).
    MissingMemberName,
    /// An object member name was present but failed to parse as a string.
    InvalidMemberName,
    /// No `:` followed an object member name.
    MissingColon,
    /// An object member value was not followed by `,` or `}`.
    InvalidObject,
    /// An array element was not followed by `,` or `]`.
    InvalidArray,
    /// A string literal contained an unescaped control character or was
    /// never closed.
    InvalidString,
    /// A `\` escape used an unrecognized escape character.
    InvalidEscapeChar,
    /// A `\u` escape was not followed by exactly four hex digits.
    InvalidUnicodeHexString,
    /// A surrogate-range `\u` escape was not followed by its matching
    /// `\u` escape from the complementary range.
    MissingHighSurrogate,
    /// A number token did not start with a valid integer part.
    InvalidNumber,
    /// A decimal point was not followed by at least one digit.
    InvalidNumberFraction,
    /// An exponent marker was not followed by at least one digit.
    InvalidNumberExponent,
    /// Nesting exceeded [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    MaximumNestingDepth,
    /// Input remained after the first complete value.
    UnexpectedTrailingCharacters,
}

impl ErrorCode {
    /// Returns the stable identifier string for this code.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontable::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::MissingValue.as_str(), "MISSING_VALUE");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingValue => "MISSING_VALUE",
            Self::MissingMemberName => "MISSING_MEMBER_NAME",
            Self::InvalidMemberName => "INVALID_MEMBER_NAME",
            Self::MissingColon => "MISSING_COLON",
            Self::InvalidObject => "INVALID_OBJECT",
            Self::InvalidArray => "INVALID_ARRAY",
            Self::InvalidString => "INVALID_STRING",
            Self::InvalidEscapeChar => "INVALID_ESCAPE_CHAR",
            Self::InvalidUnicodeHexString => "INVALID_UNICODE_HEX_STRING",
            Self::MissingHighSurrogate => "MISSING_HIGH_SURROGATE",
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::InvalidNumberFraction => "INVALID_NUMBER_FRACTION",
            Self::InvalidNumberExponent => "INVALID_NUMBER_EXPONENT",
            Self::MaximumNestingDepth => "MAXIMUM_NESTING_DEPTH",
            Self::UnexpectedTrailingCharacters => "UNEXPECTED_TRAILING_CHARACTERS",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse failure: an [`ErrorCode`] plus the character offset at which the
/// parse stopped.
///
/// The offset counts characters (not bytes) from the start of the input and
/// points at the cursor position at the moment of failure. A caller can pair
/// the offset with its own copy of the input to derive a line and column.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("{code} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub code: ErrorCode,
    /// Character offset of the cursor when parsing stopped.
    pub offset: usize,
}
