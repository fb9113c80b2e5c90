//! Error types for the scanner and parser
//!
//! Every error carries the [`SourceLocation`] of the token (or character) that
//! caused it. Parsing stops at the first error; there is no recovery.

use thiserror::Error;

use super::ast::SourceLocation;

/// A lexical error raised by the [`Scanner`](super::scanner::Scanner).
///
/// Unknown characters are not lexical errors: they become `Illegal` tokens and
/// are reported by the parser as unexpected tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("{location} -> unterminated string literal")]
    UnterminatedString { location: SourceLocation },

    #[error("{location} -> malformed number literal '{lexeme}'")]
    MalformedNumber {
        lexeme: String,
        location: SourceLocation,
    },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnterminatedString { location }
            | LexError::MalformedNumber { location, .. } => *location,
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{location} -> expected '{expected}', got '{found}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: SourceLocation,
    },

    #[error("{location} -> number literal '{lexeme}' is out of range")]
    InvalidNumber {
        lexeme: String,
        location: SourceLocation,
    },

    #[error("{location} -> nesting exceeds {limit} levels")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::InvalidNumber { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
            ParseError::Lex(err) => err.location(),
        }
    }
}
