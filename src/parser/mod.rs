//! pain source code parser
//!
//! This module transforms pain source text into syntax trees:
//! - [`scanner`]: Tokenization on demand (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across `statements` and `expressions`
//! - [`operators`]: The binary operator precedence table
//! - [`ast`]: AST node definitions
//! - [`unparse`]: AST back to source text
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary
//! operators, one token of lookahead, and no error recovery: the first error
//! ends the parse.

pub mod ast;
pub mod error;
mod expressions;
pub mod operators;
pub mod parse;
pub mod scanner;
mod statements;
pub mod unparse;


pub use ast::{BinaryOperator, Node, Program, SourceLocation};
pub use error::{LexError, ParseError};
pub use parse::Parser;
pub use scanner::{Scanner, Token, TokenKind};
