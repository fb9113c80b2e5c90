//! # Introduction
//!
//! pain is the lexical and syntactic front end of a small scripting language.
//! It turns source text into an ordered sequence of syntax trees, or a single
//! diagnostic. Nothing is evaluated.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Parser → AST → (tree printout | unparsed source)
//! ```
//!
//! 1. [`parser`] — pull-based scanner, recursive descent parser with
//!    precedence climbing, AST definitions and the unparser.
//! 2. [`repl`] — the interactive read loop driven by the `pain` binary.
//!
//! ## Language
//!
//! Statements: `var x = e;`, `const x = e;`, `{ ... }`,
//! `function f(a, b) { ... }`, `return e;`, bare expressions.
//! Expressions: integer, float, string and identifier primaries joined by
//! `or and not == < <= > >= + - * / ^`.

pub mod parser;
pub mod repl;
