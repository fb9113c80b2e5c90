//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the token cursor, helper methods, and the top-level entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: statement dispatch (`var`, `const`, blocks, `function`, `return`)
//! - `expressions`: primaries and binary expressions with precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks.
//! The parser pulls tokens from its [`Scanner`] on demand and keeps only the
//! current token (one token of lookahead) and the previous one.
//!
//! Parsing stops at the first error. A parser that returned an error should be
//! dropped; its cursor is left wherever the failure happened.

use crate::parser::ast::{Node, Program};
use crate::parser::error::ParseError;
use crate::parser::scanner::{Scanner, Token, TokenKind};

/// Deepest block or right-operand nesting accepted before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent parser for pain
pub struct Parser {
    scanner: Scanner,
    pub(crate) current: Token,
    pub(crate) previous: Token,
    nesting_depth: usize,
}

impl Parser {
    /// Create a parser over `source`, scanning the first token.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        Self::from_scanner(Scanner::new(source))
    }

    /// Create a parser that pulls tokens from an existing scanner.
    pub fn from_scanner(mut scanner: Scanner) -> Result<Self, ParseError> {
        let current = scanner.next_token()?;
        Ok(Self {
            scanner,
            previous: current.clone(),
            current,
            nesting_depth: 0,
        })
    }

    /// Parse the next top-level tree, or `None` once the input is exhausted.
    pub fn next_tree(&mut self) -> Result<Option<Node>, ParseError> {
        if self.is_at_end() {
            return Ok(None);
        }
        let tree = self.parse_statement()?;
        tracing::debug!(%tree, "parsed top-level tree");
        Ok(Some(tree))
    }

    /// Parse the entire program (every top-level tree up to end of input)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while let Some(tree) = self.next_tree()? {
            program.nodes.push(tree);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn advance(&mut self) -> Result<&Token, ParseError> {
        if !self.is_at_end() {
            let next = self.scanner.next_token()?;
            self.previous = std::mem::replace(&mut self.current, next);
        }
        Ok(&self.previous)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Error for the current token, which did not match `expected`.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.describe().to_string(),
            location: self.current.location,
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<(), ParseError> {
        if self.match_token(kind)? {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance()?.lexeme.clone())
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Run `parse` one nesting level deeper, failing at the current token
    /// once [`MAX_NESTING_DEPTH`] is exceeded.
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.enter_nesting()?;
        let result = parse(self);
        self.leave_nesting();
        result
    }

    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                location: self.current.location,
            });
        }
        self.nesting_depth += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::SourceLocation;

    #[test]
    fn test_parse_simple_program() {
        let mut parser = Parser::new("var x = 1; x").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.nodes.len(), 2);
        assert_eq!(program.nodes[1], Node::Identifier("x".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let mut parser = Parser::new("   \n  ").unwrap();
        assert!(parser.parse_program().unwrap().is_empty());
    }

    #[test]
    fn test_next_tree_pulls_one_at_a_time() {
        let mut parser = Parser::new("1 2").unwrap();
        assert_eq!(parser.next_tree().unwrap(), Some(Node::IntLiteral(1)));
        assert_eq!(parser.next_tree().unwrap(), Some(Node::IntLiteral(2)));
        assert_eq!(parser.next_tree().unwrap(), None);
        assert_eq!(parser.next_tree().unwrap(), None);
    }

    #[test]
    fn test_previous_token_after_advance() {
        let mut parser = Parser::new("a b").unwrap();
        assert!(parser.match_token(TokenKind::Identifier).unwrap());
        assert_eq!(parser.previous.lexeme, "a");
        assert_eq!(parser.current.lexeme, "b");
    }

    #[test]
    fn test_lex_error_on_first_token() {
        let err = Parser::new("\"open").err().unwrap();
        assert_eq!(err.location(), SourceLocation::new(1, 1));
    }

    #[test]
    fn test_long_program_does_not_recurse() {
        let source = "1 ".repeat(50_000);
        let program = Parser::new(&source).unwrap().parse_program().unwrap();
        assert_eq!(program.nodes.len(), 50_000);
    }

    #[test]
    fn test_deep_blocks_are_rejected() {
        let source = format!("{}{}", "{".repeat(20_000), "}".repeat(20_000));
        let err = Parser::new(&source).unwrap().parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                location: SourceLocation::new(1, MAX_NESTING_DEPTH + 1),
            }
        );
    }

    #[test]
    fn test_long_power_chain_is_rejected() {
        let source = format!("{}a", "a ^ ".repeat(20_000));
        let err = Parser::new(&source).unwrap().parse_program().unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        let program = Parser::new(&source).unwrap().parse_program().unwrap();
        assert_eq!(program.nodes.len(), 1);

        let chain = format!("{}a", "a ^ ".repeat(depth));
        assert_eq!(Parser::new(&chain).unwrap().parse_program().unwrap().nodes.len(), 1);
    }

    #[test]
    fn test_depth_is_released_between_trees() {
        let block = format!("{}{}", "{".repeat(MAX_NESTING_DEPTH), "}".repeat(MAX_NESTING_DEPTH));
        let source = format!("{} {}", block, block);
        let program = Parser::new(&source).unwrap().parse_program().unwrap();
        assert_eq!(program.nodes.len(), 2);
    }
}
