//! Expression parsing implementation
//!
//! Expressions are primaries (integer, float, string, identifier) joined by
//! binary operators. Binary operators are folded with precedence climbing
//! driven by the table in [`crate::parser::operators`].
//!
//! # Precedence
//!
//! ```text
//! or and not ==     0  left
//! < <= > >=         1  left
//! + -               6  left
//! * /               7  left
//! ^                 8  right
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::error::ParseError;
use crate::parser::operators::{self, OperatorInfo};
use crate::parser::parse::Parser;
use crate::parser::scanner::TokenKind;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(0)
    }

    /// Precedence climbing: fold every operator binding at least as tightly
    /// as `min_precedence` into the left operand.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Node, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some(info) = self.current_operator() {
            if info.precedence < min_precedence {
                break;
            }
            self.advance()?;

            let right = self.nested(|parser| parser.parse_binary(info.next_min_precedence()))?;
            left = Node::binary(left, info.op, right);
        }

        Ok(left)
    }

    fn current_operator(&self) -> Option<OperatorInfo> {
        self.current.kind.binary_operator().and_then(operators::info)
    }

    /// Parse primary (literals and identifiers)
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        if self.match_token(TokenKind::Int)? {
            let token = &self.previous;
            return token
                .lexeme
                .parse::<i64>()
                .map(Node::IntLiteral)
                .map_err(|_| ParseError::InvalidNumber {
                    lexeme: token.lexeme.clone(),
                    location: token.location,
                });
        }

        if self.match_token(TokenKind::Float)? {
            let token = &self.previous;
            return token
                .lexeme
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Node::FloatLiteral)
                .ok_or_else(|| ParseError::InvalidNumber {
                    lexeme: token.lexeme.clone(),
                    location: token.location,
                });
        }

        if self.match_token(TokenKind::String)? {
            return Ok(Node::StringLiteral(self.previous.lexeme.clone()));
        }

        if self.match_token(TokenKind::Identifier)? {
            return Ok(Node::Identifier(self.previous.lexeme.clone()));
        }

        Err(self.unexpected("primary expression"))
    }
}
