//! Statement parsing implementation
//!
//! Statement forms are tried in a fixed order, each selected by its
//! introducing token; anything else is parsed as a bare expression.
//!
//! # Grammar
//!
//! ```text
//! statement  ::= var_decl | const_decl | block | function | return | expr
//! var_decl   ::= "var" identifier "=" expr ";"
//! const_decl ::= "const" identifier "=" expr ";"
//! block      ::= "{" statement* "}"
//! function   ::= "function" identifier "(" params ")" block
//! params     ::= [ identifier ( "," identifier )* [ "," ] ]
//! return     ::= "return" expr ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::scanner::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        if self.match_token(TokenKind::Var)? {
            let (name, value) = self.parse_binding()?;
            return Ok(Node::VarDeclaration { name, value });
        }

        if self.match_token(TokenKind::Const)? {
            let (name, value) = self.parse_binding()?;
            return Ok(Node::ConstDeclaration { name, value });
        }

        if self.check(TokenKind::LeftBrace) {
            return Ok(Node::Block(self.parse_block()?));
        }

        if self.match_token(TokenKind::Function)? {
            return self.parse_function();
        }

        if self.match_token(TokenKind::Return)? {
            let expr = self.parse_expression()?;
            self.expect_token(TokenKind::Semicolon, ";")?;
            return Ok(Node::ReturnStatement(Box::new(expr)));
        }

        self.parse_expression()
    }

    /// Shared tail of `var` and `const`: `identifier = expr ;`
    fn parse_binding(&mut self) -> Result<(String, Box<Node>), ParseError> {
        let name = self.expect_identifier()?;
        self.expect_token(TokenKind::Equal, "=")?;
        let value = self.parse_expression()?;
        self.expect_token(TokenKind::Semicolon, ";")?;
        Ok((name, Box::new(value)))
    }

    /// Parse `{ statement* }`, returning the statements in order
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        self.nested(|parser| {
            parser.expect_token(TokenKind::LeftBrace, "{")?;

            let mut statements = Vec::new();
            while !parser.check(TokenKind::RightBrace) && !parser.is_at_end() {
                statements.push(parser.parse_statement()?);
            }

            parser.expect_token(TokenKind::RightBrace, "}")?;
            Ok(statements)
        })
    }

    /// Parse `name(params) { body }` after the `function` keyword
    fn parse_function(&mut self) -> Result<Node, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_token(TokenKind::LeftParen, "(")?;

        let mut params = Vec::new();
        while !self.check(TokenKind::RightParen) {
            params.push(self.expect_identifier()?);
            if !self.match_token(TokenKind::Comma)? {
                break;
            }
        }
        self.expect_token(TokenKind::RightParen, ")")?;

        let body = self.parse_block()?;
        Ok(Node::FunctionDeclaration { name, params, body })
    }
}
