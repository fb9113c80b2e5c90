//! Scanner (lexical analyzer) for pain source code
//!
//! The scanner is pull-based: the parser asks for one [`Token`] at a time with
//! [`Scanner::next_token`], and nothing is buffered ahead. Whitespace and
//! newlines are never emitted as tokens. Characters the language does not know
//! become [`TokenKind::Illegal`] tokens so that the parser can report them with
//! the usual "expected X, got Y" diagnostic.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::ast::{BinaryOperator, SourceLocation};
use super::error::LexError;

/// All token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Grouping
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }

    // Arithmetic and compound assignment
    Plus,       // +
    PlusEqual,  // +=
    Minus,      // -
    MinusEqual, // -=
    Star,       // *
    StarEqual,  // *=
    Slash,      // /
    SlashEqual, // /=
    Caret,      // ^
    CaretEqual, // ^=

    // Assignment and comparison
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Boolean
    And,
    Or,
    Not,

    // Literals
    Int,
    Float,
    String,
    Identifier,

    // Keywords
    Var,
    Const,
    Function,
    Class,
    If,
    For,
    While,
    Return,

    // Punctuation
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,

    Illegal,
    Eof,
}

impl TokenKind {
    /// The binary operator this token spells, if it is one.
    pub fn binary_operator(self) -> Option<BinaryOperator> {
        let op = match self {
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Not => BinaryOperator::Not,
            TokenKind::EqualEqual => BinaryOperator::Eq,
            TokenKind::Less => BinaryOperator::Lt,
            TokenKind::LessEqual => BinaryOperator::Le,
            TokenKind::Greater => BinaryOperator::Gt,
            TokenKind::GreaterEqual => BinaryOperator::Ge,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Sub,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Caret => BinaryOperator::Pow,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
        ("if", TokenKind::If),
        ("var", TokenKind::Var),
        ("const", TokenKind::Const),
        ("function", TokenKind::Function),
        ("class", TokenKind::Class),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("return", TokenKind::Return),
    ]
    .into_iter()
    .collect()
});

/// A classified fragment of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text of the token. String tokens hold their content without
    /// the quotes; the end-of-input token holds an empty string.
    pub lexeme: String,
    /// Position of the token's first character.
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// How the token is named in diagnostics.
    pub fn describe(&self) -> &str {
        if self.is_eof() {
            "end of input"
        } else {
            &self.lexeme
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({:?})", self.location, self.kind, self.lexeme)
    }
}

/// Scanner for pain source code
pub struct Scanner {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl Scanner {
    /// Create a new scanner for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token at the
    /// same location.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let loc = self.location();
        let Some(ch) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, "", loc));
        };

        let token = match ch {
            '"' => self.string_literal(loc)?,
            '0'..='9' => self.number_literal(ch, loc)?,
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(c, loc),

            '=' => self.with_equal(TokenKind::Equal, TokenKind::EqualEqual, ch, loc),
            '>' => self.with_equal(TokenKind::Greater, TokenKind::GreaterEqual, ch, loc),
            '<' => self.with_equal(TokenKind::Less, TokenKind::LessEqual, ch, loc),
            '+' => self.with_equal(TokenKind::Plus, TokenKind::PlusEqual, ch, loc),
            '-' => self.with_equal(TokenKind::Minus, TokenKind::MinusEqual, ch, loc),
            '*' => self.with_equal(TokenKind::Star, TokenKind::StarEqual, ch, loc),
            '/' => self.with_equal(TokenKind::Slash, TokenKind::SlashEqual, ch, loc),
            '^' => self.with_equal(TokenKind::Caret, TokenKind::CaretEqual, ch, loc),

            '(' => Token::new(TokenKind::LeftParen, "(", loc),
            ')' => Token::new(TokenKind::RightParen, ")", loc),
            '[' => Token::new(TokenKind::LeftBracket, "[", loc),
            ']' => Token::new(TokenKind::RightBracket, "]", loc),
            '{' => Token::new(TokenKind::LeftBrace, "{", loc),
            '}' => Token::new(TokenKind::RightBrace, "}", loc),
            ':' => Token::new(TokenKind::Colon, ":", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),

            other => Token::new(TokenKind::Illegal, other.to_string(), loc),
        };

        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, %loc, "scanned token");
        Ok(token)
    }

    /// Current cursor position.
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Bare operator, or its `=`-suffixed compound form when the next
    /// character is `=`.
    fn with_equal(
        &mut self,
        bare: TokenKind,
        compound: TokenKind,
        first: char,
        loc: SourceLocation,
    ) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            Token::new(compound, format!("{}=", first), loc)
        } else {
            Token::new(bare, first.to_string(), loc)
        }
    }

    /// Scan string literal (no escape sequences)
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Ok(Token::new(TokenKind::String, string, loc));
            }
            string.push(ch);
        }

        Err(LexError::UnterminatedString { location: loc })
    }

    /// Scan numeric literal: digits with at most one decimal point
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);
        let mut dots = 0;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
            } else if ch == '.' {
                dots += 1;
                num_str.push(ch);
            } else {
                break;
            }
            self.advance();
        }

        match dots {
            0 => Ok(Token::new(TokenKind::Int, num_str, loc)),
            1 => Ok(Token::new(TokenKind::Float, num_str, loc)),
            _ => Err(LexError::MalformedNumber {
                lexeme: num_str,
                location: loc,
            }),
        }
    }

    /// Scan identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS
            .get(ident.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        Token::new(kind, ident, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

/// Yields every token up to and including the first `Eof`, or the first
/// lexical error, then stops.
impl Iterator for Scanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if !matches!(item, Ok(ref token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(item)
    }
}
