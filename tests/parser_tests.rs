// Integration tests for the pain scanner and parser

use pain::parser::unparse::unparse_program;
use pain::parser::{
    BinaryOperator, LexError, Node, ParseError, Parser, Scanner, SourceLocation, TokenKind,
};

fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut parser = Parser::new(source)?;
    Ok(parser.parse_program()?.nodes)
}

fn int(n: i64) -> Node {
    Node::IntLiteral(n)
}

fn ident(name: &str) -> Node {
    Node::Identifier(name.to_string())
}

#[test]
fn test_compound_operator_selection() {
    let kinds: Vec<TokenKind> = Scanner::new("+ += + =")
        .map(|t| t.expect("Scanning failed").kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::PlusEqual,
            TokenKind::Plus,
            TokenKind::Equal,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_precedence() {
    let trees = parse("1 + 2 * 3").expect("Parsing failed");
    assert_eq!(
        trees,
        vec![Node::binary(
            int(1),
            BinaryOperator::Add,
            Node::binary(int(2), BinaryOperator::Mul, int(3)),
        )]
    );
}

#[test]
fn test_associativity() {
    assert_eq!(
        parse("2 ^ 3 ^ 2").expect("Parsing failed"),
        vec![Node::binary(
            int(2),
            BinaryOperator::Pow,
            Node::binary(int(3), BinaryOperator::Pow, int(2)),
        )]
    );
    assert_eq!(
        parse("2 - 3 - 2").expect("Parsing failed"),
        vec![Node::binary(
            Node::binary(int(2), BinaryOperator::Sub, int(3)),
            BinaryOperator::Sub,
            int(2),
        )]
    );
}

#[test]
fn test_var_declaration() {
    assert_eq!(
        parse("var x = 5;").expect("Parsing failed"),
        vec![Node::VarDeclaration {
            name: "x".to_string(),
            value: Box::new(int(5)),
        }]
    );

    match parse("var 5 = x;") {
        Err(ParseError::UnexpectedToken {
            expected, found, ..
        }) => {
            assert_eq!(expected, "identifier");
            assert_eq!(found, "5");
        }
        other => panic!("Expected identifier diagnostic, got {:?}", other),
    }
}

#[test]
fn test_function_declaration() {
    let trees = parse("function f(a, b) { return a + b; }").expect("Parsing failed");
    assert_eq!(trees.len(), 1);

    match &trees[0] {
        Node::FunctionDeclaration { name, params, body } => {
            assert_eq!(name, "f");
            assert_eq!(params.len(), 2);
            assert_eq!(
                body,
                &vec![Node::ReturnStatement(Box::new(Node::binary(
                    ident("a"),
                    BinaryOperator::Add,
                    ident("b"),
                )))]
            );
        }
        other => panic!("Expected function declaration, got {}", other),
    }
}

#[test]
fn test_input_ending_mid_expression() {
    let err = parse("1 +").unwrap_err();
    match err {
        ParseError::UnexpectedToken { found, .. } => assert_eq!(found, "end of input"),
        other => panic!("Expected unexpected-token error, got {:?}", other),
    }
}

#[test]
fn test_multiline_program() {
    let source = r#"
        var greeting = "hello";
        const limit = 10 * 2;

        function clamp(value, max) {
            return value - max;
        }

        clamp
    "#;

    let trees = parse(source).expect("Parsing failed");
    assert_eq!(trees.len(), 4);
    assert!(matches!(trees[0], Node::VarDeclaration { ref name, .. } if name == "greeting"));
    assert!(matches!(trees[1], Node::ConstDeclaration { ref name, .. } if name == "limit"));
    assert!(matches!(trees[2], Node::FunctionDeclaration { ref params, .. } if params.len() == 2));
    assert_eq!(trees[3], ident("clamp"));
}

#[test]
fn test_diagnostic_position_on_later_line() {
    let err = parse("var a = 1;\nvar b 2;").unwrap_err();
    assert_eq!(err.location(), SourceLocation::new(2, 7));
    assert_eq!(err.to_string(), "2:7 -> expected '=', got '2'");
}

#[test]
fn test_lexical_errors() {
    assert_eq!(
        parse("x = \"never closed").unwrap_err(),
        ParseError::UnexpectedToken {
            expected: "primary expression".to_string(),
            found: "=".to_string(),
            location: SourceLocation::new(1, 3),
        }
    );
    assert_eq!(
        parse("\"never closed").unwrap_err(),
        ParseError::Lex(LexError::UnterminatedString {
            location: SourceLocation::new(1, 1),
        })
    );
    assert!(matches!(
        parse("1.2.3").unwrap_err(),
        ParseError::Lex(LexError::MalformedNumber { .. })
    ));
}

#[test]
fn test_unparse_round_trip() {
    let source = "var x = 1 + 2 * 3; { x ^ 2 ^ 3 } function f(a) { return a / 2.5; }";
    let trees = Parser::new(source)
        .expect("Parser creation failed")
        .parse_program()
        .expect("Parsing failed");

    let text = unparse_program(&trees);
    let reparsed = Parser::new(&text)
        .expect("Parser creation failed")
        .parse_program()
        .expect("Reparsing failed");

    assert_eq!(trees, reparsed);
}

#[test]
fn test_eof_is_sticky() {
    let mut scanner = Scanner::new("");
    for _ in 0..5 {
        let token = scanner.next_token().expect("Scanning failed");
        assert!(token.is_eof());
        assert_eq!(token.location, SourceLocation::new(1, 1));
    }
}
