//! Serialize syntax trees back to pain source.
//!
//! The output re-parses to an equal tree. Binary expressions need no
//! parentheses: a tree built by the parser is fully determined by its token
//! order, and the unparser writes tokens back in that order.

use std::fmt;

use super::ast::{Node, Program};

/// Render one tree as source text.
pub fn unparse(node: &Node) -> String {
    Source(node).to_string()
}

/// Render every top-level tree, one per line.
pub fn unparse_program(program: &Program) -> String {
    program
        .nodes
        .iter()
        .map(unparse)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Displays a node in source form.
pub struct Source<'a>(pub &'a Node);

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::IntLiteral(n) => write!(f, "{}", n),
            Node::FloatLiteral(x) => write_float(f, *x),
            Node::StringLiteral(s) => write!(f, "\"{}\"", s),
            Node::Identifier(name) => f.write_str(name),
            Node::BinaryExpression { left, op, right } => {
                write!(f, "{} {} {}", Source(left), op, Source(right))
            }
            Node::Block(nodes) => write_block(f, nodes),
            Node::VarDeclaration { name, value } => {
                write!(f, "var {} = {};", name, Source(value))
            }
            Node::ConstDeclaration { name, value } => {
                write!(f, "const {} = {};", name, Source(value))
            }
            Node::FunctionDeclaration { name, params, body } => {
                write!(f, "function {}({}) ", name, params.join(", "))?;
                write_block(f, body)
            }
            Node::ReturnStatement(expr) => write!(f, "return {};", Source(expr)),
        }
    }
}

// `Display` for f64 never uses exponent notation but drops a trailing `.0`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.to_string();
    f.write_str(&text)?;
    if !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    f.write_str("{")?;
    for node in nodes {
        write!(f, " {}", Source(node))?;
    }
    f.write_str(" }")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn roundtrip(source: &str) -> String {
        let program = Parser::new(source).unwrap().parse_program().unwrap();
        let text = unparse_program(&program);
        let reparsed = Parser::new(&text).unwrap().parse_program().unwrap();
        assert_eq!(program, reparsed, "unparsed as {:?}", text);
        text
    }

    #[test]
    fn test_expressions() {
        assert_eq!(roundtrip("1+2*3"), "1 + 2 * 3");
        assert_eq!(roundtrip("2^3^2"), "2 ^ 3 ^ 2");
        assert_eq!(roundtrip("a and b not c"), "a and b not c");
    }

    #[test]
    fn test_literals() {
        assert_eq!(roundtrip("7."), "7.0");
        assert_eq!(roundtrip("1.50"), "1.5");
        assert_eq!(roundtrip("\"a b\""), "\"a b\"");
    }

    #[test]
    fn test_statements() {
        assert_eq!(roundtrip("var x=5;"), "var x = 5;");
        assert_eq!(roundtrip("const y = x;"), "const y = x;");
        assert_eq!(roundtrip("{}"), "{ }");
        assert_eq!(
            roundtrip("function f(a,b,){return a+b;}"),
            "function f(a, b) { return a + b; }"
        );
    }

    #[test]
    fn test_program_one_tree_per_line() {
        assert_eq!(roundtrip("1 2 { x }"), "1\n2\n{ x }");
    }
}
